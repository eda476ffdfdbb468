mod markdown;
mod search;
mod site;
mod theme;
mod validate;

pub mod path;

pub use self::markdown::*;
pub use self::search::*;
pub use self::site::*;
pub use self::theme::*;
pub use self::validate::*;

pub type Status = status::Status;
pub type Result<T, E = Status> = std::result::Result<T, E>;

/// Name of the project file searched for by [`SiteConfig::from_cwd`].
pub const PROJECT_FILE: &str = "_notesite.yml";
