pub use notesite_config as config;
pub use notesite_config::SiteConfig;
pub use notesite_core as content;

pub use emit::*;

pub mod error;

mod emit;
