use notesite::content::{ContentIndex, Source};

use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the routes served by the content tree
    Routes {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                anstream::print!("{config}");
            }
            Self::Routes { config } => {
                let config = config.load_config()?;
                let source = Source::for_site(&config)?;
                let index = ContentIndex::from_source(&source);
                for route in index.routes() {
                    anstream::println!("{route}");
                }
            }
        }

        Ok(())
    }
}
