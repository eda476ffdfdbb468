use std::path;

use notesite::Format;

use crate::args;
use crate::check;
use crate::error::*;

/// Write the site config in the shape the site generator reads
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct EmitArgs {
    /// Output format [default: from the `--output` extension, else mjs]
    #[arg(long, value_enum)]
    pub(crate) format: Option<Format>,

    /// File to write instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<path::PathBuf>,

    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl EmitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        check::report(&config.validate()).context("Refusing to emit an invalid config")?;

        let format = self
            .format
            .or_else(|| self.output.as_deref().and_then(Format::from_path))
            .unwrap_or_default();

        match self.output.as_deref() {
            Some(output) => {
                notesite::write(&config, output, format)?;
                log::info!("Wrote {format:?} config to {}", output.display());
            }
            None => {
                let rendered = notesite::render(&config, format)?;
                anstream::print!("{rendered}");
            }
        }

        Ok(())
    }
}
