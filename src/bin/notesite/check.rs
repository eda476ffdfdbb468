use notesite::config::{Diagnostic, Severity};
use notesite::content::{ContentIndex, Source, check_links};

use crate::args;
use crate::error::*;

/// Validate the site config
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    /// Also check that nav and sidebar links match markdown pages
    #[arg(long)]
    pub(crate) content: bool,

    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;

        let mut diagnostics = config.validate();
        if self.content {
            let source = Source::for_site(&config)?;
            let index = ContentIndex::from_source(&source);
            log::info!(
                "Found {} pages under {}",
                index.len(),
                config.root.display()
            );
            diagnostics.extend(check_links(&config, &index));
        }

        report(&diagnostics)?;
        log::info!("Config is valid");

        Ok(())
    }
}

/// Log every diagnostic, failing if any of them is an error.
pub(crate) fn report(diagnostics: &[Diagnostic]) -> Result<()> {
    for diagnostic in diagnostics {
        match diagnostic.severity {
            Severity::Warn => log::warn!("{diagnostic}"),
            Severity::Error => log::error!("{diagnostic}"),
        }
    }

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        bail!("found {errors} configuration error(s)");
    }
    Ok(())
}
