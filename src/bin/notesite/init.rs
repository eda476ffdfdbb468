use std::fs;
use std::path;

use notesite::Format;
use notesite::SiteConfig;
use notesite::config::PROJECT_FILE;

use crate::error::*;

/// Create a project file holding the built-in site config
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(value_name = "DIR", default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let path = self.directory.join(PROJECT_FILE);
        if path.exists() {
            bail!("{} already exists", path.display());
        }

        fs::create_dir_all(&self.directory)
            .with_context(|| format!("Could not create {}", self.directory.display()))?;
        notesite::write(&SiteConfig::learning_notes(), &path, Format::Yaml)?;
        log::info!("Created new project at {}", self.directory.display());

        Ok(())
    }
}
