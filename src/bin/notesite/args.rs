use std::path;

use notesite::SiteConfig;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _notesite.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,

    /// Path the site is served under
    #[arg(long, value_name = "PATH", env = "NOTESITE_BASE")]
    base: Option<String>,

    /// Site destination folder
    #[arg(short, long, value_name = "DIR", env = "NOTESITE_OUT_DIR")]
    destination: Option<String>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<SiteConfig> {
        let mut config = if let Some(config_path) = self.config.as_deref() {
            SiteConfig::from_file(config_path).with_context(|| {
                format!("Error reading config file {}", config_path.display())
            })?
        } else {
            let cwd = std::env::current_dir().context("Unable to read current directory")?;
            SiteConfig::from_cwd(cwd)?
        };

        if let Some(base) = self.base.as_deref() {
            log::debug!("Overriding base with `{base}`");
            config = config.with_base(base);
        }
        if let Some(destination) = self.destination.as_deref() {
            log::debug!("Overriding outDir with `{destination}`");
            config = config.with_out_dir(destination);
        }

        Ok(config)
    }
}
