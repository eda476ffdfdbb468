use std::fs;
use std::path;

use crate::SiteConfig;
use crate::error::{Result, Status};

/// Shapes the site config can be handed to the generator in.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// ES module calling `defineConfig`, as loaded from `.vitepress/config.mjs`
    #[default]
    Mjs,
    Json,
    Yaml,
}

impl Format {
    /// Guess the format from a file extension.
    pub fn from_path(path: &path::Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "mjs" | "js" => Some(Self::Mjs),
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

pub fn render(config: &SiteConfig, format: Format) -> Result<String> {
    let rendered = match format {
        Format::Json => {
            let mut json = to_json(config)?;
            json.push('\n');
            json
        }
        Format::Yaml => config.to_string(),
        Format::Mjs => {
            let json = to_json(config)?;
            format!("import {{ defineConfig }} from 'vitepress'\n\nexport default defineConfig({json})\n")
        }
    };
    Ok(rendered)
}

/// Render `config` into `path`, creating parent directories as needed.
pub fn write(config: &SiteConfig, path: &path::Path, format: Format) -> Result<()> {
    let rendered = render(config, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Status::new("Failed to create directory")
                .with_source(e)
                .context_with(|c| c.insert("Path", parent.display().to_string()))
        })?;
    }
    fs::write(path, rendered).map_err(|e| {
        Status::new("Failed to write config")
            .with_source(e)
            .context_with(|c| c.insert("Path", path.display().to_string()))
    })?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

fn to_json(config: &SiteConfig) -> Result<String> {
    serde_json::to_string_pretty(config)
        .map_err(|e| Status::new("Failed to serialize config").with_source(e))
}
