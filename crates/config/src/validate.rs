use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;

use super::*;
use crate::path::{is_site_path, resolves_to_root};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single finding about a [`SiteConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Dotted path to the offending field, e.g. `themeConfig.nav[1].link`
    pub field: String,
    pub message: String,
}

impl Diagnostic {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn warn(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

/// Fail if any of `diagnostics` is an error, listing all of them.
pub fn ensure_no_errors(diagnostics: &[Diagnostic]) -> Result<()> {
    let errors = diagnostics.iter().filter(|d| d.is_error()).collect::<Vec<_>>();
    if errors.is_empty() {
        return Ok(());
    }
    let listing = errors.iter().join("\n");
    Err(Status::new("Invalid site config")
        .context_with(|c| c.insert("Errors", listing.clone())))
}

impl SiteConfig {
    /// Check every structural invariant, collecting all findings.
    pub fn validate(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if self.title.trim().is_empty() {
            diagnostics.push(Diagnostic::error("title", "title is empty"));
        }
        if !is_site_path(&self.base) {
            diagnostics.push(Diagnostic::error(
                "base",
                format!("`{}` must start with `/`", self.base),
            ));
        }

        validate_out_dir(self, &mut diagnostics);
        validate_nav(&self.theme_config, &mut diagnostics);
        validate_sidebar(&self.theme_config, &mut diagnostics);
        validate_social_links(&self.theme_config, &mut diagnostics);
        validate_search(&self.theme_config.search, &mut diagnostics);

        diagnostics
    }

    /// Fail fast with a descriptive error when [`SiteConfig::validate`] finds errors.
    pub fn check(&self) -> Result<()> {
        let diagnostics = self.validate();
        for diagnostic in diagnostics.iter().filter(|d| !d.is_error()) {
            log::warn!("{diagnostic}");
        }
        ensure_no_errors(&diagnostics)
    }
}

fn validate_out_dir(config: &SiteConfig, diagnostics: &mut Vec<Diagnostic>) {
    if config.out_dir.trim().is_empty() {
        diagnostics.push(Diagnostic::error("outDir", "output directory is empty"));
    } else if resolves_to_root(&config.root, &config.destination()) {
        diagnostics.push(Diagnostic::error(
            "outDir",
            format!(
                "`{}` is the source root `{}`; the build would overwrite its inputs",
                config.out_dir,
                config.root.display()
            ),
        ));
    }
}

fn validate_link(field: &str, link: &str, diagnostics: &mut Vec<Diagnostic>) -> bool {
    if link.is_empty() {
        diagnostics.push(Diagnostic::error(field, "link is empty"));
        false
    } else if !is_site_path(link) {
        diagnostics.push(Diagnostic::error(
            field,
            format!("`{link}` must start with `/`"),
        ));
        false
    } else {
        true
    }
}

fn validate_nav(theme: &ThemeConfig, diagnostics: &mut Vec<Diagnostic>) {
    let mut seen = HashSet::new();
    for (i, item) in theme.nav.iter().enumerate() {
        let field = format!("themeConfig.nav[{i}]");
        if item.text.trim().is_empty() {
            diagnostics.push(Diagnostic::error(format!("{field}.text"), "text is empty"));
        }
        let link_field = format!("{field}.link");
        if validate_link(&link_field, &item.link, diagnostics) && !seen.insert(item.link.as_str())
        {
            diagnostics.push(Diagnostic::warn(
                link_field,
                format!("`{}` appears more than once in the nav", item.link),
            ));
        }
    }
}

fn validate_sidebar(theme: &ThemeConfig, diagnostics: &mut Vec<Diagnostic>) {
    for (prefix, groups) in &theme.sidebar {
        let field = format!("themeConfig.sidebar.{prefix}");
        if !is_site_path(prefix) {
            diagnostics.push(Diagnostic::error(
                field.clone(),
                format!("key `{prefix}` must start with `/`"),
            ));
        } else if theme.nav_for(prefix).is_none() {
            diagnostics.push(Diagnostic::error(
                field.clone(),
                format!("no nav entry links to `{prefix}`"),
            ));
        }

        for (g, group) in groups.iter().enumerate() {
            let group_field = format!("{field}[{g}]");
            if group.text.trim().is_empty() {
                diagnostics.push(Diagnostic::error(
                    format!("{group_field}.text"),
                    "category label is empty",
                ));
            }
            if group.items.is_empty() {
                diagnostics.push(Diagnostic::error(
                    format!("{group_field}.items"),
                    format!("category `{}` has no pages", group.text),
                ));
            }
            for (i, item) in group.items.iter().enumerate() {
                let item_field = format!("{group_field}.items[{i}]");
                if item.text.trim().is_empty() {
                    diagnostics.push(Diagnostic::error(
                        format!("{item_field}.text"),
                        "text is empty",
                    ));
                }
                let link_field = format!("{item_field}.link");
                if validate_link(&link_field, &item.link, diagnostics)
                    && is_site_path(prefix)
                    && !item.link.starts_with(prefix.as_str())
                {
                    diagnostics.push(Diagnostic::warn(
                        link_field,
                        format!("`{}` is outside the `{prefix}` section", item.link),
                    ));
                }
            }
        }
    }
}

fn validate_social_links(theme: &ThemeConfig, diagnostics: &mut Vec<Diagnostic>) {
    for (i, social) in theme.social_links.iter().enumerate() {
        let field = format!("themeConfig.socialLinks[{i}].link");
        match url::Url::parse(&social.link) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => diagnostics.push(Diagnostic::error(
                field,
                format!("unsupported scheme `{}` in `{}`", url.scheme(), social.link),
            )),
            Err(e) => diagnostics.push(Diagnostic::error(
                field,
                format!("`{}` is not a URL: {e}", social.link),
            )),
        }
    }
}

fn validate_search(search: &SearchConfig, diagnostics: &mut Vec<Diagnostic>) {
    match search {
        SearchConfig::Local {} => {}
        SearchConfig::Algolia { options } => {
            let fields = [
                ("appId", &options.app_id),
                ("apiKey", &options.api_key),
                ("indexName", &options.index_name),
            ];
            for (name, value) in fields {
                if value.trim().is_empty() {
                    diagnostics.push(Diagnostic::error(
                        format!("themeConfig.search.options.{name}"),
                        format!("required by the {} provider", search.provider()),
                    ));
                }
            }
        }
    }
}
