use std::collections::BTreeMap;

use notesite_config::Diagnostic;
use notesite_config::SiteConfig;

use crate::Source;
use crate::SourcePath;

/// Routes served by the markdown pages of a content tree.
///
/// `index.md` maps to `/`, `a/index.md` to `/a/` and `a/b.md` to `/a/b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentIndex {
    pages: BTreeMap<String, SourcePath>,
}

impl ContentIndex {
    pub fn from_source(source: &Source) -> Self {
        let mut index = Self::default();
        for path in source.iter() {
            let Some(page) = SourcePath::from_root(source.root(), &path) else {
                log::debug!("Skipping {}: outside of {}", path.display(), source.root().display());
                continue;
            };
            if !page.is_markdown() {
                continue;
            }
            let route = route_for(page.rel_path.as_str());
            log::trace!("{} -> {route}", page.rel_path);
            index.pages.insert(route, page);
        }
        log::debug!(
            "Indexed {} pages under {}",
            index.pages.len(),
            source.root().display()
        );
        index
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Markdown file that serves `link`, if any.
    pub fn page(&self, link: &str) -> Option<&SourcePath> {
        let link = strip_query(link);
        if link.ends_with('/') {
            return self.pages.get(link);
        }
        let stem = link
            .strip_suffix(".html")
            .or_else(|| link.strip_suffix(".md"))
            .unwrap_or(link);
        self.pages
            .get(stem)
            .or_else(|| self.pages.get(&format!("{stem}/")))
    }

    pub fn resolves(&self, link: &str) -> bool {
        self.page(link).is_some()
    }
}

fn strip_query(link: &str) -> &str {
    link.split(['#', '?']).next().unwrap_or_default()
}

fn route_for(rel_path: &str) -> String {
    let stem = rel_path.strip_suffix(".md").unwrap_or(rel_path);
    if stem == "index" {
        "/".to_owned()
    } else if let Some(dir) = stem.strip_suffix("/index") {
        format!("/{dir}/")
    } else {
        format!("/{stem}")
    }
}

/// Report every nav and sidebar link of `config` with no page behind it.
pub fn check_links(config: &SiteConfig, index: &ContentIndex) -> Vec<Diagnostic> {
    let theme = &config.theme_config;
    let nav = theme
        .nav
        .iter()
        .enumerate()
        .map(|(i, item)| (format!("themeConfig.nav[{i}].link"), item.link.as_str()));
    let sidebar = theme.sidebar.iter().flat_map(|(prefix, groups)| {
        groups.iter().enumerate().flat_map(move |(g, group)| {
            group.items.iter().enumerate().map(move |(i, item)| {
                (
                    format!("themeConfig.sidebar.{prefix}[{g}].items[{i}].link"),
                    item.link.as_str(),
                )
            })
        })
    });

    nav.chain(sidebar)
        .filter(|(_, link)| link.starts_with('/') && !index.resolves(link))
        .map(|(field, link)| {
            Diagnostic::error(
                field,
                format!(
                    "`{link}` does not match any page under `{}`",
                    config.root.display()
                ),
            )
        })
        .collect()
}
