use notesite_config::SiteConfig;

use crate::Result;
use crate::Status;

/// Entries the generator never treats as content.
pub const DEFAULT_EXCLUDES: &[&str] = &[".*", "node_modules/"];

/// The content tree of a site, filtered through gitignore-style excludes.
#[derive(Debug, Clone)]
pub struct Source {
    root: std::path::PathBuf,
    ignore: ignore::gitignore::Gitignore,
}

impl Source {
    pub fn new<'i>(
        root: &std::path::Path,
        ignores: impl IntoIterator<Item = &'i str>,
    ) -> Result<Self> {
        let mut ignore = ignore::gitignore::GitignoreBuilder::new(root);
        for line in ignores {
            ignore
                .add_line(None, line)
                .map_err(|e| Status::new("Invalid exclude entry").with_source(e))?;
        }
        let ignore = ignore
            .build()
            .map_err(|e| Status::new("Invalid exclude entry").with_source(e))?;

        let source = Self {
            root: root.to_owned(),
            ignore,
        };
        Ok(source)
    }

    /// Content tree for `config`: its root, with the default excludes plus `srcExclude`.
    pub fn for_site(config: &SiteConfig) -> Result<Self> {
        let mut ignores = DEFAULT_EXCLUDES.to_vec();
        ignores.extend(config.src_exclude.iter().map(String::as_str));
        Self::new(&config.root, ignores)
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn iter(&self) -> impl Iterator<Item = std::path::PathBuf> + '_ {
        walkdir::WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| self.includes_entry(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(move |e| e.path().to_path_buf())
    }

    fn includes_path(&self, path: &std::path::Path, is_dir: bool) -> bool {
        match self.ignore.matched(path, is_dir) {
            ignore::Match::None => true,
            ignore::Match::Ignore(glob) => {
                log::trace!("{path:?}: excluded by {:?}", glob.original());
                false
            }
            ignore::Match::Whitelist(glob) => {
                log::trace!("{path:?}: allowed by {:?}", glob.original());
                true
            }
        }
    }

    fn includes_entry(&self, entry: &walkdir::DirEntry) -> bool {
        let file = entry.path();

        // Parents were already filtered by the walk before reaching this entry.
        let is_dir = entry.file_type().is_dir();
        self.includes_path(file, is_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_skips_default_excludes() {
        let source = Source::new(
            std::path::Path::new("tests/fixtures/content"),
            DEFAULT_EXCLUDES.iter().copied(),
        )
        .unwrap();
        let files: Vec<_> = source
            .iter()
            .map(|p| {
                p.strip_prefix(source.root())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert!(files.contains(&"Tool/Git.md".to_owned()), "{files:?}");
        assert!(files.contains(&"Tool/drafts/wip.md".to_owned()), "{files:?}");
        assert!(!files.iter().any(|f| f.starts_with(".vitepress")), "{files:?}");
        assert!(!files.iter().any(|f| f.starts_with("node_modules")), "{files:?}");
    }

    #[test]
    fn for_site_adds_src_exclude() {
        let config = SiteConfig {
            root: "tests/fixtures/content".into(),
            src_exclude: vec!["drafts/".to_owned()],
            ..SiteConfig::learning_notes()
        };
        let source = Source::for_site(&config).unwrap();
        assert!(!source.iter().any(|p| p.ends_with("wip.md")));
        assert!(source.iter().any(|p| p.ends_with("Git.md")));
    }

    #[test]
    fn walk_keeps_content_below_hidden_root() {
        let dir = std::path::Path::new("tests/fixtures/content/.vitepress");
        let source = Source::new(dir, DEFAULT_EXCLUDES.iter().copied()).unwrap();
        let files: Vec<_> = source.iter().collect();
        assert_eq!(files, [dir.join("config.mjs")]);
    }
}
