use std::fmt;
use std::path;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub markdown: MarkdownOptions,
    pub theme_config: ThemeConfig,
    pub base: String,
    pub out_dir: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub src_exclude: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> SiteConfig {
        SiteConfig {
            root: path::PathBuf::from("."),
            title: Default::default(),
            description: Default::default(),
            lang: None,
            markdown: Default::default(),
            theme_config: Default::default(),
            base: "/".to_owned(),
            out_dir: "../dist".to_owned(),
            src_exclude: Default::default(),
        }
    }
}

impl SiteConfig {
    /// The learning-notes site as it is published.
    pub fn learning_notes() -> SiteConfig {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/Language/".to_owned(),
            vec![
                SidebarGroup::new(
                    "JavaScript",
                    [
                        SidebarItem::new("JavaScript基础", "/Language/JavaScript/JavaScript/"),
                        SidebarItem::new("ES6", "/Language/JavaScript/ES6/"),
                        SidebarItem::new("ES7-10", "/Language/JavaScript/ES7-10/"),
                    ],
                ),
                SidebarGroup::new(
                    "Node",
                    [
                        SidebarItem::new("Node基础", "/Language/Node/Node/"),
                        SidebarItem::new("MongoDB", "/Language/Node/MongoDB/"),
                        SidebarItem::new("爬虫", "/Language/Node/Reptiles爬虫/"),
                    ],
                ),
            ],
        );
        sidebar.insert(
            "/Tool/".to_owned(),
            vec![
                SidebarGroup::new(
                    "Vue",
                    [
                        SidebarItem::new("Vue基础", "/Tool/Vue/Vue_base/"),
                        SidebarItem::new("Vue MVVM", "/Tool/Vue/Vue_mvvm/"),
                        SidebarItem::new("Vuex", "/Tool/Vue/Vuex/"),
                    ],
                ),
                SidebarGroup::new(
                    "其他工具",
                    [
                        SidebarItem::new("Axios", "/Tool/Axios/"),
                        SidebarItem::new("Webpack", "/Tool/Webpack/"),
                        SidebarItem::new("Git", "/Tool/Git/"),
                        SidebarItem::new("SSO", "/Tool/SSO/"),
                    ],
                ),
            ],
        );

        SiteConfig {
            title: "学习记录文档".to_owned(),
            description: "前端技术学习记录".to_owned(),
            markdown: MarkdownOptions {
                breaks: false,
                ..Default::default()
            },
            theme_config: ThemeConfig {
                nav: vec![
                    NavItem::new("首页", "/"),
                    NavItem::new("语言", "/Language/"),
                    NavItem::new("工具", "/Tool/"),
                ],
                sidebar,
                social_links: vec![],
                footer: Footer::new("MIT Licensed", "Copyright © 2022 xiaoyu"),
                search: SearchConfig::Local {},
            },
            base: "/".to_owned(),
            out_dir: "../dist".to_owned(),
            ..Default::default()
        }
    }

    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteConfig> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteConfig> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<SiteConfig> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<SiteConfig> {
        let file_path = crate::path::find_project_file(&cwd, PROJECT_FILE);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!(
                    "No {PROJECT_FILE} file found in current directory, using built-in site config."
                );
                let config = SiteConfig {
                    root: cwd,
                    ..SiteConfig::learning_notes()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<String>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// `out_dir` resolved against `root`.
    pub fn destination(&self) -> path::PathBuf {
        self.root.join(&self.out_dir)
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        let converted = converted.strip_prefix("---\n").unwrap_or(&converted);
        write!(f, "{converted}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn learning_notes_is_idempotent() {
        assert_eq!(SiteConfig::learning_notes(), SiteConfig::learning_notes());
    }

    #[test]
    fn learning_notes_preserves_declared_order() {
        let config = SiteConfig::learning_notes();
        let nav: Vec<_> = config
            .theme_config
            .nav
            .iter()
            .map(|n| n.link.as_str())
            .collect();
        assert_eq!(nav, ["/", "/Language/", "/Tool/"]);

        let tool = &config.theme_config.sidebar["/Tool/"];
        let groups: Vec<_> = tool.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(groups, ["Vue", "其他工具"]);
        let items: Vec<_> = tool[1].items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(items, ["Axios", "Webpack", "Git", "SSO"]);
    }

    #[test]
    fn learning_notes_settings() {
        let config = SiteConfig::learning_notes();
        assert_eq!(config.title, "学习记录文档");
        assert!(!config.markdown.breaks);
        assert!(config.theme_config.social_links.is_empty());
        assert_eq!(config.theme_config.search, SearchConfig::Local {});
        assert_eq!(config.base, "/");
        assert_eq!(config.out_dir, "../dist");
        assert_eq!(
            config.destination(),
            path::Path::new(".").join("../dist")
        );
    }

    #[test]
    fn test_from_file_ok() {
        let result = SiteConfig::from_file("tests/fixtures/config/_notesite.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.title, "Fixture Notes");
        assert_eq!(result.theme_config.nav.len(), 2);
        assert_eq!(result.theme_config.sidebar["/Tool/"][0].items.len(), 2);
        assert_eq!(result.src_exclude, ["drafts/**"]);
    }

    #[test]
    fn test_from_file_alternate_name() {
        let result = SiteConfig::from_file("tests/fixtures/config/algolia.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.theme_config.search.provider(), "algolia");
    }

    #[test]
    fn test_from_file_empty() {
        let result = SiteConfig::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.base, "/");
        assert!(result.theme_config.nav.is_empty());
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = SiteConfig::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = SiteConfig::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_cwd_ok() {
        let result = SiteConfig::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
    }

    #[test]
    fn test_from_cwd_not_found() {
        let result = SiteConfig::from_cwd("tests/fixtures").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures").to_path_buf());
        assert_eq!(result.title, SiteConfig::learning_notes().title);
    }

    #[test]
    fn overrides() {
        let config = SiteConfig::learning_notes()
            .with_base("/notes/")
            .with_out_dir("public");
        assert_eq!(config.base, "/notes/");
        assert_eq!(config.out_dir, "public");
    }

    #[test]
    fn display_uses_generator_keys() {
        let dumped = SiteConfig::learning_notes().to_string();
        assert!(!dumped.starts_with("---"));
        assert!(dumped.starts_with("title: "), "{dumped}");
        assert!(dumped.contains("themeConfig:"), "{dumped}");
        assert!(dumped.contains("outDir: ../dist"), "{dumped}");
        assert!(!dumped.contains("srcExclude"), "{dumped}");
        assert!(!dumped.contains("root"), "{dumped}");
    }

    #[test]
    fn display_round_trips() {
        let config = SiteConfig::learning_notes();
        let parsed: SiteConfig = serde_yaml::from_str(&config.to_string()).unwrap();
        assert_eq!(parsed, config);
    }
}
