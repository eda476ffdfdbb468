use std::collections::BTreeMap;

use super::*;

/// Sidebar groups keyed by the URL prefix they apply to.
///
/// Lookup is by key only, so a sorted map is used to keep output stable.
pub type Sidebar = BTreeMap<String, Vec<SidebarGroup>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemeConfig {
    pub nav: Vec<NavItem>,
    pub sidebar: Sidebar,
    pub social_links: Vec<SocialLink>,
    pub footer: Footer,
    pub search: SearchConfig,
}

impl ThemeConfig {
    /// Nav entry whose link is exactly `link`, if any.
    pub fn nav_for(&self, link: &str) -> Option<&NavItem> {
        self.nav.iter().find(|n| n.link == link)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
pub struct SidebarGroup {
    /// Category label
    pub text: String,
    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: impl IntoIterator<Item = SidebarItem>) -> Self {
        Self {
            text: text.into(),
            items: items.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
pub struct SidebarItem {
    pub text: String,
    pub link: String,
}

impl SidebarItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

/// Icons the generator's default theme knows how to draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

impl Footer {
    pub fn new(message: impl Into<String>, copyright: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            copyright: copyright.into(),
        }
    }
}
