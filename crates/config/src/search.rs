/// Search backend used by the generated site.
///
/// `local` builds a client-side index from the site content and needs nothing
/// else; `algolia` talks to a hosted index and carries its credentials.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum SearchConfig {
    Local {},
    Algolia { options: AlgoliaOptions },
}

impl SearchConfig {
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Local {} => "local",
            Self::Algolia { .. } => "algolia",
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::Local {}
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct AlgoliaOptions {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
}
