/// Markdown-rendering toggles handed to the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct MarkdownOptions {
    /// Render single newlines as `<br>`.
    pub breaks: bool,
    pub line_numbers: bool,
}
