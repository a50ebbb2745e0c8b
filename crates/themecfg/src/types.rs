use crate::content::ContentMatcher;
use crate::error::ThemeError;
use crate::tokens::parse_var;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Colour token name to colour value, in declaration order.
pub type ColorTokens = IndexMap<String, String>;

/// A loaded theme descriptor.
///
/// Immutable once built: [`crate::merge`] and the loader return new values
/// rather than editing one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDescriptor", into = "RawDescriptor")]
pub struct ThemeConfig {
    content: Vec<String>,
    colors: ColorTokens,
    plugins: Vec<String>,
}

impl ThemeConfig {
    pub fn new<G, K, V, P>(
        content: impl IntoIterator<Item = G>,
        colors: impl IntoIterator<Item = (K, V)>,
        plugins: impl IntoIterator<Item = P>,
    ) -> Self
    where
        G: Into<String>,
        K: Into<String>,
        V: Into<String>,
        P: Into<String>,
    {
        Self {
            content: content.into_iter().map(Into::into).collect(),
            colors: colors
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            plugins: plugins.into_iter().map(Into::into).collect(),
        }
    }

    /// Glob patterns of files scanned for class names.
    pub fn content_globs(&self) -> &[String] {
        &self.content
    }

    /// The `theme.extend.colors` mapping.
    pub fn color_tokens(&self) -> &ColorTokens {
        &self.colors
    }

    /// Plugin identifiers in load order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn color(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(String::as_str)
    }

    /// True when `content` is empty and a consumer would scan no files.
    pub fn scans_nothing(&self) -> bool {
        self.content.is_empty()
    }

    pub fn content_matcher(&self) -> Result<ContentMatcher, ThemeError> {
        ContentMatcher::new(self.content.as_slice())
    }

    /// Custom properties referenced by colour tokens, first use first.
    pub fn custom_properties(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for value in self.colors.values() {
            if let Some(r) = parse_var(value) {
                if !seen.contains(&r.property) {
                    seen.push(r.property);
                }
            }
        }
        seen
    }

    /// Tokens whose value is not a `var(--name)` reference.
    pub fn unbound_tokens(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors
            .iter()
            .filter(|(_, v)| parse_var(v).is_none())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, ColorTokens, Vec<String>) {
        (self.content, self.colors, self.plugins)
    }
}

/// On-disk shape of a descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RawDescriptor {
    pub content: Vec<String>,
    // Kept ahead of `theme` so TOML output places plain values before tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<RawTheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RawTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend: Option<RawExtend>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RawExtend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorTokens>,
}

impl From<RawDescriptor> for ThemeConfig {
    fn from(raw: RawDescriptor) -> Self {
        let colors = raw
            .theme
            .and_then(|t| t.extend)
            .and_then(|e| e.colors)
            .unwrap_or_default();
        Self {
            content: raw.content,
            colors,
            plugins: raw.plugins.unwrap_or_default(),
        }
    }
}

impl From<ThemeConfig> for RawDescriptor {
    fn from(cfg: ThemeConfig) -> Self {
        let (content, colors, plugins) = cfg.into_parts();
        Self {
            content,
            plugins: Some(plugins),
            theme: Some(RawTheme {
                extend: Some(RawExtend {
                    colors: Some(colors),
                }),
            }),
        }
    }
}
