use crate::types::ThemeConfig;

/// Combine two descriptors into a new one.
///
/// - `content` and `plugins` are concatenated, `base` first. Duplicates are kept.
/// - Colour tokens from `override_cfg` win on key collision. A token keeps the
///   position it first appeared at in `base`.
pub fn merge(base: &ThemeConfig, override_cfg: &ThemeConfig) -> ThemeConfig {
    let content = base
        .content_globs()
        .iter()
        .chain(override_cfg.content_globs())
        .cloned();

    let mut colors = base.color_tokens().clone();
    for (token, value) in override_cfg.color_tokens() {
        colors.insert(token.clone(), value.clone());
    }

    let plugins = base
        .plugins()
        .iter()
        .chain(override_cfg.plugins())
        .cloned();

    ThemeConfig::new(content, colors, plugins)
}

/// Left-fold [`merge`] over `configs`; later descriptors override earlier ones.
///
/// Returns `None` when `configs` is empty.
pub fn merge_all<'a>(configs: impl IntoIterator<Item = &'a ThemeConfig>) -> Option<ThemeConfig> {
    let mut iter = configs.into_iter();
    let first = iter.next()?.clone();
    Some(iter.fold(first, |acc, next| merge(&acc, next)))
}

impl ThemeConfig {
    /// Method form of [`merge`] with `self` as the base.
    pub fn merged_with(&self, override_cfg: &ThemeConfig) -> ThemeConfig {
        merge(self, override_cfg)
    }
}
