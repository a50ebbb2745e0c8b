use crate::codec::Format;
use crate::error::ThemeError;
use crate::merge::merge;
use crate::schema;
use crate::types::ThemeConfig;
use log::{debug, warn};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming the descriptor file explicitly.
pub const CONFIG_ENV: &str = "THEME_CONFIG";

/// Environment variable naming the variant layered over the base descriptor.
pub const VARIANT_ENV: &str = "THEME_ENV";

const BASENAME: &str = "theme";
const EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Load and validate a descriptor file.
///
/// The format is picked from the extension. A missing file is
/// [`ThemeError::NotFound`]; a document that is not a valid descriptor is
/// [`ThemeError::MalformedConfig`] (or a parse error, see
/// [`ThemeError::is_malformed`]).
pub fn load(path: impl AsRef<Path>) -> Result<ThemeConfig, ThemeError> {
    let path = path.as_ref();
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ThemeError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let cfg = load_str(&data, Format::from_path(path)?)?;
    debug!(
        "loaded theme descriptor {} ({} globs, {} colours, {} plugins)",
        path.display(),
        cfg.content_globs().len(),
        cfg.color_tokens().len(),
        cfg.plugins().len()
    );
    Ok(cfg)
}

/// Parse and validate a descriptor held in memory.
pub fn load_str(data: &str, format: Format) -> Result<ThemeConfig, ThemeError> {
    let value = format.parse(data)?;

    // Shape problems are collected first so every bad field is reported at once.
    schema::check(&value).into_result()?;

    let cfg: ThemeConfig =
        serde_json::from_value(value).map_err(|e| ThemeError::parse(format, e))?;
    warn_degenerate(&cfg);
    Ok(cfg)
}

fn warn_degenerate(cfg: &ThemeConfig) {
    if cfg.scans_nothing() {
        warn!("theme descriptor has an empty `content` list; no files will be scanned");
    }
    for (idx, raw) in cfg.content_globs().iter().enumerate() {
        if crate::content::is_blank(raw) {
            warn!("content[{idx}] is a blank pattern and matches nothing: {raw:?}");
        }
    }
    for (token, value) in cfg.unbound_tokens() {
        warn!("colour token `{token}` is not bound to a CSS custom property: {value}");
    }
}

/// Locate the descriptor for `dir`.
///
/// `THEME_CONFIG` wins when set, either in the process environment or in a
/// `.env` file in `dir`. Otherwise the first existing `theme.toml`,
/// `theme.yaml`, `theme.yml` or `theme.json` in `dir` is used.
pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let dir = dir.as_ref();
    load_dotenv(dir);

    if let Ok(path) = env::var(CONFIG_ENV) {
        debug!("using theme descriptor from {CONFIG_ENV}: {path}");
        return Some(PathBuf::from(path));
    }

    let found = EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{BASENAME}.{ext}")))
        .find(|candidate| candidate.is_file());
    if let Some(path) = &found {
        debug!("discovered theme descriptor {}", path.display());
    }
    found
}

/// Load `dir/.env` into the environment. Variables already set are kept.
fn load_dotenv(dir: &Path) {
    let path = dir.join(".env");
    match dotenvy::from_path(&path) {
        Ok(()) => debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("ignoring unreadable {}: {e}", path.display()),
    }
}

/// Path of the `variant` layer next to `base`: `<stem>.<variant>.<ext>`.
///
/// The base's own extension is tried first, then the other known ones.
pub fn variant_path(base: &Path, variant: &str) -> Option<PathBuf> {
    let stem = base.file_stem()?.to_str()?;
    let own_ext = base.extension().and_then(|e| e.to_str());
    let parent = base.parent().unwrap_or_else(|| Path::new(""));

    own_ext
        .into_iter()
        .chain(EXTENSIONS.iter().copied().filter(|ext| Some(*ext) != own_ext))
        .map(|ext| parent.join(format!("{stem}.{variant}.{ext}")))
        .find(|candidate| candidate.is_file())
}

/// Load `base` and merge its `variant` layer over it, if that file exists.
pub fn load_with_variant(base: impl AsRef<Path>, variant: &str) -> Result<ThemeConfig, ThemeError> {
    let base = base.as_ref();
    let cfg = load(base)?;

    match variant_path(base, variant) {
        Some(layer_path) => {
            let layer = load(&layer_path)?;
            debug!(
                "merged theme variant `{variant}` from {}",
                layer_path.display()
            );
            Ok(merge(&cfg, &layer))
        }
        None => {
            debug!("no `{variant}` layer for {}; using base only", base.display());
            Ok(cfg)
        }
    }
}

/// Discover the descriptor for `dir` and layer a variant over it.
///
/// `variant` falls back to `THEME_ENV`. With no variant the base is returned
/// as loaded.
pub fn load_layered(dir: impl AsRef<Path>, variant: Option<&str>) -> Result<ThemeConfig, ThemeError> {
    let dir = dir.as_ref();
    let base = discover(dir).ok_or_else(|| ThemeError::NotFound {
        path: dir.join(format!("{BASENAME}.{}", Format::Json.extension())),
    })?;

    let variant = variant
        .map(str::to_owned)
        .or_else(|| env::var(VARIANT_ENV).ok())
        .filter(|v| !v.is_empty());

    match variant {
        Some(variant) => load_with_variant(&base, &variant),
        None => load(&base),
    }
}

impl ThemeConfig {
    /// Load and validate a descriptor file. See [`load`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        load(path)
    }

    /// Write this descriptor to `path`, in the format its extension names.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ThemeError> {
        let path = path.as_ref();
        let text = self.to_string_as(Format::from_path(path)?)?;
        fs::write(path, text)?;
        debug!("wrote theme descriptor {}", path.display());
        Ok(())
    }
}
