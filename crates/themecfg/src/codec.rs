//! Descriptor file formats. Every format is read into a `serde_json::Value`
//! so the schema check sees one document model.

use crate::error::ThemeError;
use crate::types::ThemeConfig;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// A descriptor file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            Some("yaml" | "yml") => Ok(Format::Yaml),
            _ => Err(ThemeError::UnsupportedFormat(format!(
                "unknown descriptor extension for {}; use .toml, .yaml, .yml, or .json",
                path.display()
            ))),
        }
    }

    /// Preferred file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
        }
    }

    /// Parse a document into the shared value model.
    pub fn parse(self, data: &str) -> Result<Value, ThemeError> {
        match self {
            Format::Json => serde_json::from_str(data).map_err(|e| ThemeError::parse(self, e)),
            Format::Toml => {
                #[cfg(feature = "toml")]
                {
                    let t: toml::Value =
                        toml::from_str(data).map_err(|e| ThemeError::parse(self, e))?;
                    serde_json::to_value(t).map_err(|e| ThemeError::parse(self, e))
                }
                #[cfg(not(feature = "toml"))]
                {
                    let _ = data;
                    Err(self.disabled())
                }
            }
            Format::Yaml => {
                #[cfg(feature = "yaml")]
                {
                    serde_yaml::from_str(data).map_err(|e| ThemeError::parse(self, e))
                }
                #[cfg(not(feature = "yaml"))]
                {
                    let _ = data;
                    Err(self.disabled())
                }
            }
        }
    }

    /// Render a descriptor in this format.
    pub fn render(self, cfg: &ThemeConfig) -> Result<String, ThemeError> {
        match self {
            Format::Json => {
                let mut out =
                    serde_json::to_string_pretty(cfg).map_err(|e| ThemeError::serialize(self, e))?;
                out.push('\n');
                Ok(out)
            }
            Format::Toml => {
                #[cfg(feature = "toml")]
                {
                    toml::to_string_pretty(cfg).map_err(|e| ThemeError::serialize(self, e))
                }
                #[cfg(not(feature = "toml"))]
                {
                    let _ = cfg;
                    Err(self.disabled())
                }
            }
            Format::Yaml => {
                #[cfg(feature = "yaml")]
                {
                    serde_yaml::to_string(cfg).map_err(|e| ThemeError::serialize(self, e))
                }
                #[cfg(not(feature = "yaml"))]
                {
                    let _ = cfg;
                    Err(self.disabled())
                }
            }
        }
    }

    #[allow(dead_code)]
    fn disabled(self) -> ThemeError {
        ThemeError::UnsupportedFormat(format!("{self} support disabled at compile time"))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "JSON",
            Format::Toml => "TOML",
            Format::Yaml => "YAML",
        };
        f.write_str(name)
    }
}

impl ThemeConfig {
    /// Render this descriptor in the given format.
    pub fn to_string_as(&self, format: Format) -> Result<String, ThemeError> {
        format.render(self)
    }
}
