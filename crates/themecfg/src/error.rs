use crate::codec::Format;
use std::fmt;
use std::path::PathBuf;

/// A structural problem with one field of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted path to the field, with `[n]` for sequence items
    /// (e.g. `theme.extend.colors`, `content[2]`).
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

/// The type of structural problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A required field is absent or null.
    Missing,
    /// The field is present but has the wrong shape.
    Type,
    /// The field holds a string that is not a valid pattern.
    Pattern,
}

/// Aggregated issues across all fields of a descriptor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<Issue>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub(crate) fn report(&mut self, field: impl Into<String>, kind: IssueKind, message: impl Into<String>) {
        self.push(Issue {
            field: field.into(),
            kind,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Whether any issue points at `field` exactly.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    /// `Ok(())` when nothing was reported, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "no validation errors");
        }
        writeln!(f, "malformed theme descriptor:")?;
        for issue in &self.issues {
            writeln!(f, "  - {}: {}", issue.field, issue.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The top-level error type for descriptor loading and saving.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme descriptor not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Structural problems with the document. Syntax errors are reported as
    /// [`ThemeError::Parse`]; [`ThemeError::is_malformed`] covers both.
    #[error("{0}")]
    MalformedConfig(#[from] ValidationErrors),

    #[error("{format} parse error: {source}")]
    Parse {
        format: Format,
        #[source]
        source: BoxError,
    },

    #[error("{format} serialization error: {source}")]
    Serialize {
        format: Format,
        #[source]
        source: BoxError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported descriptor format: {0}")]
    UnsupportedFormat(String),
}

impl ThemeError {
    pub(crate) fn parse(format: Format, source: impl Into<BoxError>) -> Self {
        Self::Parse {
            format,
            source: source.into(),
        }
    }

    pub(crate) fn serialize(format: Format, source: impl Into<BoxError>) -> Self {
        Self::Serialize {
            format,
            source: source.into(),
        }
    }

    /// True when the document exists but does not describe a valid
    /// descriptor, either syntactically or structurally.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ThemeError::MalformedConfig(_) | ThemeError::Parse { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ThemeError::NotFound { .. })
    }

    /// The field-level issues, when this is a structural failure.
    pub fn issues(&self) -> Option<&ValidationErrors> {
        match self {
            ThemeError::MalformedConfig(errors) => Some(errors),
            _ => None,
        }
    }
}
