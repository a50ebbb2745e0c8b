//! themecfg – typed loading, validation and merging of utility-class theme
//! descriptors (content globs, CSS-variable colour tokens, plugins).

pub mod codec;
pub mod content;
pub mod error;
pub mod loader;
pub mod merge;
pub mod schema;
pub mod tokens;
pub mod types;
pub mod util;

pub use codec::Format;
pub use content::ContentMatcher;
pub use error::{Issue, IssueKind, ThemeError, ValidationErrors};
pub use loader::{discover, load, load_layered, load_str, load_with_variant};
pub use merge::{merge, merge_all};
pub use types::{ColorTokens, ThemeConfig};
