//! The fixed descriptor schema and the structural checker run before
//! deserialization.

use crate::error::{IssueKind, ValidationErrors};
use crate::util::format_doc;
use serde_json::Value;

/// Shape of a descriptor field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A mapping with its own schema-described children.
    Object,
    /// A sequence of strings.
    StringList,
    /// A sequence of glob patterns; each must compile.
    GlobList,
    /// A mapping from string keys to string values.
    StringMap,
}

impl Kind {
    fn describe(self) -> &'static str {
        match self {
            Kind::Object => "mapping",
            Kind::StringList => "sequence of strings",
            Kind::GlobList => "sequence of glob patterns",
            Kind::StringMap => "mapping of strings to strings",
        }
    }
}

/// Specification of one descriptor field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Fully-qualified dotted path (e.g. `theme.extend.colors`).
    pub path: &'static str,
    pub kind: Kind,
    /// Whether loading fails when the field is absent.
    pub required: bool,
    pub doc: &'static str,
}

impl FieldSpec {
    /// Return dotted path segments for this field.
    pub fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('.')
    }
}

/// Every field a descriptor may carry. Parents are listed before children.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        path: "content",
        kind: Kind::GlobList,
        required: true,
        doc: "Files scanned for utility-class usage.
              Prefix a pattern with `!` to exclude matches.",
    },
    FieldSpec {
        path: "theme",
        kind: Kind::Object,
        required: false,
        doc: "Theme customisation.",
    },
    FieldSpec {
        path: "theme.extend",
        kind: Kind::Object,
        required: false,
        doc: "Additions to the default theme.",
    },
    FieldSpec {
        path: "theme.extend.colors",
        kind: Kind::StringMap,
        required: false,
        doc: "Colour tokens, usually bound to CSS custom properties
              with `var(--name)`.",
    },
    FieldSpec {
        path: "plugins",
        kind: Kind::StringList,
        required: false,
        doc: "Plugins registered by the consuming tool, in load order.",
    },
];

/// Look up the spec for a dotted path.
pub fn field(path: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.path == path)
}

enum Lookup<'a> {
    Found(&'a Value),
    Absent,
    /// An ancestor is not a mapping; that ancestor is reported instead.
    Blocked,
}

fn lookup<'a>(root: &'a Value, spec: &FieldSpec) -> Lookup<'a> {
    let mut current = root;
    for segment in spec.segments() {
        match current {
            Value::Object(map) => match map.get(segment) {
                Some(Value::Null) | None => return Lookup::Absent,
                Some(next) => current = next,
            },
            _ => return Lookup::Blocked,
        }
    }
    Lookup::Found(current)
}

/// Check a parsed document against [`FIELDS`], collecting every issue.
///
/// Unknown fields are ignored.
pub fn check(root: &Value) -> ValidationErrors {
    let mut errs = ValidationErrors::new();

    if !root.is_object() {
        errs.report(
            "<root>",
            IssueKind::Type,
            "expected a mapping at the document root",
        );
        return errs;
    }

    for spec in FIELDS {
        match lookup(root, spec) {
            Lookup::Found(value) => check_kind(spec, value, &mut errs),
            Lookup::Absent if spec.required => {
                errs.report(spec.path, IssueKind::Missing, "required field missing");
            }
            Lookup::Absent | Lookup::Blocked => {}
        }
    }

    errs
}

fn check_kind(spec: &FieldSpec, value: &Value, errs: &mut ValidationErrors) {
    let expected = || format!("expected a {}", spec.kind.describe());
    match spec.kind {
        Kind::Object => {
            if !value.is_object() {
                errs.report(spec.path, IssueKind::Type, expected());
            }
        }
        Kind::StringList | Kind::GlobList => {
            let Some(items) = value.as_array() else {
                errs.report(spec.path, IssueKind::Type, expected());
                return;
            };
            for (idx, item) in items.iter().enumerate() {
                let field = format!("{}[{idx}]", spec.path);
                match item.as_str() {
                    None => errs.report(field, IssueKind::Type, "expected a string"),
                    Some(pattern) if spec.kind == Kind::GlobList => {
                        if let Err(msg) = crate::content::check_pattern(pattern) {
                            errs.report(field, IssueKind::Pattern, msg);
                        }
                    }
                    Some(_) => {}
                }
            }
        }
        Kind::StringMap => {
            let Some(map) = value.as_object() else {
                errs.report(spec.path, IssueKind::Type, expected());
                return;
            };
            for (key, item) in map {
                if !item.is_string() {
                    errs.report(
                        format!("{}.{key}", spec.path),
                        IssueKind::Type,
                        "expected a string",
                    );
                }
            }
        }
    }
}

/// Render a listing of the descriptor schema.
pub fn describe() -> String {
    let mut lines = vec!["Theme descriptor fields:".to_string()];
    for spec in FIELDS {
        let mut detail = spec.kind.describe().to_string();
        if spec.required {
            detail.push_str(" (required)");
        }
        if let Some(doc) = format_doc(Some(spec.doc)) {
            detail.push_str(". ");
            detail.push_str(&doc);
        }
        lines.push(format!("  {:<22} {}", spec.path, detail));
    }
    lines.join("\n")
}
