use serde_json::json;
use themecfg::{Format, IssueKind, ThemeConfig, ThemeError, load, load_str};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const SITE_JSON: &str = r#"{
  "content": ["./app/templates/**/*.html", "./app/static/src/**/*.js"],
  "theme": { "extend": { "colors": {
    "theme-clr": "var(--theme-clr)",
    "outline-clr": "var(--outline-clr)"
  } } },
  "plugins": ["forms", "typography"]
}"#;

#[test]
fn loads_from_yaml_toml_and_json() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");

    let json_path = dir.path().join("theme.json");
    std::fs::write(&json_path, SITE_JSON).expect("write json");
    let from_json = load(&json_path).expect("json descriptor");

    let yaml_path = dir.path().join("theme.yaml");
    std::fs::write(
        &yaml_path,
        "content:\n  - ./app/templates/**/*.html\n  - ./app/static/src/**/*.js\n\
         theme:\n  extend:\n    colors:\n      theme-clr: var(--theme-clr)\n      outline-clr: var(--outline-clr)\n\
         plugins: [forms, typography]\n",
    )
    .expect("write yaml");
    let from_yaml = load(&yaml_path).expect("yaml descriptor");

    let toml_path = dir.path().join("theme.toml");
    std::fs::write(
        &toml_path,
        "content = [\"./app/templates/**/*.html\", \"./app/static/src/**/*.js\"]\n\
         plugins = [\"forms\", \"typography\"]\n\n\
         [theme.extend.colors]\n\"theme-clr\" = \"var(--theme-clr)\"\n\"outline-clr\" = \"var(--outline-clr)\"\n",
    )
    .expect("write toml");
    let from_toml = load(&toml_path).expect("toml descriptor");

    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json, from_toml);
    assert_eq!(from_json.plugins(), ["forms", "typography"]);
    assert_eq!(from_json.color("outline-clr"), Some("var(--outline-clr)"));
}

#[test]
fn reserialization_round_trips_every_field() {
    init_logging();
    let original: serde_json::Value = serde_json::from_str(SITE_JSON).expect("fixture");
    let cfg = load_str(SITE_JSON, Format::Json).expect("load");

    for format in [Format::Json, Format::Yaml, Format::Toml] {
        let text = cfg.to_string_as(format).expect("render");
        let back = load_str(&text, format).expect("reload");
        assert_eq!(back, cfg, "{format} round trip");

        let value = format.parse(&text).expect("reparse");
        assert_eq!(value["content"], original["content"]);
        assert_eq!(value["theme"]["extend"]["colors"], original["theme"]["extend"]["colors"]);
        assert_eq!(value["plugins"], original["plugins"]);
    }
}

#[test]
fn colour_order_survives_round_trip() {
    let cfg = load_str(SITE_JSON, Format::Json).expect("load");
    let text = cfg.to_string_as(Format::Json).expect("render");
    let back = load_str(&text, Format::Json).expect("reload");
    let keys: Vec<_> = back.color_tokens().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["theme-clr", "outline-clr"]);
}

#[test]
fn nonexistent_path_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.json");
    match load(&missing) {
        Err(ThemeError::NotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn file_missing_content_is_malformed() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("theme.json");
    std::fs::write(&path, r#"{ "plugins": [] }"#).expect("write json");
    let err = load(&path).unwrap_err();
    assert!(matches!(err, ThemeError::MalformedConfig(_)));
    assert!(err.is_malformed());
    let issues = err.issues().expect("structural issues");
    let issue = issues.iter().find(|i| i.field == "content").expect("content issue");
    assert_eq!(issue.kind, IssueKind::Missing);
}

#[test]
fn wrong_types_report_every_field_path() {
    let doc = json!({
        "content": "./app/**/*.html",
        "theme": { "extend": { "colors": { "theme-clr": 12 } } },
        "plugins": ["forms", { "name": "typography" }],
    });
    let err = load_str(&doc.to_string(), Format::Json).unwrap_err();
    let issues = err.issues().expect("structural issues");
    assert_eq!(issues.len(), 3);
    assert!(issues.has_field("content"));
    assert!(issues.has_field("theme.extend.colors.theme-clr"));
    assert!(issues.has_field("plugins[1]"));
    assert!(issues.iter().all(|i| i.kind == IssueKind::Type));
}

#[test]
fn unknown_fields_are_ignored() {
    let doc = json!({
        "content": ["src/**/*.html"],
        "darkMode": "class",
        "theme": { "screens": { "sm": "640px" }, "extend": { "spacing": {}, "colors": {} } },
    });
    let cfg = load_str(&doc.to_string(), Format::Json).expect("load");
    assert_eq!(cfg.content_globs(), ["src/**/*.html"]);
    assert!(cfg.color_tokens().is_empty());
    assert!(cfg.plugins().is_empty());
}

#[test]
fn empty_content_loads_but_scans_nothing() {
    init_logging();
    let cfg = load_str(r#"{ "content": [] }"#, Format::Json).expect("load");
    assert!(cfg.scans_nothing());
}

#[test]
fn blank_content_entries_are_accepted() {
    init_logging();
    let cfg = load_str(r#"{ "content": ["", "!", "app/*.html"] }"#, Format::Json).expect("load");
    assert_eq!(cfg.content_globs(), ["", "!", "app/*.html"]);
    let matcher = cfg.content_matcher().expect("globs compile");
    assert!(matcher.is_match("app/index.html"));
}

#[test]
fn syntax_errors_are_malformed_but_not_structural() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("theme.json");
    std::fs::write(&path, "{ \"content\": [").expect("write json");
    let err = load(&path).unwrap_err();
    assert!(err.is_malformed());
    assert!(matches!(err, ThemeError::Parse { format: Format::Json, .. }));
    assert!(err.issues().is_none());
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tailwind.config.js");
    std::fs::write(&path, "module.exports = {}").expect("write js");
    assert!(matches!(load(&path), Err(ThemeError::UnsupportedFormat(_))));
}

#[test]
fn save_writes_loadable_descriptor() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = ThemeConfig::new(
        ["./app/templates/*.html"],
        [("theme-clr", "var(--theme-clr)")],
        ["forms"],
    );
    for name in ["out.json", "out.yml", "out.toml"] {
        let path = dir.path().join(name);
        cfg.save(&path).expect("save");
        assert_eq!(ThemeConfig::load(&path).expect("reload"), cfg, "{name}");
    }
}
