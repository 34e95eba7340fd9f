use hylinear::config::{ColorMode, Config, LogLevel, RepeatConfig};
use hylinear::error::LinError;

#[test]
fn full_file_parses() {
    let config = Config::from_toml_str(
        r#"
        width = 100
        color = "never"
        log_level = "debug"

        [repeat]
        start = 1
        count = 8
        "#,
        "hylinear.toml",
    )
    .unwrap();

    assert_eq!(config.width, Some(100));
    assert_eq!(config.color, ColorMode::Never);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.repeat, RepeatConfig { start: 1, count: 8 });
}

#[test]
fn empty_file_is_default() {
    let config = Config::from_toml_str("", "empty.toml").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.width, None);
    assert_eq!(config.color, ColorMode::Auto);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.repeat.count, 5);
}

#[test]
fn partial_table_keeps_other_defaults() {
    let config = Config::from_toml_str("[repeat]\ncount = 2\n", "partial.toml").unwrap();
    assert_eq!(config.repeat, RepeatConfig { start: 0, count: 2 });
}

#[test]
fn unknown_field_is_rejected() {
    let err = Config::from_toml_str("colour = \"always\"\n", "typo.toml").unwrap_err();
    match err {
        LinError::ConfigParse { file, .. } => assert_eq!(file, "typo.toml"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_enum_value_is_rejected() {
    let err = Config::from_toml_str("color = \"sometimes\"\n", "bad.toml").unwrap_err();
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("hylinear-config-that-does-not-exist.toml");
    assert!(matches!(Config::from_path(&path), Err(LinError::Io(_))));
}

#[test]
fn file_on_disk_loads() {
    let path = std::env::temp_dir().join(format!("hylinear-config-{}.toml", std::process::id()));
    std::fs::write(&path, "width = 60\n").unwrap();
    let config = Config::from_path(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.unwrap().width, Some(60));
}
