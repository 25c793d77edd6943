use limit_fill::Config;

fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("limit-fill-{}-{}.toml", name, std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn load_from_reads_and_validates() {
    let path = write_temp_config(
        "valid",
        r#"
[analysis]
window_length_days = 60
discount_threshold_pct = 5.0
premium_threshold_pct = 1.0

[logging]
level = "debug"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(config.analysis.window_length_days, 60);
    assert!((config.analysis.discount_threshold_pct - 5.0).abs() < f64::EPSILON);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn load_from_rejects_invalid_parameters() {
    let path = write_temp_config(
        "invalid",
        r#"
[analysis]
window_length_days = 500
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(format!("{err:#}").contains("window_length_days"));
}

#[test]
fn load_from_missing_file_reports_path() {
    let missing = std::path::Path::new("/nonexistent/limit-fill.toml");
    let err = Config::load_from(missing).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read"));
}
