use rdaybook::config::Config;
use rdaybook::core::report::targets::MONTHLY_TARGET;
use rdaybook::errors::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;

fn write_conf(name: &str, body: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("{name}_rdaybook.conf"));
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = env::temp_dir().join("config_absent_rdaybook.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.monthly_target, MONTHLY_TARGET);
    assert!(cfg.auth.is_none());
}

#[test]
fn test_monthly_target_is_read() {
    let path = write_conf("config_target_ok", "database: /tmp/x.sqlite\nmonthly_target: 250000\n");
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.monthly_target, 250_000);
    assert_eq!(cfg.database, "/tmp/x.sqlite");
}

#[test]
fn test_out_of_range_monthly_target_is_rejected() {
    for (name, value) in [
        ("config_target_zero", "0"),
        ("config_target_negative", "-400000"),
        ("config_target_huge", "9223372036854775807"),
    ] {
        let path = write_conf(name, &format!("monthly_target: {value}\n"));
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "{name}: {err:?}");
        assert!(err.to_string().contains("monthly_target"), "{name}: {err}");
    }
}
