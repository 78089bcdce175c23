//! Override file handling against the real process environment.

use std::io::Write;

use relay_config::ConfigManager;

#[test]
fn test_override_file_fills_unset_variables() {
    std::env::set_var("MAX_RETRIES", "7");
    std::env::remove_var("AUTH_KEY");
    std::env::remove_var("OPENAI_BASE_URL");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "MAX_RETRIES=1").unwrap();
    writeln!(file, "AUTH_KEY=file-secret").unwrap();
    writeln!(file, "OPENAI_BASE_URL=https://one.test,https://two.test").unwrap();

    let manager = ConfigManager::load(file.path()).unwrap();

    assert_eq!(manager.keys_config().max_retries, 7);
    assert!(manager.auth_config().enabled());
    assert_eq!(manager.upstream_config().base_url, "https://one.test");
    assert_eq!(manager.upstream_config().base_url, "https://two.test");

    // A missing file leaves the merged environment as it is.
    let dir = tempfile::tempdir().unwrap();
    let reloaded = ConfigManager::load(&dir.path().join("nope.env")).unwrap();
    assert_eq!(reloaded.keys_config().max_retries, 7);
    assert_eq!(reloaded.upstream_config().base_url, "https://one.test");
}
