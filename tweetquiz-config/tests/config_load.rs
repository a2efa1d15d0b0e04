use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;
use tweetquiz_common::observability::LogFormat;
use tweetquiz_config::QuizConfigLoader;

/// Helper to write a config file in a temp dir and return its path.
fn write_file(tmp: &TempDir, name: &str, body: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, body).expect("write config");
    p
}

const CREDENTIAL_VARS: [(&str, Option<&str>); 4] = [
    ("TWITTER_API_KEY", Some("key")),
    ("TWITTER_API_SECRET", Some("secret")),
    ("TWITTER_ACCESS_TOKEN", Some("token")),
    ("TWITTER_ACCESS_SECRET", Some("token-secret")),
];

#[test]
#[serial]
fn file_values_override_defaults() {
    let tmp = TempDir::new().unwrap();
    let p = write_file(
        &tmp,
        "tweetquiz.yaml",
        r#"
accounts:
  first: kanyewest
  second: "@elonmusk"
rounds: 10
round_delay_ms: 0
show_stats: true
log_format: json
"#,
    );

    let config = temp_env::with_vars(CREDENTIAL_VARS, || {
        QuizConfigLoader::new().with_file(&p).load().expect("load config")
    });

    let pair = config.accounts.pair().unwrap();
    assert_eq!((pair.first.as_str(), pair.second.as_str()), ("kanyewest", "elonmusk"));
    assert_eq!(config.rounds, Some(10));
    assert_eq!(config.round_delay_ms, 0);
    assert!(config.show_stats);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.request_timeout_secs, 15);
    assert_eq!(config.credentials.api_key, "key");
    assert!(config.credentials.validate().is_ok());
}

#[test]
#[serial]
fn environment_overrides_file() {
    let tmp = TempDir::new().unwrap();
    let p = write_file(&tmp, "tweetquiz.toml", "rounds = 2\nround_delay_ms = 250\n");

    let config = temp_env::with_vars(
        [
            ("TWEETQUIZ__ROUNDS", Some("7")),
            ("TWEETQUIZ__ACCOUNTS__FIRST", Some("jack")),
        ],
        || QuizConfigLoader::new().with_file(&p).load().expect("load config"),
    );

    assert_eq!(config.rounds, Some(7));
    assert_eq!(config.round_delay_ms, 250);
    assert_eq!(config.accounts.first.as_deref(), Some("jack"));
    assert!(config.accounts.pair().is_none());
}

#[test]
#[serial]
fn all_digit_handles_from_the_environment_stay_handles() {
    let config = temp_env::with_vars(
        [
            ("TWEETQUIZ__ACCOUNTS__FIRST", Some("1234")),
            ("TWEETQUIZ__ACCOUNTS__SECOND", Some("elonmusk")),
        ],
        || QuizConfigLoader::new().load().expect("load config"),
    );

    let pair = config.accounts.pair().unwrap();
    assert_eq!((pair.first.as_str(), pair.second.as_str()), ("1234", "elonmusk"));
}

#[test]
#[serial]
fn missing_credentials_fail_validation() {
    let unset: [(&str, Option<&str>); 4] = CREDENTIAL_VARS.map(|(k, _)| (k, None));
    let config = temp_env::with_vars(unset, || QuizConfigLoader::new().load().unwrap());

    let err = config.credentials.validate().unwrap_err();
    assert!(err.to_string().contains("TWITTER_ACCESS_TOKEN"));
}

#[test]
#[serial]
fn optional_file_may_be_absent_but_required_file_may_not() {
    let tmp = TempDir::new().unwrap();
    let absent = tmp.path().join("nope.yaml");

    assert!(QuizConfigLoader::new().with_optional_file(&absent).load().is_ok());
    assert!(QuizConfigLoader::new().with_file(&absent).load().is_err());
}
