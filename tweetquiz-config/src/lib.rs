//! Loader for game configuration with YAML + environment overlays.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults (credentials point at the `TWITTER_*` variables),
//! 2. an optional config file (`tweetquiz.yaml`, or whatever `--config` names),
//! 3. `TWEETQUIZ__*` environment variables (`TWEETQUIZ__ROUNDS=5`,
//!    `TWEETQUIZ__ACCOUNTS__FIRST=jack`).
//!
//! `${VAR}` placeholders in any string are expanded after merging.
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tweetquiz_common::observability::LogFormat;
use tweetquiz_common::{AccountPair, QuizError};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

pub const CONFIG_FILE_NAME: &str = "tweetquiz.yaml";

const DEFAULTS_YAML: &str = r#"
round_delay_ms: 1000
show_stats: false
api_base: "https://api.twitter.com"
request_timeout_secs: 15
log_format: text
credentials:
  api_key: "${TWITTER_API_KEY}"
  api_secret: "${TWITTER_API_SECRET}"
  access_token: "${TWITTER_ACCESS_TOKEN}"
  access_secret: "${TWITTER_ACCESS_SECRET}"
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub accounts: AccountsConfig,
    /// Skip the round-count prompt when set.
    #[serde(default)]
    pub rounds: Option<u32>,
    pub round_delay_ms: u64,
    pub show_stats: bool,
    pub api_base: String,
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    pub credentials: CredentialsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountsConfig {
    #[serde(default, deserialize_with = "handle_or_number")]
    pub first: Option<String>,
    #[serde(default, deserialize_with = "handle_or_number")]
    pub second: Option<String>,
}

// Env overrides are parsed eagerly, so an all-digit screen name arrives as a number.
fn handle_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
    }))
}

impl AccountsConfig {
    /// Both handles, if both are configured and non-blank.
    pub fn pair(&self) -> Option<AccountPair> {
        let pair = AccountPair::new(self.first.as_deref()?, self.second.as_deref()?);
        pair.is_complete().then_some(pair)
    }
}

#[derive(Clone, Deserialize)]
pub struct CredentialsConfig {
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl CredentialsConfig {
    /// Fail when any of the four values is blank or still an unexpanded `${VAR}`.
    pub fn validate(&self) -> Result<(), QuizError> {
        let missing: Vec<&str> = [
            ("TWITTER_API_KEY", &self.api_key),
            ("TWITTER_API_SECRET", &self.api_secret),
            ("TWITTER_ACCESS_TOKEN", &self.access_token),
            ("TWITTER_ACCESS_SECRET", &self.access_secret),
        ]
        .into_iter()
        .filter(|(_, value)| is_unresolved(value))
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(QuizError::Config(format!(
                "missing API credentials: {}",
                missing.join(", ")
            )))
        }
    }
}

fn is_unresolved(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v.contains("${")
}

/// Config file to use when none is given: `./tweetquiz.yaml`, then
/// `<config dir>/tweetquiz/tweetquiz.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("tweetquiz").join(CONFIG_FILE_NAME))
        .filter(|p| p.is_file())
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (defaults + files + env overrides).
pub struct QuizConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for QuizConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizConfigLoader {
    /// Start from the built-in defaults.
    ///
    /// ```
    /// use tweetquiz_config::QuizConfigLoader;
    ///
    /// let config = QuizConfigLoader::new().load().expect("defaults load");
    /// assert_eq!(config.round_delay_ms, 1000);
    /// assert_eq!(config.api_base, "https://api.twitter.com");
    /// assert!(config.accounts.pair().is_none());
    /// ```
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULTS_YAML, FileFormat::Yaml));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file that must exist; format is inferred by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach a file that is skipped when absent.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Merge an inline YAML snippet.
    ///
    /// ```
    /// use tweetquiz_config::QuizConfigLoader;
    ///
    /// let cfg = QuizConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// accounts:
    ///   first: "@kanyewest"
    ///   second: elonmusk
    /// rounds: 3
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// let pair = cfg.accounts.pair().unwrap();
    /// assert_eq!(pair.first, "kanyewest");
    /// assert_eq!(cfg.rounds, Some(3));
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self.builder.add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// `TWEETQUIZ__`-prefixed environment variables are layered last, then `${VAR}`
    /// placeholders are expanded before the typed struct is built.
    ///
    /// ```
    /// use tweetquiz_config::QuizConfigLoader;
    ///
    /// unsafe { std::env::set_var("DOCTEST_CONSUMER_KEY", "injected-from-env"); }
    ///
    /// let config = QuizConfigLoader::new()
    ///     .with_yaml_str(r#"
    /// credentials:
    ///   api_key: "${DOCTEST_CONSUMER_KEY}"
    /// "#)
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.credentials.api_key, "injected-from-env");
    ///
    /// unsafe { std::env::remove_var("DOCTEST_CONSUMER_KEY"); }
    /// ```
    pub fn load(self) -> Result<QuizConfig, ConfigError> {
        let cfg = self
            .builder
            .add_source(
                Environment::with_prefix("TWEETQUIZ")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))
    }
}
