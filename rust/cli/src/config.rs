use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "LETTERBOX_CONFIG";
pub const SEED_ENV: &str = "LETTERBOX_SEED";
pub const HISTORY_ENV: &str = "LETTERBOX_HISTORY";
pub const SHOW_PILES_ENV: &str = "LETTERBOX_SHOW_PILES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Deck seed; random when unset
    pub seed: Option<u64>,
    /// JSONL file receiving one record per finished round
    pub history: Option<String>,
    /// Print every used pile before each turn
    pub show_piles: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub history: ValueSource,
    pub show_piles: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            history: ValueSource::Default,
            show_piles: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            history: None,
            show_piles: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Defaults, then the file named by `LETTERBOX_CONFIG`, then individual
/// variables. Empty variables are ignored.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.history {
            cfg.history = Some(v);
            sources.history = ValueSource::File;
        }
        if let Some(v) = f.show_piles {
            cfg.show_piles = v;
            sources.show_piles = ValueSource::File;
        }
    }

    if let Some(seed) = env(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(history) = env(HISTORY_ENV)
        && !history.is_empty()
    {
        cfg.history = Some(history);
        sources.history = ValueSource::Env;
    }
    if let Some(show) = env(SHOW_PILES_ENV)
        && !show.is_empty()
    {
        cfg.show_piles = parse_bool(&show)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid show_piles: {}", show)))?;
        sources.show_piles = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    history: Option<String>,
    #[serde(default)]
    show_piles: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(path) = &cfg.history
        && path.trim().is_empty()
    {
        return Err(ConfigError::Invalid(
            "Invalid configuration: history path must not be empty".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
