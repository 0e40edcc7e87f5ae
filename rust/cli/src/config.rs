//! Layered configuration: defaults, then an optional TOML file named by
//! `SHOWDOWN_CONFIG`, then `SHOWDOWN_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;

use showdown_engine::showdown::{DrawMode, ShowdownConfig};

pub const CONFIG_ENV: &str = "SHOWDOWN_CONFIG";
pub const POT_ENV: &str = "SHOWDOWN_POT";
pub const DRAW_MODE_ENV: &str = "SHOWDOWN_DRAW_MODE";
pub const GAME_ID_ENV: &str = "SHOWDOWN_GAME_ID";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Pot for `play`, wager for `practice`, in base units
    pub default_pot: u64,
    pub draw_mode: DrawMode,
    pub game_id: String,
    /// Fixed opponent table for `practice`; random when unset
    pub opponents_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_pot: 1_000,
            draw_mode: DrawMode::PerPlayerDeck,
            game_id: "practice".into(),
            opponents_seed: None,
        }
    }
}

impl Config {
    pub fn showdown_config(&self, shared_draw: bool) -> ShowdownConfig {
        ShowdownConfig {
            draw_mode: if shared_draw {
                DrawMode::SharedRemainder
            } else {
                self.draw_mode
            },
            game_id: self.game_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub default_pot: ValueSource,
    pub draw_mode: ValueSource,
    pub game_id: ValueSource,
    pub opponents_seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            default_pot: ValueSource::Default,
            draw_mode: ValueSource::Default,
            game_id: ValueSource::Default,
            opponents_seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.default_pot {
            cfg.default_pot = v;
            sources.default_pot = ValueSource::File;
        }
        if let Some(v) = f.draw_mode {
            cfg.draw_mode = v;
            sources.draw_mode = ValueSource::File;
        }
        if let Some(v) = f.game_id {
            cfg.game_id = v;
            sources.game_id = ValueSource::File;
        }
        if let Some(v) = f.opponents_seed {
            cfg.opponents_seed = Some(v);
            sources.opponents_seed = ValueSource::File;
        }
    }

    if let Ok(pot) = std::env::var(POT_ENV)
        && !pot.is_empty()
    {
        cfg.default_pot = pot
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", POT_ENV, pot)))?;
        sources.default_pot = ValueSource::Env;
    }
    if let Ok(mode) = std::env::var(DRAW_MODE_ENV)
        && !mode.is_empty()
    {
        cfg.draw_mode = mode.parse().map_err(ConfigError::Invalid)?;
        sources.draw_mode = ValueSource::Env;
    }
    if let Ok(id) = std::env::var(GAME_ID_ENV)
        && !id.is_empty()
    {
        cfg.game_id = id;
        sources.game_id = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    default_pot: Option<u64>,
    #[serde(default)]
    draw_mode: Option<DrawMode>,
    #[serde(default)]
    game_id: Option<String>,
    #[serde(default)]
    opponents_seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.default_pot == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: default_pot must be >0".into(),
        ));
    }
    if cfg.game_id.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: game_id must not be empty".into(),
        ));
    }
    Ok(())
}
