use petal_ai::AI_TYPES;
use petal_engine::engine::FirstPlayer;
use serde::{Deserialize, Serialize};
use std::fs;

/// Longest reveal delay accepted for the AI's move, in milliseconds.
pub const MAX_AI_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub ai: String,
    pub ai_delay_ms: u64,
    pub first_player: FirstPlayer,
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
    pub seed: ValueSource,
    pub ai: ValueSource,
    pub ai_delay_ms: ValueSource,
    pub first_player: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            ai: ValueSource::Default,
            ai_delay_ms: ValueSource::Default,
            first_player: ValueSource::Default,
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
            ai: "greedy".into(),
            ai_delay_ms: 600,
            first_player: FirstPlayer::Random,
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

/// Layers defaults, the TOML file named by `PETAL_CONFIG` and `PETAL_*`
/// environment variables, later layers winning.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("PETAL_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.ai_delay_ms {
            cfg.ai_delay_ms = v;
            sources.ai_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.first_player {
            cfg.first_player = parse_first_player(&v)
                .ok_or_else(|| ConfigError::Invalid(format!("Invalid first_player: {}", v)))?;
            sources.first_player = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("PETAL_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("PETAL_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var("PETAL_AI_DELAY_MS")
        && !delay.is_empty()
    {
        cfg.ai_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid ai_delay_ms".into()))?;
        sources.ai_delay_ms = ValueSource::Env;
    }
    if let Ok(first) = std::env::var("PETAL_FIRST_PLAYER")
        && !first.is_empty()
    {
        cfg.first_player = parse_first_player(&first)
            .ok_or_else(|| ConfigError::Invalid("Invalid first player".into()))?;
        sources.first_player = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    ai_delay_ms: Option<u64>,
    #[serde(default)]
    first_player: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !AI_TYPES.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of {})",
            cfg.ai,
            AI_TYPES.join(", ")
        )));
    }
    if cfg.ai_delay_ms > MAX_AI_DELAY_MS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: ai_delay_ms must be <= {}",
            MAX_AI_DELAY_MS
        )));
    }
    Ok(())
}

/// `random`, `0` or `1`.
pub fn parse_first_player(s: &str) -> Option<FirstPlayer> {
    match s.trim().to_ascii_lowercase().as_str() {
        "random" | "rand" => Some(FirstPlayer::Random),
        "0" => Some(FirstPlayer::Seat(0)),
        "1" => Some(FirstPlayer::Seat(1)),
        _ => None,
    }
}

pub fn first_player_label(first: FirstPlayer) -> String {
    match first {
        FirstPlayer::Random => "random".into(),
        FirstPlayer::Seat(s) => s.to_string(),
    }
}
