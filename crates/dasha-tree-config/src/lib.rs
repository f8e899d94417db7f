use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dasha_tree_engine::metadata::{DEFAULT_SUFFIXES, SuffixRule, SuffixTable};
use dasha_tree_engine::parsing::periods::kinds::{DEFAULT_NOISE_PATTERNS, NoiseFilter, RulerTable};
use dasha_tree_engine::parsing::periods::{BuildOptions, ContinuationPolicy};
use dasha_tree_engine::parsing::{DEFAULT_DRIFT_TOLERANCE_DAYS, DEFAULT_MAX_INPUT_BYTES, ParseOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_INPUT_PATTERN: &str = "*.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid pattern in {field}: {reason}")]
    InvalidPattern { field: &'static str, reason: String },
}

/// Everything a conversion run can be tuned with. Every section is optional;
/// missing values fall back to the engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub parser: ParserConfig,
    pub filename: FilenameConfig,
    pub rulers: RulersConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Glob matched against file names during directory scans.
    pub pattern: String,
    pub max_input_bytes: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            pattern: DEFAULT_INPUT_PATTERN.to_string(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub merge_repeated: bool,
    pub drift_tolerance_days: u64,
    pub continuation: ContinuationPolicy,
    /// Regexes for boilerplate lines. Replaces the built-in list when set.
    pub noise_patterns: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            merge_repeated: false,
            drift_tolerance_days: DEFAULT_DRIFT_TOLERANCE_DAYS,
            continuation: ContinuationPolicy::default(),
            noise_patterns: DEFAULT_NOISE_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilenameConfig {
    /// Tried in order, repeatedly, until none applies.
    pub suffixes: Vec<SuffixRule>,
}

impl Default for FilenameConfig {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| SuffixRule::new(*s)).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulersConfig {
    /// Extra spellings, e.g. `Jup = "Jupiter"`. These win over built-in names.
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in directory paths
        config.input.dir = config.input.dir.map(|p| Self::expand_path(&p).unwrap_or(p));
        config.output.dir = config.output.dir.map(|p| Self::expand_path(&p).unwrap_or(p));

        config.validate()?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/dasha-tree");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Checks the input glob and the noise regexes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        glob::Pattern::new(&self.input.pattern).map_err(|e| ConfigError::InvalidPattern {
            field: "input.pattern",
            reason: e.to_string(),
        })?;
        self.noise_filter().map(|_| ())
    }

    /// Engine options for this configuration.
    pub fn parse_options(&self) -> Result<ParseOptions, ConfigError> {
        let rulers = RulerTable::default().with_aliases(
            self.rulers
                .aliases
                .iter()
                .map(|(alias, name)| (alias.as_str(), name.as_str())),
        );

        Ok(ParseOptions {
            build: BuildOptions {
                merge_repeated: self.parser.merge_repeated,
                continuation: self.parser.continuation,
            },
            drift_tolerance_days: self.parser.drift_tolerance_days,
            max_input_bytes: self.input.max_input_bytes,
            rulers,
            noise: self.noise_filter()?,
            suffixes: SuffixTable::new(self.filename.suffixes.clone()),
        })
    }

    fn noise_filter(&self) -> Result<NoiseFilter, ConfigError> {
        NoiseFilter::from_patterns(&self.parser.noise_patterns).map_err(|e| {
            ConfigError::InvalidPattern {
                field: "parser.noise_patterns",
                reason: e.to_string(),
            }
        })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
