use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SUPPORT: usize = 100;
pub const DEFAULT_TOP_K: usize = 5;

/// Run configuration, fixed before mining starts.
///
/// Both thresholds are validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct MiningConfig {
    min_support: usize,
    top_k: usize,
    parallel: bool,
}

impl MiningConfig {
    /// # Errors
    /// Returns an error when either threshold is zero.
    pub fn new(min_support: usize, top_k: usize) -> Result<Self, ConfigError> {
        if min_support == 0 {
            return Err(ConfigError::InvalidMinSupport { value: 0 });
        }
        if top_k == 0 {
            return Err(ConfigError::InvalidTopK { value: 0 });
        }
        Ok(Self {
            min_support,
            top_k,
            parallel: false,
        })
    }

    /// Like [`MiningConfig::new`], for callers holding signed values.
    ///
    /// # Errors
    /// Returns an error when either threshold is zero or negative.
    pub fn from_signed(min_support: i64, top_k: i64) -> Result<Self, ConfigError> {
        Self::try_from(RawConfig {
            min_support,
            top_k,
            parallel: false,
        })
    }

    /// Shard counting scans across the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parses a TOML document such as:
    ///
    /// ```toml
    /// min_support = 100
    /// top_k = 5
    /// parallel = false
    /// ```
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns an error for malformed TOML or non-positive thresholds.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(source)?;
        Self::try_from(raw)
    }

    pub fn min_support(&self) -> usize {
        self.min_support
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            top_k: DEFAULT_TOP_K,
            parallel: false,
        }
    }
}

// Signed on the wire so negative values are reported, not rejected by serde.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    min_support: i64,
    top_k: i64,
    parallel: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        MiningConfig::default().into()
    }
}

impl TryFrom<RawConfig> for MiningConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let min_support = positive(raw.min_support)
            .ok_or(ConfigError::InvalidMinSupport { value: raw.min_support })?;
        let top_k = positive(raw.top_k).ok_or(ConfigError::InvalidTopK { value: raw.top_k })?;
        Ok(Self::new(min_support, top_k)?.with_parallel(raw.parallel))
    }
}

impl From<MiningConfig> for RawConfig {
    fn from(config: MiningConfig) -> Self {
        Self {
            min_support: i64::try_from(config.min_support).unwrap_or(i64::MAX),
            top_k: i64::try_from(config.top_k).unwrap_or(i64::MAX),
            parallel: config.parallel,
        }
    }
}

fn positive(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v > 0)
}
