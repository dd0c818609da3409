//! Serializable code configuration.
//!
//! A [`FecConfig`] is the `(k, n)` pair a deployment chooses. It can be
//! embedded in a larger configuration file or parsed on its own:
//!
//! ```toml
//! [fec]
//! k = 4
//! n = 6
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FecError;

/// Erasure code parameters.
///
/// `k` data blocks are expanded into `n` shares; any `k` of them rebuild
/// the data, so the code tolerates `n - k` lost shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FecConfig {
    /// Number of data blocks.
    pub k: u16,
    /// Total number of shares (data + redundancy).
    pub n: u16,
}

impl Default for FecConfig {
    fn default() -> Self {
        Self { k: 4, n: 6 }
    }
}

impl FecConfig {
    /// Create a configuration. Validation happens in
    /// [`FecCode::from_config`](crate::FecCode::from_config).
    pub fn new(k: u16, n: u16) -> Self {
        Self { k, n }
    }

    /// Number of redundancy shares, `n - k` (0 if `k > n`).
    pub fn redundancy(&self) -> u16 {
        self.n.saturating_sub(self.k)
    }

    /// Parse from TOML, either a bare `k`/`n` table or an `[fec]` section.
    ///
    /// Missing keys fall back to [`FecConfig::default`].
    pub fn from_toml_str(s: &str) -> Result<Self, FecError> {
        let mut table: toml::Table = s.parse()?;
        let section = match table.remove("fec") {
            Some(toml::Value::Table(fec)) => fec,
            _ => table,
        };
        Ok(toml::Value::Table(section).try_into()?)
    }
}
