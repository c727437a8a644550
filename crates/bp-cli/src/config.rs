//! Run configuration: defaults, optional TOML file, command-line overrides.
//!
//! ```toml
//! [bond]
//! face_amount = 200.0
//! coupon_rate = 0.10
//! periods_per_year = 4
//! maturity_years = 4.0
//! convention = "30/360"
//!
//! [sweep]
//! yields = [0.07, 0.08, 0.09, 0.10, 0.11, 0.12, 0.13]
//! maturities = [2.0, 3.0, 4.0]
//! policy = "fail-fast"
//! parallel = true
//! ```

use std::path::Path;

use bondprice::{BondTerms, Convention, Frequency, SweepConfig, SweepPolicy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};

/// Everything a run needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Bond terms and discounting convention.
    pub bond: BondSection,
    /// Sweep grid and behaviour.
    pub sweep: SweepSection,
}

/// `[bond]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BondSection {
    pub face_amount: f64,
    pub coupon_rate: f64,
    pub periods_per_year: u32,
    /// Maturity priced by the `price` command.
    pub maturity_years: f64,
    /// Convention name or day-count tag, e.g. `30/360`.
    pub convention: String,
}

impl Default for BondSection {
    fn default() -> Self {
        Self {
            face_amount: 200.0,
            coupon_rate: 0.10,
            periods_per_year: 4,
            maturity_years: 4.0,
            convention: "30/360".to_string(),
        }
    }
}

/// `[sweep]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepSection {
    pub yields: Vec<f64>,
    pub maturities: Vec<f64>,
    pub policy: SweepPolicy,
    pub parallel: bool,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            yields: vec![0.07, 0.08, 0.09, 0.10, 0.11, 0.12, 0.13],
            maturities: vec![2.0, 3.0, 4.0],
            policy: SweepPolicy::FailFast,
            parallel: true,
        }
    }
}

/// Values given on the command line that replace configured ones.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub face_amount: Option<f64>,
    pub coupon_rate: Option<f64>,
    pub frequency: Option<Frequency>,
    pub convention: Option<String>,
}

impl AppConfig {
    /// Defaults, or the contents of `path` when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        debug!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Replace configured values with the ones given on the command line.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(face) = overrides.face_amount {
            self.bond.face_amount = face;
        }
        if let Some(coupon) = overrides.coupon_rate {
            self.bond.coupon_rate = coupon;
        }
        if let Some(frequency) = overrides.frequency {
            self.bond.periods_per_year = frequency.periods_per_year();
        }
        if let Some(convention) = overrides.convention {
            self.bond.convention = convention;
        }
    }

    /// The configured bond, without maturity.
    pub fn terms(&self) -> BondTerms {
        BondTerms::new(
            self.bond.face_amount,
            self.bond.coupon_rate,
            self.bond.periods_per_year,
        )
    }

    /// The configured discounting convention.
    pub fn convention(&self) -> Result<Convention> {
        Ok(self.bond.convention.parse()?)
    }

    /// The configured sweep settings.
    pub fn sweep_config(&self) -> SweepConfig {
        let config = SweepConfig::default().with_policy(self.sweep.policy);
        if self.sweep.parallel {
            config
        } else {
            config.sequential()
        }
    }
}
