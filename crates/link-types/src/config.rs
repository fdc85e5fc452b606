// ─────────────────────────────────────────────────────────────────────
// SCPN Optical Link — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LinkError, LinkResult};

/// Per-segment fiber and amplifier parameters of one repeating link pattern.
///
/// The four sequences always share one length. No physical range checks are
/// made: zero or negative lengths and negative attenuation or gamma are passed
/// straight to the formula.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanParameters {
    length: Vec<f64>,
    attenuation_db: Vec<f64>,
    gamma: Vec<f64>,
    net_gain_db: Vec<f64>,
}

impl SpanParameters {
    /// Build from the four per-segment sequences.
    ///
    /// * `length` — fiber length [m]
    /// * `attenuation_db` — fiber attenuation [dB/km]
    /// * `gamma` — nonlinear coefficient [1/W/m]
    /// * `net_gain_db` — amplifier net gain [dB], may be negative
    pub fn new(
        length: Vec<f64>,
        attenuation_db: Vec<f64>,
        gamma: Vec<f64>,
        net_gain_db: Vec<f64>,
    ) -> LinkResult<Self> {
        check_same_length(&length, &attenuation_db, &gamma, &net_gain_db)?;
        Ok(SpanParameters {
            length,
            attenuation_db,
            gamma,
            net_gain_db,
        })
    }

    /// Single-segment pattern, i.e. a chain of identical spans.
    pub fn uniform(length: f64, attenuation_db: f64, gamma: f64, net_gain_db: f64) -> Self {
        SpanParameters {
            length: vec![length],
            attenuation_db: vec![attenuation_db],
            gamma: vec![gamma],
            net_gain_db: vec![net_gain_db],
        }
    }

    pub fn len(&self) -> usize {
        self.length.len()
    }

    pub fn is_empty(&self) -> bool {
        self.length.is_empty()
    }

    pub fn length(&self) -> &[f64] {
        &self.length
    }

    pub fn attenuation_db(&self) -> &[f64] {
        &self.attenuation_db
    }

    pub fn gamma(&self) -> &[f64] {
        &self.gamma
    }

    pub fn net_gain_db(&self) -> &[f64] {
        &self.net_gain_db
    }
}

/// Fails with [`LinkError::ParameterLengthMismatch`] unless all four
/// sequences have the same number of entries, and with
/// [`LinkError::EmptyPattern`] when that number is zero.
pub fn check_same_length(
    length: &[f64],
    attenuation_db: &[f64],
    gamma: &[f64],
    net_gain_db: &[f64],
) -> LinkResult<()> {
    let n = length.len();
    if attenuation_db.len() != n || gamma.len() != n || net_gain_db.len() != n {
        return Err(LinkError::ParameterLengthMismatch {
            length: n,
            attenuation: attenuation_db.len(),
            gamma: gamma.len(),
            gain: net_gain_db.len(),
        });
    }
    if n == 0 {
        return Err(LinkError::EmptyPattern);
    }
    Ok(())
}

/// Destination for the optional plain-text diagnostic report.
/// The destination is never touched while `enabled` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSink {
    pub enabled: bool,
    pub destination: PathBuf,
}

impl ReportSink {
    pub fn disabled() -> Self {
        ReportSink {
            enabled: false,
            destination: PathBuf::new(),
        }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        ReportSink {
            enabled: true,
            destination: path.into(),
        }
    }
}

impl Default for ReportSink {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Link description as stored on disk (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    pub length: Vec<f64>,
    pub attenuation_db: Vec<f64>,
    pub gamma: Vec<f64>,
    pub net_gain_db: Vec<f64>,
    /// Number of repetitions of the segment pattern.
    #[serde(default = "default_nspan")]
    pub nspan: f64,
    /// Reporting is off when the key is absent.
    #[serde(default)]
    pub report: ReportSink,
}

fn default_nspan() -> f64 {
    1.0
}

impl LinkConfig {
    /// Load from JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> LinkResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(text: &str) -> LinkResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        if config.nspan <= 0.0 {
            return Err(LinkError::ConfigError(format!(
                "nspan must be positive, got {}",
                config.nspan
            )));
        }
        Ok(config)
    }

    /// Validated span parameters.
    pub fn spans(&self) -> LinkResult<SpanParameters> {
        SpanParameters::new(
            self.length.clone(),
            self.attenuation_db.clone(),
            self.gamma.clone(),
            self.net_gain_db.clone(),
        )
    }
}
