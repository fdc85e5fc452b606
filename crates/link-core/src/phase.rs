// ─────────────────────────────────────────────────────────────────────
// SCPN Optical Link — Phase to Power
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Launch power for a target cumulated SPM phase.
//!
//! Under the standard SPM approximation the nonlinear phase collected over
//! the link is linear in launch power:
//!
//! ```text
//! phi = P [W] * nspan * Σ_k Leff[k] * gamma[k] * G[k]
//! ```
//!
//! where `Leff[k]` is the effective length of fiber `k` and `G[k]` the linear
//! power gain from the transmitter to the input of fiber `k`. Inverting for
//! `P` needs no iteration.

use link_types::config::{LinkConfig, ReportSink, SpanParameters};
use link_types::constants::{DB_PER_KM_TO_PER_M, DB_TO_DECADE, M_TO_KM, W_TO_MW};
use link_types::error::LinkResult;
use ndarray::Array1;
use tracing::{debug, warn};

use crate::report;

/// Effective nonlinear length [m] of a fiber of `length` [m] with
/// attenuation `attenuation_db` [dB/km]. Lossless fibers return `length`.
pub fn effective_length(length: f64, attenuation_db: f64) -> f64 {
    let alpha = DB_PER_KM_TO_PER_M * attenuation_db;
    if alpha != 0.0 {
        (1.0 - (-alpha * length).exp()) / alpha
    } else {
        length
    }
}

/// Fiber loss [dB] (negative for a lossy fiber).
pub fn fiber_loss_db(length: f64, attenuation_db: f64) -> f64 {
    -attenuation_db * length * M_TO_KM
}

/// Per-segment intermediates of the phase–power relation for one pattern.
#[derive(Debug, Clone)]
pub struct LinkPhaseModel {
    /// Effective nonlinear length per segment [m].
    pub effective_length: Array1<f64>,
    /// Linear gain from launch to the input of each fiber segment.
    pub cumulative_gain: Array1<f64>,
    /// Σ Leff·γ·G over one pattern [rad/W].
    pub weighted_sum: f64,
}

impl LinkPhaseModel {
    pub fn new(spans: &SpanParameters) -> Self {
        let n = spans.len();
        let length = spans.length();
        let attenuation_db = spans.attenuation_db();
        let net_gain_db = spans.net_gain_db();

        let effective_length =
            Array1::from_shape_fn(n, |k| effective_length(length[k], attenuation_db[k]));

        // Stage k carries amplifier k plus the loss of fiber k-1: the
        // amplifier sits after the fiber it compensates.
        let mut cumulative_gain = Array1::<f64>::zeros(n);
        let mut cumulated_db = 0.0;
        for k in 0..n {
            let stage_db = if k == 0 {
                net_gain_db[0]
            } else {
                fiber_loss_db(length[k - 1], attenuation_db[k - 1]) + net_gain_db[k]
            };
            cumulated_db += stage_db;
            cumulative_gain[k] = 10f64.powf(DB_TO_DECADE * cumulated_db);
        }

        let gamma = Array1::from(spans.gamma().to_vec());
        let weighted_sum = (&effective_length * &gamma * &cumulative_gain).sum();

        LinkPhaseModel {
            effective_length,
            cumulative_gain,
            weighted_sum,
        }
    }

    /// Phase per launched watt over `nspan` repetitions [rad/W].
    pub fn phase_per_watt(&self, nspan: f64) -> f64 {
        self.weighted_sum * nspan
    }

    /// Launch power [mW] giving `phi` [rad] over `nspan` repetitions.
    /// A zero denominator yields ±inf or NaN unchanged.
    pub fn power_mw(&self, phi: f64, nspan: f64) -> f64 {
        phi / self.phase_per_watt(nspan) * W_TO_MW
    }
}

/// Launch power [mW] that accumulates `phi` [rad] of SPM phase over `nspan`
/// repetitions of the `spans` pattern.
///
/// When `sink.enabled`, a report block is appended to its destination and
/// I/O errors are returned. A disabled sink is never touched.
pub fn phi_to_power(
    phi: f64,
    spans: &SpanParameters,
    nspan: f64,
    sink: &ReportSink,
) -> LinkResult<f64> {
    let model = LinkPhaseModel::new(spans);
    let denominator = model.phase_per_watt(nspan);
    if denominator == 0.0 || !denominator.is_finite() {
        warn!(
            segments = spans.len(),
            nspan,
            denominator,
            "degenerate link: phase per watt is not a finite nonzero value"
        );
    }
    let power_mw = model.power_mw(phi, nspan);
    debug!(
        segments = spans.len(),
        nspan,
        weighted_sum = model.weighted_sum,
        phi,
        power_mw,
        "nonlinear phase converted to launch power"
    );

    if sink.enabled {
        let text = report::format_report(spans, nspan, phi, power_mw);
        report::append_report(sink, &text)?;
    }
    Ok(power_mw)
}

/// Slice form of [`phi_to_power`]. The four sequences must have equal,
/// nonzero length; this is checked before anything else happens.
pub fn compute_power(
    phi: f64,
    length: &[f64],
    attenuation_db: &[f64],
    gamma: &[f64],
    net_gain_db: &[f64],
    nspan: f64,
    sink: &ReportSink,
) -> LinkResult<f64> {
    let spans = SpanParameters::new(
        length.to_vec(),
        attenuation_db.to_vec(),
        gamma.to_vec(),
        net_gain_db.to_vec(),
    )?;
    phi_to_power(phi, &spans, nspan, sink)
}

/// [`phi_to_power`] driven by a loaded [`LinkConfig`].
pub fn phi_to_power_configured(phi: f64, config: &LinkConfig) -> LinkResult<f64> {
    let spans = config.spans()?;
    phi_to_power(phi, &spans, config.nspan, &config.report)
}
