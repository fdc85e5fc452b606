// ─────────────────────────────────────────────────────────────────────
// SCPN Optical Link — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// dB/km → 1/m (natural-log power attenuation): ln(10)/10 per dB, /1000 per km.
pub const DB_PER_KM_TO_PER_M: f64 = std::f64::consts::LN_10 * 1e-4;

/// Meters → kilometers.
pub const M_TO_KM: f64 = 1e-3;

/// dB → exponent of ten.
pub const DB_TO_DECADE: f64 = 0.1;

/// Watts → milliwatts.
pub const W_TO_MW: f64 = 1e3;
