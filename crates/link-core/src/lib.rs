// ─────────────────────────────────────────────────────────────────────
// SCPN Optical Link — Link Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form nonlinear phase model of amplified fiber links.
//!
//! `phase`: cumulated SPM phase → launch power
//! `report`: optional plain-text diagnostic block

pub mod phase;
pub mod report;
