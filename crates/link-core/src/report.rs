// ─────────────────────────────────────────────────────────────────────
// SCPN Optical Link — Diagnostic Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plain-text report block appended after a phase → power conversion.

use std::f64::consts::PI;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;

use link_types::config::{ReportSink, SpanParameters};
use link_types::error::LinkResult;
use tracing::debug;

/// Significant digits of the fiber length column.
const LENGTH_DIGITS: usize = 6;

/// Significant digits of the reported power.
const POWER_DIGITS: usize = 4;

/// Render the report block for one conversion.
pub fn format_report(spans: &SpanParameters, nspan: f64, phi: f64, power_mw: f64) -> String {
    let mut out = String::new();
    out.push_str("\n=================== phi2pow ===================\n");
    out.push_str("      L [m]  alpha [dB/km]  gamma [1/W/m]    G [dB]\n");

    let rows = spans
        .length()
        .iter()
        .zip(spans.attenuation_db())
        .zip(spans.gamma())
        .zip(spans.net_gain_db());
    for (((&length, &attenuation_db), &gamma), &net_gain_db) in rows {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:>11}  {:>13.2}  {:>13}  {:>8.2}",
            format_general(length, LENGTH_DIGITS),
            attenuation_db,
            format_scientific(gamma, 2),
            net_gain_db
        );
    }

    if spans.len() == 1 {
        let _ = writeln!(out, "\nNL Phase cumulated into {nspan} equal spans.");
    }
    let _ = writeln!(
        out,
        "\nPhi = {:.3}*pi  ->  Power = {} [mW]",
        phi / PI,
        format_general(power_mw, POWER_DIGITS)
    );
    out
}

/// Append `text` to the sink destination, creating the file if needed.
/// Does nothing, and opens nothing, when the sink is disabled.
pub fn append_report(sink: &ReportSink, text: &str) -> LinkResult<()> {
    if !sink.enabled {
        return Ok(());
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&sink.destination)?;
    file.write_all(text.as_bytes())?;
    debug!(
        destination = %sink.destination.display(),
        bytes = text.len(),
        "report appended"
    );
    Ok(())
}

/// C `%.{significant}g` formatting.
pub fn format_general(x: f64, significant: usize) -> String {
    if !x.is_finite() {
        return format!("{x}");
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let precision = significant.max(1);
    let sci = format!("{:.*e}", precision - 1, x);
    let Some((mantissa, exponent)) = split_exponent(&sci) else {
        return sci;
    };
    if exponent < -4 || exponent >= precision as i32 {
        format!("{}{}", trim_fraction(mantissa), c_exponent(exponent))
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

/// C `%.{decimals}e` formatting (signed, at least two exponent digits).
pub fn format_scientific(x: f64, decimals: usize) -> String {
    if !x.is_finite() {
        return format!("{x}");
    }
    let sci = format!("{:.*e}", decimals, x);
    match split_exponent(&sci) {
        Some((mantissa, exponent)) => format!("{}{}", mantissa, c_exponent(exponent)),
        None => sci,
    }
}

fn split_exponent(sci: &str) -> Option<(&str, i32)> {
    let (mantissa, exponent) = sci.split_once('e')?;
    exponent.parse().ok().map(|e| (mantissa, e))
}

fn c_exponent(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("e{}{:02}", sign, exponent.abs())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(1000.0, 6), "1000");
        assert_eq!(format_general(80000.0, 6), "80000");
        assert_eq!(format_general(123456.7, 6), "123457");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(0.5, 6), "0.5");
        assert_eq!(format_general(0.00001234, 6), "1.234e-05");
        assert_eq!(format_general(225.2729973290966, 4), "225.3");
        assert_eq!(format_general(-3.14159, 4), "-3.142");
        assert_eq!(format_general(0.0, 4), "0");
        assert_eq!(format_general(-0.0, 4), "-0");
        assert_eq!(format_general(f64::INFINITY, 4), "inf");
    }

    #[test]
    fn test_format_general_rounding_carries_exponent() {
        // 9999.96 rounds to 1.000e4 with 4 digits → exponent form.
        assert_eq!(format_general(9999.96, 4), "1e+04");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1.3e-3, 2), "1.30e-03");
        assert_eq!(format_scientific(1.1e-3, 2), "1.10e-03");
        assert_eq!(format_scientific(2.5e12, 2), "2.50e+12");
        assert_eq!(format_scientific(0.0, 2), "0.00e+00");
        assert_eq!(format_scientific(-4.0, 2), "-4.00e+00");
    }

    #[test]
    fn test_report_rows_and_footer() {
        let spans = SpanParameters::new(
            vec![1000.0, 800.0],
            vec![0.2, 0.25],
            vec![1.3e-3, 1.1e-3],
            vec![0.0, -1.5],
        )
        .unwrap();
        let text = format_report(&spans, 10.0, 1.5 * PI, 225.2729973290966);
        assert!(text.contains("phi2pow"));
        assert!(text.contains("1000           0.20       1.30e-03      0.00"));
        assert!(text.contains("800           0.25       1.10e-03     -1.50"));
        assert!(text.contains("Phi = 1.500*pi  ->  Power = 225.3 [mW]"));
        assert!(!text.contains("NL Phase cumulated into"));
    }

    #[test]
    fn test_report_single_segment_note() {
        let spans = SpanParameters::uniform(80e3, 0.2, 1.3e-3, 16.0);
        let text = format_report(&spans, 12.0, 0.5 * PI, 10.0);
        assert!(text.contains("NL Phase cumulated into 12 equal spans."));
    }

    #[test]
    fn test_append_disabled_is_noop() {
        let sink = ReportSink {
            enabled: false,
            destination: PathBuf::from("/nonexistent/dir/report.txt"),
        };
        assert!(append_report(&sink, "ignored").is_ok());
    }

    #[test]
    fn test_append_creates_and_appends() {
        let path = std::env::temp_dir().join(format!(
            "scpn_link_report_append_{}.txt",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();
        let sink = ReportSink::to_file(&path);
        append_report(&sink, "first\n").unwrap();
        append_report(&sink, "second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_append_to_missing_dir_fails() {
        let sink = ReportSink::to_file("/nonexistent/dir/report.txt");
        assert!(append_report(&sink, "x").is_err());
    }
}
