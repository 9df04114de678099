// ## 📂 File: `core/src/result/render.rs`

//! Human-readable rendering of a `TestResult`.
//!
//! Line layout (each line ends with `\n`):
//! - nine `Value: <v>` lines, index 0 first
//! - `QC1 VAR: <qc1>`
//! - `QC2 VAR: <qc2>`
//!
//! All numbers use six decimal places, rounded half-up from the shortest
//! decimal form of the value; non-finite values read `NaN`, `Infinity` and
//! `-Infinity`. This is the text a JVM's `%f` produces for the same record.

use std::fmt;

use serde::Serialize;

use crate::constants::{labels, RENDER_PRECISION, VALUE_COUNT};
use crate::result::TestResult;

/// One labelled line of the rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderedLine {
    pub label: &'static str,
    pub value: f64,
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, format_fixed(self.value, RENDER_PRECISION))
    }
}

/// Fixed-point text of `value` with `precision` decimals.
pub fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `Display` for f64 is the shortest round-trip form and never uses an exponent.
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .map(|b| b - b'0')
        .collect();
    if frac_part.as_bytes().get(precision).is_some_and(|&d| d >= b'5') {
        round_half_up(&mut digits);
    }

    let int_len = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

fn round_half_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

impl TestResult {
    /// Structured form of the text rendering, same order and content.
    pub fn lines(&self) -> Vec<RenderedLine> {
        let mut lines = Vec::with_capacity(VALUE_COUNT + 2);
        lines.extend(self.values.iter().map(|&value| RenderedLine { label: labels::VALUE, value }));
        lines.push(RenderedLine { label: labels::QC1_VAR, value: self.qc1_variation });
        lines.push(RenderedLine { label: labels::QC2_VAR, value: self.qc2_variation });
        lines
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
