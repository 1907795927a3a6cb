//! Result lines in the `{ document_id = <id>, relevance = <relevance> }` form.

use search_core::Document;
use std::io::{self, Write};

/// Significant digits used by the default floating-point stream format.
const PRECISION: i32 = 6;

pub fn write_text<W: Write>(out: &mut W, documents: &[Document]) -> io::Result<()> {
    for doc in documents {
        writeln!(out, "{{ document_id = {}, relevance = {} }}", doc.id, format_relevance(doc.relevance))?;
    }
    Ok(())
}

/// Format like `%g`: six significant digits, trailing zeros trimmed, and
/// scientific notation when the decimal exponent is below -4 or at least 6.
pub fn format_relevance(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return if value == 0.0 { "0".to_string() } else { value.to_string() };
    }

    // Rounds to the target precision first so the exponent reflects carries (9.999995 -> 1e1).
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
