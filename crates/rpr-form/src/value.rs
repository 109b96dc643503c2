/// Parse one raw decision cell into a validated count.
///
/// The cell is trimmed and its leading digits read as a non-negative
/// integer, so `"33.9"` parses to 33 (truncated, not rounded). Empty,
/// non-numeric and negative input is "invalid": `None` normally, `Some(0)`
/// when `zero_invalid_values` is set. The mode flag implements the
/// blank-row rule — a row with at least one recorded cell reads its blank
/// cells as zero rather than "not recorded".
///
/// This function never fails on malformed input; rejecting bad submissions
/// is the validator's job, not the parser's.
pub fn parse_decision_value(raw: &str, zero_invalid_values: bool) -> Option<u32> {
    let invalid = if zero_invalid_values { Some(0) } else { None };

    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return invalid;
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return invalid;
    }

    digits.parse::<u32>().ok().or(invalid)
}
