use itertools::Itertools;

/// Collapses runs of identical characters into `<decimal count><char>`.
///
/// Runs of length 1 pass through without a count prefix. Scanning is
/// character-wise: a multi-character grammar symbol is not an atomic token
/// here, so a doubled-letter symbol is itself subject to run compression.
///
/// Counts share the alphabet with decimal digits, so a digit in the payload
/// is indistinguishable from a count prefix on decode. A payload that
/// already contains digits is logged, not rejected or escaped.
pub fn rle_encode(symbols: &str) -> String {
    if symbols.chars().any(|c| c.is_ascii_digit()) {
        log::warn!("run-length payload contains digit characters; decoding will misread them as counts");
    }

    let mut out = String::with_capacity(symbols.len());
    for (count, ch) in symbols.chars().dedup_with_count() {
        if count > 1 {
            out.push_str(&count.to_string());
        }
        out.push(ch);
    }
    out
}

/// Inverse of [`rle_encode`] for digit-free payloads.
///
/// A maximal run of leading digits is the repeat count for the character
/// that follows, defaulting to 1 when absent. A trailing count with nothing
/// after it is dropped.
pub fn rle_decode(data: &str) -> String {
    let mut out = String::with_capacity(data.len());
    let mut chars = data.chars().peekable();
    loop {
        let mut count: Option<usize> = None;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            count = Some(
                count
                    .unwrap_or(0)
                    .saturating_mul(10)
                    .saturating_add(digit as usize),
            );
            chars.next();
        }
        let Some(ch) = chars.next() else { break };
        for _ in 0..count.unwrap_or(1) {
            out.push(ch);
        }
    }
    out
}
