use crate::error::{Error, Result};

/// Percentage of mismatched positions between an original bit-string and
/// its reconstruction.
///
/// Positions beyond the shorter of the two are not compared; the denominator
/// is always the original length, so a truncated reconstruction is only
/// penalized through the positions it does cover. An empty original would
/// divide by zero and is rejected.
pub fn loss(original: &str, reconstructed: &str) -> Result<f64> {
    if original.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mismatches = original
        .bytes()
        .zip(reconstructed.bytes())
        .filter(|(o, r)| o != r)
        .count();
    Ok(mismatches as f64 / original.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_zero() {
        assert_eq!(loss("010101", "010101").unwrap(), 0.0);
    }

    #[test]
    fn test_denominator_is_original_length() {
        // Only the first four positions are compared, but the denominator
        // stays at six.
        assert_eq!(loss("000000", "0000").unwrap(), 0.0);
        let pct = loss("000000", "0100").unwrap();
        assert!((pct - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_longer_reconstruction_ignored_past_original() {
        assert_eq!(loss("0000", "000011").unwrap(), 0.0);
    }

    #[test]
    fn test_all_mismatched() {
        assert_eq!(loss("0000", "1111").unwrap(), 100.0);
    }

    #[test]
    fn test_empty_original_rejected() {
        assert!(matches!(loss("", "01"), Err(Error::EmptyInput)));
    }
}
