//! Monetary helpers for currency figures.

/// Currency amount per head, unrounded.
pub type Amount = f64;

/// Round a currency amount to whole units, ties to even.
///
/// Non-finite amounts saturate (`NaN` becomes 0).
#[must_use]
pub fn round_currency(amount: Amount) -> i64 {
    amount.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_unit() {
        assert_eq!(round_currency(30.7656), 31);
        assert_eq!(round_currency(-15.8104), -16);
        assert_eq!(round_currency(18.4), 18);
    }

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round_currency(0.5), 0);
        assert_eq!(round_currency(1.5), 2);
        assert_eq!(round_currency(2.5), 2);
        assert_eq!(round_currency(-0.5), 0);
    }
}
