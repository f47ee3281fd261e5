use crate::configuration::LogFactorialMode;

/// Natural logarithm of `n!`, summed from 2 to n.
///
/// # Arguments
/// * `n` - Number of matched ions
/// * `mode` - Decides the value returned for n < 2
///
pub fn log_factorial(n: usize, mode: LogFactorialMode) -> f64 {
    if n < 2 {
        return mode.base_value();
    }
    (2..=n).fold(0.0, |acc, k| (k as f64).ln() + acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_factorial_legacy_base() {
        assert_eq!(log_factorial(0, LogFactorialMode::Legacy), 1.0);
        assert_eq!(log_factorial(1, LogFactorialMode::Legacy), 1.0);
    }

    #[test]
    fn test_log_factorial_exact_base() {
        assert_eq!(log_factorial(0, LogFactorialMode::Exact), 0.0);
        assert_eq!(log_factorial(1, LogFactorialMode::Exact), 0.0);
    }

    #[test]
    fn test_log_factorial() {
        assert_eq!(log_factorial(2, LogFactorialMode::Legacy), 2.0_f64.ln());
        // 5! = 120
        assert!((log_factorial(5, LogFactorialMode::Legacy) - 120.0_f64.ln()).abs() < 1e-12);
        // n >= 2 does not depend on the mode
        assert_eq!(
            log_factorial(7, LogFactorialMode::Legacy),
            log_factorial(7, LogFactorialMode::Exact)
        );
    }
}
