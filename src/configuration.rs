use crate::tolerance::Tolerance;

/// Base case of the log factorial for n < 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFactorialMode {
    /// Returns 1.0 for n < 2, reproducing established HyperScore distributions.
    #[default]
    Legacy,
    /// Returns ln(n!) exactly, i.e. 0.0 for n < 2.
    Exact,
}

impl LogFactorialMode {
    pub fn base_value(&self) -> f64 {
        match self {
            Self::Legacy => 1.0,
            Self::Exact => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    pub fragment_mass_tolerance: Tolerance,
    pub log_factorial_mode: LogFactorialMode,
}

impl Configuration {
    pub fn new(fragment_mass_tolerance: Tolerance, log_factorial_mode: LogFactorialMode) -> Self {
        Self {
            fragment_mass_tolerance,
            log_factorial_mode,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(Tolerance::Ppm(10.0), LogFactorialMode::Legacy)
    }
}
