use crate::error::Error;

/// Fragment mass tolerance, either absolute (Dalton / Thomson) or relative (ppm).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    Da(f64),
    Ppm(f64),
}

impl Tolerance {
    /// Creates a validated tolerance.
    ///
    /// # Arguments
    /// * `magnitude` - Tolerance value, must be finite and positive.
    /// * `is_ppm` - If true the magnitude is parts-per-million, otherwise absolute.
    ///
    pub fn new(magnitude: f64, is_ppm: bool) -> Result<Self, Error> {
        if !magnitude.is_finite() || magnitude <= 0.0 {
            return Err(Error::InvalidTolerance(magnitude));
        }
        Ok(Self::from_parts(magnitude, is_ppm))
    }

    /// Same as `new` without validation. A non-positive window never matches.
    pub(crate) fn from_parts(magnitude: f64, is_ppm: bool) -> Self {
        if is_ppm {
            Self::Ppm(magnitude)
        } else {
            Self::Da(magnitude)
        }
    }

    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Da(magnitude) | Self::Ppm(magnitude) => *magnitude,
        }
    }

    pub fn is_ppm(&self) -> bool {
        matches!(self, Self::Ppm(_))
    }

    /// Absolute match window around the given m/z.
    pub fn window(&self, mz: f64) -> f64 {
        match self {
            Self::Da(da) => *da,
            Self::Ppm(ppm) => mz * ppm * 1e-6,
        }
    }

    /// True if `observed` lies strictly inside the window around `expected`.
    pub fn matches(&self, expected: f64, observed: f64) -> bool {
        (expected - observed).abs() < self.window(expected)
    }
}
