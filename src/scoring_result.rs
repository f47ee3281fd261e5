/// Dot products at or below this value are treated as noise and score 0.0.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct ScoringResult {
    pub score: f64,
    pub dot_product: f64,
    pub ions_total: usize,
    pub ions_matched: usize,
    pub y_ions_matched: usize,
    pub b_ions_matched: usize,
}

impl ScoringResult {
    /// False if the dot product did not exceed the significance threshold, i.e. the score is 0.0
    /// because of a missing match rather than invalid input.
    pub fn is_significant(&self) -> bool {
        self.dot_product > SIGNIFICANCE_THRESHOLD
    }
}
