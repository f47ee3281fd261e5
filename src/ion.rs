/// Fragment ion series relevant for the HyperScore.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IonSeries {
    /// N-terminal fragment
    B,
    /// C-terminal fragment
    Y,
    /// Any other ion type (a, c, x, z, precursor, immonium, ...)
    Other,
}

impl IonSeries {
    /// Classifies an ion label by its first character, e.g. `y12` or `b2++`.
    pub fn from_label(label: &str) -> Self {
        match label.as_bytes().first() {
            Some(b'y') => Self::Y,
            Some(b'b') => Self::B,
            _ => Self::Other,
        }
    }
}
