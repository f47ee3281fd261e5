use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Empty theoretical spectrum")]
    EmptyTheoreticalSpectrum,
    #[error("Empty experimental spectrum")]
    EmptyExperimentalSpectrum,
    #[error("Theoretical spectrum without ion name annotation")]
    MissingIonAnnotation,
    #[error("Ion annotation ({0}) and peaks ({1}) must have the same length")]
    AnnotationShape(usize, usize),
    #[error("m/z ({0}) and intensities ({1}) arrays must have the same length")]
    SpectrumShape(usize, usize),
    #[error("m/z value at index {0} is not finite")]
    NonFiniteMz(usize),
    #[error("m/z values must be sorted ascending, violated at index {0}")]
    UnsortedSpectrum(usize),
    #[error("Invalid fragment mass tolerance: {0}")]
    InvalidTolerance(f64),
}
