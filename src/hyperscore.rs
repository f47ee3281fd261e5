use rayon::prelude::*;
use tracing::{error, trace, warn};

use crate::{
    configuration::{Configuration, LogFactorialMode},
    error::Error,
    ion::IonSeries,
    scoring_result::{ScoringResult, SIGNIFICANCE_THRESHOLD},
    spectrum::PeakSpectrum,
    tolerance::Tolerance,
    utils::log_factorial,
};

/// Calculates the HyperScore between an experimental and an annotated theoretical spectrum.
///
/// Each theoretical peak is matched against its nearest experimental peak only. Matches add
/// `experimental intensity * theoretical intensity` to the dot product and count towards
/// the y- or b-ion series depending on the first character of the ion name.
///
/// # Arguments
/// * `config` - Tolerance and log factorial mode.
/// * `experimental_spectrum` - Observed peaks, sorted by m/z.
/// * `theoretical_spectrum` - Predicted peaks, sorted by m/z, with ion names as first annotation array.
///
pub fn hyperscore<E, T>(
    config: &Configuration,
    experimental_spectrum: &E,
    theoretical_spectrum: &T,
) -> Result<ScoringResult, Error>
where
    E: PeakSpectrum + ?Sized,
    T: PeakSpectrum + ?Sized,
{
    if experimental_spectrum.is_empty() {
        return Err(Error::EmptyExperimentalSpectrum);
    }
    if theoretical_spectrum.is_empty() {
        return Err(Error::EmptyTheoreticalSpectrum);
    }

    // Only the first annotation array is considered to hold the ion names
    let ion_names = match theoretical_spectrum.annotations().first() {
        Some(ion_names) => ion_names,
        None => return Err(Error::MissingIonAnnotation),
    };
    if ion_names.len() != theoretical_spectrum.len() {
        return Err(Error::AnnotationShape(
            ion_names.len(),
            theoretical_spectrum.len(),
        ));
    }

    let tolerance = config.fragment_mass_tolerance;
    let mut dot_product = 0.0;
    let mut ions_matched = 0;
    let mut y_ions_matched = 0;
    let mut b_ions_matched = 0;

    for (index, ion_name) in ion_names.iter().enumerate() {
        let theoretical_mz = theoretical_spectrum.mz(index);
        // non-empty, checked above
        let nearest = experimental_spectrum
            .find_nearest(theoretical_mz)
            .ok_or(Error::EmptyExperimentalSpectrum)?;

        if !tolerance.matches(theoretical_mz, experimental_spectrum.mz(nearest)) {
            continue;
        }

        let experimental_intensity = experimental_spectrum.intensity(nearest);
        dot_product += experimental_intensity * theoretical_spectrum.intensity(index);
        ions_matched += 1;

        match IonSeries::from_label(ion_name) {
            IonSeries::Y => y_ions_matched += 1,
            IonSeries::B => b_ions_matched += 1,
            IonSeries::Other => continue,
        }
        trace!(
            ion = %ion_name,
            intensity = experimental_intensity,
            "HyperScore: matched ion"
        );
    }

    // Discard hits without any noteworthy matching peaks
    let score = if dot_product > SIGNIFICANCE_THRESHOLD {
        dot_product.ln()
            + log_factorial(y_ions_matched, config.log_factorial_mode)
            + log_factorial(b_ions_matched, config.log_factorial_mode)
    } else {
        0.0
    };

    Ok(ScoringResult {
        score,
        dot_product,
        ions_total: theoretical_spectrum.len(),
        ions_matched,
        y_ions_matched,
        b_ions_matched,
    })
}

/// Calculates the HyperScore, returning 0.0 for invalid input as well as for insignificant matches.
/// Invalid input is reported via `tracing`.
///
/// # Arguments
/// * `fragment_mass_tolerance` - Tolerance magnitude.
/// * `fragment_mass_tolerance_unit_ppm` - If true the tolerance is in ppm, otherwise in Da.
/// * `experimental_spectrum` - Observed peaks, sorted by m/z.
/// * `theoretical_spectrum` - Predicted peaks, sorted by m/z, with ion names as first annotation array.
///
pub fn compute<E, T>(
    fragment_mass_tolerance: f64,
    fragment_mass_tolerance_unit_ppm: bool,
    experimental_spectrum: &E,
    theoretical_spectrum: &T,
) -> f64
where
    E: PeakSpectrum + ?Sized,
    T: PeakSpectrum + ?Sized,
{
    let config = Configuration::new(
        Tolerance::from_parts(fragment_mass_tolerance, fragment_mass_tolerance_unit_ppm),
        LogFactorialMode::Legacy,
    );
    score_or_zero(&config, experimental_spectrum, theoretical_spectrum)
}

fn score_or_zero<E, T>(
    config: &Configuration,
    experimental_spectrum: &E,
    theoretical_spectrum: &T,
) -> f64
where
    E: PeakSpectrum + ?Sized,
    T: PeakSpectrum + ?Sized,
{
    match hyperscore(config, experimental_spectrum, theoretical_spectrum) {
        Ok(result) => result.score,
        Err(err @ (Error::EmptyExperimentalSpectrum | Error::EmptyTheoreticalSpectrum)) => {
            warn!("HyperScore: {}", err);
            0.0
        }
        Err(err) => {
            error!("HyperScore: {}", err);
            0.0
        }
    }
}

/// Scores theoretical spectra against experimental ones with a fixed configuration.
pub struct HyperScore<'a> {
    config: &'a Configuration,
}

impl HyperScore<'_> {
    /// Creates a new HyperScore instance.
    ///
    /// Arguments:
    /// * `config` - The configuration to use for scoring.
    ///
    pub fn new(config: &Configuration) -> HyperScore<'_> {
        HyperScore { config }
    }

    pub fn score<E, T>(
        &self,
        experimental_spectrum: &E,
        theoretical_spectrum: &T,
    ) -> Result<ScoringResult, Error>
    where
        E: PeakSpectrum + ?Sized,
        T: PeakSpectrum + ?Sized,
    {
        hyperscore(self.config, experimental_spectrum, theoretical_spectrum)
    }

    /// Scores all candidates against one experimental spectrum in parallel.
    /// The scores keep the order of the candidates, invalid candidates score 0.0.
    ///
    /// # Arguments
    /// * `experimental_spectrum` - Observed peaks, sorted by m/z.
    /// * `theoretical_spectra` - Candidate spectra with ion names.
    ///
    pub fn score_candidates<E, T>(
        &self,
        experimental_spectrum: &E,
        theoretical_spectra: &[T],
    ) -> Vec<f64>
    where
        E: PeakSpectrum + Sync + ?Sized,
        T: PeakSpectrum + Sync,
    {
        theoretical_spectra
            .par_iter()
            .map(|theoretical_spectrum| {
                score_or_zero(self.config, experimental_spectrum, theoretical_spectrum)
            })
            .collect()
    }
}
