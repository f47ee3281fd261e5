use ndarray::Array1;

use crate::error::Error;

/// Read access to a mass sorted peak list, as needed for scoring.
///
/// Implement this for your own spectrum container to score it without copying.
/// Peaks must be sorted ascending by m/z, otherwise `find_nearest` is meaningless.
///
pub trait PeakSpectrum {
    /// Number of peaks
    fn len(&self) -> usize;

    /// m/z of the peak at `index`
    fn mz(&self, index: usize) -> f64;

    /// Intensity of the peak at `index`
    fn intensity(&self, index: usize) -> f64;

    /// Parallel string annotations, e.g. ion names. Each array has one entry per peak.
    fn annotations(&self) -> &[Vec<String>];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the peak closest to `mz`. If the query lies exactly between two peaks,
    /// the peak below it wins. Returns `None` for an empty spectrum.
    ///
    /// # Arguments
    /// * `mz` - The m/z to look up.
    ///
    fn find_nearest(&self, mz: f64) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }

        // first index with m/z >= query
        let mut low = 0;
        let mut high = len;
        while low < high {
            let middle = low + (high - low) / 2;
            if self.mz(middle) < mz {
                low = middle + 1;
            } else {
                high = middle;
            }
        }

        if low == 0 {
            return Some(0);
        }
        if low == len {
            return Some(len - 1);
        }

        let distance_below = mz - self.mz(low - 1);
        let distance_above = self.mz(low) - mz;
        if distance_above < distance_below {
            Some(low)
        } else {
            Some(low - 1)
        }
    }
}

/// Peak list backed by two arrays (m/z, intensity), sorted by m/z,
/// with zero or more ion annotation arrays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    mz: Array1<f64>,
    intensities: Array1<f64>,
    annotations: Vec<Vec<String>>,
}

impl Spectrum {
    /// Creates a spectrum from already sorted arrays.
    ///
    /// Arguments:
    /// * `mz` - The m/z values, ascending.
    /// * `intensities` - The intensity values.
    ///
    pub fn new(mz: Array1<f64>, intensities: Array1<f64>) -> Result<Self, Error> {
        if mz.len() != intensities.len() {
            return Err(Error::SpectrumShape(mz.len(), intensities.len()));
        }

        if let Some(index) = mz.iter().position(|value| !value.is_finite()) {
            return Err(Error::NonFiniteMz(index));
        }

        if let Some(index) = mz
            .windows(2)
            .into_iter()
            .position(|window| window[1] < window[0])
        {
            return Err(Error::UnsortedSpectrum(index + 1));
        }

        Ok(Self {
            mz,
            intensities,
            annotations: Vec::new(),
        })
    }

    /// Creates a spectrum from (m/z, intensity) pairs in any order.
    pub fn from_peaks(peaks: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut peaks: Vec<(f64, f64)> = peaks.into_iter().collect();
        peaks.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (mz, intensities): (Vec<f64>, Vec<f64>) = peaks.into_iter().unzip();
        Self {
            mz: Array1::from(mz),
            intensities: Array1::from(intensities),
            annotations: Vec::new(),
        }
    }

    /// Creates a theoretical spectrum from (m/z, intensity, ion name) triples in any order.
    /// The ion names become the first annotation array and stay aligned with their peaks.
    pub fn from_annotated_peaks(peaks: impl IntoIterator<Item = (f64, f64, String)>) -> Self {
        let mut peaks: Vec<(f64, f64, String)> = peaks.into_iter().collect();
        peaks.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut mz = Vec::with_capacity(peaks.len());
        let mut intensities = Vec::with_capacity(peaks.len());
        let mut ion_names = Vec::with_capacity(peaks.len());
        for (peak_mz, intensity, ion_name) in peaks {
            mz.push(peak_mz);
            intensities.push(intensity);
            ion_names.push(ion_name);
        }

        Self {
            mz: Array1::from(mz),
            intensities: Array1::from(intensities),
            annotations: vec![ion_names],
        }
    }

    /// Attaches another annotation array, which must have one entry per peak.
    pub fn with_annotation(mut self, annotation: Vec<String>) -> Result<Self, Error> {
        if annotation.len() != self.mz.len() {
            return Err(Error::AnnotationShape(annotation.len(), self.mz.len()));
        }
        self.annotations.push(annotation);
        Ok(self)
    }

    pub fn mz_array(&self) -> &Array1<f64> {
        &self.mz
    }

    pub fn intensity_array(&self) -> &Array1<f64> {
        &self.intensities
    }
}

impl PeakSpectrum for Spectrum {
    fn len(&self) -> usize {
        self.mz.len()
    }

    fn mz(&self, index: usize) -> f64 {
        self.mz[index]
    }

    fn intensity(&self, index: usize) -> f64 {
        self.intensities[index]
    }

    fn annotations(&self) -> &[Vec<String>] {
        &self.annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum(mz: Vec<f64>) -> Spectrum {
        let intensities = Array1::from_elem(mz.len(), 1.0);
        Spectrum::new(Array1::from(mz), intensities).unwrap()
    }

    #[test]
    fn test_new_validates_shape() {
        let result = Spectrum::new(Array1::from(vec![1.0, 2.0]), Array1::from(vec![1.0]));
        assert_eq!(result, Err(Error::SpectrumShape(2, 1)));
    }

    #[test]
    fn test_new_validates_order() {
        let result = Spectrum::new(
            Array1::from(vec![1.0, 3.0, 2.0]),
            Array1::from(vec![1.0, 1.0, 1.0]),
        );
        assert_eq!(result, Err(Error::UnsortedSpectrum(2)));
    }

    #[test]
    fn test_new_rejects_non_finite_mz() {
        let result = Spectrum::new(
            Array1::from(vec![1.0, f64::NAN, 0.5]),
            Array1::from(vec![1.0, 1.0, 1.0]),
        );
        assert_eq!(result, Err(Error::NonFiniteMz(1)));

        let result = Spectrum::new(
            Array1::from(vec![1.0, 2.0, f64::INFINITY]),
            Array1::from(vec![1.0, 1.0, 1.0]),
        );
        assert_eq!(result, Err(Error::NonFiniteMz(2)));

        let result = Spectrum::new(Array1::from(vec![f64::NAN]), Array1::from(vec![1.0]));
        assert_eq!(result, Err(Error::NonFiniteMz(0)));
    }

    #[test]
    fn test_from_peaks_sorts() {
        let spec = Spectrum::from_peaks(vec![(300.0, 3.0), (100.0, 1.0), (200.0, 2.0)]);
        assert_eq!(spec.mz_array(), &Array1::from(vec![100.0, 200.0, 300.0]));
        assert_eq!(spec.intensity_array(), &Array1::from(vec![1.0, 2.0, 3.0]));
        assert!(spec.annotations().is_empty());
    }

    #[test]
    fn test_from_annotated_peaks_keeps_labels_aligned() {
        let spec = Spectrum::from_annotated_peaks(vec![
            (400.0, 1.0, "y3".to_string()),
            (150.0, 1.0, "b1".to_string()),
            (250.0, 1.0, "y2".to_string()),
        ]);
        assert_eq!(spec.mz_array(), &Array1::from(vec![150.0, 250.0, 400.0]));
        assert_eq!(spec.annotations().len(), 1);
        assert_eq!(spec.annotations()[0], vec!["b1", "y2", "y3"]);
    }

    #[test]
    fn test_with_annotation_validates_length() {
        let spec = spectrum(vec![100.0, 200.0]);
        let result = spec.clone().with_annotation(vec!["y1".to_string()]);
        assert_eq!(result, Err(Error::AnnotationShape(1, 2)));

        let spec = spec
            .with_annotation(vec!["b1".to_string(), "y1".to_string()])
            .unwrap();
        assert_eq!(spec.annotations().len(), 1);
    }

    #[test]
    fn test_find_nearest() {
        let spec = spectrum(vec![100.0, 200.0, 300.0, 400.0]);
        assert_eq!(spec.find_nearest(50.0), Some(0));
        assert_eq!(spec.find_nearest(100.0), Some(0));
        assert_eq!(spec.find_nearest(149.0), Some(0));
        assert_eq!(spec.find_nearest(151.0), Some(1));
        assert_eq!(spec.find_nearest(299.9), Some(2));
        assert_eq!(spec.find_nearest(1000.0), Some(3));
    }

    #[test]
    fn test_find_nearest_ties_prefer_peak_below() {
        let spec = spectrum(vec![100.0, 200.0]);
        assert_eq!(spec.find_nearest(150.0), Some(0));

        let spec = spectrum(vec![100.0, 200.0, 200.0, 300.0]);
        assert_eq!(spec.find_nearest(200.0), Some(1));
        assert_eq!(spec.find_nearest(250.0), Some(2));
    }

    #[test]
    fn test_find_nearest_small_spectra() {
        assert_eq!(Spectrum::default().find_nearest(100.0), None);
        let spec = spectrum(vec![500.0]);
        assert_eq!(spec.find_nearest(1.0), Some(0));
        assert_eq!(spec.find_nearest(5000.0), Some(0));
    }
}
