/// An ordered sequence of `(position, intensity)` samples describing the
/// interference curve across the detection screen.
///
/// Produced fresh on every generator call and owned by the caller.
/// Positions are strictly increasing and evenly spaced over the screen
/// span; intensities are non-negative with a maximum equal to the
/// configured particle count.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    samples: Vec<(f64, f64)>,
}

impl SampleSeries {
    pub fn new(samples: Vec<(f64, f64)>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    /// The smallest and largest sampled positions, or `None` for an empty
    /// series. Positions are sorted, so these are the endpoints.
    pub fn position_bounds(&self) -> Option<(f64, f64)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(&(first, _)), Some(&(last, _))) => Some((first, last)),
            _ => None,
        }
    }

    pub fn max_intensity(&self) -> f64 {
        self.samples
            .iter()
            .fold(0.0_f64, |acc, &(_, intensity)| acc.max(intensity))
    }

    pub fn min_intensity(&self) -> f64 {
        self.samples
            .iter()
            .fold(f64::INFINITY, |acc, &(_, intensity)| acc.min(intensity))
    }
}
