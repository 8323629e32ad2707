use log::debug;
use pattern_common::{ExperimentConfig, PatternError, SampleSeries};

/// Evaluates the illustrative interference intensity across the detection
/// screen and returns the resulting sample series.
///
/// The curve is `sin(x / slit_spacing)^2` sampled at `sample_count` evenly
/// spaced positions spanning `[-screen_width/2, +screen_width/2]` (both
/// endpoints included), normalized so its maximum is 1, then scaled by
/// `particle_count`. Pure and deterministic: identical configs produce
/// identical series.
pub fn generate(config: &ExperimentConfig) -> Result<SampleSeries, PatternError> {
    config.validate()?;

    let n = config.sample_count;
    let half_width = config.screen_width / 2.0;

    // Interpolate on i/(n-1) so both endpoints come out exact.
    let positions: Vec<f64> = (0..n)
        .map(|i| -half_width + config.screen_width * (i as f64 / (n - 1) as f64))
        .collect();

    let raw: Vec<f64> = positions
        .iter()
        .map(|x| (x / config.slit_spacing).sin().powi(2))
        .collect();

    let max_raw = raw.iter().fold(0.0_f64, |acc, &r| acc.max(r));
    if max_raw == 0.0 {
        // Every sampled x / slit_spacing landed on a multiple of pi, so the
        // normalization divisor is zero. Only the configuration can induce
        // this, hence the classification.
        return Err(PatternError::InvalidConfiguration(format!(
            "pattern is identically zero: all {} samples of sin(x / {})^2 vanish, cannot normalize",
            n, config.slit_spacing
        )));
    }

    // Normalize before scaling so the peak sample is exactly particle_count.
    let particle_count = f64::from(config.particle_count);
    let samples: Vec<(f64, f64)> = positions
        .into_iter()
        .zip(raw)
        .map(|(x, r)| (x, (r / max_raw) * particle_count))
        .collect();

    debug!(
        "Generated {} samples over [{:.3}, {:.3}], peak {:.1}",
        n, -half_width, half_width, particle_count
    );

    Ok(SampleSeries::new(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn default_config() -> ExperimentConfig {
        ExperimentConfig::default()
    }

    #[test]
    fn maximum_intensity_equals_particle_count() {
        let series = generate(&default_config()).expect("default config must generate");
        assert_eq!(series.max_intensity(), 10_000.0);
        assert!(series.min_intensity() >= 0.0);
    }

    #[test]
    fn generation_is_deterministic() {
        let config = default_config();
        let first = generate(&config).expect("generate");
        let second = generate(&config).expect("generate");
        assert_eq!(first, second);
    }

    #[test]
    fn positions_are_evenly_spaced_and_span_the_screen() {
        let config = default_config();
        let series = generate(&config).expect("generate");
        let samples = series.samples();
        assert_eq!(samples.len(), config.sample_count);

        let expected_step = config.screen_width / (config.sample_count - 1) as f64;
        for pair in samples.windows(2) {
            let step = pair[1].0 - pair[0].0;
            assert!(step > 0.0, "positions must be strictly increasing");
            assert!((step - expected_step).abs() < TOL);
        }

        let (first, last) = series.position_bounds().expect("non-empty series");
        assert_eq!(first, -config.screen_width / 2.0);
        assert_eq!(last, config.screen_width / 2.0);
    }

    #[test]
    fn default_curve_oscillates() {
        // With screen_width = 100 and slit_spacing = 10 the argument spans
        // [-5, 5], a bit over three half-periods of sin^2, so the series
        // must show several full-height peaks and near-zero troughs.
        let config = default_config();
        let series = generate(&config).expect("generate");
        let samples = series.samples();
        let peak = f64::from(config.particle_count);

        let mut maxima_near_peak = 0;
        let mut minima_near_zero = 0;
        for window in samples.windows(3) {
            let (prev, mid, next) = (window[0].1, window[1].1, window[2].1);
            if mid > prev && mid > next && mid > 0.99 * peak {
                maxima_near_peak += 1;
            }
            if mid < prev && mid < next && mid < 0.01 * peak {
                minima_near_zero += 1;
            }
        }

        assert!(
            maxima_near_peak >= 3,
            "expected at least 3 full-height maxima, found {maxima_near_peak}"
        );
        assert!(
            minima_near_zero >= 2,
            "expected at least 2 near-zero minima, found {minima_near_zero}"
        );
    }

    #[test]
    fn zero_slit_spacing_fails_before_division() {
        let config = ExperimentConfig {
            slit_spacing: 0.0,
            ..default_config()
        };
        let err = generate(&config).expect_err("zero spacing must fail");
        assert!(matches!(err, PatternError::InvalidConfiguration(_)));
    }

    #[test]
    fn single_sample_is_rejected() {
        let config = ExperimentConfig {
            sample_count: 1,
            ..default_config()
        };
        let err = generate(&config).expect_err("one sample must fail");
        assert!(matches!(err, PatternError::InvalidConfiguration(_)));
    }

    #[test]
    fn fifty_thousand_particle_scenario() {
        let config = ExperimentConfig {
            particle_count: 50_000,
            screen_width: 100.0,
            slit_spacing: 10.0,
            sample_count: 200,
        };
        let series = generate(&config).expect("generate");
        let samples = series.samples();

        let (first, last) = series.position_bounds().expect("non-empty series");
        assert_eq!(first, -50.0);
        assert_eq!(last, 50.0);

        let step = samples[1].0 - samples[0].0;
        assert!((step - 0.5025).abs() < 1e-4);

        assert_eq!(series.max_intensity(), 50_000.0);
        assert!(series.min_intensity() < 1.0);
    }
}
