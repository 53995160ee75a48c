//! Sample statistics over per-trial percolation thresholds.

use crate::error::{PercolationError, Result};

/// z-score of the two-sided 95% confidence level.
pub const CONFIDENCE_95: f64 = 1.96;

/// Summary of a set of threshold samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdStats {
    trials: usize,
    mean: f64,
    stddev: f64,
}

impl ThresholdStats {
    /// Summarise `samples`. At least one sample is required.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(PercolationError::invalid("trial count", 0));
        }
        let mean = mean(samples);
        let stddev = stddev(samples, mean);
        Ok(Self {
            trials: samples.len(),
            mean,
            stddev,
        })
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Sample mean of the threshold.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation (n - 1 denominator). NaN for a single sample.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Half the width of the 95% confidence interval.
    pub fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev / (self.trials as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean + self.half_width()
    }
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn stddev(samples: &[f64], mean: f64) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let sum_sq: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    (sum_sq / (samples.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let stats = ThresholdStats::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.trials(), 8);
        assert!((stats.mean() - 5.0).abs() < 1e-12);
        // Sum of squared deviations is 32, so s = sqrt(32 / 7).
        assert!((stats.stddev() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        let hw = 1.96 * stats.stddev() / 8f64.sqrt();
        assert!((stats.half_width() - hw).abs() < 1e-12);
        assert!((stats.confidence_lo() - (5.0 - hw)).abs() < 1e-12);
        assert!((stats.confidence_hi() - (5.0 + hw)).abs() < 1e-12);
    }

    #[test]
    fn test_constant_samples_zero_spread() {
        let stats = ThresholdStats::from_samples(&[0.6; 10]).unwrap();
        assert!((stats.mean() - 0.6).abs() < 1e-12);
        assert!(stats.stddev().abs() < 1e-12);
        assert!((stats.confidence_lo() - stats.confidence_hi()).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_stddev_undefined() {
        let stats = ThresholdStats::from_samples(&[0.5]).unwrap();
        assert_eq!(stats.mean(), 0.5);
        assert!(stats.stddev().is_nan());
        assert!(stats.confidence_lo().is_nan());
    }

    #[test]
    fn test_empty_samples_rejected() {
        assert!(matches!(
            ThresholdStats::from_samples(&[]),
            Err(PercolationError::InvalidArgument { .. })
        ));
    }
}
