//! Volume ratio — today's volume over its short moving average.
//!
//! ratio[t] = volume[t] / SMA(volume, period)[t]. Values above 1 flag
//! above-average turnout. A zero average -> NaN.

use crate::domain::PriceBar;
use crate::indicators::sma::rolling_mean;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct VolumeRatio {
    period: usize,
    name: String,
}

impl VolumeRatio {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "volume ratio period must be >= 1");
        Self {
            period,
            name: format!("volume_ratio_{period}"),
        }
    }
}

impl Indicator for VolumeRatio {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();
        let avg = rolling_mean(&volumes, self.period);
        volumes
            .iter()
            .zip(&avg)
            .map(|(v, a)| if *a == 0.0 { f64::NAN } else { v / a })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    fn with_volumes(volumes: &[f64]) -> Vec<PriceBar> {
        let mut bars = make_bars(&vec![100.0; volumes.len()]);
        for (bar, v) in bars.iter_mut().zip(volumes) {
            bar.volume = *v;
        }
        bars
    }

    #[test]
    fn steady_volume_is_one() {
        let bars = with_volumes(&[5000.0; 10]);
        let result = VolumeRatio::new(5).compute(&bars);
        for v in result.iter().skip(4) {
            assert_approx(*v, 1.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn spike_exceeds_one() {
        let mut volumes = vec![5000.0; 10];
        volumes[9] = 15_000.0;
        let bars = with_volumes(&volumes);
        let result = VolumeRatio::new(5).compute(&bars);
        assert!(result[9] > 2.0);
        assert_approx(result[8], 1.0, DEFAULT_EPSILON);
    }

    #[test]
    fn zero_average_is_nan() {
        let bars = with_volumes(&[0.0; 8]);
        let result = VolumeRatio::new(5).compute(&bars);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn warmup() {
        let bars = with_volumes(&[5000.0; 6]);
        let result = VolumeRatio::new(5).compute(&bars);
        for v in result.iter().take(4) {
            assert!(v.is_nan());
        }
        assert!(!result[4].is_nan());
    }
}
