//! Parabolic SAR (stop-and-reverse).
//!
//! Classic Wilder construction: the SAR trails price and accelerates toward it
//! by an acceleration factor that grows on each new extreme point, capped at a
//! maximum. A penetration of the SAR flips the trend and reseeds from the
//! prior extreme point. Defaults 0.02 / 0.02 / 0.2.

use crate::domain::PriceBar;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct ParabolicSar {
    af_start: f64,
    af_step: f64,
    af_max: f64,
    name: String,
}

impl ParabolicSar {
    pub fn new(af_start: f64, af_step: f64, af_max: f64) -> Self {
        assert!(af_start > 0.0 && af_step > 0.0 && af_max >= af_start);
        Self {
            af_start,
            af_step,
            af_max,
            name: "sar".to_string(),
        }
    }
}

impl Default for ParabolicSar {
    fn default() -> Self {
        Self::new(0.02, 0.02, 0.2)
    }
}

impl Indicator for ParabolicSar {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];
        if n < 2 {
            return result;
        }

        // Seed direction from the first two bars.
        let mut rising = bars[1].close >= bars[0].close;
        let mut sar = if rising { bars[0].low } else { bars[0].high };
        let mut ep = if rising { bars[1].high } else { bars[1].low };
        let mut af = self.af_start;

        for i in 1..n {
            let b = &bars[i];
            if b.high.is_nan() || b.low.is_nan() {
                result[i] = f64::NAN;
                continue;
            }

            sar += af * (ep - sar);

            if rising {
                // SAR may never enter the prior two bars' range.
                let floor = bars[i - 1].low.min(bars[i.saturating_sub(2)].low);
                if sar > floor {
                    sar = floor;
                }
                if b.low < sar {
                    rising = false;
                    sar = ep;
                    ep = b.low;
                    af = self.af_start;
                } else if b.high > ep {
                    ep = b.high;
                    af = (af + self.af_step).min(self.af_max);
                }
            } else {
                let ceiling = bars[i - 1].high.max(bars[i.saturating_sub(2)].high);
                if sar < ceiling {
                    sar = ceiling;
                }
                if b.high > sar {
                    rising = true;
                    sar = ep;
                    ep = b.high;
                    af = self.af_start;
                } else if b.low < ep {
                    ep = b.low;
                    af = (af + self.af_step).min(self.af_max);
                }
            }

            result[i] = sar;
        }

        result
    }
}
