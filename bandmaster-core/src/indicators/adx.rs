//! ADX / ±DI — Wilder's directional movement system.
//!
//! 1. +DM/-DM from consecutive bars
//! 2. Wilder-smooth +DM, -DM, and TR (alpha = 1/period)
//! 3. +DI = 100 * smoothed(+DM) / smoothed(TR), -DI likewise
//! 4. DX = 100 * |+DI - -DI| / (+DI + -DI)
//! 5. ADX = Wilder-smoothed DX
//!
//! ADX lookback: 2 * period (period for DI smoothing, then period for
//! the ADX smoothing). ±DI lookback: period.

use crate::domain::PriceBar;
use crate::indicators::atr::{true_range, wilder_smooth};
use crate::indicators::Indicator;

/// Which directional line a [`DirectionalIndex`] instance outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiLine {
    Plus,
    Minus,
}

#[derive(Debug, Clone)]
pub struct Adx {
    period: usize,
    name: String,
}

impl Adx {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ADX period must be >= 1");
        Self {
            period,
            name: format!("adx_{period}"),
        }
    }
}

/// +DI or -DI as a standalone series (selector pattern, one instance per line).
#[derive(Debug, Clone)]
pub struct DirectionalIndex {
    period: usize,
    line: DiLine,
    name: String,
}

impl DirectionalIndex {
    pub fn plus(period: usize) -> Self {
        assert!(period >= 1, "DI period must be >= 1");
        Self {
            period,
            line: DiLine::Plus,
            name: format!("plus_di_{period}"),
        }
    }

    pub fn minus(period: usize) -> Self {
        assert!(period >= 1, "DI period must be >= 1");
        Self {
            period,
            line: DiLine::Minus,
            name: format!("minus_di_{period}"),
        }
    }
}

/// Raw +DM / -DM series. Index 0 is NaN.
fn directional_movement(bars: &[PriceBar]) -> (Vec<f64>, Vec<f64>) {
    let n = bars.len();
    let mut plus_dm = vec![f64::NAN; n];
    let mut minus_dm = vec![f64::NAN; n];

    for i in 1..n {
        let up = bars[i].high - bars[i - 1].high;
        let down = bars[i - 1].low - bars[i].low;

        if up.is_nan() || down.is_nan() {
            continue;
        }

        plus_dm[i] = if up > down && up > 0.0 { up } else { 0.0 };
        minus_dm[i] = if down > up && down > 0.0 { down } else { 0.0 };
    }

    (plus_dm, minus_dm)
}

/// Smoothed ±DI series shared by both indicator types.
fn di_series(bars: &[PriceBar], period: usize) -> (Vec<f64>, Vec<f64>) {
    let n = bars.len();
    let (plus_dm, minus_dm) = directional_movement(bars);
    let smooth_tr = wilder_smooth(&true_range(bars), period);
    let smooth_plus = wilder_smooth(&plus_dm, period);
    let smooth_minus = wilder_smooth(&minus_dm, period);

    let mut plus_di = vec![f64::NAN; n];
    let mut minus_di = vec![f64::NAN; n];
    for i in 0..n {
        if smooth_tr[i].is_nan()
            || smooth_plus[i].is_nan()
            || smooth_minus[i].is_nan()
            || smooth_tr[i] == 0.0
        {
            continue;
        }
        plus_di[i] = 100.0 * smooth_plus[i] / smooth_tr[i];
        minus_di[i] = 100.0 * smooth_minus[i] / smooth_tr[i];
    }

    (plus_di, minus_di)
}

impl Indicator for DirectionalIndex {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let (plus_di, minus_di) = di_series(bars, self.period);
        match self.line {
            DiLine::Plus => plus_di,
            DiLine::Minus => minus_di,
        }
    }
}

impl Indicator for Adx {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        2 * self.period
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let n = bars.len();
        let (plus_di, minus_di) = di_series(bars, self.period);

        let mut dx = vec![f64::NAN; n];
        for i in 0..n {
            if plus_di[i].is_nan() || minus_di[i].is_nan() {
                continue;
            }
            let di_sum = plus_di[i] + minus_di[i];
            dx[i] = if di_sum == 0.0 {
                0.0
            } else {
                100.0 * (plus_di[i] - minus_di[i]).abs() / di_sum
            };
        }

        wilder_smooth(&dx, self.period)
    }
}
