const MANTISSAS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
const EPSILON: f64 = 1e-9;

/// Evenly spaced round values covering an axis range.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub step: f64,
}

impl Ticks {
    /// Labels with just enough decimals to tell neighbouring ticks apart.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let decimals = decimals_for_step(self.step);

        self.values
            .iter()
            .map(|&value| {
                // keep "-0.0" out of the labels
                let value = if value.abs() < self.step * EPSILON { 0.0 } else { value };
                format!("{value:.decimals$}")
            })
            .collect()
    }
}

/// At most `max_ticks` multiples of a 1-2-2.5-5 step inside `[min, max]`.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Ticks {
    select_ticks(min, max, max_ticks, false)
}

/// Like [`nice_ticks`], restricted to whole-number steps.
#[must_use]
pub fn integer_ticks(min: f64, max: f64, max_ticks: usize) -> Ticks {
    select_ticks(min, max, max_ticks, true)
}

fn select_ticks(min: f64, max: f64, max_ticks: usize, integer: bool) -> Ticks {
    let max_ticks = max_ticks.max(2);
    let span = max - min;

    if !span.is_finite() || span <= 0.0 {
        return Ticks {
            values: vec![min],
            step: 1.0,
        };
    }

    let raw_step = span / max_ticks as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());

    for exponent_shift in 0..3 {
        let scale = magnitude * 10f64.powi(exponent_shift);
        for mantissa in MANTISSAS {
            let step = mantissa * scale;
            if integer && (step < 1.0 || step.fract() != 0.0) {
                continue;
            }

            let first = (min / step - EPSILON).ceil() as i64;
            let last = (max / step + EPSILON).floor() as i64;
            if last < first || (last - first + 1) as usize > max_ticks {
                continue;
            }

            let values = (first..=last).map(|k| k as f64 * step).collect();
            return Ticks { values, step };
        }
    }

    Ticks {
        values: vec![min, max],
        step: span,
    }
}

fn decimals_for_step(step: f64) -> usize {
    (0..=12)
        .find(|&decimals| {
            let scaled = step * 10f64.powi(decimals as i32);
            (scaled - scaled.round()).abs() < EPSILON * scaled.abs().max(1.0)
        })
        .unwrap_or(12)
}
