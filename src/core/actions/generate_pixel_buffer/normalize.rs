use crate::core::data::escape_field::EscapeField;

/// Linear map of `[vmin, vmax]` onto `[0, 1]`.
///
/// Values outside the range are clamped. A degenerate range (`vmin == vmax`)
/// sends everything to 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Normalize {
    vmin: f64,
    vmax: f64,
}

impl Normalize {
    #[must_use]
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    /// Colour limits spanning the smallest and largest value in `field`.
    #[must_use]
    pub fn from_field(field: &EscapeField) -> Self {
        Self::new(field.min() as f64, field.max() as f64)
    }

    #[must_use]
    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    #[must_use]
    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return 0.0;
        }

        ((value - self.vmin) / span).clamp(0.0, 1.0)
    }

    /// Inverse of [`apply`](Self::apply) for `t` in `[0, 1]`.
    #[must_use]
    pub fn value_at(&self, t: f64) -> f64 {
        self.vmin + t * (self.vmax - self.vmin)
    }
}
