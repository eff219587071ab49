use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine mapping from a data domain onto a pixel range.
///
/// The range may be reversed (`range_start > range_end`), which is how value
/// axes put larger values closer to the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Pixels per one domain unit, signed by range direction.
    pub fn ratio(self) -> f64 {
        (self.range_end - self.range_start) / (self.domain_end - self.domain_start)
    }

    /// Maps a domain value to pixels. Non-finite input maps to NaN.
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        self.range_start + (value - self.domain_start) * self.ratio()
    }

    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        self.domain_start + (pixel - self.range_start) / self.ratio()
    }

    /// Absolute pixel length of a domain interval of `delta` centred on `at`.
    pub fn span_to_pixels(self, at: f64, delta: f64) -> f64 {
        let half = delta / 2.0;
        (self.domain_to_pixel(at - half) - self.domain_to_pixel(at + half)).abs()
    }
}
