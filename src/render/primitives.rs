use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS color string so settings files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)`.
    pub fn parse(css: &str) -> ChartResult<Self> {
        let trimmed = css.trim();
        let invalid = || ChartError::InvalidColor(css.to_owned());

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let (args, with_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let args = args.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != if with_alpha { 4 } else { 3 } {
            return Err(invalid());
        }

        let channel = |raw: &str| raw.parse::<u8>().map_err(|_| invalid());
        let alpha = if with_alpha {
            parts[3].parse::<f64>().map_err(|_| invalid())?
        } else {
            1.0
        };
        let color = Self::from_rgba8(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        );
        color.validate().map_err(|_| invalid())?;
        Ok(color)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |index: usize, width: usize| {
        let raw = hex.get(index..index + width)?;
        let value = u8::from_str_radix(raw, 16).ok()?;
        Some(if width == 1 { value * 17 } else { value })
    };
    match hex.len() {
        3 => Some(Color::from_rgba8(digit(0, 1)?, digit(1, 1)?, digit(2, 1)?, 1.0)),
        6 => Some(Color::from_rgba8(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?, 1.0)),
        8 => Some(Color::from_rgba8(
            digit(0, 2)?,
            digit(2, 2)?,
            digit(4, 2)?,
            f64::from(digit(6, 2)?) / 255.0,
        )),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(css: &str) -> Result<Self, Self::Err> {
        Self::parse(css)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(css: String) -> Result<Self, Self::Error> {
        Self::parse(&css)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            self.alpha
        )
    }
}

/// One color stop of a gradient, `offset` in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient in coordinates relative to the shape's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn validate(&self) -> ChartResult<()> {
        if self.stops.is_empty() {
            return Err(ChartError::InvalidData(
                "gradient must have at least one stop".to_owned(),
            ));
        }
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(ChartError::InvalidData(
                    "gradient stop offset must be finite and in [0, 1]".to_owned(),
                ));
            }
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Bar fill paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarFill {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl BarFill {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::LinearGradient(gradient) => gradient.validate(),
        }
    }
}

impl From<Color> for BarFill {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}
