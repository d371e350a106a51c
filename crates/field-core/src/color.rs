//! RGBA colors as the canvas understands them.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Color with 0..=255 channels and a 0..=1 alpha, printed as CSS `rgba(..)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_array(c: [f64; 4]) -> Self {
        Self {
            r: c[0].clamp(0.0, 255.0) as u8,
            g: c[1].clamp(0.0, 255.0) as u8,
            b: c[2].clamp(0.0, 255.0) as u8,
            a: c[3].clamp(0.0, 1.0),
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Accepts `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
impl FromStr for Rgba {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::Color(s.to_string());
        let t = s.trim();

        if let Some(hex) = t.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(bad());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
            return Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, 1.0));
        }

        let (body, want) = if let Some(b) = t.strip_prefix("rgba(") {
            (b, 4)
        } else if let Some(b) = t.strip_prefix("rgb(") {
            (b, 3)
        } else {
            return Err(bad());
        };
        let body = body.strip_suffix(')').ok_or_else(bad)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != want {
            return Err(bad());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| bad());
        let a = if want == 4 {
            let a = parts[3].parse::<f64>().map_err(|_| bad())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(bad());
            }
            a
        } else {
            1.0
        };
        Ok(Rgba::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            a,
        ))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
