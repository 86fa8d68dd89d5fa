use serde::{Deserialize, Serialize};

/// Normalized color channels, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub alpha: f64,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgba {
    /// Channels in `[alpha, red, green, blue]` order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }
}
