pub mod buttons;
pub mod errors;
pub mod types;

pub use buttons::{ButtonFace, ButtonType, Function, Swatch};
pub use errors::{CalcpadError, ConfigError};
pub use types::{Color, Rgba};

pub type Result<T> = std::result::Result<T, CalcpadError>;
