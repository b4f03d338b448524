pub mod errors;
pub mod types;

pub use errors::{ColorParseError, ThemeError};
pub use types::{ButtonLocation, Color, Point, StatusBarColor};

pub type Result<T> = std::result::Result<T, ThemeError>;
