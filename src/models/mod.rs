pub mod config;
pub mod gradient;
pub mod palette;
pub mod settings;

pub use config::AppConfig;
pub use gradient::{DirectionTemplate, Gradient, GradientType, StopStyle, DIRECTION_TEMPLATES};
pub use palette::ColorPalette;
pub use settings::GradientCustomizationSettings;
