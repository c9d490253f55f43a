pub mod color;
pub mod gradient;
pub mod palette;

pub use color::Color;
pub use gradient::{
    GRADIENT_HEIGHT, GRADIENT_WIDTH, GradientConfig, GradientMode, generate_gradient,
};
pub use palette::{type_color, type_colors};

pub type GradientResult<T> = Result<T, GradientError>;

#[derive(thiserror::Error, Debug)]
pub enum GradientError {
    #[error("Invalid hex color `{0}`, expected #RRGGBB")]
    InvalidHex(String),

    #[error("At least one color is required")]
    NoColors,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
