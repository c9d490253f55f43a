use crate::{Color, GradientError, GradientResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;

pub const GRADIENT_WIDTH: u32 = 1450;
pub const GRADIENT_HEIGHT: u32 = 925;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientMode {
    /// Every adjacent pair is blended across the whole width into the same
    /// row, so only the last pair survives.
    #[default]
    Overwrite,

    /// The width is split into `colors.len() - 1` equal segments, one per
    /// adjacent pair.
    Segmented,
}

/// Horizontal gradient configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GradientConfig {
    #[derivative(Default(value = "GRADIENT_WIDTH"))]
    width: u32,

    #[derivative(Default(value = "GRADIENT_HEIGHT"))]
    height: u32,

    mode: GradientMode,
}

impl GradientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `colors` into a row-invariant image.
    ///
    /// A single color fades to white. Several colors are blended according
    /// to the configured [`GradientMode`].
    pub fn generate(&self, colors: &[Color]) -> GradientResult<RgbImage> {
        if self.width == 0 || self.height == 0 {
            return Err(GradientError::InvalidParameter(format!(
                "gradient size {}x{}",
                self.width, self.height
            )));
        }

        let row = match colors {
            [] => return Err(GradientError::NoColors),
            [only] => blend_row(*only, Color::WHITE, self.width),
            _ => match self.mode {
                GradientMode::Overwrite => overwrite_row(colors, self.width),
                GradientMode::Segmented => segmented_row(colors, self.width),
            },
        };

        log::debug!(
            "gradient {}x{} {:?} from {} color(s)",
            self.width,
            self.height,
            self.mode,
            colors.len()
        );

        Ok(RgbImage::from_fn(self.width, self.height, |x, _| {
            row[x as usize].to_rgb()
        }))
    }
}

/// Renders `colors` at the default window size in [`GradientMode::Overwrite`].
pub fn generate_gradient(colors: &[Color]) -> GradientResult<RgbImage> {
    GradientConfig::default().generate(colors)
}

// `t` runs over `x / width`, so the last column stops one step short of `end`.
fn blend_row(start: Color, end: Color, width: u32) -> Vec<Color> {
    (0..width)
        .map(|x| start.lerp(&end, x as f64 / width as f64))
        .collect()
}

fn overwrite_row(colors: &[Color], width: u32) -> Vec<Color> {
    let mut row = vec![colors[0]; width as usize];

    for pair in colors.windows(2) {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = pair[0].lerp(&pair[1], x as f64 / width as f64);
        }
    }

    row
}

fn segmented_row(colors: &[Color], width: u32) -> Vec<Color> {
    let last_pair = colors.len() - 2;
    let segments = (colors.len() - 1) as f64;

    (0..width)
        .map(|x| {
            let pos = x as f64 / width as f64 * segments;
            let index = (pos.floor() as usize).min(last_pair);
            colors[index].lerp(&colors[index + 1], pos - index as f64)
        })
        .collect()
}
