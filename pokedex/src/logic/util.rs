//! Utility functions module
//!
//! Window sizing and conversion of decoded images into Slint images.

use crate::{config, global_store, global_util, slint_generatedAppWindow::AppWindow};
use image::{RgbImage, RgbaImage};
use slint::{ComponentHandle, Image, Rgb8Pixel, Rgba8Pixel, SharedPixelBuffer};

/// Initializes utility functions
///
/// Applies the configured font and connects the window size callback.
///
/// # Parameters
/// - `ui`: Reference to the application window
pub fn init(ui: &AppWindow) {
    let preference = config::all().preference;
    global_store!(ui).set_font_size(u32::min(40, u32::max(8, preference.font_size)) as f32);
    global_store!(ui).set_font_family(preference.font_family.into());

    let ui_weak = ui.as_weak();
    global_util!(ui).on_update_window_size(move || {
        let ui = ui_weak.unwrap();
        let preference = config::all().preference;

        let scale = ui.window().scale_factor();
        let psize = slint::PhysicalSize::from_logical(
            slint::LogicalSize {
                width: u32::max(500, preference.win_width) as f32,
                height: u32::max(500, preference.win_height) as f32,
            },
            scale,
        );
        ui.window().set_size(psize);
    });
}

pub fn rgb_image(img: &RgbImage) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(
        img.as_raw(),
        img.width(),
        img.height(),
    );
    Image::from_rgb8(buffer)
}

pub fn rgba_image(img: &RgbaImage) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        img.as_raw(),
        img.width(),
        img.height(),
    );
    Image::from_rgba8(buffer)
}
