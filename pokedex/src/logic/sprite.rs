use anyhow::{Context, Result, bail};
use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image as FastImage};
use image::RgbaImage;

/// Decodes sprite bytes and scales them to a `size`×`size` square.
///
/// Nearest-neighbour keeps the pixel art crisp.
pub fn decode_sprite(bytes: &[u8], size: u32) -> Result<RgbaImage> {
    if size == 0 {
        bail!("sprite size must be positive");
    }

    let src = image::load_from_memory(bytes)
        .with_context(|| "decode sprite failed")?
        .to_rgba8();

    let (width, height) = src.dimensions();
    if (width, height) == (size, size) {
        return Ok(src);
    }

    let src = FastImage::from_vec_u8(width, height, src.into_raw(), PixelType::U8x4)?;
    let mut dst = FastImage::new(size, size, PixelType::U8x4);

    let resize_options = ResizeOptions::new().resize_alg(ResizeAlg::Nearest);
    Resizer::new().resize(&src, &mut dst, &resize_options)?;

    RgbaImage::from_raw(size, size, dst.into_vec()).with_context(|| "to RgbaImage failed")
}
