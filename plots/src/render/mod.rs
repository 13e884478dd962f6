pub mod plotters_backend;

use crate::PlotBytes;
use anyhow::Result;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

/// Encode an RGB pixel buffer (3 bytes per pixel) as PNG
pub fn encode_png(pixel_buffer: Vec<u8>, width: u32, height: u32) -> Result<PlotBytes> {
    let img: RgbImage = image::ImageBuffer::from_vec(width, height, pixel_buffer)
        .ok_or_else(|| anyhow::anyhow!("plot image buffer had unexpected size"))?;

    let mut encoded_data = Vec::new();
    image::codecs::png::PngEncoder::new(&mut encoded_data)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| anyhow::anyhow!("failed to PNG encode plot: {e}"))?;

    Ok(encoded_data)
}
