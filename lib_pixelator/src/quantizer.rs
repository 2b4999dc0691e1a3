use log::{debug, error, info};
use thiserror::Error;

use crate::palette::PaletteMode;
use crate::raster::{QuantizedImage, RasterImage};

#[derive(Error, Debug)]
pub enum QuantizeError {
    #[error("invalid threshold: 1-bit quantization requires a mid point")]
    MissingThreshold,
    #[error("invalid threshold: {0} is outside the supported range 0..=255")]
    ThresholdOutOfRange(i32),
}

/// Snaps every pixel of a raster to the legal level set of the given palette
/// mode.
///
/// # Parameters
/// - `image`: The raster to quantize, at any geometry.
/// - `mode`: The palette mode whose level set the output must satisfy.
/// - `threshold`: The luminance mid point for `Mono1Bit`; ignored by
///   `Quad2Bit`.
///
/// # Returns
/// A Result containing either the quantized raster (same geometry, alpha
/// forced to full opacity) or a `QuantizeError`.
///
/// # Errors
/// - Returns `QuantizeError::MissingThreshold` if `Mono1Bit` is selected
///   without a threshold
/// - Returns `QuantizeError::ThresholdOutOfRange` if the threshold is not in
///   0..=255
pub fn quantize(
    image: &RasterImage,
    mode: PaletteMode,
    threshold: Option<i32>,
) -> Result<QuantizedImage, QuantizeError> {
    let mut rgba_data = image.rgba_data().to_vec();

    match mode {
        PaletteMode::Mono1Bit => {
            let threshold = match threshold {
                Some(value) => value,
                None => {
                    error!("1-bit quantization requested without a mid point");
                    return Err(QuantizeError::MissingThreshold);
                }
            };
            if !(0..=255).contains(&threshold) {
                error!("Mid point {} is outside 0..=255", threshold);
                return Err(QuantizeError::ThresholdOutOfRange(threshold));
            }

            info!(
                "Quantizing {}x{} raster to 2 luminance levels with mid point {}",
                image.width(),
                image.height(),
                threshold
            );

            for pixel in rgba_data.chunks_exact_mut(4) {
                // All channel values of the same pixel must end up equal.
                // avg > threshold, kept in integer arithmetic:
                // (r + g + b) / 3 > t  <=>  r + g + b > 3 * t
                let sum = pixel[0] as i32 + pixel[1] as i32 + pixel[2] as i32;
                let level = if sum > 3 * threshold { 255 } else { 0 };
                pixel[0] = level;
                pixel[1] = level;
                pixel[2] = level;
                pixel[3] = 255;
            }
        }
        PaletteMode::Quad2Bit => {
            info!(
                "Quantizing {}x{} raster to 4 levels per channel",
                image.width(),
                image.height()
            );

            for pixel in rgba_data.chunks_exact_mut(4) {
                // Channel values of the same pixel are quantized independently.
                for channel in pixel.iter_mut().take(3) {
                    *channel = quantize_channel(*channel);
                }
                pixel[3] = 255;
            }
        }
    }

    debug!("Quantization complete, {} bytes", rgba_data.len());
    Ok(QuantizedImage::new(image.width(), image.height(), rgba_data))
}

/// Snaps one channel value to {0, 85, 170, 255}. A value on a band boundary
/// belongs to the upper band.
fn quantize_channel(value: u8) -> u8 {
    if value >= 213 {
        255
    } else if value >= 127 {
        170
    } else if value >= 42 {
        85
    } else {
        0
    }
}

/// Suggests a 1-bit mid point for a raster: the mean of the per-pixel RGB
/// averages, floored. Computed as `sum(r + g + b) / (3 * pixels)` so the
/// result stays exact in integer arithmetic. Returns 0 for an empty raster.
pub fn suggest_threshold(image: &RasterImage) -> i32 {
    let pixel_count = image.width() as u64 * image.height() as u64;
    if pixel_count == 0 {
        return 0;
    }

    let mut channel_sum: u64 = 0;
    for pixel in image.rgba_data().chunks_exact(4) {
        channel_sum += pixel[0] as u64 + pixel[1] as u64 + pixel[2] as u64;
    }

    (channel_sum / (3 * pixel_count)) as i32
}
