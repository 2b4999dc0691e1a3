use log::{debug, error, info};
use thiserror::Error;

use crate::constants::{FRAMING_BIT_COLUMN, STRETCHED_PIXEL_COLUMN};
use crate::palette::PaletteMode;
use crate::raster::QuantizedImage;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("invalid dimensions: {mode:?} packs a {expected_width}x{expected_height} grid, got {width}x{height}")]
    InvalidDimensions {
        mode: PaletteMode,
        expected_width: u16,
        expected_height: u16,
        width: u16,
        height: u16,
    },
}

/// Row-major byte matrix ready to be rendered into firmware source: one row
/// of `h_bytes` bytes per image row, `v_bytes` rows top to bottom.
#[derive(Debug, Clone)]
pub struct PackedBuffer {
    h_bytes: u16,
    v_bytes: u16,
    bytes: Vec<u8>,
}

impl PackedBuffer {
    pub fn h_bytes(&self) -> u16 {
        self.h_bytes
    }

    pub fn v_bytes(&self) -> u16 {
        self.v_bytes
    }

    /// One packed row, `h_bytes` long.
    pub fn row(&self, index: u16) -> &[u8] {
        let start = index as usize * self.h_bytes as usize;
        &self.bytes[start..start + self.h_bytes as usize]
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Packs a quantized pixel grid into the byte layout of the given palette
/// mode.
///
/// # Errors
/// - Returns `PackError::InvalidDimensions` if the image geometry is not the
///   canonical grid of `mode`
pub fn pack(image: &QuantizedImage, mode: PaletteMode) -> Result<PackedBuffer, PackError> {
    let geometry = mode.geometry();
    if image.width() != geometry.width || image.height() != geometry.height {
        error!(
            "Geometry {}x{} does not match the {}x{} grid of {:?}",
            image.width(),
            image.height(),
            geometry.width,
            geometry.height,
            mode
        );
        return Err(PackError::InvalidDimensions {
            mode,
            expected_width: geometry.width,
            expected_height: geometry.height,
            width: image.width(),
            height: image.height(),
        });
    }

    info!(
        "Packing {}x{} pixel grid into {}x{} bytes for {:?}",
        image.width(),
        image.height(),
        mode.h_bytes(),
        mode.v_bytes(),
        mode
    );

    let buffer = match mode {
        PaletteMode::Mono1Bit => pack_mono(image),
        PaletteMode::Quad2Bit => pack_quad(image),
    };

    debug!("Packed {} bytes", buffer.bytes().len());
    Ok(buffer)
}

/// 1 pixel per bit: groups of 8 pixels become one byte, leftmost pixel in the
/// most significant bit.
fn pack_mono(image: &QuantizedImage) -> PackedBuffer {
    let h_bytes = image.width() / 8;
    let v_bytes = image.height();
    let mut bytes = Vec::with_capacity(h_bytes as usize * v_bytes as usize);

    for y in 0..image.height() {
        for group in (0..image.width()).step_by(8) {
            let mut byte = 0u8;

            for column in group..group + 8 {
                byte <<= 1;
                if column == FRAMING_BIT_COLUMN {
                    // Forced high whatever the pixel holds, to balance the
                    // idle-high band on the opposite frame edge.
                    byte |= 1;
                } else if image.pixel(column, y)[0] == 255 {
                    // R alone decides: all channels agree after quantization.
                    byte |= 1;
                }
            }

            bytes.push(byte);
        }
    }

    PackedBuffer {
        h_bytes,
        v_bytes,
        bytes,
    }
}

/// 1 pixel per byte, encoded as 0b00RRGGBB with each quantized level mapped
/// to its straight binary 2-bit code (level / 85).
fn pack_quad(image: &QuantizedImage) -> PackedBuffer {
    let h_bytes = image.width();
    let v_bytes = image.height();
    let mut bytes = Vec::with_capacity(h_bytes as usize * v_bytes as usize);

    for y in 0..image.height() {
        for x in 0..image.width() {
            if x == STRETCHED_PIXEL_COLUMN {
                // The display driver stretches this column; blank it instead
                // of encoding the pixel.
                bytes.push(0x00);
                continue;
            }

            let [r, g, b, _] = image.pixel(x, y);
            bytes.push((r / 85) << 4 | (g / 85) << 2 | (b / 85));
        }
    }

    PackedBuffer {
        h_bytes,
        v_bytes,
        bytes,
    }
}
