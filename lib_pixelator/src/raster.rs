use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterImageError {
    #[error("invalid pixel data length: expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
    PixelDataLengthMismatch {
        width: u16,
        height: u16,
        expected: usize,
        actual: usize,
    },
}

/// Immutable RGBA raster: row-major, 4 bytes per pixel, each channel 0-255.
///
/// Supplied by the hosting application already scaled to the pixel grid of
/// the selected palette mode.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u16,
    height: u16,
    rgba_data: Vec<u8>,
}

impl RasterImage {
    pub fn from_rgba(
        width: u16,
        height: u16,
        rgba_data: Vec<u8>,
    ) -> Result<Self, RasterImageError> {
        let expected = width as usize * height as usize * 4;
        if rgba_data.len() != expected {
            return Err(RasterImageError::PixelDataLengthMismatch {
                width,
                height,
                expected,
                actual: rgba_data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            rgba_data,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }
}

/// Raster whose channels are constrained to the legal level set of a palette
/// mode ({0, 255} or {0, 85, 170, 255}) and whose alpha is fully opaque.
///
/// Only the quantizer constructs these; the constraint is what lets the
/// packer read a single channel per pixel.
#[derive(Debug, Clone)]
pub struct QuantizedImage {
    width: u16,
    height: u16,
    rgba_data: Vec<u8>,
}

impl QuantizedImage {
    pub(crate) fn new(width: u16, height: u16, rgba_data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba_data,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }

    /// RGBA channels of the pixel at (x, y).
    pub fn pixel(&self, x: u16, y: u16) -> [u8; 4] {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.rgba_data[offset],
            self.rgba_data[offset + 1],
            self.rgba_data[offset + 2],
            self.rgba_data[offset + 3],
        ]
    }
}
