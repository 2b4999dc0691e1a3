use lib_pixelator::{PaletteMode, RasterImage};

/// Solid raster of one color at the canonical geometry of `mode`.
pub fn solid_image(mode: PaletteMode, rgba: [u8; 4]) -> RasterImage {
    let geometry = mode.geometry();
    let data = rgba.repeat(geometry.width as usize * geometry.height as usize);
    RasterImage::from_rgba(geometry.width, geometry.height, data).unwrap()
}

/// Raster at the canonical geometry of `mode` whose channel values sweep
/// through 0..=255 pixel by pixel, with a varying alpha.
pub fn gradient_image(mode: PaletteMode) -> RasterImage {
    let geometry = mode.geometry();
    let pixels = geometry.width as usize * geometry.height as usize;

    let mut data = Vec::with_capacity(pixels * 4);
    for index in 0..pixels {
        let value = (index % 256) as u8;
        data.extend_from_slice(&[value, 255 - value, value.wrapping_mul(7), value]);
    }

    RasterImage::from_rgba(geometry.width, geometry.height, data).unwrap()
}
