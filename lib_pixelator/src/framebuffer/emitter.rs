use log::{debug, info};
use thiserror::Error;

use crate::constants::{H_RES, V_RES};
use crate::framebuffer::packer::{pack, PackError, PackedBuffer};
use crate::palette::{Geometry, PaletteMode};
use crate::quantizer::{quantize, QuantizeError};
use crate::raster::RasterImage;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to quantize raster")]
    QuantizeFailed(#[from] QuantizeError),
    #[error("Failed to pack frame buffer")]
    PackFailed(#[from] PackError),
}

/// Renders a packed frame buffer as the C source unit the build toolchain
/// compiles into the firmware.
///
/// The format is fixed byte for byte: the leading newline, the banner, the
/// conditional compilation flags, the symbolic constants, the four-space row
/// indent and the comma placement are all consumed as-is downstream. Do not
/// reformat.
pub fn emit(buffer: &PackedBuffer, mode: PaletteMode, geometry: Geometry) -> String {
    let mut source = format!(
        "\n\
        /**Auto generated by Pixelator. No to be edited by hand**/\n\
        \n\
        //CONDITIONAL COMPILATION DEFINITIONS\n\
        #define RESOLUTION_{h_res}x{v_res}\n\
        #define PALETTE_{bits}BIT\n\
        #define OUTPUT_{output_mode}\n\
        \n\
        const unsigned short vRes = {v_res}; //Number of vertical display pixels in the targeted VGA mode\n\
        const unsigned short hRes = {h_res}; //Number of horizontal display pixels in the targeted VGA mode\n\
        const unsigned short vPixels = {v_pixels}; //Number of actual vertical pixels\n\
        const unsigned short hPixels = {h_pixels}; //Number of actual horizontal pixels\n\
        const unsigned char vBytes = {v_bytes}; //Number of rows in the frame buffer\n\
        const unsigned char hBytes = {h_bytes}; //Number of bytes in a row of the frame buffer\n\
        \n\
        const unsigned char frameBuffer[vBytes][hBytes] PROGMEM = {{\n",
        h_res = H_RES,
        v_res = V_RES,
        bits = mode.bits(),
        output_mode = mode.output_mode(),
        v_pixels = geometry.height,
        h_pixels = geometry.width,
        v_bytes = buffer.v_bytes(),
        h_bytes = buffer.h_bytes(),
    );

    for y in 0..buffer.v_bytes() {
        source.push_str("    {");

        for (index, byte) in buffer.row(y).iter().enumerate() {
            if index > 0 {
                source.push(',');
            }
            source.push_str(&format!("0x{:02X}", byte));
        }

        if y + 1 < buffer.v_bytes() {
            source.push_str("},\n");
        } else {
            // the last row keeps no trailing comma and closes the matrix
            source.push_str("}\n};");
        }
    }

    source
}

/// Runs the whole codec over a raster: quantize to the mode's palette, pack
/// the grid into bytes, render the source text.
///
/// # Errors
/// - Returns `GenerateError::QuantizeFailed` on a missing or out-of-range
///   threshold
/// - Returns `GenerateError::PackFailed` if the raster geometry is not the
///   canonical grid of `mode`
pub fn generate_source(
    image: &RasterImage,
    mode: PaletteMode,
    threshold: Option<i32>,
) -> Result<String, GenerateError> {
    info!(
        "Generating frame buffer source for a {}x{} raster in {:?}",
        image.width(),
        image.height(),
        mode
    );

    let quantized = quantize(image, mode, threshold)?;
    let buffer = pack(&quantized, mode)?;
    let source = emit(&buffer, mode, mode.geometry());

    debug!("Generated {} bytes of source text", source.len());
    Ok(source)
}
