pub mod constants;
pub mod framebuffer;
pub mod palette;
pub mod quantizer;
pub mod raster;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::framebuffer::emitter::{emit, generate_source, GenerateError};
pub use crate::framebuffer::packer::{pack, PackedBuffer};
pub use crate::palette::{Geometry, PaletteMode};
pub use crate::quantizer::{quantize, suggest_threshold};
pub use crate::raster::{QuantizedImage, RasterImage};

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_pixelator"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
