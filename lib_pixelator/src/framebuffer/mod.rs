pub mod emitter;
pub mod packer;

pub use emitter::{emit, generate_source};
pub use packer::pack;
