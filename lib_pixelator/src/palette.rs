use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteModeError {
    #[error("invalid palette mode: {0} bits per pixel is not supported")]
    InvalidPaletteMode(u8),
}

/// Pixel grid dimensions of a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
}

/// Discrete color depth scheme. Governs both the quantization rule and the
/// byte layout of the packed frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    /// 2 luminance levels, 8 pixels per byte, streamed over USART.
    Mono1Bit,
    /// 4 levels per channel, 1 pixel per byte, driven over PORT.
    Quad2Bit,
}

impl PaletteMode {
    /// Parses the bits-per-pixel value selected in the hosting application.
    pub fn from_bits(bits: u8) -> Result<Self, PaletteModeError> {
        match bits {
            1 => Ok(PaletteMode::Mono1Bit),
            8 => Ok(PaletteMode::Quad2Bit),
            other => Err(PaletteModeError::InvalidPaletteMode(other)),
        }
    }

    /// Bits of storage one pixel occupies in the packed frame buffer.
    pub fn bits(self) -> u8 {
        match self {
            PaletteMode::Mono1Bit => 1,
            PaletteMode::Quad2Bit => 8,
        }
    }

    /// Signal path the generated code drives on the microcontroller.
    pub fn output_mode(self) -> &'static str {
        match self {
            PaletteMode::Mono1Bit => "USART",
            PaletteMode::Quad2Bit => "PORT",
        }
    }

    /// The one pixel grid this mode supports.
    pub fn geometry(self) -> Geometry {
        match self {
            PaletteMode::Mono1Bit => Geometry {
                width: 192,
                height: 240,
            },
            PaletteMode::Quad2Bit => Geometry {
                width: 57,
                height: 120,
            },
        }
    }

    /// Number of bytes in one packed row.
    pub fn h_bytes(self) -> u16 {
        match self {
            // 1 byte holds 8 pixels
            PaletteMode::Mono1Bit => self.geometry().width / 8,
            // 1 byte holds 1 pixel
            PaletteMode::Quad2Bit => self.geometry().width,
        }
    }

    /// Number of rows in the packed frame buffer.
    pub fn v_bytes(self) -> u16 {
        self.geometry().height
    }
}
