/// Horizontal resolution of the targeted VGA mode.
pub const H_RES: u16 = 640;

/// Vertical resolution of the targeted VGA mode.
pub const V_RES: u16 = 480;

/// Column whose bit is always driven high in 1-bit mode. The USART
/// transmitter idles high for one pixel on the left edge of the frame, so the
/// rightmost bit of every row is forced high to balance it. Only defined for
/// the canonical 192-wide grid.
pub const FRAMING_BIT_COLUMN: u16 = 191;

/// Column that is always blanked in 2-bit-per-channel mode. The display
/// driver stretches the last pixel of every line, so that column is emitted
/// as 0x00 instead of its encoded value. Only defined for the canonical
/// 57-wide grid.
pub const STRETCHED_PIXEL_COLUMN: u16 = 56;
