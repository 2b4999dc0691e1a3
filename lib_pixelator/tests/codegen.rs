mod common;

use common::{gradient_image, solid_image};
use lib_pixelator::{generate_source, GenerateError, PaletteMode, RasterImage};

const MONO_HEADER: &str = "\n\
    /**Auto generated by Pixelator. No to be edited by hand**/\n\
    \n\
    //CONDITIONAL COMPILATION DEFINITIONS\n\
    #define RESOLUTION_640x480\n\
    #define PALETTE_1BIT\n\
    #define OUTPUT_USART\n\
    \n\
    const unsigned short vRes = 480; //Number of vertical display pixels in the targeted VGA mode\n\
    const unsigned short hRes = 640; //Number of horizontal display pixels in the targeted VGA mode\n\
    const unsigned short vPixels = 240; //Number of actual vertical pixels\n\
    const unsigned short hPixels = 192; //Number of actual horizontal pixels\n\
    const unsigned char vBytes = 240; //Number of rows in the frame buffer\n\
    const unsigned char hBytes = 24; //Number of bytes in a row of the frame buffer\n\
    \n\
    const unsigned char frameBuffer[vBytes][hBytes] PROGMEM = {\n";

#[test]
fn test_generate_mono_source_exact_format() {
    let image = solid_image(PaletteMode::Mono1Bit, [0, 0, 0, 255]);
    let source = generate_source(&image, PaletteMode::Mono1Bit, Some(127)).unwrap();

    assert!(source.starts_with(MONO_HEADER));
    assert!(source.ends_with("}\n};"));

    // all-black row: 23 cleared bytes, then the forced framing bit
    let mut expected_row = String::from("    {");
    expected_row.push_str(&"0x00,".repeat(23));
    expected_row.push_str("0x01}");

    let rows: Vec<&str> = source.lines().skip(16).take(240).collect();
    assert_eq!(rows.len(), 240);
    for row in &rows[..239] {
        assert_eq!(*row, format!("{},", expected_row));
    }
    assert_eq!(rows[239], expected_row);

    assert_eq!(source.lines().last(), Some("};"));
}

#[test]
fn test_generate_quad_source_exact_format() {
    let image = solid_image(PaletteMode::Quad2Bit, [255, 0, 170, 128]);
    let source = generate_source(&image, PaletteMode::Quad2Bit, None).unwrap();

    assert!(source.contains("#define PALETTE_8BIT\n#define OUTPUT_PORT\n"));
    assert!(source.contains("const unsigned short vPixels = 120; //Number of actual vertical pixels\n"));
    assert!(source.contains("const unsigned short hPixels = 57; //Number of actual horizontal pixels\n"));
    assert!(source.contains("const unsigned char vBytes = 120; //Number of rows in the frame buffer\n"));
    assert!(source.contains("const unsigned char hBytes = 57; //Number of bytes in a row of the frame buffer\n"));

    // R=255 G=0 B=170 encodes to 0x32; the stretched last column is blanked
    let mut expected_row = String::from("    {");
    expected_row.push_str(&"0x32,".repeat(56));
    expected_row.push_str("0x00}");

    let rows: Vec<&str> = source.lines().skip(16).take(120).collect();
    assert_eq!(rows.len(), 120);
    for row in &rows[..119] {
        assert_eq!(*row, format!("{},", expected_row));
    }
    assert_eq!(rows[119], expected_row);
}

#[test]
fn test_generate_is_deterministic() {
    let image = gradient_image(PaletteMode::Quad2Bit);

    let first = generate_source(&image, PaletteMode::Quad2Bit, None).unwrap();
    let second = generate_source(&image, PaletteMode::Quad2Bit, None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_generate_rejects_non_canonical_geometry() {
    let image = RasterImage::from_rgba(64, 64, vec![0; 64 * 64 * 4]).unwrap();

    let result = generate_source(&image, PaletteMode::Mono1Bit, Some(127));
    assert!(matches!(result, Err(GenerateError::PackFailed(_))));
}

#[test]
fn test_generate_rejects_missing_threshold() {
    let image = solid_image(PaletteMode::Mono1Bit, [0, 0, 0, 255]);

    let result = generate_source(&image, PaletteMode::Mono1Bit, None);
    assert!(matches!(result, Err(GenerateError::QuantizeFailed(_))));
}

#[test]
fn test_generate_threshold_ignored_in_quad_mode() {
    let image = solid_image(PaletteMode::Quad2Bit, [90, 90, 90, 255]);

    let with = generate_source(&image, PaletteMode::Quad2Bit, Some(40)).unwrap();
    let without = generate_source(&image, PaletteMode::Quad2Bit, None).unwrap();

    assert_eq!(with, without);
}
