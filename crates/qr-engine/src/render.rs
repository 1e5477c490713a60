//! Rasterization and vectorization of module matrices.

use std::fmt::Write as _;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};

use crate::encode::ModuleMatrix;
use crate::error::PipelineError;
use crate::params::{ColorSpec, OutputFormat};

/// Quiet-zone width in modules on each side of the symbol, per the QR
/// specification minimum.
pub const QUIET_ZONE: u32 = 4;

/// Render a module matrix into the requested output format.
///
/// The quiet zone is added here in the light color; `size` is the
/// minimum edge length of the final image in pixels (raster) or user
/// units (vector).
pub fn render(
    matrix: &ModuleMatrix,
    size: u32,
    color: &ColorSpec,
    format: OutputFormat,
) -> Result<Vec<u8>, PipelineError> {
    if size == 0 {
        return Err(PipelineError::Render("size must be positive".into()));
    }
    match format {
        OutputFormat::Png => render_png(matrix, size, color),
        OutputFormat::Svg => Ok(render_svg(matrix, size, color)),
    }
}

fn render_png(matrix: &ModuleMatrix, size: u32, color: &ColorSpec) -> Result<Vec<u8>, PipelineError> {
    let modules = matrix.width() as u32 + 2 * QUIET_ZONE;
    // Integer pixels per module, >= 1, so the image reaches `size`.
    let scale = size.div_ceil(modules).max(1);
    let img_size = modules * scale;

    let mut img = RgbImage::from_pixel(img_size, img_size, Rgb(color.light));
    for y in 0..matrix.width() {
        for x in 0..matrix.width() {
            if !matrix.get(x, y) {
                continue;
            }
            let px0 = (x as u32 + QUIET_ZONE) * scale;
            let py0 = (y as u32 + QUIET_ZONE) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(px0 + dx, py0 + dy, Rgb(color.dark));
                }
            }
        }
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(img.as_raw(), img_size, img_size, ExtendedColorType::Rgb8)
        .map_err(|e| PipelineError::Render(format!("PNG encoding failed: {e}")))?;
    Ok(out)
}

fn render_svg(matrix: &ModuleMatrix, size: u32, color: &ColorSpec) -> Vec<u8> {
    let modules = matrix.width() as u32 + 2 * QUIET_ZONE;
    let dark = hex_color(color.dark);
    let light = hex_color(color.light);

    let mut svg = String::with_capacity(64 * matrix.width() * matrix.width());
    let _ = write!(
        svg,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
         viewBox=\"0 0 {modules} {modules}\" shape-rendering=\"crispEdges\">\n\
         <rect width=\"{modules}\" height=\"{modules}\" fill=\"{light}\"/>\n"
    );
    for y in 0..matrix.width() {
        for x in 0..matrix.width() {
            if !matrix.get(x, y) {
                continue;
            }
            let mx = x as u32 + QUIET_ZONE;
            let my = y as u32 + QUIET_ZONE;
            let _ = write!(
                svg,
                "<rect x=\"{mx}\" y=\"{my}\" width=\"1\" height=\"1\" fill=\"{dark}\"/>\n"
            );
        }
    }
    svg.push_str("</svg>\n");
    svg.into_bytes()
}

fn hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use crate::params::EcLevel;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn matrix() -> ModuleMatrix {
        encode("https://example.com", EcLevel::L).unwrap()
    }

    #[test]
    fn png_output_has_magic_bytes() {
        let data = render(&matrix(), 256, &ColorSpec::default(), OutputFormat::Png).unwrap();
        assert_eq!(&data[..8], &PNG_MAGIC);
    }

    #[test]
    fn png_reaches_requested_size() {
        let matrix = matrix();
        let data = render(&matrix, 300, &ColorSpec::default(), OutputFormat::Png).unwrap();
        let img = image::load_from_memory(&data).unwrap();
        assert!(img.width() >= 300);
        assert_eq!(img.width(), img.height());

        let modules = matrix.width() as u32 + 2 * QUIET_ZONE;
        assert_eq!(img.width() % modules, 0);
    }

    #[test]
    fn png_quiet_zone_uses_light_color() {
        let data = render(&matrix(), 128, &ColorSpec::default(), OutputFormat::Png).unwrap();
        let img = image::load_from_memory(&data).unwrap().to_rgb8();
        let edge = img.width() - 1;
        for (x, y) in [(0, 0), (edge, 0), (0, edge), (edge, edge)] {
            assert_eq!(img.get_pixel(x, y).0, [255, 255, 255]);
        }
    }

    #[test]
    fn png_applies_foreground_color() {
        let color = ColorSpec {
            dark: [0x12, 0x34, 0x56],
            light: [255, 255, 255],
        };
        let data = render(&matrix(), 128, &color, OutputFormat::Png).unwrap();
        let img = image::load_from_memory(&data).unwrap().to_rgb8();
        assert!(img.pixels().any(|p| p.0 == [0x12, 0x34, 0x56]));
    }

    #[test]
    fn svg_embeds_colors_and_dimensions() {
        let color = ColorSpec {
            dark: [0x0f, 0x17, 0x2a],
            light: [0xf8, 0xfa, 0xfc],
        };
        let data = render(&matrix(), 280, &color, OutputFormat::Svg).unwrap();
        let svg = String::from_utf8(data).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("width=\"280\" height=\"280\""));
        assert!(svg.contains("#0f172a"), "dark color should be embedded");
        assert!(svg.contains("#f8fafc"), "light color should be embedded");
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn render_rejects_zero_size() {
        let err = render(&matrix(), 0, &ColorSpec::default(), OutputFormat::Png).unwrap_err();
        assert!(matches!(err, PipelineError::Render(_)));
    }
}
