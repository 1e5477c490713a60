//! Response framing for rendered images.

use crate::params::OutputFormat;

/// A rendered image ready to stream back to the client.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub data: Vec<u8>,
    pub media_type: &'static str,
    pub file_name: String,
}

/// Wrap renderer output with its media type and download file name.
pub fn package(data: Vec<u8>, format: OutputFormat) -> RenderedImage {
    RenderedImage {
        data,
        media_type: format.media_type(),
        file_name: format!("qr_code.{}", format.extension()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_png() {
        let image = package(vec![1, 2, 3], OutputFormat::Png);
        assert_eq!(image.media_type, "image/png");
        assert_eq!(image.file_name, "qr_code.png");
        assert_eq!(image.data, vec![1, 2, 3]);
    }

    #[test]
    fn package_svg() {
        let image = package(Vec::new(), OutputFormat::Svg);
        assert_eq!(image.media_type, "image/svg+xml");
        assert_eq!(image.file_name, "qr_code.svg");
    }

    #[test]
    fn file_name_is_deterministic() {
        let a = package(Vec::new(), OutputFormat::Png);
        let b = package(Vec::new(), OutputFormat::Png);
        assert_eq!(a.file_name, b.file_name);
    }
}
