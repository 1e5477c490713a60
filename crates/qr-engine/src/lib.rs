//! QR code generation pipeline.
//!
//! Raw request parameters flow through four stages: parameter
//! resolution, symbol encoding, image rendering, and response framing.
//! Every stage is a synchronous, CPU-bound transformation with no
//! shared state, so callers may run the pipeline concurrently across
//! requests without locking.

pub mod encode;
pub mod error;
pub mod package;
pub mod params;
pub mod render;

// Re-exports for convenience
pub use encode::{ModuleMatrix, encode};
pub use error::PipelineError;
pub use package::{RenderedImage, package};
pub use params::{ColorSpec, EcLevel, GenerateParams, OutputFormat, ResolvedConfig};
pub use render::render;

/// Run the full pipeline: resolve, encode, render, package.
pub fn generate(params: &GenerateParams) -> Result<RenderedImage, PipelineError> {
    let config = ResolvedConfig::resolve(params)?;
    let matrix = encode(&config.content, config.ec_level)?;
    let bytes = render(&matrix, config.size, &config.color, config.format)?;
    Ok(package(bytes, config.format))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content: &str, format: &str) -> GenerateParams {
        GenerateParams {
            content: content.into(),
            size: None,
            color: None,
            error_correction: None,
            format: format.into(),
        }
    }

    #[test]
    fn generate_png_produces_attachment() {
        let image = generate(&request("https://example.com", "PNG")).unwrap();
        assert_eq!(image.media_type, "image/png");
        assert_eq!(image.file_name, "qr_code.png");
        assert!(!image.data.is_empty());
    }

    #[test]
    fn generate_svg_produces_markup() {
        let image = generate(&request("https://example.com", "svg")).unwrap();
        assert_eq!(image.media_type, "image/svg+xml");
        let svg = String::from_utf8(image.data).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn generate_rejects_empty_content() {
        let err = generate(&request("", "png")).unwrap_err();
        assert!(matches!(err, PipelineError::Validation(_)));
    }

    #[test]
    fn generate_rejects_oversized_content_at_high_level() {
        let mut params = request(&"A".repeat(5000), "png");
        params.error_correction = Some("H".into());
        let err = generate(&params).unwrap_err();
        assert!(matches!(err, PipelineError::Encoding(_)));
    }
}
