//! Request validation and normalization.

use serde::Deserialize;

use crate::error::PipelineError;

/// Default image size in pixels when the request does not specify one.
pub const DEFAULT_SIZE: u32 = 256;

/// Raw generation request as received from the HTTP layer.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateParams {
    pub content: String,
    pub size: Option<u32>,
    pub color: Option<String>,
    pub error_correction: Option<String>,
    pub format: String,
}

/// Error-correction level per the QR symbol specification.
///
/// Levels trade data capacity for resilience: L recovers ~7% corruption,
/// M ~15%, Q ~25%, H ~30%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcLevel {
    L,
    M,
    Q,
    H,
}

impl EcLevel {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Some(Self::L),
            "M" => Some(Self::M),
            "Q" => Some(Self::Q),
            "H" => Some(Self::H),
            _ => None,
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    /// Media type served with the rendered image.
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// Foreground and background colors applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    pub dark: [u8; 3],
    pub light: [u8; 3],
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self {
            dark: [0, 0, 0],
            light: [255, 255, 255],
        }
    }
}

impl ColorSpec {
    /// Parse a color specification.
    ///
    /// Accepts a single foreground color (`"#1a2b3c"`, `"#f00"`, or a
    /// named color) rendered on white, or a `dark/light` pair such as
    /// `"#000000/#f8fafc"`.
    fn parse(s: &str) -> Option<Self> {
        let mut spec = Self::default();
        match s.split_once('/') {
            Some((dark, light)) => {
                spec.dark = parse_rgb(dark)?;
                spec.light = parse_rgb(light)?;
            }
            None => spec.dark = parse_rgb(s)?,
        }
        Some(spec)
    }
}

fn parse_rgb(s: &str) -> Option<[u8; 3]> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "black" => return Some([0, 0, 0]),
        "white" => return Some([255, 255, 255]),
        "red" => return Some([255, 0, 0]),
        "green" => return Some([0, 128, 0]),
        "blue" => return Some([0, 0, 255]),
        "yellow" => return Some([255, 255, 0]),
        "orange" => return Some([255, 165, 0]),
        "purple" => return Some([128, 0, 128]),
        "gray" | "grey" => return Some([128, 128, 128]),
        _ => {}
    }

    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v << 4 | v;
            }
            Some(rgb)
        }
        6 => {
            let mut rgb = [0u8; 3];
            for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
                let pair = std::str::from_utf8(chunk).ok()?;
                rgb[i] = u8::from_str_radix(pair, 16).ok()?;
            }
            Some(rgb)
        }
        _ => None,
    }
}

/// Fully normalized generation request with all defaults applied.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub content: String,
    pub size: u32,
    pub color: ColorSpec,
    pub ec_level: EcLevel,
    pub format: OutputFormat,
}

impl ResolvedConfig {
    /// Validate a raw request and apply defaults.
    ///
    /// Pure function of its inputs; resolving the same request twice
    /// yields the same configuration.
    pub fn resolve(params: &GenerateParams) -> Result<Self, PipelineError> {
        if params.content.trim().is_empty() {
            return Err(PipelineError::Validation("content must not be empty".into()));
        }

        let ec_level = match &params.error_correction {
            Some(s) => EcLevel::parse(s).ok_or_else(|| {
                PipelineError::Validation(format!(
                    "unknown error correction level '{s}' (expected L, M, Q, or H)"
                ))
            })?,
            None => EcLevel::L,
        };

        let format = OutputFormat::parse(&params.format).ok_or_else(|| {
            PipelineError::Validation(format!(
                "unsupported output format '{}' (expected png or svg)",
                params.format
            ))
        })?;

        let size = match params.size {
            Some(0) => {
                return Err(PipelineError::Validation("size must be positive".into()));
            }
            Some(size) => size,
            None => DEFAULT_SIZE,
        };

        let color = match &params.color {
            Some(s) => ColorSpec::parse(s).ok_or_else(|| {
                PipelineError::Validation(format!("unrecognized color '{s}'"))
            })?,
            None => ColorSpec::default(),
        };

        Ok(Self {
            content: params.content.clone(),
            size,
            color,
            ec_level,
            format,
        })
    }
}
