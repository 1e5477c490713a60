//! QR symbol encoding.
//!
//! Symbol construction (segmentation, version selection, Reed-Solomon
//! codewords, module placement) is delegated to the `qrcode` crate;
//! getting the error-correction arithmetic subtly wrong breaks
//! scanability silently, so it is not reimplemented here.

use qrcode::{EcLevel as QrEcLevel, QrCode};

use crate::error::PipelineError;
use crate::params::EcLevel;

/// Square grid of QR modules, row-major, `true` = dark.
///
/// Carries no quiet zone; the renderer owns the border.
#[derive(Debug, Clone)]
pub struct ModuleMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Module count along one side.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }
}

/// Encode `content` into a module matrix at the requested level.
///
/// The smallest symbol version that fits the content is selected
/// automatically. Content exceeding the capacity of version 40 at the
/// requested level fails with [`PipelineError::Encoding`].
pub fn encode(content: &str, ec_level: EcLevel) -> Result<ModuleMatrix, PipelineError> {
    let level = match ec_level {
        EcLevel::L => QrEcLevel::L,
        EcLevel::M => QrEcLevel::M,
        EcLevel::Q => QrEcLevel::Q,
        EcLevel::H => QrEcLevel::H,
    };

    let code = QrCode::with_error_correction_level(content.as_bytes(), level)
        .map_err(|e| PipelineError::Encoding(e.to_string()))?;

    let width = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect();

    tracing::debug!(width, ?ec_level, "encoded QR symbol");
    Ok(ModuleMatrix { width, modules })
}
