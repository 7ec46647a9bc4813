//! Errors raised while mounting a slider into the page.

use range_slider_ui::SliderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("No global window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    /// A DOM call threw; carries the stringified JS exception
    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Invalid slider options: {0}")]
    Slider(#[from] SliderError),
}

pub type Result<T> = std::result::Result<T, MountError>;
