//! range_slider - A dual-handle range slider for web pages
//!
//! The widget itself lives in `range_slider_ui` and is re-exported here. On
//! `wasm32` this crate adds the browser binding: `MountedSlider` renders a
//! slider into the DOM and owns its event listeners, and `JsRangeSlider` is
//! the class exported to JavaScript.

mod error;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::{MountError, Result};
pub use range_slider_ui::*;

#[cfg(target_arch = "wasm32")]
pub use dom::MountedSlider;
#[cfg(target_arch = "wasm32")]
pub use wasm::{JsRangeSlider, init_logging};
