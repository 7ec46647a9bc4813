//! range_slider_ui - A dual-handle range slider widget
//!
//! This crate holds everything about the slider that does not touch a real
//! DOM: value math, the drag state machine, options, and a render tree that a
//! host (browser binding, server-side prerenderer, tests) can materialize.
//!
//! ```ignore
//! use range_slider_ui::{Event, Handle, RangeChange, SliderOptions, TrackRect};
//!
//! let mut slider = SliderOptions::new(0.0, 100.0)
//!     .increment(10.0)
//!     .build()?
//!     .on_change(|change: RangeChange| change);
//!
//! let track = TrackRect::new(0.0, 100.0);
//! slider.on_event(&Event::PointerDown { handle: Handle::Start }, track);
//! slider.on_event(&Event::PointerMove { x: 47.0 }, track);
//! let change = slider.on_event(&Event::PointerUp, track);
//! assert_eq!(change.map(|c| c.start), Some(40.0));
//! ```

mod bounds;
mod callback;
mod config;
mod error;
mod event;
mod options;
mod state;
mod view;
mod widget;

pub use bounds::{Bounds, TrackRect};
pub use callback::Callback;
pub use config::{Color, StyleConfig};
pub use error::{Result, SliderError};
pub use event::{Event, Handle};
pub use options::{LabelPosition, SliderOptions, StyleSlot, Styling};
pub use state::{DragOffsets, DragPolicy, DragState, SliderState};
pub use view::Node;
pub use widget::{format_value, RangeChange, RangeSlider};
