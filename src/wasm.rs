//! JavaScript-facing API.
//!
//! ```js
//! import { initRangeSlider, RangeSlider } from "./range_slider.js";
//!
//! initRangeSlider("debug");
//! const slider = new RangeSlider(
//!   document.getElementById("price"),
//!   { min: 0, max: 500, increment: 10, showLabels: true, labelPosition: "top" },
//!   (start, end) => console.log(start, end),
//!   (value) => `$${value}`,
//! );
//! // later
//! slider.destroy();
//! ```

use std::str::FromStr;

use js_sys::Function;
use range_slider_ui::{RangeChange, SliderOptions, format_value};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::MountedSlider;
use crate::error::MountError;

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Route `log` output to the browser console at the given level.
pub fn init_logging(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Install the panic hook and console logger. Call once before creating sliders.
#[wasm_bindgen(js_name = initRangeSlider)]
pub fn init_range_slider(log_level: Option<String>) {
    console_error_panic_hook::set_once();

    let parsed = log_level.as_deref().map(log::Level::from_str);
    init_logging(match &parsed {
        Some(Ok(level)) => *level,
        _ => log::Level::Info,
    });

    if let Some(Err(_)) = parsed {
        log::warn!("Unknown log level {log_level:?}, using info");
    }
}

fn notify(on_change: &Function, change: RangeChange) {
    let end = change.end.map_or(JsValue::NULL, JsValue::from_f64);
    if let Err(e) = on_change.call2(&JsValue::NULL, &JsValue::from_f64(change.start), &end) {
        log::error!("onChange threw: {e:?}");
    }
}

fn transform_label(transform: &Function, value: f64) -> String {
    match transform.call1(&JsValue::NULL, &JsValue::from_f64(value)) {
        Ok(label) => label
            .as_string()
            .or_else(|| label.as_f64().map(format_value))
            .unwrap_or_else(|| format_value(value)),
        Err(e) => {
            log::warn!("labelTransform threw: {e:?}");
            format_value(value)
        }
    }
}

/// A range slider mounted into a page element.
#[wasm_bindgen(js_name = RangeSlider)]
pub struct JsRangeSlider {
    mounted: MountedSlider<RangeChange>,
}

#[wasm_bindgen(js_class = RangeSlider)]
impl JsRangeSlider {
    /// Mount a slider into `parent`.
    ///
    /// `options` is a plain object with the camelCase option names. Throws on
    /// invalid options.
    #[wasm_bindgen(constructor)]
    pub fn new(
        parent: &Element,
        options: &JsValue,
        on_change: Option<Function>,
        label_transform: Option<Function>,
    ) -> Result<JsRangeSlider, JsValue> {
        let json: String = js_sys::JSON::stringify(options)?.into();
        let options = SliderOptions::from_json(&json).map_err(MountError::from)?;

        let mut slider = options
            .build::<RangeChange>()
            .map_err(MountError::from)?
            .on_change(|change| change);
        if let Some(transform) = label_transform {
            slider = slider.label_transform(move |value| transform_label(&transform, value));
        }

        let mounted = MountedSlider::mount(parent, slider, move |change| {
            if let Some(ref on_change) = on_change {
                notify(on_change, change);
            }
        })?;

        Ok(Self { mounted })
    }

    #[wasm_bindgen(getter)]
    pub fn start(&self) -> f64 {
        self.mounted.value().start
    }

    /// End value, `null` in single-handle mode.
    #[wasm_bindgen(getter)]
    pub fn end(&self) -> Option<f64> {
        self.mounted.value().end
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.mounted.is_dragging()
    }

    /// Remove the slider and its document listeners.
    pub fn destroy(self) {
        drop(self);
    }
}
