//! Slider options.
//!
//! Options serialize with camelCase keys so a plain JavaScript props object
//! (`{ min: 0, max: 100, disableRange: true }`) deserializes directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{Result, SliderError};
use crate::state::DragPolicy;

/// Where value labels are placed relative to the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Above the track
    Top,
    /// Below the track
    #[default]
    Bottom,
    /// Left of the track, on the same row
    Left,
    /// Right of the track, on the same row
    Right,
}

impl LabelPosition {
    /// Check if labels are rendered before the track.
    pub fn is_leading(&self) -> bool {
        matches!(self, LabelPosition::Top | LabelPosition::Left)
    }

    /// Check if labels share a row with the track.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, LabelPosition::Left | LabelPosition::Right)
    }

    /// The style slot carrying this position's class name.
    pub fn slot(&self) -> StyleSlot {
        match self {
            LabelPosition::Top => StyleSlot::Top,
            LabelPosition::Bottom => StyleSlot::Bottom,
            LabelPosition::Left => StyleSlot::Left,
            LabelPosition::Right => StyleSlot::Right,
        }
    }
}

/// Named places a caller can attach a class name to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleSlot {
    Container,
    LabelsLeft,
    LabelsRight,
    LabelContainer,
    Top,
    Bottom,
    Left,
    Right,
    Label,
    StartLabel,
    EndLabel,
    Slider,
    Range,
    Draggable,
    Handle,
    StartHandle,
    EndHandle,
}

/// Caller-supplied class names, keyed by slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styling {
    classes: BTreeMap<StyleSlot, String>,
}

impl Styling {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name for a slot.
    pub fn with(mut self, slot: StyleSlot, class: impl Into<String>) -> Self {
        self.classes.insert(slot, class.into());
        self
    }

    /// Class name for a slot, if one was given and it is not blank.
    pub fn class(&self, slot: StyleSlot) -> Option<&str> {
        self.classes
            .get(&slot)
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }

    /// Merge the classes of several slots, skipping missing ones.
    pub fn merge(&self, slots: &[StyleSlot]) -> Vec<String> {
        slots
            .iter()
            .filter_map(|&slot| self.class(slot))
            .map(str::to_owned)
            .collect()
    }
}

fn default_increment() -> f64 {
    1.0
}

/// Everything about a slider that can be written down as data.
///
/// Callbacks are attached to the built [`RangeSlider`](crate::RangeSlider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderOptions {
    pub min: f64,
    pub max: f64,
    /// Initial start value, `min` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// Initial end value, `max` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(default = "default_increment")]
    pub increment: f64,
    #[serde(default)]
    pub disable_range: bool,
    #[serde(default)]
    pub disable_range_drag: bool,
    #[serde(default)]
    pub flexible_range: bool,
    #[serde(default)]
    pub show_labels: bool,
    #[serde(default)]
    pub label_position: LabelPosition,
    #[serde(default)]
    pub styling: Styling,
}

impl SliderOptions {
    /// Options for a slider spanning `[min, max]` with an increment of 1.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            start: None,
            end: None,
            increment: default_increment(),
            disable_range: false,
            disable_range_drag: false,
            flexible_range: false,
            show_labels: false,
            label_position: LabelPosition::default(),
            styling: Styling::default(),
        }
    }

    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the initial start value.
    pub fn start(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the initial end value.
    pub fn end(mut self, end: f64) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the snapping step.
    pub fn increment(mut self, increment: f64) -> Self {
        self.increment = increment;
        self
    }

    /// Use a single handle.
    pub fn disable_range(mut self, disable: bool) -> Self {
        self.disable_range = disable;
        self
    }

    /// Prevent dragging the range bar as a whole.
    pub fn disable_range_drag(mut self, disable: bool) -> Self {
        self.disable_range_drag = disable;
        self
    }

    /// Let range drags clamp at the bounds instead of stopping.
    pub fn flexible_range(mut self, flexible: bool) -> Self {
        self.flexible_range = flexible;
        self
    }

    /// Show value labels.
    pub fn show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Set where labels are placed.
    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    /// Set caller class names.
    pub fn styling(mut self, styling: Styling) -> Self {
        self.styling = styling;
        self
    }

    /// Initial start value after defaulting.
    pub fn initial_start(&self) -> f64 {
        self.start.unwrap_or(self.min)
    }

    /// Initial end value after defaulting.
    pub fn initial_end(&self) -> f64 {
        self.end.unwrap_or(self.max)
    }

    /// Behavior flags for the drag state machine.
    pub fn drag_policy(&self) -> DragPolicy {
        DragPolicy {
            disable_range: self.disable_range,
            disable_range_drag: self.disable_range_drag,
            flexible_range: self.flexible_range,
        }
    }

    /// Check the options and return the validated bounds.
    ///
    /// The end value is only checked when the range is enabled, since
    /// single-handle mode never reads it.
    pub fn validate(&self) -> Result<Bounds> {
        let bounds = Bounds::new(self.min, self.max, self.increment)?;

        let start = self.initial_start();
        check_initial("start", start, &bounds)?;

        if !self.disable_range {
            let end = self.initial_end();
            check_initial("end", end, &bounds)?;
            if start > end {
                return Err(SliderError::StartAfterEnd { start, end });
            }
        }

        Ok(bounds)
    }
}

fn check_initial(field: &'static str, value: f64, bounds: &Bounds) -> Result<()> {
    if !value.is_finite() {
        return Err(SliderError::NonFinite { field, value });
    }
    if !bounds.contains(value) {
        return Err(SliderError::OutOfBounds {
            field,
            value,
            min: bounds.min(),
            max: bounds.max(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_defaults() {
        let options = SliderOptions::from_json(r#"{ "min": 0, "max": 50 }"#).unwrap();
        assert_eq!(options, SliderOptions::new(0.0, 50.0));
        assert_eq!(options.increment, 1.0);
        assert_eq!(options.initial_start(), 0.0);
        assert_eq!(options.initial_end(), 50.0);
        assert_eq!(options.label_position, LabelPosition::Bottom);
    }

    #[test]
    fn test_json_camel_case_fields() {
        let options = SliderOptions::from_json(
            r#"{
                "min": -10,
                "max": 10,
                "start": -5,
                "increment": 5,
                "disableRange": true,
                "flexibleRange": true,
                "showLabels": true,
                "labelPosition": "left",
                "styling": { "startHandle": "knob", "labelsLeft": "row" }
            }"#,
        )
        .unwrap();

        assert_eq!(options.start, Some(-5.0));
        assert!(options.disable_range);
        assert!(!options.disable_range_drag);
        assert!(options.flexible_range);
        assert_eq!(options.label_position, LabelPosition::Left);
        assert_eq!(options.styling.class(StyleSlot::StartHandle), Some("knob"));
        assert_eq!(options.styling.class(StyleSlot::LabelsLeft), Some("row"));
    }

    #[test]
    fn test_json_rejects_unknown_slot_and_missing_bounds() {
        assert!(matches!(
            SliderOptions::from_json(r#"{ "min": 0, "max": 1, "styling": { "knob": "x" } }"#),
            Err(SliderError::Json(_))
        ));
        assert!(matches!(
            SliderOptions::from_json(r#"{ "min": 0 }"#),
            Err(SliderError::Json(_))
        ));
        assert!(matches!(
            SliderOptions::from_json(r#"{ "min": 0, "max": 1, "labelPosition": "middle" }"#),
            Err(SliderError::Json(_))
        ));
    }

    #[test]
    fn test_validate_initial_values() {
        assert!(SliderOptions::new(0.0, 10.0).start(2.0).end(8.0).validate().is_ok());
        assert!(SliderOptions::new(0.0, 10.0).start(5.0).end(5.0).validate().is_ok());

        assert!(matches!(
            SliderOptions::new(0.0, 10.0).start(-1.0).validate(),
            Err(SliderError::OutOfBounds { field: "start", .. })
        ));
        assert!(matches!(
            SliderOptions::new(0.0, 10.0).end(11.0).validate(),
            Err(SliderError::OutOfBounds { field: "end", .. })
        ));
        assert!(matches!(
            SliderOptions::new(0.0, 10.0).start(8.0).end(2.0).validate(),
            Err(SliderError::StartAfterEnd { .. })
        ));
    }

    #[test]
    fn test_single_handle_ignores_end() {
        let options = SliderOptions::new(0.0, 10.0)
            .disable_range(true)
            .start(8.0)
            .end(2.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_styling_merge_skips_missing_and_blank() {
        let styling = Styling::new()
            .with(StyleSlot::Handle, "handle")
            .with(StyleSlot::StartHandle, "  ")
            .with(StyleSlot::EndHandle, "end");

        assert_eq!(
            styling.merge(&[StyleSlot::Handle, StyleSlot::StartHandle]),
            vec!["handle".to_string()]
        );
        assert_eq!(
            styling.merge(&[StyleSlot::Handle, StyleSlot::EndHandle, StyleSlot::Range]),
            vec!["handle".to_string(), "end".to_string()]
        );
    }

    #[test]
    fn test_label_position_layout() {
        assert!(LabelPosition::Top.is_leading());
        assert!(LabelPosition::Left.is_leading());
        assert!(!LabelPosition::Bottom.is_leading());
        assert!(LabelPosition::Right.is_horizontal());
        assert!(!LabelPosition::Top.is_horizontal());
        assert_eq!(LabelPosition::Right.slot(), StyleSlot::Right);
    }
}
