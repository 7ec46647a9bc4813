//! The range slider widget.

use crate::bounds::{Bounds, TrackRect};
use crate::callback::Callback;
use crate::config::StyleConfig;
use crate::error::Result;
use crate::event::{Event, Handle};
use crate::options::{LabelPosition, SliderOptions, StyleSlot};
use crate::state::{DragPolicy, DragState, SliderState};
use crate::view::Node;

/// Final values of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeChange {
    pub start: f64,
    /// `None` in single-handle mode
    pub end: Option<f64>,
}

/// Format a value the way labels show it when no transform is set.
pub fn format_value(value: f64) -> String {
    // -0.0 would print as "-0"
    format!("{}", value + 0.0)
}

/// A dual-handle range slider.
///
/// Feed it pointer events with [`RangeSlider::on_event`] and render it with
/// [`RangeSlider::view`]. A completed drag produces the message built by the
/// `on_change` callback.
pub struct RangeSlider<M> {
    options: SliderOptions,
    bounds: Bounds,
    state: SliderState,
    style_config: StyleConfig,
    on_change: Callback<RangeChange, M>,
    label_transform: Callback<f64, String>,
}

impl<M> RangeSlider<M> {
    /// Validate options and create a slider in the idle state.
    pub fn new(options: SliderOptions) -> Result<Self> {
        let bounds = options.validate()?;
        let state = SliderState::new(options.initial_start(), options.initial_end());

        Ok(Self {
            options,
            bounds,
            state,
            style_config: StyleConfig::default(),
            on_change: Callback::none(),
            label_transform: Callback::none(),
        })
    }

    /// Set the callback fired once when a drag completes.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(RangeChange) -> M + 'static,
    {
        self.on_change = Callback::new(f);
        self
    }

    /// Set a custom label formatter.
    pub fn label_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> String + 'static,
    {
        self.label_transform = Callback::new(f);
        self
    }

    /// Set the default appearance.
    pub fn style_config(mut self, config: StyleConfig) -> Self {
        self.style_config = config;
        self
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn start(&self) -> f64 {
        self.state.start
    }

    /// Current end value, `None` in single-handle mode.
    pub fn end(&self) -> Option<f64> {
        (!self.options.disable_range).then_some(self.state.end)
    }

    /// Current values in the shape reported to `on_change`.
    pub fn value(&self) -> RangeChange {
        RangeChange {
            start: self.start(),
            end: self.end(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state.drag.is_dragging()
    }

    pub fn drag_state(&self) -> DragState {
        self.state.drag
    }

    fn policy(&self) -> DragPolicy {
        self.options.drag_policy()
    }

    /// Check if a part is present in the rendered slider.
    pub fn is_rendered(&self, handle: Handle) -> bool {
        match handle {
            Handle::Start => true,
            Handle::End | Handle::Range => !self.options.disable_range,
        }
    }

    /// Check if handling `event` reads the track extent.
    ///
    /// Only moves during a drag are mapped onto the track, so the extent can
    /// be left unmeasured for everything else.
    pub fn needs_track(&self, event: &Event) -> bool {
        matches!(event, Event::PointerMove { .. }) && self.is_dragging()
    }

    /// Handle a pointer event, optionally producing a change message.
    ///
    /// `track` is the current on-screen extent of the track element, used to
    /// map pointer moves onto values.
    pub fn on_event(&mut self, event: &Event, track: TrackRect) -> Option<M> {
        match event {
            Event::PointerDown { handle } => {
                if self.is_rendered(*handle) {
                    self.state.begin_drag(*handle);
                } else {
                    log::trace!("Ignoring pointer-down on hidden {handle}");
                }
                None
            }
            Event::PointerMove { x } => {
                if self.is_dragging() {
                    self.drag_to(*x, track);
                }
                None
            }
            Event::PointerUp => {
                if self.state.end_drag() {
                    self.on_change.call(self.value())
                } else {
                    None
                }
            }
        }
    }

    /// Move whatever is being dragged toward a pointer position.
    ///
    /// Returns `true` if the values changed.
    pub fn drag_to(&mut self, pointer_x: f64, track: TrackRect) -> bool {
        let Some(candidate) = self.bounds.pointer_to_value(pointer_x, track) else {
            log::trace!("Ignoring move over unusable track {track:?}");
            return false;
        };
        let policy = self.policy();
        self.state.drag_to(candidate, &self.bounds, policy)
    }

    /// Text shown for a value in a label.
    pub fn label_text(&self, value: f64) -> String {
        self.label_transform
            .call(value)
            .unwrap_or_else(|| format_value(value))
    }

    /// Render the slider as a tree of elements.
    pub fn view(&self) -> Node {
        let options = &self.options;
        let styling = &options.styling;
        let position = options.label_position;

        let mut container_slots = vec![StyleSlot::Container];
        match position {
            LabelPosition::Left => container_slots.push(StyleSlot::LabelsLeft),
            LabelPosition::Right => container_slots.push(StyleSlot::LabelsRight),
            _ => {}
        }
        let mut container = Node::new("div").classes(styling.merge(&container_slots));
        if position.is_horizontal() {
            container = container
                .style("display", "flex")
                .style("flex-direction", "row");
        }

        let labels = options.show_labels.then(|| self.view_labels());
        let track = self.view_track();

        match labels {
            Some(labels) if position.is_leading() => container.child(labels).child(track),
            Some(labels) => container.child(track).child(labels),
            None => container.child(track),
        }
    }

    fn view_labels(&self) -> Node {
        let styling = &self.options.styling;
        let position = self.options.label_position;
        let config = &self.style_config;

        let (property, gap) = match position {
            LabelPosition::Top => ("margin-bottom", config.label_gap_vertical),
            LabelPosition::Bottom => ("margin-top", config.label_gap_vertical),
            LabelPosition::Left => ("margin-right", config.label_gap_horizontal),
            LabelPosition::Right => ("margin-left", config.label_gap_horizontal),
        };

        let mut labels = Node::new("div")
            .classes(styling.merge(&[StyleSlot::LabelContainer, position.slot()]))
            .style(property, px(gap))
            .child(
                Node::new("div")
                    .classes(styling.merge(&[StyleSlot::Label, StyleSlot::StartLabel]))
                    .text(self.label_text(self.state.start)),
            );

        if !self.options.disable_range {
            labels = labels.child(
                Node::new("div")
                    .classes(styling.merge(&[StyleSlot::Label, StyleSlot::EndLabel]))
                    .text(self.label_text(self.state.end)),
            );
        }

        labels
    }

    fn view_track(&self) -> Node {
        let styling = &self.options.styling;
        let config = &self.style_config;
        let start_percent = self.bounds.value_to_percent(self.state.start);
        let end_percent = self.bounds.value_to_percent(self.state.end);

        let mut track = Node::new("div")
            .part("track")
            .classes(styling.merge(&[StyleSlot::Slider]))
            .style("background-color", config.track_color.to_css())
            .style("width", "100%")
            .style("height", px(config.track_height))
            .style("position", "relative");

        if !self.options.disable_range {
            let draggable = !self.options.disable_range_drag;
            let mut slots = vec![StyleSlot::Range];
            if draggable {
                slots.push(StyleSlot::Draggable);
            }

            let mut range = Node::new("div")
                .part(Handle::Range.part_name())
                .classes(styling.merge(&slots))
                .style("left", percent(start_percent))
                .style("width", percent(end_percent - start_percent))
                .style("background-color", config.range_color.to_css())
                .style("height", "100%")
                .style("position", "absolute");
            if draggable {
                range = range.style("cursor", "pointer");
            }
            track = track.child(range);
        }

        track = track.child(self.view_handle(Handle::Start, StyleSlot::StartHandle, start_percent));
        if !self.options.disable_range {
            track = track.child(self.view_handle(Handle::End, StyleSlot::EndHandle, end_percent));
        }

        track
    }

    fn view_handle(&self, handle: Handle, slot: StyleSlot, at: f64) -> Node {
        let config = &self.style_config;
        Node::new("span")
            .part(handle.part_name())
            .classes(self.options.styling.merge(&[StyleSlot::Handle, slot]))
            .style("left", percent(at))
            .style("background-color", config.handle_color.to_css())
            .style("width", px(config.handle_size))
            .style("height", px(config.handle_size))
            .style("position", "absolute")
            .style("top", "50%")
            .style("transform", "translate(-50%, -50%)")
            .style("cursor", "pointer")
    }
}

impl<M> std::fmt::Debug for RangeSlider<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSlider")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("on_change", &self.on_change)
            .field("label_transform", &self.label_transform)
            .finish_non_exhaustive()
    }
}

impl SliderOptions {
    /// Validate these options and build a slider.
    pub fn build<M>(self) -> Result<RangeSlider<M>> {
        RangeSlider::new(self)
    }
}

fn px(value: f32) -> String {
    format!("{value}px")
}

fn percent(value: f64) -> String {
    format!("{}%", value + 0.0)
}
