//! Browser binding: renders a slider into the DOM and wires its listeners.
//!
//! Pointer-down is listened for on the slider's own host element. Moves and
//! releases are listened for on the whole document so a drag keeps tracking
//! when the pointer leaves the widget. Every listener is owned by a
//! [`Listener`] guard and removed when the [`MountedSlider`] is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use range_slider_ui::{Event, Handle, Node, RangeChange, RangeSlider, TrackRect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, MouseEvent};

use crate::error::{MountError, Result};

fn js_error(value: JsValue) -> MountError {
    MountError::Dom(format!("{value:?}"))
}

/// A mouse event listener that deregisters itself when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl Listener {
    fn add<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.kind, e);
        }
    }
}

/// State shared between the mount guard and its listeners.
struct Shared<M> {
    slider: RangeSlider<M>,
    document: Document,
    host: Element,
}

impl<M> Shared<M> {
    /// Replace the host's content with a fresh render of the slider.
    fn render(&self) -> Result<()> {
        let root = build_element(&self.document, &self.slider.view())?;
        self.host.set_inner_html("");
        self.host.append_child(&root).map_err(js_error)?;
        Ok(())
    }

    /// Current on-screen extent of the track element.
    fn track_rect(&self) -> TrackRect {
        match self.host.query_selector("[data-part=\"track\"]") {
            Ok(Some(track)) => {
                let rect = track.get_bounding_client_rect();
                TrackRect::new(rect.left(), rect.width())
            }
            _ => TrackRect::new(0.0, 0.0),
        }
    }
}

fn build_element(document: &Document, node: &Node) -> Result<Element> {
    let element = document.create_element(node.tag).map_err(js_error)?;

    if let Some(part) = node.part {
        element.set_attribute("data-part", part).map_err(js_error)?;
    }
    if let Some(class) = node.class_attr() {
        element.set_class_name(&class);
    }
    if let Some(style) = node.style_attr() {
        element.set_attribute("style", &style).map_err(js_error)?;
    }
    if let Some(ref text) = node.text {
        element.set_text_content(Some(text));
    }
    for child in &node.children {
        element
            .append_child(&build_element(document, child)?)
            .map_err(js_error)?;
    }

    Ok(element)
}

/// Which slider part a mouse event landed on, from its `data-part` attribute.
fn event_handle(event: &MouseEvent) -> Option<Handle> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .get_attribute("data-part")?
        .parse()
        .ok()
}

/// Feed one event to the slider, re-render on value changes, and hand any
/// change message to `dispatch` once the state is no longer borrowed.
fn handle_event<M>(shared: &RefCell<Shared<M>>, dispatch: &dyn Fn(M), event: Event) {
    let message = {
        let Ok(mut shared) = shared.try_borrow_mut() else {
            log::warn!("Dropping {event:?}: slider is busy");
            return;
        };

        let before = *shared.slider.state();
        // Layout is only measured for moves that drive a drag
        let track = if shared.slider.needs_track(&event) {
            shared.track_rect()
        } else {
            TrackRect::new(0.0, 0.0)
        };
        let message = shared.slider.on_event(&event, track);
        let after = shared.slider.state();

        if before.start != after.start || before.end != after.end {
            if let Err(e) = shared.render() {
                log::error!("Failed to re-render slider: {e}");
            }
        }
        message
    };

    if let Some(message) = message {
        dispatch(message);
    }
}

/// A slider rendered into the page.
///
/// Dropping this removes the slider's elements and all of its listeners.
pub struct MountedSlider<M: 'static> {
    shared: Rc<RefCell<Shared<M>>>,
    _listeners: Vec<Listener>,
}

impl<M: 'static> MountedSlider<M> {
    /// Render `slider` into a new element appended to `parent`.
    ///
    /// Messages produced by completed drags are passed to `dispatch`.
    pub fn mount<F>(parent: &Element, slider: RangeSlider<M>, dispatch: F) -> Result<Self>
    where
        F: Fn(M) + 'static,
    {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let host = document.create_element("div").map_err(js_error)?;
        parent.append_child(&host).map_err(js_error)?;

        let shared = Rc::new(RefCell::new(Shared {
            slider,
            document: document.clone(),
            host: host.clone(),
        }));
        if let Err(e) = shared.borrow().render() {
            host.remove();
            return Err(e);
        }

        let dispatch: Rc<dyn Fn(M)> = Rc::new(dispatch);
        let listeners = match Self::listen(&shared, &dispatch, &host, &document) {
            Ok(listeners) => listeners,
            Err(e) => {
                host.remove();
                return Err(e);
            }
        };

        log::debug!("Mounted range slider");
        Ok(Self {
            shared,
            _listeners: listeners,
        })
    }

    fn listen(
        shared: &Rc<RefCell<Shared<M>>>,
        dispatch: &Rc<dyn Fn(M)>,
        host: &Element,
        document: &Document,
    ) -> Result<Vec<Listener>> {
        let mut listeners = Vec::with_capacity(3);

        let (s, d) = (Rc::clone(shared), Rc::clone(dispatch));
        listeners.push(Listener::add(host, "mousedown", move |event: MouseEvent| {
            if let Some(handle) = event_handle(&event) {
                handle_event(&s, &*d, Event::PointerDown { handle });
            }
        })?);

        let (s, d) = (Rc::clone(shared), Rc::clone(dispatch));
        listeners.push(Listener::add(document, "mousemove", move |event: MouseEvent| {
            let x = f64::from(event.client_x());
            handle_event(&s, &*d, Event::PointerMove { x });
        })?);

        let (s, d) = (Rc::clone(shared), Rc::clone(dispatch));
        listeners.push(Listener::add(document, "mouseup", move |_: MouseEvent| {
            handle_event(&s, &*d, Event::PointerUp);
        })?);

        Ok(listeners)
    }

    /// Current values of the slider.
    pub fn value(&self) -> RangeChange {
        self.shared.borrow().slider.value()
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.borrow().slider.is_dragging()
    }

    /// The element the slider is rendered into.
    pub fn host(&self) -> Element {
        self.shared.borrow().host.clone()
    }
}

impl<M: 'static> Drop for MountedSlider<M> {
    fn drop(&mut self) {
        if let Ok(shared) = self.shared.try_borrow() {
            shared.host.remove();
        }
        log::debug!("Unmounted range slider");
    }
}
