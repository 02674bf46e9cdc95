//! Host element bindings.
//!
//! One exported wrapper per widget. A thin JS shim registers the custom
//! element and forwards `connectedCallback` / `attributeChangedCallback` /
//! `disconnectedCallback` to these types; everything else happens here.
//!
//! Every widget state change applies its own subtree updates before its
//! attribute reflection reaches the host, so re-entrant host reactions
//! that arrive while the binding is borrowed can be skipped safely.

use crate::events;
use crate::shadow::DomSubtree;
use encajar_core::{attribute, Event, HostDirective, LightChild, Widget};
use encajar_widgets::{Alert, Tabs, Toggle};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

/// Initialize panic reporting and console logging once per module load.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

struct Binding<W: Widget> {
    host: HtmlElement,
    widget: W,
    subtree: DomSubtree,
    removal_timer: Option<Timeout>,
}

impl<W: Widget> Binding<W> {
    fn new(host: HtmlElement, widget: W) -> Option<Self> {
        let subtree = DomSubtree::attach(&host)?;
        Some(Self {
            host,
            widget,
            subtree,
            removal_timer: None,
        })
    }

    fn connected(&mut self) {
        let children = light_children(&self.host);
        let names = self.widget.observed_attributes();
        let attrs: Vec<(String, String)> = names
            .iter()
            .filter_map(|name| {
                self.host
                    .get_attribute(name)
                    .map(|value| ((*name).to_string(), value))
            })
            .collect();
        let directives = self
            .widget
            .connected(&children, &attrs, &mut self.subtree);
        self.process(directives, None);
    }

    fn attribute_changed(&mut self, name: &str, old: Option<&str>, new: Option<&str>) {
        if !attribute::changed(old, new) {
            return;
        }
        if !self.widget.observed_attributes().iter().any(|a| *a == name) {
            return;
        }
        let directives = self.widget.attribute_changed(name, new, &mut self.subtree);
        self.process(directives, None);
    }

    fn on_event(&mut self, event: &Event, raw: &web_sys::Event) {
        let directives = self.widget.event(event, &mut self.subtree);
        self.process(directives, Some(raw));
    }

    fn process(&mut self, directives: Vec<HostDirective>, raw: Option<&web_sys::Event>) {
        for directive in directives {
            match directive {
                HostDirective::ReflectAttribute { name, value } => match value {
                    Some(v) => {
                        let _ = self.host.set_attribute(name, &v);
                    }
                    None => {
                        let _ = self.host.remove_attribute(name);
                    }
                },
                HostDirective::Notify { event, detail } => self.dispatch(event, &detail),
                HostDirective::RemoveHost => {
                    self.removal_timer = None;
                    self.host.remove();
                }
                HostDirective::CancelRemovalTimer => self.removal_timer = None,
                HostDirective::ScheduleRemoval { seconds } => {
                    let host = self.host.clone();
                    // Assigning drops (and thereby cancels) the old timer.
                    self.removal_timer = Some(Timeout::new(
                        seconds.saturating_mul(1000),
                        move || host.remove(),
                    ));
                }
                HostDirective::PreventDefault => {
                    if let Some(event) = raw {
                        event.prevent_default();
                    }
                }
            }
        }
    }

    fn dispatch(&self, name: &str, detail: &serde_json::Value) {
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        let payload =
            js_sys::JSON::parse(&detail.to_string()).unwrap_or(JsValue::NULL);
        init.set_detail(&payload);
        match CustomEvent::new_with_event_init_dict(name, &init) {
            Ok(event) => {
                let _ = self.host.dispatch_event(&event);
            }
            Err(_) => log::warn!("failed to construct {name} event"),
        }
    }

    /// Structural change in the light DOM: re-derive the model from the
    /// current children and rebuild the rendered view whole.
    fn children_changed(&mut self) {
        let children = light_children(&self.host);
        self.widget.rebuild(&children);
        self.widget.render(&mut self.subtree);
    }

    fn disconnected(&mut self) {
        self.removal_timer = None;
    }
}

/// Snapshot the host's light-DOM children.
fn light_children(host: &HtmlElement) -> Vec<LightChild> {
    let collection = host.children();
    let mut out = Vec::with_capacity(collection.length() as usize);
    for i in 0..collection.length() {
        if let Some(element) = collection.item(i) {
            let mut child = LightChild::new();
            if let Some(slot) = element.get_attribute("slot") {
                child = child.slot(slot);
            }
            for key in ["label", "icon", "visible"] {
                if let Some(value) = element.get_attribute(&format!("data-{key}")) {
                    child = child.data(key, value);
                }
            }
            out.push(child);
        }
    }
    out
}

fn listen<W: Widget + 'static>(
    binding: &Rc<RefCell<Binding<W>>>,
    closures: &mut Vec<Closure<dyn FnMut(web_sys::Event)>>,
    kind: &str,
    convert: fn(&web_sys::Event) -> Option<Event>,
) {
    let shared = Rc::clone(binding);
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |raw: web_sys::Event| {
        if let Some(event) = convert(&raw) {
            if let Ok(mut binding) = shared.try_borrow_mut() {
                binding.on_event(&event, &raw);
            }
        }
    });
    if let Ok(binding) = binding.try_borrow() {
        let _ = binding
            .subtree
            .shadow()
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closures.push(closure);
}

/// Host binding for the `x-tabs` element.
#[wasm_bindgen]
pub struct TabsElement {
    binding: Rc<RefCell<Binding<Tabs>>>,
    closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl TabsElement {
    /// Attach to a host element.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement) -> Result<TabsElement, JsValue> {
        let binding = Binding::new(host, Tabs::new())
            .ok_or_else(|| JsValue::from_str("could not attach shadow root"))?;
        Ok(Self {
            binding: Rc::new(RefCell::new(binding)),
            closures: Vec::new(),
        })
    }

    /// Names of observed host attributes.
    #[wasm_bindgen(js_name = observedAttributes)]
    pub fn observed_attributes() -> Vec<String> {
        encajar_widgets::TabsAttr::OBSERVED
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }

    /// `connectedCallback`
    #[wasm_bindgen(js_name = connectedCallback)]
    pub fn connected_callback(&mut self) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.connected();
        }
        listen(&self.binding, &mut self.closures, "click", events::click);
        listen(&self.binding, &mut self.closures, "keydown", events::keydown);
    }

    /// `attributeChangedCallback`
    #[wasm_bindgen(js_name = attributeChangedCallback)]
    pub fn attribute_changed_callback(
        &self,
        name: String,
        old_value: Option<String>,
        new_value: Option<String>,
    ) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.attribute_changed(&name, old_value.as_deref(), new_value.as_deref());
        }
    }

    /// `disconnectedCallback`
    #[wasm_bindgen(js_name = disconnectedCallback)]
    pub fn disconnected_callback(&mut self) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.disconnected();
        }
        self.closures.clear();
    }

    /// Light-DOM children changed; the host shim forwards its
    /// `MutationObserver` notifications here.
    #[wasm_bindgen(js_name = childrenChangedCallback)]
    pub fn children_changed_callback(&self) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.children_changed();
        }
    }

    /// Index of the active tab.
    #[wasm_bindgen(js_name = getCurrentTab)]
    pub fn current_tab(&self) -> usize {
        self.binding
            .try_borrow()
            .map_or(0, |b| b.widget.current_tab())
    }

    /// Count of visible tabs.
    #[wasm_bindgen(js_name = getTabCount)]
    pub fn tab_count(&self) -> usize {
        self.binding
            .try_borrow()
            .map_or(0, |b| b.widget.visible_count())
    }

    /// Activate a tab by index, through the same commit path as pointer
    /// and keyboard activation.
    #[wasm_bindgen(js_name = switchToTab)]
    pub fn switch_to_tab(&self, index: usize) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            let b = &mut *binding;
            let directives = b.widget.switch_to(index, &mut b.subtree);
            b.process(directives, None);
        }
    }
}

/// Host binding for the `x-alert` element.
#[wasm_bindgen]
pub struct AlertElement {
    binding: Rc<RefCell<Binding<Alert>>>,
    closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl AlertElement {
    /// Attach to a host element.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement) -> Result<AlertElement, JsValue> {
        let binding = Binding::new(host, Alert::new())
            .ok_or_else(|| JsValue::from_str("could not attach shadow root"))?;
        Ok(Self {
            binding: Rc::new(RefCell::new(binding)),
            closures: Vec::new(),
        })
    }

    /// Names of observed host attributes.
    #[wasm_bindgen(js_name = observedAttributes)]
    pub fn observed_attributes() -> Vec<String> {
        encajar_widgets::AlertAttr::OBSERVED
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }

    /// `connectedCallback`
    #[wasm_bindgen(js_name = connectedCallback)]
    pub fn connected_callback(&mut self) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.connected();
        }
        listen(&self.binding, &mut self.closures, "click", events::click);
    }

    /// `attributeChangedCallback`
    #[wasm_bindgen(js_name = attributeChangedCallback)]
    pub fn attribute_changed_callback(
        &self,
        name: String,
        old_value: Option<String>,
        new_value: Option<String>,
    ) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.attribute_changed(&name, old_value.as_deref(), new_value.as_deref());
        }
    }

    /// `disconnectedCallback` — cancels any pending self-removal timer.
    #[wasm_bindgen(js_name = disconnectedCallback)]
    pub fn disconnected_callback(&mut self) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.disconnected();
        }
        self.closures.clear();
    }
}

/// Host binding for the `x-toggle` element.
#[wasm_bindgen]
pub struct ToggleElement {
    binding: Rc<RefCell<Binding<Toggle>>>,
    closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl ToggleElement {
    /// Attach to a host element.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement) -> Result<ToggleElement, JsValue> {
        let binding = Binding::new(host, Toggle::new())
            .ok_or_else(|| JsValue::from_str("could not attach shadow root"))?;
        Ok(Self {
            binding: Rc::new(RefCell::new(binding)),
            closures: Vec::new(),
        })
    }

    /// Names of observed host attributes.
    #[wasm_bindgen(js_name = observedAttributes)]
    pub fn observed_attributes() -> Vec<String> {
        encajar_widgets::ToggleAttr::OBSERVED
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }

    /// `connectedCallback`
    #[wasm_bindgen(js_name = connectedCallback)]
    pub fn connected_callback(&mut self) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.connected();
        }
        listen(&self.binding, &mut self.closures, "change", events::change);
    }

    /// `attributeChangedCallback`
    #[wasm_bindgen(js_name = attributeChangedCallback)]
    pub fn attribute_changed_callback(
        &self,
        name: String,
        old_value: Option<String>,
        new_value: Option<String>,
    ) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.attribute_changed(&name, old_value.as_deref(), new_value.as_deref());
        }
    }

    /// `disconnectedCallback`
    #[wasm_bindgen(js_name = disconnectedCallback)]
    pub fn disconnected_callback(&mut self) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.disconnected();
        }
        self.closures.clear();
    }

    /// Checked state.
    #[wasm_bindgen(getter)]
    pub fn checked(&self) -> bool {
        self.binding
            .try_borrow()
            .is_ok_and(|b| b.widget.is_checked())
    }

    /// Set the checked state programmatically. No `toggle` event fires.
    #[wasm_bindgen(setter)]
    pub fn set_checked(&self, value: bool) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            let b = &mut *binding;
            let directive = b.widget.set_checked(value);
            b.widget.render(&mut b.subtree);
            b.process(vec![directive], None);
        }
    }

    /// Disabled state.
    #[wasm_bindgen(getter)]
    pub fn disabled(&self) -> bool {
        self.binding
            .try_borrow()
            .is_ok_and(|b| b.widget.is_disabled())
    }

    /// Set the disabled state programmatically.
    #[wasm_bindgen(setter)]
    pub fn set_disabled(&self, value: bool) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            let b = &mut *binding;
            let directive = b.widget.set_disabled(value);
            b.widget.render(&mut b.subtree);
            b.process(vec![directive], None);
        }
    }

    /// Submitted value of the inner checkbox.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.binding
            .try_borrow()
            .map_or_else(|_| String::new(), |b| b.widget.get_value().to_string())
    }

    /// Set the submitted value.
    #[wasm_bindgen(setter)]
    pub fn set_value(&self, value: String) {
        if let Ok(mut binding) = self.binding.try_borrow_mut() {
            binding.widget.set_value(value);
        }
    }
}
