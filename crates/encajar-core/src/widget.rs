//! Widget trait and host directives.
//!
//! A widget owns its model state and renders into an injected
//! [`Subtree`]. Everything a widget needs from its host element — attribute
//! reflection, outward events, self-removal, the alert removal timer — is
//! expressed as a [`HostDirective`] returned from the handler, never
//! performed directly. That keeps every widget runnable under the test
//! harness with no rendering environment.

use crate::event::Event;
use crate::lightdom::LightChild;
use crate::markup::Markup;
use crate::subtree::Subtree;

/// A side effect the host element must perform on the widget's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum HostDirective {
    /// Write (or clear) an attribute on the host element.
    ReflectAttribute {
        /// Attribute name
        name: &'static str,
        /// New value; `None` removes the attribute.
        value: Option<String>,
    },
    /// Dispatch a bubbling outward event from the host element.
    Notify {
        /// Event name
        event: &'static str,
        /// Event detail payload
        detail: serde_json::Value,
    },
    /// Remove the host element from the document.
    RemoveHost,
    /// Cancel the pending self-removal timer, if any.
    CancelRemovalTimer,
    /// Cancel any pending self-removal timer, then schedule a new one.
    /// Timers replace each other; they never stack.
    ScheduleRemoval {
        /// Delay in whole seconds
        seconds: u32,
    },
    /// Suppress the platform's default handling of the triggering event.
    PreventDefault,
}

/// Core trait implemented by every widget.
pub trait Widget {
    /// Host attribute names this widget observes.
    fn observed_attributes(&self) -> &'static [&'static str];

    /// Stylesheet reference mounted alongside the template.
    fn style_href(&self) -> &'static str;

    /// Full subtree template for initial materialization.
    fn template(&self) -> Markup;

    /// Re-derive internal model state from the current light-DOM children.
    /// The model is always rebuilt whole, never patched.
    fn rebuild(&mut self, children: &[LightChild]) {
        let _ = children;
    }

    /// Build the subtree contents from the current model. Idempotent:
    /// containers are fully cleared and rebuilt.
    fn render(&self, subtree: &mut dyn Subtree);

    /// An observed host attribute changed. The caller has already
    /// discarded old == new no-op notifications.
    fn attribute_changed(
        &mut self,
        name: &str,
        value: Option<&str>,
        subtree: &mut dyn Subtree,
    ) -> Vec<HostDirective>;

    /// Handle a resolved input event.
    fn event(&mut self, event: &Event, subtree: &mut dyn Subtree) -> Vec<HostDirective>;

    /// Attach lifecycle: feed initial attribute values, derive the model
    /// from the children, materialize the subtree, render.
    ///
    /// Initial attribute notifications arrive before materialization, as
    /// on the web platform; subtree-dependent work in them no-ops and the
    /// subsequent full render picks the state up.
    fn connected(
        &mut self,
        children: &[LightChild],
        attributes: &[(String, String)],
        subtree: &mut dyn Subtree,
    ) -> Vec<HostDirective> {
        let mut directives = Vec::new();
        for (name, value) in attributes {
            if self.observed_attributes().iter().any(|a| *a == name) {
                directives.extend(self.attribute_changed(name, Some(value), subtree));
            }
        }
        self.rebuild(children);
        subtree.mount(self.template(), self.style_href());
        self.render(subtree);
        directives
    }
}
