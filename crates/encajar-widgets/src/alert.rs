//! Alert widget.
//!
//! An attribute-to-DOM mirror: `type` picks the visual kind, `closeable`
//! shows a close button that removes the widget, and `self-destruct-in`
//! schedules self-removal after a delay. The widget owns no timer itself;
//! it answers attribute changes with host directives, and the single host
//! timer is always canceled and replaced, never stacked.

use encajar_core::{
    attribute, Event, HostDirective, LightChild, Markup, Selector, Subtree, Widget,
};
use serde::{Deserialize, Serialize};

const WRAPPER_CLASS: &str = "x-alert";
const CLOSE_CLASS: &str = "x-alert__close";

/// Visual kind of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlertKind {
    /// Informational (default)
    #[default]
    Info,
    /// Success
    Success,
    /// Warning
    Warning,
    /// Error
    Error,
}

impl AlertKind {
    /// Parse the `type` attribute; missing or unknown values fall back to
    /// [`AlertKind::Info`].
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("success") => Self::Success,
            Some("warning") => Self::Warning,
            Some("error") => Self::Error,
            _ => Self::Info,
        }
    }

    /// Modifier-class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    const ALL: [Self; 4] = [Self::Info, Self::Success, Self::Warning, Self::Error];

    fn modifier_class(self) -> String {
        format!("{WRAPPER_CLASS}--{}", self.as_str())
    }
}

/// Observed host attributes, as an explicit dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAttr {
    /// `type`
    Kind,
    /// `closeable`
    Closeable,
    /// `self-destruct-in`
    SelfDestructIn,
}

impl AlertAttr {
    /// Names of all observed attributes.
    pub const OBSERVED: [&'static str; 3] = ["type", "closeable", "self-destruct-in"];

    /// Look up the handler for an attribute name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "type" => Some(Self::Kind),
            "closeable" => Some(Self::Closeable),
            "self-destruct-in" => Some(Self::SelfDestructIn),
            _ => None,
        }
    }
}

/// Alert widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alert {
    kind: AlertKind,
    closeable: bool,
}

impl Alert {
    /// Create an informational, non-closeable alert.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kind.
    #[must_use]
    pub const fn kind(mut self, kind: AlertKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set whether a close button is shown.
    #[must_use]
    pub const fn closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    /// Get the kind.
    #[must_use]
    pub const fn get_kind(&self) -> AlertKind {
        self.kind
    }

    /// Whether a close button is shown.
    #[must_use]
    pub const fn is_closeable(&self) -> bool {
        self.closeable
    }

    /// Swap the wrapper's kind modifier class.
    fn apply_kind(&self, subtree: &mut dyn Subtree) {
        let wrapper = Selector::Class(WRAPPER_CLASS.to_string());
        for kind in AlertKind::ALL {
            subtree.remove_class(&wrapper, &kind.modifier_class());
        }
        subtree.add_class(&wrapper, &self.kind.modifier_class());
    }

    /// Show or hide the close button.
    fn apply_closeable(&self, subtree: &mut dyn Subtree) {
        let close = Selector::Class(CLOSE_CLASS.to_string());
        if self.closeable {
            subtree.remove_attr(&close, "hidden");
        } else {
            subtree.set_attr(&close, "hidden", "");
        }
    }
}

impl Widget for Alert {
    fn observed_attributes(&self) -> &'static [&'static str] {
        &AlertAttr::OBSERVED
    }

    fn style_href(&self) -> &'static str {
        "alert-component.css"
    }

    fn template(&self) -> Markup {
        Markup::new("div")
            .class(WRAPPER_CLASS)
            .attr("role", "alert")
            .child(Markup::new("slot"))
            .child(
                Markup::new("button")
                    .class(CLOSE_CLASS)
                    .attr("type", "button")
                    .attr("aria-label", "Close")
                    .attr("hidden", "")
                    .text("\u{00d7}"),
            )
    }

    fn rebuild(&mut self, _children: &[LightChild]) {}

    fn render(&self, subtree: &mut dyn Subtree) {
        self.apply_kind(subtree);
        self.apply_closeable(subtree);
    }

    fn attribute_changed(
        &mut self,
        name: &str,
        value: Option<&str>,
        subtree: &mut dyn Subtree,
    ) -> Vec<HostDirective> {
        match AlertAttr::from_name(name) {
            Some(AlertAttr::Kind) => {
                self.kind = AlertKind::from_attr(value);
                self.apply_kind(subtree);
                Vec::new()
            }
            Some(AlertAttr::Closeable) => {
                self.closeable = value.is_some();
                self.apply_closeable(subtree);
                Vec::new()
            }
            Some(AlertAttr::SelfDestructIn) => {
                match attribute::parse_positive_seconds(value) {
                    Some(seconds) => vec![HostDirective::ScheduleRemoval { seconds }],
                    None => vec![HostDirective::CancelRemovalTimer],
                }
            }
            None => Vec::new(),
        }
    }

    fn event(&mut self, event: &Event, _subtree: &mut dyn Subtree) -> Vec<HostDirective> {
        if let Event::Click {
            button: Some(button),
        } = event
        {
            if self.closeable && button.has_class(CLOSE_CLASS) {
                return vec![HostDirective::RemoveHost];
            }
        }
        Vec::new()
    }
}
