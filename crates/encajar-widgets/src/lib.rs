//! Widget implementations for the Encajar widget library.

pub mod alert;
pub mod tabs;
pub mod toggle;

pub use alert::{Alert, AlertAttr, AlertKind};
pub use tabs::{build_tabs, KeyResponse, TabDescriptor, Tabs, TabsAttr, TabsChanged, CHANGE_EVENT};
pub use toggle::{Toggle, ToggleAttr, ToggleChanged, ToggleSize, TOGGLE_EVENT};
