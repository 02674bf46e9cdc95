#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]
//! Testing harness for Encajar widgets.
//!
//! Pure Rust, no rendering environment: [`FakeSubtree`] implements the
//! isolated-subtree collaborator over an in-memory markup tree, and
//! [`Harness`] plays the host element around a widget under test.
//!
//! ```
//! use encajar_core::{LightChild, Widget};
//! use encajar_test::{FakeSubtree, Harness};
//!
//! # use encajar_core::{HostDirective, Event, Markup, Subtree};
//! # #[derive(Default)]
//! # struct Noop;
//! # impl Widget for Noop {
//! #     fn observed_attributes(&self) -> &'static [&'static str] { &[] }
//! #     fn style_href(&self) -> &'static str { "noop.css" }
//! #     fn template(&self) -> Markup { Markup::new("div").class("noop") }
//! #     fn render(&self, _subtree: &mut dyn Subtree) {}
//! #     fn attribute_changed(&mut self, _: &str, _: Option<&str>, _: &mut dyn Subtree)
//! #         -> Vec<HostDirective> { Vec::new() }
//! #     fn event(&mut self, _: &Event, _: &mut dyn Subtree) -> Vec<HostDirective> { Vec::new() }
//! # }
//! let harness = Harness::new(Noop::default()).connect();
//! harness.assert_exists(".noop");
//! ```

mod dom;
mod harness;

pub use dom::FakeSubtree;
pub use harness::Harness;
