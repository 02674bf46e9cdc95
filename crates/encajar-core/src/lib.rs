//! Core types and traits for the Encajar widget library.
//!
//! This crate provides the foundation the widgets build on:
//! - Markup node model: [`Markup`]
//! - Light-DOM child model: [`LightChild`]
//! - The isolated-subtree rendering collaborator: [`Subtree`]
//! - Input events and keys: [`Event`], [`Key`]
//! - The widget contract and host side effects: [`Widget`], [`HostDirective`]

pub mod attribute;
mod event;
mod lightdom;
mod markup;
mod selector;
mod subtree;
mod widget;

pub use event::{ButtonTarget, Event, Key};
pub use lightdom::LightChild;
pub use markup::Markup;
pub use selector::{Selector, SelectorParseError};
pub use subtree::Subtree;
pub use widget::{HostDirective, Widget};
