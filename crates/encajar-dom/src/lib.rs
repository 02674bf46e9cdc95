//! Browser custom-element bindings for Encajar widgets.
//!
//! Provides the shadow-root implementation of the isolated-subtree
//! collaborator, web event translation, and one exported host binding per
//! widget (`x-tabs`, `x-alert`, `x-toggle`). A small JS shim registers
//! each custom element and forwards its lifecycle callbacks here.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
mod elements;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod shadow;

// Cross-platform modules
pub mod keys;

#[cfg(target_arch = "wasm32")]
pub use elements::{AlertElement, TabsElement, ToggleElement};
#[cfg(target_arch = "wasm32")]
pub use shadow::DomSubtree;
