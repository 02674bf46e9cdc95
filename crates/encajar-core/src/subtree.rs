//! The isolated-subtree rendering collaborator.
//!
//! Every widget instance owns a style- and markup-encapsulated rendering
//! target. The widget core never touches the host platform; it drives this
//! trait, which the browser layer implements over a shadow root and the
//! test harness implements over an in-memory [`Markup`] tree.
//!
//! All operations are defensive no-ops when the addressed element does not
//! exist yet (rendering not complete); nothing here fails.

use crate::markup::Markup;
use crate::selector::Selector;

/// An isolated rendering target owned by one widget instance.
pub trait Subtree {
    /// Materialize the subtree from a template and prepend the stylesheet
    /// link `style_href` refers to. Replaces any previous contents.
    fn mount(&mut self, template: Markup, style_href: &str);

    /// Clear the element addressed by `target` and rebuild its children
    /// from `children`. No-op if no element matches.
    fn replace_children(&mut self, target: &Selector, children: Vec<Markup>);

    /// Set an attribute on every element matching `target`.
    fn set_attr(&mut self, target: &Selector, name: &str, value: &str);

    /// Remove an attribute from every element matching `target`.
    fn remove_attr(&mut self, target: &Selector, name: &str);

    /// Add a class to every element matching `target`.
    fn add_class(&mut self, target: &Selector, name: &str);

    /// Remove a class from every element matching `target`.
    fn remove_class(&mut self, target: &Selector, name: &str);

    /// Move keyboard focus to the first element matching `target`.
    fn focus(&mut self, target: &Selector);
}
