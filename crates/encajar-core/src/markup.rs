//! Markup node model.
//!
//! Widgets describe their rendered output as a tree of [`Markup`] nodes.
//! A [`Subtree`](crate::Subtree) implementation materializes that tree into
//! whatever the host platform renders (shadow DOM elements in the browser,
//! an in-memory tree under test). Renderers always build full trees from
//! their current model; nodes are never patched in place.

use crate::selector::Selector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single element node in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markup {
    /// Element tag name (`div`, `button`, `slot`, ...)
    tag: String,
    /// Attributes, keyed by name. `class` is kept separately.
    attrs: BTreeMap<String, String>,
    /// Class names in insertion order.
    classes: Vec<String>,
    /// Plain text content, rendered before any children.
    text: Option<String>,
    /// Unparsed inline markup (icon glyphs). Rendered verbatim by the host.
    raw: Option<String>,
    /// Child nodes in document order.
    children: Vec<Markup>,
}

impl Markup {
    /// Create a new element node.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            text: None,
            raw: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Add a class name.
    #[must_use]
    pub fn class(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.classes.contains(&name) {
            self.classes.push(name);
        }
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set unparsed inline markup content.
    #[must_use]
    pub fn raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append multiple child nodes.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Get the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get the `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Check whether an attribute is present, regardless of value.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Iterate over attributes in name order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute in place.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }

    /// Check whether a class is present.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Class names in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Add a class in place. Adding a class twice keeps a single entry.
    pub fn add_class(&mut self, name: &str) {
        if !self.has_class(name) {
            self.classes.push(name.to_string());
        }
    }

    /// Remove a class in place.
    pub fn remove_class(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }

    /// Get the text content.
    #[must_use]
    pub fn get_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the unparsed inline content.
    #[must_use]
    pub fn get_raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Mutable child nodes.
    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Replace all children with a new set.
    pub fn replace_children(&mut self, children: Vec<Self>) {
        self.children = children;
    }

    /// Check whether this node matches a selector.
    #[must_use]
    pub fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.id() == Some(id.as_str()),
            Selector::Class(class) => self.has_class(class),
            Selector::Tag(tag) => self.tag == *tag,
        }
    }

    /// Find the first descendant (or self) matching the selector,
    /// depth-first in document order.
    #[must_use]
    pub fn find(&self, selector: &Selector) -> Option<&Self> {
        if self.matches(selector) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(selector))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, selector: &Selector) -> Option<&mut Self> {
        if self.matches(selector) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(selector))
    }

    /// Collect all descendants (and self) matching the selector, in
    /// document order.
    #[must_use]
    pub fn find_all(&self, selector: &Selector) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_matches(selector, &mut out);
        out
    }

    fn collect_matches<'a>(&'a self, selector: &Selector, out: &mut Vec<&'a Self>) {
        if self.matches(selector) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_matches(selector, out);
        }
    }

    /// Apply `f` to every node (including self) matching the selector.
    pub fn for_each_matching(&mut self, selector: &Selector, f: &mut impl FnMut(&mut Self)) {
        if self.matches(selector) {
            f(self);
        }
        for child in &mut self.children {
            child.for_each_matching(selector, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_builder() {
        let node = Markup::new("button")
            .attr("id", "tab-0-tab")
            .attr("role", "tab")
            .class("x-tabs__button")
            .text("First");

        assert_eq!(node.tag(), "button");
        assert_eq!(node.id(), Some("tab-0-tab"));
        assert_eq!(node.get_attr("role"), Some("tab"));
        assert!(node.has_class("x-tabs__button"));
        assert_eq!(node.get_text(), Some("First"));
    }

    #[test]
    fn test_markup_class_dedup() {
        let mut node = Markup::new("div").class("a").class("a");
        assert_eq!(node.classes().len(), 1);

        node.add_class("a");
        assert_eq!(node.classes().len(), 1);

        node.remove_class("a");
        assert!(!node.has_class("a"));
    }

    #[test]
    fn test_markup_attr_mutation() {
        let mut node = Markup::new("div");
        node.set_attr("hidden", "");
        assert!(node.has_attr("hidden"));
        assert_eq!(node.get_attr("hidden"), Some(""));

        node.remove_attr("hidden");
        assert!(!node.has_attr("hidden"));
    }

    #[test]
    fn test_markup_find_by_id() {
        let tree = Markup::new("div").child(
            Markup::new("ul")
                .class("x-tabs__list")
                .child(Markup::new("li").child(Markup::new("button").attr("id", "tab-1-tab"))),
        );

        let sel = Selector::parse("#tab-1-tab").unwrap();
        let found = tree.find(&sel).unwrap();
        assert_eq!(found.tag(), "button");
    }

    #[test]
    fn test_markup_find_all_by_class() {
        let tree = Markup::new("div")
            .child(Markup::new("div").class("x-tabs__panel"))
            .child(Markup::new("div").class("x-tabs__panel"))
            .child(Markup::new("div").class("other"));

        let sel = Selector::parse(".x-tabs__panel").unwrap();
        assert_eq!(tree.find_all(&sel).len(), 2);
    }

    #[test]
    fn test_markup_find_missing() {
        let tree = Markup::new("div");
        let sel = Selector::parse("#nope").unwrap();
        assert!(tree.find(&sel).is_none());
    }

    #[test]
    fn test_markup_replace_children() {
        let mut tree = Markup::new("ul").child(Markup::new("li"));
        tree.replace_children(vec![Markup::new("li"), Markup::new("li")]);
        assert_eq!(tree.children().len(), 2);
    }

    #[test]
    fn test_markup_serde_round_trip() {
        let node = Markup::new("div").class("x-alert").attr("role", "alert");
        let json = serde_json::to_string(&node).unwrap();
        let back: Markup = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
