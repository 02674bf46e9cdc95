//! Shadow-root implementation of the isolated-subtree collaborator.
//!
//! Materializes [`Markup`] trees into real DOM elements inside an open
//! shadow root, with the component stylesheet link prepended, and applies
//! attribute/class edits through selectors. Every operation degrades to a
//! no-op when the DOM refuses or the target is missing.

use encajar_core::{Markup, Selector, Subtree};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ShadowRoot, ShadowRootInit, ShadowRootMode};

/// A widget's shadow-root rendering target.
#[derive(Debug)]
pub struct DomSubtree {
    shadow: ShadowRoot,
    document: Document,
}

impl DomSubtree {
    /// Attach an open shadow root to a host element.
    pub fn attach(host: &HtmlElement) -> Option<Self> {
        let document = host.owner_document()?;
        let shadow = host
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
            .ok()?;
        Some(Self { shadow, document })
    }

    /// The underlying shadow root (event listener target).
    #[must_use]
    pub const fn shadow(&self) -> &ShadowRoot {
        &self.shadow
    }

    fn build(&self, markup: &Markup) -> Option<Element> {
        let element = self.document.create_element(markup.tag()).ok()?;
        for (name, value) in markup.attrs() {
            let _ = element.set_attribute(name, value);
        }
        if !markup.classes().is_empty() {
            let _ = element.set_attribute("class", &markup.classes().join(" "));
        }
        if let Some(raw) = markup.get_raw() {
            element.set_inner_html(raw);
        }
        if let Some(text) = markup.get_text() {
            let node = self.document.create_text_node(text);
            let _ = element.append_child(&node);
        }
        for child in markup.children() {
            if let Some(built) = self.build(child) {
                let _ = element.append_child(&built);
            }
        }
        Some(element)
    }

    fn each_match(&self, target: &Selector, f: &mut impl FnMut(&Element)) {
        let Ok(nodes) = self.shadow.query_selector_all(&target.to_string()) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                f(&element);
            }
        }
    }
}

impl Subtree for DomSubtree {
    fn mount(&mut self, template: Markup, style_href: &str) {
        self.shadow.set_inner_html("");
        if let Ok(link) = self.document.create_element("link") {
            let _ = link.set_attribute("rel", "stylesheet");
            let _ = link.set_attribute("href", style_href);
            let _ = self.shadow.append_child(&link);
        }
        if let Some(built) = self.build(&template) {
            let _ = self.shadow.append_child(&built);
        }
    }

    fn replace_children(&mut self, target: &Selector, children: Vec<Markup>) {
        let Ok(Some(container)) = self.shadow.query_selector(&target.to_string()) else {
            return;
        };
        container.set_inner_html("");
        for child in children {
            if let Some(built) = self.build(&child) {
                let _ = container.append_child(&built);
            }
        }
    }

    fn set_attr(&mut self, target: &Selector, name: &str, value: &str) {
        self.each_match(target, &mut |element| {
            let _ = element.set_attribute(name, value);
        });
    }

    fn remove_attr(&mut self, target: &Selector, name: &str) {
        self.each_match(target, &mut |element| {
            let _ = element.remove_attribute(name);
        });
    }

    fn add_class(&mut self, target: &Selector, name: &str) {
        self.each_match(target, &mut |element| {
            let _ = element.class_list().add_1(name);
        });
    }

    fn remove_class(&mut self, target: &Selector, name: &str) {
        self.each_match(target, &mut |element| {
            let _ = element.class_list().remove_1(name);
        });
    }

    fn focus(&mut self, target: &Selector) {
        if let Ok(Some(element)) = self.shadow.query_selector(&target.to_string()) {
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                let _ = html.focus();
            }
        }
    }
}
