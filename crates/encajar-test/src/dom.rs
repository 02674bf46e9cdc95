//! In-memory fake subtree.
//!
//! Implements the [`Subtree`] collaborator over a [`Markup`] tree so
//! widget logic can be exercised without a rendering environment.

use encajar_core::{ButtonTarget, Markup, Selector, Subtree};

/// A fake isolated subtree backed by an in-memory markup tree.
#[derive(Debug, Default)]
pub struct FakeSubtree {
    root: Option<Markup>,
    style_href: Option<String>,
    focused: Option<String>,
}

impl FakeSubtree {
    /// Create an empty, unmounted subtree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Query the first element matching a selector string.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&Markup> {
        let sel = Selector::parse(selector).ok()?;
        self.root.as_ref()?.find(&sel)
    }

    /// Query all elements matching a selector string, in document order.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&Markup> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.root.as_ref().map_or_else(Vec::new, |r| r.find_all(&sel))
    }

    /// The id of the element that last received focus.
    #[must_use]
    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// The stylesheet reference passed at mount time.
    #[must_use]
    pub fn mounted_style(&self) -> Option<&str> {
        self.style_href.as_deref()
    }

    /// Resolve a click/focus target to its nearest `button` ancestor
    /// (or itself), the way the host platform resolves event targets.
    #[must_use]
    pub fn button_target(&self, selector: &str) -> Option<ButtonTarget> {
        let sel = Selector::parse(selector).ok()?;
        let root = self.root.as_ref()?;
        let mut path = Vec::new();
        if !find_path(root, &sel, &mut path) {
            return None;
        }
        path.iter()
            .rev()
            .find(|node| node.tag() == "button")
            .map(|node| to_button_target(node))
    }
}

impl Subtree for FakeSubtree {
    fn mount(&mut self, template: Markup, style_href: &str) {
        self.root = Some(template);
        self.style_href = Some(style_href.to_string());
    }

    fn replace_children(&mut self, target: &Selector, children: Vec<Markup>) {
        if let Some(element) = self.root.as_mut().and_then(|r| r.find_mut(target)) {
            element.replace_children(children);
        }
    }

    fn set_attr(&mut self, target: &Selector, name: &str, value: &str) {
        if let Some(root) = self.root.as_mut() {
            root.for_each_matching(target, &mut |el| el.set_attr(name, value));
        }
    }

    fn remove_attr(&mut self, target: &Selector, name: &str) {
        if let Some(root) = self.root.as_mut() {
            root.for_each_matching(target, &mut |el| el.remove_attr(name));
        }
    }

    fn add_class(&mut self, target: &Selector, name: &str) {
        if let Some(root) = self.root.as_mut() {
            root.for_each_matching(target, &mut |el| el.add_class(name));
        }
    }

    fn remove_class(&mut self, target: &Selector, name: &str) {
        if let Some(root) = self.root.as_mut() {
            root.for_each_matching(target, &mut |el| el.remove_class(name));
        }
    }

    fn focus(&mut self, target: &Selector) {
        if let Some(id) = self
            .root
            .as_ref()
            .and_then(|r| r.find(target))
            .and_then(Markup::id)
        {
            self.focused = Some(id.to_string());
        }
    }
}

fn find_path<'a>(node: &'a Markup, selector: &Selector, path: &mut Vec<&'a Markup>) -> bool {
    path.push(node);
    if node.matches(selector) {
        return true;
    }
    for child in node.children() {
        if find_path(child, selector, path) {
            return true;
        }
    }
    path.pop();
    false
}

fn to_button_target(node: &Markup) -> ButtonTarget {
    ButtonTarget {
        id: node.id().map(std::string::ToString::to_string),
        controls: node
            .get_attr("aria-controls")
            .map(std::string::ToString::to_string),
        class: node.classes().join(" "),
    }
}
