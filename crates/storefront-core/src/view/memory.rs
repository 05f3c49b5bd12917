//! In-memory [`ViewBinding`] built from page markup.
//!
//! Markup is parsed with html5ever (through `scraper`) and only elements
//! carrying an `id` attribute are tracked. Each tracked element keeps its own
//! serialized markup with nested tracked elements cut out and replaced by
//! markers, so updating a child never requires re-parsing its ancestors.
//!
//! An id belongs to the first element that claims it. A later element with the
//! same id, including one nested inside the element it duplicates, stays plain
//! markup of its parent.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use scraper::{ElementRef, Html, Node};

use crate::view::binding::{EventKind, Notice, ViewBinding};

const ROOT: &str = "";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

// Templates are serialized by `write_element`, so attributes are always
// double-quoted with `<`, `>` and `"` escaped.
static HREF_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\shref="([^"]*)""#).unwrap());
static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\sclass=")([^"]*)(")"#).unwrap());
static ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<a(\s[^>]*)?>").unwrap());
static MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x00slot:([^\x00]*)\x00").unwrap());

#[derive(Debug, Clone, Default)]
struct Element {
    template: String,
    children: Vec<String>,
}

/// A page held in memory, addressable by element id.
#[derive(Debug, Clone)]
pub struct MemoryView {
    elements: HashMap<String, Element>,
    listeners: Vec<(String, EventKind)>,
    notices: Vec<Notice>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryView {
    /// An empty page.
    pub fn new() -> Self {
        let mut elements = HashMap::new();
        elements.insert(ROOT.to_string(), Element::default());
        Self {
            elements,
            listeners: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Builds a page from host markup; every element with an id becomes a slot.
    ///
    /// Markup starting with a doctype or `<html>` is parsed as a full document,
    /// anything else as a body fragment.
    pub fn from_html(markup: &str) -> Self {
        let mut view = Self::new();
        if is_document(markup) {
            view.fill_document(markup);
        } else {
            view.fill(ROOT, markup);
        }
        view
    }

    /// Builds a page made of empty `div` slots.
    pub fn with_slots<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markup = ids
            .into_iter()
            .map(|id| {
                format!(
                    "<div id=\"{}\"></div>",
                    html_escape::encode_double_quoted_attribute(id.as_ref())
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_html(&markup)
    }

    /// Full page markup with every slot expanded.
    pub fn document(&self) -> String {
        self.expand(ROOT, &mut HashSet::new())
    }

    /// Ids of every element currently in the page, sorted.
    pub fn slot_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .elements
            .keys()
            .filter(|id| !id.is_empty())
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    /// Attached listeners in attachment order.
    pub fn listeners(&self) -> &[(String, EventKind)] {
        &self.listeners
    }

    /// Toasts shown so far.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    fn fill(&mut self, id: &str, markup: &str) {
        let fragment = Html::parse_fragment(markup);
        let mut template = String::with_capacity(markup.len());
        let mut children = Vec::new();
        self.write_children(fragment.root_element(), &mut template, &mut children);
        self.set_element(id, template, children);
    }

    fn fill_document(&mut self, markup: &str) {
        let document = Html::parse_document(markup);
        let mut template = String::with_capacity(markup.len());
        let doctype = document
            .tree
            .root()
            .children()
            .find_map(|node| node.value().as_doctype().map(|d| d.name().to_string()));
        if let Some(name) = doctype {
            let _ = writeln!(template, "<!DOCTYPE {}>", name);
        }
        let mut children = Vec::new();
        self.write_element(document.root_element(), &mut template, &mut children);
        self.set_element(ROOT, template, children);
    }

    fn set_element(&mut self, id: &str, template: String, children: Vec<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.template = template;
            element.children = children;
        }
    }

    /// Takes ownership of an id unless an element already holds it.
    fn claim(&mut self, id: Option<&str>) -> Option<String> {
        let id = id.filter(|id| !self.elements.contains_key(*id))?;
        self.elements.insert(id.to_string(), Element::default());
        Some(id.to_string())
    }

    fn write_children(
        &mut self,
        parent: ElementRef<'_>,
        out: &mut String,
        found: &mut Vec<String>,
    ) {
        let raw_text = RAW_TEXT_ELEMENTS.contains(&parent.value().name());
        for node in parent.children() {
            match node.value() {
                Node::Text(text) if raw_text => out.push_str(text),
                Node::Text(text) => out.push_str(&html_escape::encode_text(&**text)),
                Node::Comment(comment) => {
                    let _ = write!(out, "<!--{}-->", &**comment);
                }
                Node::Element(_) => {
                    if let Some(element) = ElementRef::wrap(node) {
                        self.write_element(element, out, found);
                    }
                }
                _ => {}
            }
        }
    }

    fn write_element(
        &mut self,
        element: ElementRef<'_>,
        out: &mut String,
        found: &mut Vec<String>,
    ) {
        let value = element.value();
        let name = value.name();
        out.push('<');
        out.push_str(name);
        for (attr, attr_value) in value.attrs() {
            let _ = write!(
                out,
                " {}=\"{}\"",
                attr,
                html_escape::encode_double_quoted_attribute(attr_value)
            );
        }
        out.push('>');

        let claimed = self.claim(value.id());
        if VOID_ELEMENTS.contains(&name) {
            found.extend(claimed);
            return;
        }
        match claimed {
            Some(id) => {
                let mut template = String::new();
                let mut children = Vec::new();
                self.write_children(element, &mut template, &mut children);
                self.set_element(&id, template, children);
                out.push_str(&marker(&id));
                found.push(id);
            }
            None => self.write_children(element, out, found),
        }
        let _ = write!(out, "</{}>", name);
    }

    fn remove_descendants(&mut self, id: &str) {
        let children = self
            .elements
            .get_mut(id)
            .map(|element| std::mem::take(&mut element.children))
            .unwrap_or_default();
        for child in children {
            self.remove_subtree(&child);
        }
    }

    fn remove_subtree(&mut self, id: &str) {
        self.remove_descendants(id);
        self.elements.remove(id);
        self.listeners.retain(|(target, _)| target != id);
    }

    fn subtree_ids(&self, id: &str) -> Vec<String> {
        let mut seen = HashSet::from([id.to_string()]);
        let mut ids = vec![id.to_string()];
        let mut index = 0;
        while index < ids.len() {
            if let Some(element) = self.elements.get(&ids[index]) {
                for child in &element.children {
                    if seen.insert(child.clone()) {
                        ids.push(child.clone());
                    }
                }
            }
            index += 1;
        }
        ids
    }

    fn expand(&self, id: &str, visiting: &mut HashSet<String>) -> String {
        let Some(element) = self.elements.get(id) else {
            return String::new();
        };
        if !visiting.insert(id.to_string()) {
            return String::new();
        }
        let expanded = MARKER
            .replace_all(&element.template, |caps: &Captures| self.expand(&caps[1], visiting))
            .into_owned();
        visiting.remove(id);
        expanded
    }
}

impl ViewBinding for MemoryView {
    fn contains(&self, id: &str) -> bool {
        !id.is_empty() && self.elements.contains_key(id)
    }

    fn replace_html(&mut self, id: &str, markup: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.remove_descendants(id);
        self.fill(id, markup);
        true
    }

    fn html(&self, id: &str) -> Option<String> {
        self.contains(id).then(|| self.expand(id, &mut HashSet::new()))
    }

    fn text(&self, id: &str) -> Option<String> {
        let markup = self.html(id)?;
        let fragment = Html::parse_fragment(&markup);
        let text = fragment.root_element().text().collect::<String>();
        Some(text.trim().to_string())
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let escaped = html_escape::encode_text(text).into_owned();
        self.replace_html(id, &escaped)
    }

    fn listen(&mut self, id: &str, kind: EventKind) -> bool {
        if !self.contains(id) {
            return false;
        }
        if !self.is_listening(id, kind) {
            self.listeners.push((id.to_string(), kind));
        }
        true
    }

    fn is_listening(&self, id: &str, kind: EventKind) -> bool {
        self.listeners
            .iter()
            .any(|(target, attached)| target == id && *attached == kind)
    }

    fn highlight_link(&mut self, scope_id: &str, href: &str) -> bool {
        if !self.contains(scope_id) {
            return false;
        }
        let mut highlighted = false;
        for id in self.subtree_ids(scope_id) {
            let Some(element) = self.elements.get_mut(&id) else {
                continue;
            };
            let rewritten = ANCHOR.replace_all(&element.template, |caps: &Captures| {
                let tag = &caps[0];
                let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                match HREF_ATTR.captures(attrs) {
                    Some(found) if html_escape::decode_html_entities(&found[1]) == href => {
                        highlighted = true;
                        activate_anchor(attrs)
                    }
                    _ => tag.to_string(),
                }
            });
            element.template = rewritten.into_owned();
        }
        highlighted
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

fn activate_anchor(attrs: &str) -> String {
    let attrs = if attrs.contains(" aria-current=") {
        attrs.to_string()
    } else {
        format!("{} aria-current=\"page\"", attrs)
    };
    if CLASS_ATTR.is_match(&attrs) {
        let attrs = CLASS_ATTR.replace(&attrs, |caps: &Captures| {
            let classes = &caps[2];
            if classes.split_whitespace().any(|c| c == "active") {
                caps[0].to_string()
            } else if classes.trim().is_empty() {
                format!("{}active{}", &caps[1], &caps[3])
            } else {
                format!("{}{} active{}", &caps[1], classes, &caps[3])
            }
        });
        format!("<a{}>", attrs)
    } else {
        format!("<a{} class=\"active\">", attrs)
    }
}

fn is_document(markup: &str) -> bool {
    let head = markup.trim_start();
    let starts_with = |prefix: &str| {
        head.get(..prefix.len())
            .is_some_and(|h| h.eq_ignore_ascii_case(prefix))
    };
    starts_with("<!doctype") || starts_with("<html")
}

fn marker(id: &str) -> String {
    format!("\u{0}slot:{}\u{0}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<body>
  <div id="header-placeholder"></div>
  <main><div id="product-grid-container"><p>Loading</p></div></main>
  <span id="cart-count">3</span>
  <div id="footer-placeholder"></div>
</body>"#;

    #[test]
    fn test_from_html_registers_ids() {
        let view = MemoryView::from_html(PAGE);
        assert!(view.contains("header-placeholder"));
        assert!(view.contains("product-grid-container"));
        assert!(!view.contains("product-details-container"));
        assert_eq!(view.text("cart-count").as_deref(), Some("3"));
        assert_eq!(view.text("product-grid-container").as_deref(), Some("Loading"));
    }

    #[test]
    fn test_replace_html_registers_nested_and_drops_old() {
        let mut view = MemoryView::from_html(PAGE);
        assert!(view.replace_html(
            "product-grid-container",
            r#"<div class="card"><div id="inner"><span id="qty">1</span></div></div>"#
        ));
        assert!(view.contains("inner"));
        assert_eq!(view.text("qty").as_deref(), Some("1"));

        view.listen("qty", EventKind::Click);
        assert!(view.replace_html("product-grid-container", "<p>empty</p>"));
        assert!(!view.contains("inner"));
        assert!(!view.contains("qty"));
        assert!(view.listeners().is_empty());
    }

    #[test]
    fn test_child_update_visible_in_parent() {
        let mut view = MemoryView::from_html(PAGE);
        view.replace_html(
            "product-grid-container",
            r#"<div><span id="qty">1</span><button id="plus">+</button></div>"#,
        );
        view.set_text("qty", "2");
        let html = view.html("product-grid-container").unwrap();
        assert!(html.contains(r#"<span id="qty">2</span>"#));
        assert!(view.document().contains(r#"<span id="qty">2</span>"#));
    }

    #[test]
    fn test_nested_same_tag_is_matched() {
        let view = MemoryView::from_html(
            r#"<div id="outer"><div><div id="inner">x</div></div>tail</div><p id="after">y</p>"#,
        );
        assert_eq!(view.text("outer").as_deref(), Some("xtail"));
        assert_eq!(view.text("after").as_deref(), Some("y"));
    }

    #[test]
    fn test_void_elements_are_slots() {
        let view = MemoryView::from_html(r#"<form id="f"><input id="email" type="email"></form>"#);
        assert!(view.contains("email"));
        assert_eq!(view.html("email").as_deref(), Some(""));
    }

    #[test]
    fn test_missing_target_is_not_an_error() {
        let mut view = MemoryView::new();
        assert!(!view.replace_html("nope", "<p></p>"));
        assert!(!view.set_text("nope", "x"));
        assert!(!view.listen("nope", EventKind::Click));
        assert_eq!(view.text("nope"), None);
    }

    #[test]
    fn test_set_text_escapes() {
        let mut view = MemoryView::with_slots(["msg"]);
        view.set_text("msg", "<b>&</b>");
        assert_eq!(view.html("msg").as_deref(), Some("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert_eq!(view.text("msg").as_deref(), Some("<b>&</b>"));
    }

    #[test]
    fn test_highlight_link() {
        let mut view = MemoryView::with_slots(["header-placeholder"]);
        view.replace_html(
            "header-placeholder",
            r#"<nav><a href="index.html">Home</a><a class="nav" href="login.html">Login</a></nav>"#,
        );
        assert!(view.highlight_link("header-placeholder", "login.html"));
        let html = view.html("header-placeholder").unwrap();
        assert!(html.contains(r#"<a href="index.html">Home</a>"#));
        assert!(html.contains(r#"class="nav active""#));
        assert!(html.contains(r#"aria-current="page""#));

        assert!(!view.highlight_link("header-placeholder", "about.html"));
    }

    #[test]
    fn test_listen_is_idempotent() {
        let mut view = MemoryView::with_slots(["btn"]);
        assert!(view.listen("btn", EventKind::Click));
        assert!(view.listen("btn", EventKind::Click));
        assert_eq!(view.listeners().len(), 1);
        assert!(view.is_listening("btn", EventKind::Click));
        assert!(!view.is_listening("btn", EventKind::Submit));
    }

    #[test]
    fn test_fragment_reusing_placeholder_id_stays_markup() {
        let mut view = MemoryView::with_slots(["header-placeholder"]);
        assert!(view.replace_html(
            "header-placeholder",
            r#"<header id="header-placeholder"><a href="index.html">Shop</a></header>"#
        ));
        assert_eq!(view.slot_ids(), vec!["header-placeholder".to_string()]);
        assert_eq!(
            view.html("header-placeholder").as_deref(),
            Some(r#"<header id="header-placeholder"><a href="index.html">Shop</a></header>"#)
        );
        assert!(view.highlight_link("header-placeholder", "index.html"));
        assert_eq!(view.text("header-placeholder").as_deref(), Some("Shop"));
    }

    #[test]
    fn test_duplicate_id_keeps_first_element() {
        let mut view = MemoryView::from_html(
            r#"<div id="header-placeholder"></div><span id="cart-count">3</span>"#,
        );
        view.replace_html(
            "header-placeholder",
            r#"<span>Cart (<span id="cart-count">0</span>)</span>"#,
        );
        assert!(view.set_text("cart-count", "9"));

        let document = view.document();
        assert_eq!(document.matches(r#"<span id="cart-count">9</span>"#).count(), 1);
        assert_eq!(document.matches(r#"<span id="cart-count">0</span>"#).count(), 1);
        assert!(view.html("header-placeholder").unwrap().contains(">0<"));
    }

    #[test]
    fn test_quoted_angle_bracket_in_attribute() {
        let view = MemoryView::from_html(r#"<div id="a" title="x>y"><span id="b">1</span></div>"#);
        assert_eq!(view.text("a").as_deref(), Some("1"));
        assert_eq!(view.text("b").as_deref(), Some("1"));
        assert!(view.document().contains(r#"title="x&gt;y""#));
    }

    #[test]
    fn test_ids_in_comments_and_scripts_are_not_slots() {
        let view = MemoryView::from_html(
            r#"<div id="a"><!-- <p id="ghost">x</p> --><script>var s = '<b id="fake">';</script></div>"#,
        );
        assert!(view.contains("a"));
        assert!(!view.contains("ghost"));
        assert!(!view.contains("fake"));
        let html = view.html("a").unwrap();
        assert!(html.contains(r#"<!-- <p id="ghost">x</p> -->"#));
        assert!(html.contains(r#"var s = '<b id="fake">';"#));
    }

    #[test]
    fn test_unquoted_id_is_a_slot() {
        let view = MemoryView::from_html("<p id=note class=hint>hi</p>");
        assert_eq!(view.text("note").as_deref(), Some("hi"));
    }

    #[test]
    fn test_document_markup_keeps_doctype() {
        let view = MemoryView::from_html(
            "<!DOCTYPE html>\n<html><head><title>Shop</title></head><body><div id=\"x\">y</div></body></html>",
        );
        let document = view.document();
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<title>Shop</title>"));
        assert!(document.contains(r#"<div id="x">y</div>"#));
        assert_eq!(view.text("x").as_deref(), Some("y"));
    }
}
