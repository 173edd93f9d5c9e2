//! Test double for the `tdom` templating library.
//!
//! Exposes the library's import surface so dependent test suites can
//! reference the names without any real template processing running.
//! The node markers carry no state and [`html`] never inspects its input.

use std::fmt;
use std::ops::Deref;

use tracing::trace;

/// Marker for DOM node categories. Downstream code checks membership
/// with a `T: Node` bound; the markers themselves are inert.
pub trait Node: fmt::Debug {}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Element;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Text;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Fragment;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Comment;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct DocumentType;

impl Node for Element {}
impl Node for Text {}
impl Node for Fragment {}
impl Node for Comment {}
impl Node for DocumentType {}

/// Virtual DOM node, the return type of [`html`]
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct VDOMNode;

/// A parameterized markup fragment awaiting processing
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Template;

/// A string that is already safe to render as HTML and must not be
/// escaped again.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Markup(String);

impl Markup {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The HTML-safe representation: the wrapped value itself, unchanged
    pub fn html(&self) -> &str {
        &self.0
    }
}

impl Deref for Markup {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Markup {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for Markup {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The processor collaborator owns the output type of template processing;
/// the entry points spell their return type through it.
pub mod processor {
    /// Output of template processing
    pub type Html = crate::VDOMNode;
}

/// Process a t-string template and return an html node.
///
/// Test double: no processing happens, the result is always the inert
/// placeholder node.
pub fn html(_template: Template) -> processor::Html {
    trace!("template routed through stub processor");
    VDOMNode
}

/// Static-method form of [`html`], matching the shadowed library's `h.html`
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct h;

impl h {
    pub fn html(template: Template) -> processor::Html {
        crate::html(template)
    }
}

#[cfg(test)]
mod tests;
