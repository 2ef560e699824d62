//! Structured cytoscape configuration documents.
//!
//! A [`Document`] is the tree form of the `cytoscape({...})` call consumed by
//! the visualization front end. It is produced by [`DocumentSerializer`] from
//! a scape and turned into text by [`Document::render`] (or its
//! [`Display`](std::fmt::Display) impl, which uses the default indentation).
//!
//! # Overview
//!
//! - [`ElementEntry`] - One `{ data: { ... } }` entry of the `elements` array
//! - [`LayoutBlock`] - Layout name and raw layout options
//! - [`StyleBlock`] - A selector with its raw style text
//!
//! Layout options and style text are opaque and are emitted exactly as stored.

mod render;
mod serializer;

pub use serializer::DocumentSerializer;

use std::fmt;

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// The reference part of an element entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryLink {
    /// A node without a compound parent.
    None,
    /// A node nested inside `parent`.
    Parent(String),
    /// An edge.
    Edge { source: String, target: String },
}

/// One entry of the `elements` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementEntry {
    id: String,
    link: EntryLink,
}

impl ElementEntry {
    pub fn new(id: impl Into<String>, link: EntryLink) -> Self {
        Self {
            id: id.into(),
            link,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn link(&self) -> &EntryLink {
        &self.link
    }
}

/// The `layout` object of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutBlock {
    name: String,
    options: Option<String>,
}

impl LayoutBlock {
    pub fn new(name: impl Into<String>, options: Option<String>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw options text, if any.
    pub fn options(&self) -> Option<&str> {
        self.options.as_deref()
    }
}

/// Element selector of a style block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Node,
    Edge,
    Parent,
}

impl Selector {
    /// Returns the selector as written in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Edge => "edge",
            Self::Parent => "parent",
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the `style` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock {
    selector: Selector,
    style: String,
}

impl StyleBlock {
    pub fn new(selector: Selector, style: impl Into<String>) -> Self {
        Self {
            selector,
            style: style.into(),
        }
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Returns the raw style text.
    pub fn style(&self) -> &str {
        &self.style
    }
}

/// A complete configuration document for one scape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    container: String,
    elements: Vec<ElementEntry>,
    layout: LayoutBlock,
    style: Vec<StyleBlock>,
}

impl Document {
    pub fn new(
        container: impl Into<String>,
        elements: Vec<ElementEntry>,
        layout: LayoutBlock,
        style: Vec<StyleBlock>,
    ) -> Self {
        Self {
            container: container.into(),
            elements,
            layout,
            style,
        }
    }

    /// Returns the id of the element the graph is drawn into.
    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn elements(&self) -> &[ElementEntry] {
        &self.elements
    }

    pub fn layout(&self) -> &LayoutBlock {
        &self.layout
    }

    pub fn style(&self) -> &[StyleBlock] {
        &self.style
    }

    /// Renders the document as text using `indent` spaces per level.
    pub fn render(&self, indent: usize) -> String {
        render::Rendered::new(self, indent).to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&render::Rendered::new(self, DEFAULT_INDENT), f)
    }
}
