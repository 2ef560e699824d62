//! Text rendering of [`Document`]s.
//!
//! Output looks like:
//!
//! ```text
//! cytoscape({
//!   container: document.getElementById('cy'),
//!   elements: [
//!     {
//!       data: {
//!         id: '3',
//!         source: '1',
//!         target: '2',
//!       },
//!     },
//!   ],
//!   layout: {
//!     name: 'grid',
//!   },
//!   style: [
//!     {
//!       selector: 'node',
//!       style: {
//!         label: 'data(id)'
//!       },
//!     },
//!   ],
//! });
//! ```
//!
//! Raw layout options and style text are written on their own line at the
//! current depth, without any escaping.

use std::fmt;

use super::{Document, ElementEntry, EntryLink, StyleBlock};

/// A [`Document`] paired with its indentation, ready to be displayed.
pub(super) struct Rendered<'a> {
    document: &'a Document,
    indent: usize,
}

impl<'a> Rendered<'a> {
    pub(super) fn new(document: &'a Document, indent: usize) -> Self {
        Self { document, indent }
    }

    fn line(&self, f: &mut fmt::Formatter<'_>, depth: usize, text: &str) -> fmt::Result {
        writeln!(f, "{:width$}{text}", "", width = depth * self.indent)
    }

    fn element(&self, f: &mut fmt::Formatter<'_>, entry: &ElementEntry) -> fmt::Result {
        self.line(f, 2, "{")?;
        self.line(f, 3, "data: {")?;
        self.line(f, 4, &format!("id: '{}',", entry.id()))?;
        match entry.link() {
            EntryLink::None => {}
            EntryLink::Parent(parent) => self.line(f, 4, &format!("parent: '{parent}',"))?,
            EntryLink::Edge { source, target } => {
                self.line(f, 4, &format!("source: '{source}',"))?;
                self.line(f, 4, &format!("target: '{target}',"))?;
            }
        }
        self.line(f, 3, "},")?;
        self.line(f, 2, "},")
    }

    fn style_block(&self, f: &mut fmt::Formatter<'_>, block: &StyleBlock) -> fmt::Result {
        self.line(f, 2, "{")?;
        self.line(f, 3, &format!("selector: '{}',", block.selector()))?;
        self.line(f, 3, "style: {")?;
        self.line(f, 4, block.style())?;
        self.line(f, 3, "},")?;
        self.line(f, 2, "},")
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let document = self.document;

        f.write_str("cytoscape({\n")?;
        self.line(
            f,
            1,
            &format!(
                "container: document.getElementById('{}'),",
                document.container()
            ),
        )?;

        if document.elements().is_empty() {
            self.line(f, 1, "elements: [],")?;
        } else {
            self.line(f, 1, "elements: [")?;
            for entry in document.elements() {
                self.element(f, entry)?;
            }
            self.line(f, 1, "],")?;
        }

        self.line(f, 1, "layout: {")?;
        self.line(f, 2, &format!("name: '{}',", document.layout().name()))?;
        if let Some(options) = document.layout().options() {
            self.line(f, 2, options)?;
        }
        self.line(f, 1, "},")?;

        if document.style().is_empty() {
            self.line(f, 1, "style: [],")?;
        } else {
            self.line(f, 1, "style: [")?;
            for block in document.style() {
                self.style_block(f, block)?;
            }
            self.line(f, 1, "],")?;
        }

        f.write_str("});")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LayoutBlock, Selector};

    fn sample() -> Document {
        Document::new(
            "cy",
            vec![
                ElementEntry::new("1", EntryLink::None),
                ElementEntry::new("2", EntryLink::Parent("1".to_string())),
                ElementEntry::new(
                    "3",
                    EntryLink::Edge {
                        source: "1".to_string(),
                        target: "2".to_string(),
                    },
                ),
            ],
            LayoutBlock::new("breadthfirst", Some("directed: true".to_string())),
            vec![StyleBlock::new(Selector::Node, "label: 'data(id)'")],
        )
    }

    #[test]
    fn test_render_full_document() {
        let expected = "\
cytoscape({
  container: document.getElementById('cy'),
  elements: [
    {
      data: {
        id: '1',
      },
    },
    {
      data: {
        id: '2',
        parent: '1',
      },
    },
    {
      data: {
        id: '3',
        source: '1',
        target: '2',
      },
    },
  ],
  layout: {
    name: 'breadthfirst',
    directed: true
  },
  style: [
    {
      selector: 'node',
      style: {
        label: 'data(id)'
      },
    },
  ],
});";

        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_render_empty_arrays() {
        let document = Document::new(
            "cy",
            Vec::new(),
            LayoutBlock::new("random", None),
            Vec::new(),
        );
        let text = document.to_string();

        assert!(text.contains("  elements: [],\n"));
        assert!(text.contains("  style: [],\n"));
        assert!(text.contains("  layout: {\n    name: 'random',\n  },\n"));
    }

    #[test]
    fn test_render_custom_indent() {
        let text = sample().render(4);

        assert!(text.contains("\n    container: document.getElementById('cy'),\n"));
        assert!(text.contains("\n                id: '1',\n"));
    }

    #[test]
    fn test_raw_text_is_verbatim() {
        let document = Document::new(
            "cy",
            Vec::new(),
            LayoutBlock::new("grid", Some("rows: 2, cols: '<b>'".to_string())),
            vec![StyleBlock::new(Selector::Edge, "width: 3, 'line-color': \"#ccc\"")],
        );
        let text = document.to_string();

        assert!(text.contains("rows: 2, cols: '<b>'"));
        assert!(text.contains("width: 3, 'line-color': \"#ccc\""));
        assert!(text.contains("selector: 'edge',"));
    }
}
