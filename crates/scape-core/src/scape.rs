//! Scapes: named graphs with presentation settings.
//!
//! A [`Scape`] holds everything the visualization front end needs besides the
//! elements themselves: the id of the container it draws into, the layout
//! algorithm with its options, and style blocks for nodes, edges, and compound
//! parents. Layout options and styles are opaque `key: value` text that is
//! passed through to the output document untouched.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::identifier::ScapeId;

/// Default id of the element the graph is drawn into.
pub const DEFAULT_CONTAINER_ELEMENT_ID: &str = "cy";

/// Default node style, labelling each node with its id.
pub const DEFAULT_NODE_STYLES: &str = "label: 'data(id)'";

/// Layout algorithm used by the front end to place the elements.
///
/// Names the front end does not know under one of the listed variants are kept
/// as [`LayoutName::Custom`] and emitted unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutName {
    Null,
    #[default]
    Random,
    Preset,
    Grid,
    Circle,
    Concentric,
    Breadthfirst,
    Cose,
    Dagre,
    Custom(String),
}

impl LayoutName {
    /// Returns the front-end name of the layout.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Random => "random",
            Self::Preset => "preset",
            Self::Grid => "grid",
            Self::Circle => "circle",
            Self::Concentric => "concentric",
            Self::Breadthfirst => "breadthfirst",
            Self::Cose => "cose",
            Self::Dagre => "dagre",
            Self::Custom(name) => name,
        }
    }
}

impl FromStr for LayoutName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "null" => Self::Null,
            "random" => Self::Random,
            "preset" => Self::Preset,
            "grid" => Self::Grid,
            "circle" => Self::Circle,
            "concentric" => Self::Concentric,
            "breadthfirst" => Self::Breadthfirst,
            "cose" => Self::Cose,
            "dagre" => Self::Dagre,
            other => Self::Custom(other.to_string()),
        })
    }
}

impl From<String> for LayoutName {
    fn from(name: String) -> Self {
        match name.parse() {
            Ok(layout) => layout,
            Err(never) => match never {},
        }
    }
}

impl From<LayoutName> for String {
    fn from(layout: LayoutName) -> Self {
        layout.as_str().to_string()
    }
}

impl fmt::Display for LayoutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings for a scape that has not been created yet.
///
/// # Example
///
/// ```
/// # use scape_core::scape::{LayoutName, ScapeDraft};
/// let draft = ScapeDraft::new("demo")
///     .with_layout(LayoutName::Grid, None)
///     .with_edge_styles("width: 2");
///
/// assert_eq!(draft.name(), "demo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScapeDraft {
    name: String,
    container_element_id: String,
    layout_name: LayoutName,
    layout_options: Option<String>,
    node_styles: Option<String>,
    edge_styles: Option<String>,
    parent_styles: Option<String>,
}

impl ScapeDraft {
    /// Creates a draft with default presentation settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            container_element_id: DEFAULT_CONTAINER_ELEMENT_ID.to_string(),
            layout_name: LayoutName::default(),
            layout_options: None,
            node_styles: Some(DEFAULT_NODE_STYLES.to_string()),
            edge_styles: None,
            parent_styles: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_container(mut self, container_element_id: impl Into<String>) -> Self {
        self.container_element_id = container_element_id.into();
        self
    }

    /// Sets the layout algorithm and its raw options text.
    pub fn with_layout(mut self, name: LayoutName, options: Option<String>) -> Self {
        self.layout_name = name;
        self.layout_options = options;
        self
    }

    /// Replaces the node style text. `None` drops the default node style.
    pub fn with_node_styles(mut self, styles: Option<String>) -> Self {
        self.node_styles = styles;
        self
    }

    pub fn with_edge_styles(mut self, styles: impl Into<String>) -> Self {
        self.edge_styles = Some(styles.into());
        self
    }

    pub fn with_parent_styles(mut self, styles: impl Into<String>) -> Self {
        self.parent_styles = Some(styles.into());
        self
    }

    /// Turns this draft into a stored scape with the given id.
    pub fn assign_id(self, id: ScapeId) -> Scape {
        Scape {
            id,
            name: self.name,
            container_element_id: self.container_element_id,
            layout_name: self.layout_name,
            layout_options: self.layout_options,
            node_styles: self.node_styles,
            edge_styles: self.edge_styles,
            parent_styles: self.parent_styles,
        }
    }
}

/// A named graph instance with its presentation settings.
///
/// The elements of a scape are owned by the
/// [`ElementStore`](crate::store::ElementStore) that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scape {
    id: ScapeId,
    name: String,
    container_element_id: String,
    layout_name: LayoutName,
    layout_options: Option<String>,
    node_styles: Option<String>,
    edge_styles: Option<String>,
    parent_styles: Option<String>,
}

impl Scape {
    pub fn id(&self) -> ScapeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the id of the element the graph is drawn into.
    pub fn container_element_id(&self) -> &str {
        &self.container_element_id
    }

    pub fn layout_name(&self) -> &LayoutName {
        &self.layout_name
    }

    pub fn layout_options(&self) -> Option<&str> {
        self.layout_options.as_deref()
    }

    pub fn node_styles(&self) -> Option<&str> {
        self.node_styles.as_deref()
    }

    pub fn edge_styles(&self) -> Option<&str> {
        self.edge_styles.as_deref()
    }

    pub fn parent_styles(&self) -> Option<&str> {
        self.parent_styles.as_deref()
    }
}

impl fmt::Display for Scape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let scape = ScapeDraft::new("demo").assign_id(ScapeId::new(1));

        assert_eq!(scape.container_element_id(), "cy");
        assert_eq!(scape.layout_name(), &LayoutName::Random);
        assert_eq!(scape.layout_options(), None);
        assert_eq!(scape.node_styles(), Some("label: 'data(id)'"));
        assert_eq!(scape.edge_styles(), None);
        assert_eq!(scape.parent_styles(), None);
    }

    #[test]
    fn test_scape_displays_its_name() {
        let scape = ScapeDraft::new("forest").assign_id(ScapeId::new(2));
        assert_eq!(scape.to_string(), "forest");
    }

    #[test]
    fn test_layout_name_round_trip_through_str() {
        for name in [
            "null",
            "random",
            "preset",
            "grid",
            "circle",
            "concentric",
            "breadthfirst",
            "cose",
            "dagre",
        ] {
            let layout: LayoutName = name.parse().unwrap();
            assert!(!matches!(layout, LayoutName::Custom(_)), "{name}");
            assert_eq!(layout.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_layout_is_kept() {
        let layout = LayoutName::from("cola".to_string());
        assert_eq!(layout, LayoutName::Custom("cola".to_string()));
        assert_eq!(layout.to_string(), "cola");
    }
}
