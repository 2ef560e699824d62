//! Random rooted tree generation.

use log::{debug, info, trace};
use rand::Rng;

use scape_core::{
    element::NewElement,
    error::ModelError,
    identifier::ElementId,
    scape::{DEFAULT_CONTAINER_ELEMENT_ID, LayoutName, Scape, ScapeDraft},
    store::ElementStore,
};

use super::{ScapeGenerator, fetch_scape};
use crate::config::DEFAULT_SIZE;

/// Chance that a frontier node grows more than one child.
const BRANCH_PROBABILITY: f64 = 0.10;

/// Number of children the root grows whenever it is picked.
const ROOT_CHILDREN: usize = 10;

/// Branches are grown only while `split` is below this value.
///
/// `split` is drawn from `[0, 1)`, so no branch is ever capped here.
const CAP_THRESHOLD: f64 = 90.0;

/// Grows a random tree from a single root node.
///
/// Each step picks a random node from the frontier, attaches new children to
/// it, and retires it from the frontier unless it is the last member. The root
/// always receives [`ROOT_CHILDREN`] children when picked; other nodes receive
/// one child, or one to three with a 10% chance. Growth stops once the scape
/// holds `size` nodes, so the result has exactly `size` nodes and `size - 1`
/// edges.
///
/// The scape uses the `breadthfirst` layout with a spacing factor that shrinks
/// as the tree grows.
#[derive(Debug, Clone)]
pub struct TreeGenerator {
    size: usize,
    container_element_id: String,
}

impl Default for TreeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl TreeGenerator {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            container_element_id: DEFAULT_CONTAINER_ELEMENT_ID.to_string(),
        }
    }

    pub fn with_container(mut self, container_element_id: impl Into<String>) -> Self {
        self.container_element_id = container_element_id.into();
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn layout_options(&self) -> String {
        format!(
            "directed: true, spacingFactor: {}",
            1.75 * 30.0 / self.size as f64
        )
    }
}

impl ScapeGenerator for TreeGenerator {
    fn generate<S, R>(&self, store: &mut S, rng: &mut R, name: &str) -> Result<Scape, ModelError>
    where
        S: ElementStore + ?Sized,
        R: Rng + ?Sized,
    {
        info!(name = name, size = self.size; "Generating random tree");

        let draft = ScapeDraft::new(name)
            .with_container(self.container_element_id.as_str())
            .with_layout(LayoutName::Breadthfirst, Some(self.layout_options()));
        let scape = store.create_scape(draft)?;
        if self.size == 0 {
            store.delete_scape(scape)?;
            return Err(ModelError::EmptyGraph { scape });
        }

        let root = store.create(NewElement::node(scape))?;
        let mut frontier: Vec<ElementId> = vec![root];
        let mut count = 1;

        while !frontier.is_empty() && count < self.size {
            let index = rng.random_range(0..frontier.len());
            let current = frontier[index];

            let split: f64 = rng.random();
            let mut children = 1;
            if split < BRANCH_PROBABILITY {
                children = rng.random_range(1..=3);
            }
            if current == root {
                children = ROOT_CHILDREN;
            }

            if split < CAP_THRESHOLD {
                for _ in 0..children {
                    if count >= self.size {
                        break;
                    }
                    let child = store.create(NewElement::node(scape))?;
                    store.create(NewElement::edge(scape, current, child))?;
                    frontier.push(child);
                    count += 1;
                }
            }
            trace!(current = current.get(), children = children, count = count; "Grew branch");

            if frontier.len() > 1 {
                frontier.remove(index);
            }
        }

        debug!(scape_id = scape.get(), nodes = count, frontier = frontier.len(); "Tree complete");
        fetch_scape(store, scape)
    }
}
