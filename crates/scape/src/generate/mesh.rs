//! Uniform random mesh generation.

use log::{debug, info};
use rand::Rng;

use scape_core::{
    element::NewElement,
    error::ModelError,
    scape::{DEFAULT_CONTAINER_ELEMENT_ID, LayoutName, Scape, ScapeDraft},
    store::ElementStore,
};

use super::{RandomElementSampler, ScapeGenerator, fetch_scape};
use crate::config::DEFAULT_SIZE;

/// Number of edges generated per node.
const EDGES_PER_NODE: usize = 3;

/// Generates `size` nodes connected by `3 * size` random edges.
///
/// Both endpoints of every edge are drawn independently and uniformly from
/// the nodes of the scape, so self-loops and parallel edges occur.
#[derive(Debug, Clone)]
pub struct MeshGenerator {
    size: usize,
    container_element_id: String,
    layout: LayoutName,
}

impl Default for MeshGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl MeshGenerator {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            container_element_id: DEFAULT_CONTAINER_ELEMENT_ID.to_string(),
            layout: LayoutName::default(),
        }
    }

    pub fn with_container(mut self, container_element_id: impl Into<String>) -> Self {
        self.container_element_id = container_element_id.into();
        self
    }

    /// Overrides the default `random` layout.
    pub fn with_layout(mut self, layout: LayoutName) -> Self {
        self.layout = layout;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl ScapeGenerator for MeshGenerator {
    fn generate<S, R>(&self, store: &mut S, rng: &mut R, name: &str) -> Result<Scape, ModelError>
    where
        S: ElementStore + ?Sized,
        R: Rng + ?Sized,
    {
        info!(name = name, size = self.size; "Generating random mesh");

        let draft = ScapeDraft::new(name)
            .with_container(self.container_element_id.as_str())
            .with_layout(self.layout.clone(), None);
        let scape = store.create_scape(draft)?;
        if self.size == 0 {
            store.delete_scape(scape)?;
            return Err(ModelError::EmptyGraph { scape });
        }

        for _ in 0..self.size {
            store.create(NewElement::node(scape))?;
        }

        let sampler = RandomElementSampler::uniform();
        for _ in 0..self.size * EDGES_PER_NODE {
            let source = sampler.sample(&*store, scape, rng)?.id();
            let target = sampler.sample(&*store, scape, rng)?.id();
            store.create(NewElement::edge(scape, source, target))?;
        }

        debug!(
            scape_id = scape.get(),
            nodes = self.size,
            edges = self.size * EDGES_PER_NODE;
            "Mesh complete"
        );
        fetch_scape(store, scape)
    }
}
