//! Random node selection within a scape.

use rand::Rng;

use scape_core::{
    element::GraphElement, error::ModelError, identifier::ScapeId, store::ElementStore,
};

/// Probability distribution over the node indices of a scape.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Every node is equally likely.
    #[default]
    Uniform,
    /// Nodes around the middle of the creation order are favoured.
    Triangular,
}

/// Draws random nodes from a scape under a fixed [`Distribution`].
///
/// # Example
///
/// ```
/// # use rand::{SeedableRng, rngs::StdRng};
/// # use scape::generate::RandomElementSampler;
/// # use scape_core::{element::NewElement, scape::ScapeDraft, store::{ElementStore, MemoryStore}};
/// let mut store = MemoryStore::new();
/// let scape = store.create_scape(ScapeDraft::new("demo")).unwrap();
/// let node = store.create(NewElement::node(scape)).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let drawn = RandomElementSampler::uniform()
///     .sample(&store, scape, &mut rng)
///     .unwrap();
/// assert_eq!(drawn.id(), node);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomElementSampler {
    distribution: Distribution,
}

impl RandomElementSampler {
    pub fn new(distribution: Distribution) -> Self {
        Self { distribution }
    }

    pub fn uniform() -> Self {
        Self::new(Distribution::Uniform)
    }

    pub fn triangular() -> Self {
        Self::new(Distribution::Triangular)
    }

    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// Draws one node of `scape`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyGraph`] if the scape has no nodes.
    pub fn sample<'s, S, R>(
        &self,
        store: &'s S,
        scape: ScapeId,
        rng: &mut R,
    ) -> Result<&'s GraphElement, ModelError>
    where
        S: ElementStore + ?Sized,
        R: Rng + ?Sized,
    {
        let count = store.count_nodes(scape);
        if count == 0 {
            return Err(ModelError::EmptyGraph { scape });
        }

        let index = match self.distribution {
            Distribution::Uniform => rng.random_range(0..count),
            Distribution::Triangular => triangular_index(count, rng),
        };

        store
            .node_at(scape, index)
            .ok_or(ModelError::EmptyGraph { scape })
    }
}

/// Floors a triangular draw over `[0, count - 1]` with its mode at `count / 2`.
///
/// `count` must be non-zero.
fn triangular_index<R: Rng + ?Sized>(count: usize, rng: &mut R) -> usize {
    let last = count - 1;
    if last == 0 {
        return 0;
    }

    let (mut low, mut high) = (0.0, last as f64);
    let mode = count as f64 / 2.0;
    let mut u: f64 = rng.random();
    let mut c = (mode - low) / (high - low);
    if u > c {
        u = 1.0 - u;
        c = 1.0 - c;
        std::mem::swap(&mut low, &mut high);
    }

    let draw = low + (high - low) * (u * c).sqrt();
    (draw as usize).min(last)
}
