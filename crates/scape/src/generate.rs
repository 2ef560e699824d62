//! Synthetic scape generators.
//!
//! This module provides generators that create a scape in an
//! [`ElementStore`] and populate it with random elements:
//!
//! - [`TreeGenerator`] - a random rooted tree laid out breadth-first
//! - [`MeshGenerator`] - uniformly random edges between a fixed set of nodes
//!
//! Randomness is always injected, so seeding the generator with
//! [`rand::SeedableRng::seed_from_u64`] makes the output reproducible.
//!
//! # Example
//!
//! ```
//! # use rand::{SeedableRng, rngs::StdRng};
//! # use scape::generate::{ScapeGenerator, TreeGenerator};
//! # use scape_core::store::{ElementStore, MemoryStore};
//! let mut store = MemoryStore::new();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let scape = TreeGenerator::new(20)
//!     .generate(&mut store, &mut rng, "demo")
//!     .unwrap();
//! assert_eq!(store.count_nodes(scape.id()), 20);
//! ```

mod mesh;
mod sampler;
mod tree;

pub use mesh::MeshGenerator;
pub use sampler::{Distribution, RandomElementSampler};
pub use tree::TreeGenerator;

use std::{fmt, str::FromStr};

use rand::Rng;

use scape_core::{
    error::ModelError,
    identifier::ScapeId,
    scape::Scape,
    store::ElementStore,
};

/// A strategy that builds a complete scape.
pub trait ScapeGenerator {
    /// Creates a scape named `name` in `store` and fills it with elements.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyGraph`] when asked for zero nodes, and
    /// propagates any error raised by the store.
    fn generate<S, R>(&self, store: &mut S, rng: &mut R, name: &str) -> Result<Scape, ModelError>
    where
        S: ElementStore + ?Sized,
        R: Rng + ?Sized;
}

/// The available generators, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Tree,
    Mesh,
}

impl FromStr for GeneratorKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(Self::Tree),
            "mesh" => Ok(Self::Mesh),
            _ => Err("Unsupported generator"),
        }
    }
}

impl From<GeneratorKind> for &'static str {
    fn from(val: GeneratorKind) -> Self {
        match val {
            GeneratorKind::Tree => "tree",
            GeneratorKind::Mesh => "mesh",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Reads back a scape the generator has just created.
fn fetch_scape<S: ElementStore + ?Sized>(store: &S, id: ScapeId) -> Result<Scape, ModelError> {
    store.scape(id).cloned().ok_or(ModelError::UnknownScape(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_kind_names() {
        assert_eq!("tree".parse::<GeneratorKind>(), Ok(GeneratorKind::Tree));
        assert_eq!("mesh".parse::<GeneratorKind>(), Ok(GeneratorKind::Mesh));
        assert!("grid".parse::<GeneratorKind>().is_err());
        assert_eq!(GeneratorKind::Mesh.to_string(), "mesh");
    }
}
