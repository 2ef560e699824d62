//! Configuration types for Scape generation and rendering.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources; every field is optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining generator and document settings.
//! - [`GeneratorConfig`] - Size, container, seed, and mesh layout of generated scapes.
//! - [`DocumentConfig`] - Text rendering options for output documents.
//!
//! # Example
//!
//! ```
//! # use scape::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.generator().size(), 100);
//! assert_eq!(config.document().indent(), 2);
//! ```

use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use scape_core::scape::{DEFAULT_CONTAINER_ELEMENT_ID, LayoutName};

use crate::document::DEFAULT_INDENT;

/// Default number of nodes in generated scapes.
pub const DEFAULT_SIZE: usize = 100;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generator configuration section.
    #[serde(default)]
    generator: GeneratorConfig,

    /// Document configuration section.
    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `generator` - Settings for generated scapes.
    /// * `document` - Settings for rendered documents.
    pub fn new(generator: GeneratorConfig, document: DocumentConfig) -> Self {
        Self {
            generator,
            document,
        }
    }

    /// Returns the generator configuration.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }
}

/// Settings shared by the tree and mesh generators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    size: usize,
    container_element_id: String,
    seed: Option<u64>,
    mesh_layout: LayoutName,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            container_element_id: DEFAULT_CONTAINER_ELEMENT_ID.to_string(),
            seed: None,
            mesh_layout: LayoutName::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a generator configuration with the default mesh layout.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of nodes to generate.
    /// * `container_element_id` - Container id written into generated scapes.
    /// * `seed` - Seed for reproducible output, or `None` for OS entropy.
    pub fn new(size: usize, container_element_id: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            size,
            container_element_id: container_element_id.into(),
            seed,
            mesh_layout: LayoutName::default(),
        }
    }

    pub fn with_mesh_layout(mut self, layout: LayoutName) -> Self {
        self.mesh_layout = layout;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn container_element_id(&self) -> &str {
        &self.container_element_id
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the layout given to scapes built by the mesh generator.
    pub fn mesh_layout(&self) -> &LayoutName {
        &self.mesh_layout
    }

    /// Builds the random number generator for a generation run.
    ///
    /// The generator is seeded from [`GeneratorConfig::seed`] when set, so the
    /// same configuration always yields the same scape.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Text rendering options for output documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    indent: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl DocumentConfig {
    /// Creates a document configuration.
    ///
    /// # Arguments
    ///
    /// * `indent` - Number of spaces per nesting level.
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Returns the number of spaces per nesting level.
    pub fn indent(&self) -> usize {
        self.indent
    }
}
