//! Scape - random graph scapes rendered as cytoscape configuration documents.
//!
//! Generation and serialization for scapes: named directed graphs of nodes,
//! edges, and compound parent links, together with the presentation settings
//! the visualization front end needs. Scapes are kept in an
//! [`ElementStore`](store::ElementStore) and turned into a `cytoscape({...})`
//! configuration document on demand.

pub mod config;
pub mod document;
pub mod generate;

mod error;

pub use scape_core::{element, error::ModelError, identifier, scape as model, store};

pub use error::ScapeError;

use log::{debug, info};

use config::AppConfig;
use document::{Document, DocumentSerializer};
use generate::{GeneratorKind, MeshGenerator, ScapeGenerator, TreeGenerator};
use scape_core::{scape::Scape, store::ElementStore};

/// Builder for generating scapes and rendering their documents.
///
/// Generator size, container id, seed, and document indentation come from
/// the [`AppConfig`] the builder was created with.
///
/// # Examples
///
/// ```rust
/// use scape::{ScapeBuilder, config::AppConfig, generate::GeneratorKind, store::MemoryStore};
///
/// let builder = ScapeBuilder::new(AppConfig::default());
/// let mut store = MemoryStore::new();
///
/// // Generate a tree with the configured defaults
/// let scape = builder
///     .generate(&mut store, GeneratorKind::Tree, "demo")
///     .expect("Failed to generate");
///
/// // Render it to the cytoscape document
/// let text = builder.render(&store, &scape).expect("Failed to render");
/// assert!(text.starts_with("cytoscape({"));
/// ```
#[derive(Default)]
pub struct ScapeBuilder {
    config: AppConfig,
}

impl ScapeBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including generator and document settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Generate a scape named `name` with the chosen generator.
    ///
    /// The random number generator is built from the generator configuration,
    /// so a configured seed makes the result reproducible.
    ///
    /// # Errors
    ///
    /// Returns `ScapeError::Model` if the configured size is zero or the
    /// store rejects an element.
    pub fn generate<S>(
        &self,
        store: &mut S,
        kind: GeneratorKind,
        name: &str,
    ) -> Result<Scape, ScapeError>
    where
        S: ElementStore + ?Sized,
    {
        let settings = self.config.generator();
        let mut rng = settings.rng();
        info!(generator:% = kind, seed:? = settings.seed(); "Generating scape");

        let scape = match kind {
            GeneratorKind::Tree => TreeGenerator::new(settings.size())
                .with_container(settings.container_element_id())
                .generate(store, &mut rng, name)?,
            GeneratorKind::Mesh => MeshGenerator::new(settings.size())
                .with_container(settings.container_element_id())
                .with_layout(settings.mesh_layout().clone())
                .generate(store, &mut rng, name)?,
        };

        debug!(scape_id = scape.id().get(); "Scape generated");
        Ok(scape)
    }

    /// Serialize a scape into its structured document.
    ///
    /// # Errors
    ///
    /// Returns `ScapeError::Model` if the scape contains dangling references.
    pub fn serialize<S>(&self, store: &S, scape: &Scape) -> Result<Document, ScapeError>
    where
        S: ElementStore + ?Sized,
    {
        Ok(DocumentSerializer::new().serialize(store, scape)?)
    }

    /// Serialize a scape and render the document text.
    ///
    /// # Errors
    ///
    /// Returns `ScapeError::Model` if the scape contains dangling references.
    pub fn render<S>(&self, store: &S, scape: &Scape) -> Result<String, ScapeError>
    where
        S: ElementStore + ?Sized,
    {
        let document = self.serialize(store, scape)?;
        let text = document.render(self.config.document().indent());
        info!(bytes = text.len(); "Document rendered");
        Ok(text)
    }
}
