//! Integration tests for the ScapeBuilder API
//!
//! These tests verify that the public API works end to end.

use scape::{
    ModelError, ScapeBuilder, ScapeError,
    config::{AppConfig, DocumentConfig, GeneratorConfig},
    element::NewElement,
    generate::GeneratorKind,
    model::{LayoutName, ScapeDraft},
    store::{ElementStore, MemoryStore},
};

fn seeded(size: usize, seed: u64) -> ScapeBuilder {
    ScapeBuilder::new(AppConfig::new(
        GeneratorConfig::new(size, "cy", Some(seed)),
        DocumentConfig::default(),
    ))
}

#[test]
fn test_builder_api_exists() {
    let builder = ScapeBuilder::default();
    assert_eq!(builder.config().generator().size(), 100);
}

#[test]
fn test_generate_and_render_tree() {
    let builder = seeded(30, 1);
    let mut store = MemoryStore::new();

    let scape = builder
        .generate(&mut store, GeneratorKind::Tree, "tree")
        .expect("Failed to generate tree");
    let text = builder.render(&store, &scape).expect("Failed to render");

    assert!(text.starts_with("cytoscape({\n"));
    assert!(text.ends_with("});"));
    assert!(text.contains("name: 'breadthfirst',"));
    assert!(text.contains("directed: true, spacingFactor: 1.75"));
    assert_eq!(text.matches("data: {").count(), 30 + 29);
}

#[test]
fn test_generate_and_serialize_mesh() {
    let builder = seeded(10, 2);
    let mut store = MemoryStore::new();

    let scape = builder
        .generate(&mut store, GeneratorKind::Mesh, "mesh")
        .expect("Failed to generate mesh");
    let document = builder
        .serialize(&store, &scape)
        .expect("Failed to serialize");

    assert_eq!(document.elements().len(), 40);
    assert_eq!(document.layout().name(), "random");
    assert_eq!(document.style().len(), 1);
}

#[test]
fn test_seeded_builder_is_reproducible() {
    let render = |kind: GeneratorKind| {
        let builder = seeded(25, 99);
        let mut store = MemoryStore::new();
        let scape = builder.generate(&mut store, kind, "again").unwrap();
        builder.render(&store, &scape).unwrap()
    };

    assert_eq!(render(GeneratorKind::Tree), render(GeneratorKind::Tree));
    assert_eq!(render(GeneratorKind::Mesh), render(GeneratorKind::Mesh));
}

#[test]
fn test_zero_size_is_an_error() {
    let builder = seeded(0, 3);
    let mut store = MemoryStore::new();

    let err = builder
        .generate(&mut store, GeneratorKind::Mesh, "empty")
        .unwrap_err();

    assert!(matches!(
        err,
        ScapeError::Model(ModelError::EmptyGraph { .. })
    ));
}

#[test]
fn test_configured_mesh_layout_and_indent() {
    let builder = ScapeBuilder::new(AppConfig::new(
        GeneratorConfig::new(3, "canvas", Some(4)).with_mesh_layout(LayoutName::Concentric),
        DocumentConfig::new(4),
    ));
    let mut store = MemoryStore::new();

    let scape = builder
        .generate(&mut store, GeneratorKind::Mesh, "mesh")
        .unwrap();
    let text = builder.render(&store, &scape).unwrap();

    assert!(text.contains("\n    container: document.getElementById('canvas'),\n"));
    assert!(text.contains("\n        name: 'concentric',\n"));
}

#[test]
fn test_hand_built_scape_renders() {
    let builder = ScapeBuilder::default();
    let mut store = MemoryStore::new();

    let id = store
        .create_scape(
            ScapeDraft::new("hand")
                .with_layout(LayoutName::Grid, None)
                .with_parent_styles("background-color: 'lightgray'"),
        )
        .unwrap();
    let group = store.create(NewElement::node(id)).unwrap();
    let a = store
        .create(NewElement::node(id).with_parent(group))
        .unwrap();
    let b = store
        .create(NewElement::node(id).with_parent(group))
        .unwrap();
    store.create(NewElement::edge(id, a, b)).unwrap();

    let scape = store.scape(id).cloned().unwrap();
    let text = builder.render(&store, &scape).unwrap();

    assert_eq!(text.matches("parent: '1',").count(), 2);
    assert!(text.contains("source: '2',"));
    assert!(text.contains("target: '3',"));
    assert!(text.contains("selector: 'node',"));
    assert!(text.contains("selector: 'parent',"));
    assert!(!text.contains("selector: 'edge',"));
}
