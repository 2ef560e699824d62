//! Example: Building a scape by hand and generating one at random
//!
//! This example creates a small compound graph directly through the element
//! store, then generates a seeded random tree, and prints both documents.

use rand::{SeedableRng, rngs::StdRng};

use scape::{
    document::DocumentSerializer,
    element::NewElement,
    generate::{ScapeGenerator, TreeGenerator},
    model::{LayoutName, ScapeDraft},
    store::{ElementStore, MemoryStore},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MemoryStore::new();
    let serializer = DocumentSerializer::new();

    // A compound node holding two services connected by an edge
    let id = store.create_scape(
        ScapeDraft::new("services")
            .with_layout(LayoutName::Cose, Some("animate: false".to_string()))
            .with_edge_styles("'curve-style': 'bezier', 'target-arrow-shape': 'triangle'")
            .with_parent_styles("'background-opacity': 0.2"),
    )?;
    let cluster = store.create(NewElement::node(id).with_label("cluster"))?;
    let api = store.create(NewElement::node(id).with_parent(cluster).with_label("api"))?;
    let db = store.create(NewElement::node(id).with_parent(cluster).with_label("db"))?;
    store.create(NewElement::edge(id, api, db))?;

    if let Some(scape) = store.scape(id) {
        println!("// {scape}");
        println!("{}\n", serializer.serialize(&store, scape)?);
    }

    // A reproducible random tree
    let mut rng = StdRng::seed_from_u64(7);
    let tree = TreeGenerator::new(12).generate(&mut store, &mut rng, "tree")?;
    println!("// {tree}");
    println!("{}", serializer.serialize(&store, &tree)?);

    Ok(())
}
