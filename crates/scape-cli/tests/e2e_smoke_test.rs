use std::{fs, io::Write};

use clap::Parser;
use tempfile::tempdir;

use scape::{ModelError, ScapeError};
use scape_cli::Args;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(argv).expect("Failed to parse arguments")
}

#[test]
fn e2e_smoke_test_tree_to_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("tree.js");
    let output = output.to_string_lossy().to_string();

    let args = parse(&[
        "scape", "tree", "--size", "20", "--seed", "7", "--name", "smoke", "-o", output.as_str(),
    ]);
    scape_cli::run(&args).expect("Tree generation failed");

    let text = fs::read_to_string(&output).expect("Output not written");
    assert!(text.starts_with("cytoscape({"));
    assert!(text.contains("name: 'breadthfirst',"));
    assert_eq!(text.matches("source: '").count(), 19);
}

#[test]
fn e2e_smoke_test_mesh_with_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let mut config = fs::File::create(&config_path).unwrap();
    writeln!(
        config,
        "[generator]\nsize = 4\ncontainer_element_id = \"canvas\"\nmesh_layout = \"circle\""
    )
    .unwrap();

    let output = temp_dir.path().join("mesh.js");
    let output = output.to_string_lossy().to_string();
    let config_path = config_path.to_string_lossy().to_string();

    let args = parse(&[
        "scape", "mesh", "--seed", "1", "-c", config_path.as_str(), "-o", output.as_str(),
    ]);
    scape_cli::run(&args).expect("Mesh generation failed");

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("document.getElementById('canvas')"));
    assert!(text.contains("name: 'circle',"));
    assert_eq!(text.matches("source: '").count(), 12);
}

#[test]
fn e2e_smoke_test_same_seed_same_output() {
    let temp_dir = tempdir().unwrap();
    let render = |file: &str| {
        let output = temp_dir.path().join(file);
        let output = output.to_string_lossy().to_string();
        let args = parse(&["scape", "mesh", "-s", "15", "--seed", "42", "-o", output.as_str()]);
        scape_cli::run(&args).unwrap();
        fs::read_to_string(&output).unwrap()
    };

    assert_eq!(render("a.js"), render("b.js"));
}

#[test]
fn e2e_smoke_test_zero_size_fails() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("empty.js");
    let output = output.to_string_lossy().to_string();

    let args = parse(&["scape", "tree", "--size", "0", "-o", output.as_str()]);
    let err = scape_cli::run(&args).unwrap_err();

    assert!(matches!(
        err,
        ScapeError::Model(ModelError::EmptyGraph { .. })
    ));
    assert!(!temp_dir.path().join("empty.js").exists());
}

#[test]
fn e2e_smoke_test_missing_config_fails() {
    let args = parse(&["scape", "tree", "-c", "/nonexistent/scape.toml"]);

    let err = scape_cli::run(&args).unwrap_err();

    assert!(matches!(err, ScapeError::Config(_)));
}

#[test]
fn e2e_smoke_test_unknown_subcommand_is_rejected() {
    assert!(Args::try_parse_from(["scape", "ring"]).is_err());
}
