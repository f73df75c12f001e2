use std::fs;

use scalegen_lib::Config;

use super::generate_tests::METADATA;
use super::types::{TypesArgs, render_types};

#[test]
fn renders_requested_ids_only() {
    let dir = tempfile::tempdir().unwrap();
    let metadata = dir.path().join("metadata.json");
    fs::write(&metadata, METADATA).unwrap();

    let args = TypesArgs {
        metadata,
        ids: vec![4],
        box_nested_variants: false,
        config: Config::new().emit_docs(false),
    };
    let out = render_types(&args).unwrap();
    assert!(out.contains("/// Generated from `pallet_demo::Info` (id 4).\n"));
    assert!(!out.contains("NodeRuntimeCall"));
}

#[test]
fn renders_everything_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let metadata = dir.path().join("metadata.json");
    fs::write(&metadata, METADATA).unwrap();

    let args = TypesArgs {
        metadata,
        ids: Vec::new(),
        box_nested_variants: false,
        config: Config::new(),
    };
    let out = render_types(&args).unwrap();
    let names: Vec<_> = out
        .lines()
        .filter_map(|line| line.strip_prefix("pub struct "))
        .collect();
    assert_eq!(
        names,
        ["PalletDemoPalletCall {", "NodeRuntimeCall {", "Info {"]
    );
}

#[test]
fn unknown_id_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let metadata = dir.path().join("metadata.json");
    fs::write(&metadata, METADATA).unwrap();

    let args = TypesArgs {
        metadata,
        ids: vec![99],
        box_nested_variants: false,
        config: Config::new(),
    };
    let err = render_types(&args).unwrap_err();
    insta::assert_snapshot!(err, @"type 99 is not in the type table");
}
