//! Anti-regression tests for crashes discovered by fuzzing.
//!
//! This test automatically discovers crash files from the honggfuzz workspace
//! and verifies that they no longer cause panics.

use std::path::Path;

use arbitrary::{Arbitrary, Unstructured};
use schema_assets::{
    prelude::*,
    utils::{generate_identifier_name, hashed_identifier_name},
};

/// The input decoded by the `fuzz_identifier_name` target.
type FuzzInput = (Vec<String>, String, u16, u8);

/// Runs the fuzzed operations, which should never panic.
fn run(input: FuzzInput) {
    let (column_names, postfix, max_size, case_mode) = input;
    let max_size = usize::from(max_size);
    let _ = generate_identifier_name(&column_names, &postfix, max_size);
    let _ = hashed_identifier_name(&column_names, &postfix, max_size);

    let mut asset = SchemaAsset::new(postfix);
    let mode = CaseMode::ALL[usize::from(case_mode) % CaseMode::ALL.len()];
    asset.set_case_mode(mode).unwrap();
    let _ = asset.fold_identifiers(&column_names);
}

/// Test that the fuzzed operations do not panic.
/// Provides context about which crash file caused the failure.
fn should_not_panic_with_context(input: FuzzInput, crash_file: &Path) {
    use std::panic;

    let description = format!("{input:?}");
    let result = panic::catch_unwind(|| run(input));

    if let Err(e) = result {
        panic!(
            "Crash file {} caused a panic!\nInput: {description}\nPanic: {e:?}",
            crash_file.display()
        );
    }
}

/// Copies the 'SIGABRT' crash files from the honggfuzz workspace
/// to the 'tests/fuzz_identifier_name' directory for testing and collect
/// a regression tests suite over time.
fn copy_crash_files() {
    let toml_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let crash_dir = Path::new(&toml_dir).join("fuzz/hfuzz_workspace/fuzz_identifier_name");
    let test_dir = Path::new(&toml_dir).join("tests/fuzz_identifier_name");

    let Ok(entries) = std::fs::read_dir(crash_dir) else {
        return;
    };

    if !test_dir.exists() {
        std::fs::create_dir(&test_dir).unwrap();
    }

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        if path.is_file() && file_name.starts_with("SIGABRT") {
            let dest_path = test_dir.join(file_name);
            let _ = std::fs::copy(&path, &dest_path);
        }
    }
}

/// Discover and test all crash files from honggfuzz workspace.
#[test]
fn test_fuzz_crashes() {
    copy_crash_files();

    let toml_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let test_dir = Path::new(&toml_dir).join("tests/fuzz_identifier_name");
    let Ok(entries) = std::fs::read_dir(test_dir) else {
        return;
    };

    let crash_files: Vec<_> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.is_file() {
                let bytes = std::fs::read(&path).ok()?;
                Some((path, bytes))
            } else {
                None
            }
        })
        .collect();

    for (path, bytes) in crash_files {
        // Use arbitrary to extract the input exactly as honggfuzz does
        let mut unstructured = Unstructured::new(&bytes);
        let Ok(input) = <FuzzInput as Arbitrary>::arbitrary(&mut unstructured) else {
            continue;
        };

        should_not_panic_with_context(input, &path);
    }
}

/// Inputs known to stress the length arithmetic must not panic either.
#[test]
fn test_degenerate_inputs() {
    let path = Path::new("degenerate");
    let inputs: Vec<FuzzInput> = vec![
        (vec![], String::new(), 0, 0),
        (vec![String::new()], String::new(), 0, 1),
        (vec!["ß".repeat(40), "日本".to_owned()], "_".repeat(64), 1, 2),
        (vec!["a".to_owned(); 64], "postfix".to_owned(), u16::MAX, 3),
        (vec!["é_".to_owned(), "_ü".to_owned()], "ı".to_owned(), 3, 4),
    ];
    for input in inputs {
        should_not_panic_with_context(input, path);
    }
}
