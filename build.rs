//! Build script to generate the embedded dataset
//!
//! Reads the tab-separated dataset and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dataset(
        "data/brainrot.tsv",
        &Path::new(&out_dir).join("entries.rs"),
        "ENTRIES",
        "Built-in brainrot entries as (id, word, image_url, description)",
    );

    println!("cargo:rerun-if-changed=data/brainrot.tsv");
}

fn generate_dataset(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.split('\t').collect())
        .collect();

    for (i, row) in rows.iter().enumerate() {
        assert!(
            row.len() == 4,
            "{input_path}: entry {} has {} fields, expected 4",
            i + 1,
            row.len()
        );
    }

    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dataset").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &str, &str)] = &[").unwrap();

    for row in rows {
        writeln!(
            output,
            "    ({:?}, {:?}, {:?}, {:?}),",
            row[0].trim(),
            row[1].trim(),
            row[2].trim(),
            row[3].trim()
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
