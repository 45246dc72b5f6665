//! Build script to generate the embedded word/frequency list
//!
//! Reads `data/freq.txt` and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_frequency_list(
        "data/freq.txt",
        &Path::new(&out_dir).join("default_words.rs"),
        "DEFAULT_WORDS",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/freq.txt");
}

fn generate_frequency_list(input_path: &str, output_path: &Path, const_name: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut entries = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        // Same rule as the runtime loader: only five lowercase ASCII letters
        if word.len() != 5 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            continue;
        }
        let frequency: u64 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .unwrap_or_else(|| panic!("{input_path}:{}: bad frequency", index + 1));
        entries.push((word.to_string(), frequency));
    }

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// Embedded `(word, frequency)` pairs from `{input_path}`").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, u64)] = &[").unwrap();
    for (word, frequency) in &entries {
        writeln!(output, "    (\"{word}\", {frequency}),").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(
        output,
        "pub const {const_name}_COUNT: usize = {};",
        entries.len()
    )
    .unwrap();
}
