//! # Date Attribute Mapper utility
//!
//! A command-line utility for operators configuring the date attribute mapper.
//! It runs the same conversion and validation code the broker runs at login.
//!
//! ## Usage
//!
//! ### Try a pattern pair
//!
//! ```bash
//! cargo run --bin date-attribute-mapper -- convert yyyy-MM-dd dd/MM/yyyy 1990-07-15
//! ```
//!
//! ### Check a mapper model file
//!
//! ```bash
//! cargo run --bin date-attribute-mapper -- check-config birthdate-mapper.json
//! ```
//!
//! The file holds `{"name": "...", "config": {"jsonFieldPath": "...", ...}}`.
//!
//! ### Print the registration descriptor
//!
//! ```bash
//! cargo run --bin date-attribute-mapper -- describe
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Conversion succeeded / model is usable / descriptor printed
//! - `1`: Conversion failed, model has problems, or usage error

use date_attribute_mapper::{
    DateAttributeConverter, DateAttributeMapper, IdentityProviderMapper, MapperModel,
    MapperResult,
};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let ok = match args.get(1).map(String::as_str) {
        Some("convert") if args.len() == 5 => run_convert(&args[2], &args[3], &args[4]),
        Some("check-config") if args.len() == 3 => run_check_config(Path::new(&args[2])),
        Some("describe") => run_describe(),
        _ => {
            print_usage(&args[0]);
            false
        }
    };

    if !ok {
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} convert <input-pattern> <output-pattern> <value>", program);
    eprintln!("  {} check-config <mapper-model.json>", program);
    eprintln!("  {} describe", program);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} convert yyyy-MM-dd dd/MM/yyyy 1990-07-15", program);
    eprintln!("  {} check-config birthdate-mapper.json", program);
}

fn run_convert(input_pattern: &str, output_pattern: &str, value: &str) -> bool {
    match DateAttributeConverter::new(input_pattern, output_pattern)
        .and_then(|converter| converter.convert(value))
    {
        Ok(converted) => {
            println!("{}", converted);
            true
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            false
        }
    }
}

fn run_check_config(path: &Path) -> bool {
    println!("Checking mapper model: {}", path.display());

    let model = match load_model(path) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("❌ Cannot load mapper model: {}", e);
            return false;
        }
    };

    let mut problems = Vec::new();
    if model.name.trim().is_empty() {
        problems.push("mapper has no name".to_string());
    }
    for option in model.config.missing_options() {
        problems.push(format!("{} is not configured", option));
    }
    if let (Ok(input), Ok(output)) = (model.config.input_pattern(), model.config.output_pattern()) {
        if let Err(e) = DateAttributeConverter::new(input, output) {
            problems.push(e.to_string());
        }
    }

    if problems.is_empty() {
        println!("✓ Mapper model is valid!");
        println!();
        println!("Mapper Summary:");
        println!("  Name: {}", model.name);
        println!("  Field path: {}", model.config.json_field_path().unwrap_or_default());
        println!(
            "  Patterns: {} -> {}",
            model.config.input_pattern().unwrap_or_default(),
            model.config.output_pattern().unwrap_or_default()
        );
        println!(
            "  Target attribute: {}",
            model.config.target_attribute().unwrap_or_default()
        );
        true
    } else {
        eprintln!("❌ Mapper model has {} problem(s):", problems.len());
        for problem in &problems {
            eprintln!("  - {}", problem);
        }
        false
    }
}

fn load_model(path: &Path) -> MapperResult<MapperModel> {
    let content = fs::read_to_string(path)?;
    MapperModel::from_json(&content)
}

fn run_describe() -> bool {
    match serde_json::to_string_pretty(&DateAttributeMapper.descriptor()) {
        Ok(json) => {
            println!("{}", json);
            true
        }
        Err(e) => {
            eprintln!("❌ Cannot serialize descriptor: {}", e);
            false
        }
    }
}
