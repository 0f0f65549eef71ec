//! BitIt - Logic Circuit Evaluator
//!
//! Loads a puzzle level, drives its inputs and reports whether the outputs
//! match the level's solution.
//!
//! # Usage
//!
//! ```bash
//! bitit levels.json --level 2 --inputs 011 --schedule
//! RUST_LOG=debug bitit levels.json --truth-table
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bitit_core::{
    error::{BitItError, Result},
    eval::{mismatches, truth_table},
    level, Circuit, CircuitConfig, DriverPolicy,
};

/// Combinational logic circuit evaluator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the level description file (.json)
    #[arg(value_name = "LEVEL_FILE")]
    level_file: PathBuf,

    /// Level id (defaults to the first level in the file)
    #[arg(short, long)]
    level: Option<u32>,

    /// Input values in input order, e.g. 101
    #[arg(short, long, value_name = "BITS")]
    inputs: Option<String>,

    /// Print the truth table over all input assignments
    #[arg(short, long)]
    truth_table: bool,

    /// Print the evaluation order and level buckets
    #[arg(short, long)]
    schedule: bool,

    /// Reject input slots driven by more than one connection
    #[arg(long)]
    strict: bool,

    /// Log scheduling details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let file = level::parse_file(&args.level_file)?;

    let policy = if args.strict {
        DriverPolicy::Reject
    } else {
        DriverPolicy::LastWins
    };
    let config = CircuitConfig::new().with_driver_policy(policy);
    let mut circuit = level::load_level(&file, args.level, config)?;

    if let Some(bits) = &args.inputs {
        circuit.set_input_values(&parse_bits(bits, circuit.inputs().len())?)?;
    }
    circuit.evaluate();

    if args.schedule {
        print!("{}", circuit.describe_schedule());
    }

    if args.truth_table {
        print!("{}", truth_table(&mut circuit)?);
    }

    report(&circuit);
    Ok(())
}

/// Parse a string of `0`/`1` characters into positional input values.
fn parse_bits(bits: &str, expected: usize) -> Result<Vec<bool>> {
    let values = bits
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(BitItError::InvalidInputBits {
                bits: bits.to_string(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    if values.len() != expected {
        return Err(BitItError::InputCountMismatch {
            expected,
            actual: values.len(),
        });
    }
    Ok(values)
}

fn report(circuit: &Circuit) {
    let labels = circuit.labels(circuit.outputs());
    let actual = circuit.actual_outputs();
    for (label, &value) in labels.iter().zip(&actual) {
        println!("{label} = {}", u8::from(value));
    }
    println!("correct: {}", if circuit.is_correct() { "yes" } else { "no" });

    for index in mismatches(&actual, circuit.expected_outputs()) {
        println!("  expected {} = {}", labels[index], u8::from(!actual[index]));
    }
}
