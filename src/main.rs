use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use gatesim::building_block::circuit::Circuit;
use gatesim::netlist;

/// Gate-level logic simulator: evaluates a circuit description
/// against a sequence of binary input vectors and prints the value
/// of every OUTPUT gate for each vector.
#[derive(Parser)]
struct Args {
  /// Circuit description file
  #[arg(long, default_value = "circuit.txt")]
  circuit: PathBuf,

  /// Input vector file
  #[arg(long, default_value = "input.txt")]
  input: PathBuf,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();
  let args = Args::parse();

  let reader = BufReader::new(
    File::open(&args.circuit)
      .with_context(|| format!("{} not found", args.circuit.display()))?,
  );
  let records = netlist::parse_circuit(reader)?;
  let mut circuit = Circuit::build(records)?;
  debug!(inputs = circuit.input_count(), "circuit ready");

  let vectors = BufReader::new(
    File::open(&args.input)
      .with_context(|| format!("{} not found", args.input.display()))?,
  );

  for (i, line) in vectors.lines().enumerate() {
    let line = line.with_context(|| format!("reading {}", args.input.display()))?;
    if line.trim().is_empty() {
      continue;
    }
    let bits = match netlist::parse_vector_line(&line) {
      Ok(bits) => bits,
      Err(e) => {
        warn!("skipping vector line {}: {}", i + 1, e);
        continue;
      },
    };

    if let Err(e) = circuit.assign_inputs(&bits) {
      warn!("vector line {}: {}", i + 1, e);
    }
    circuit.evaluate();

    for (pos, signal) in circuit.outputs().iter().enumerate() {
      if !signal.is_resolved() {
        warn!("vector line {}: output #{} is unresolved", i + 1, pos);
      }
      println!("{}", signal);
    }

    circuit.reset_cycle();
  }

  Ok(())
}
