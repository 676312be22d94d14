use tracing::debug;

use crate::building_block::{
  gate::Gate,
  gates::Gates,
  gate_type::GateType,
  signal::Signal,
};
use crate::error::Error;

// One record of a circuit description, as handed over by the
// text-format adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
  Gate { gate_type: GateType, name: String },
  Connection { src: String, dst: String },
}

/// A fully wired circuit together with its per-cycle evaluation state.
///
/// `evaluate` makes exactly one pass in declaration order and does not
/// iterate to a fixpoint, so the circuit description must declare every
/// gate before the gates that consume it. A circuit violating that
/// order is not an error: the affected gates simply stay `Unknown` for
/// the cycle.
pub struct Circuit {
  gates: Gates,
}

impl Circuit {
  /// Consumes declaration and connection records in order and wires up
  /// the registry. Fails on the first `DuplicateName` or `UnknownGate`;
  /// no partially wired circuit is ever returned.
  pub fn build<I>(records: I) -> Result<Self, Error>
  where
    I: IntoIterator<Item = Record>,
  {
    let mut gates = Gates::new();
    let mut edges = 0;

    for record in records {
      match record {
        Record::Gate { gate_type, name } => {
          gates.create(gate_type, &name)?;
        },
        Record::Connection { src, dst } => {
          gates.add_fan_in(&dst, &src)?;
          edges += 1;
        },
      }
    }

    debug!(gates = gates.len(), edges, "circuit built");
    Ok(Circuit { gates })
  }

  pub fn input_count(&self) -> usize {
    self.gates.iter().filter(|g| g.gate_type == GateType::Input).count()
  }

  /// Feeds `bits` to the INPUT gates in declaration order. A vector
  /// shorter than the number of INPUT gates is reported but not fatal:
  /// the gates that did receive a bit keep it, the rest stay `Unknown`
  /// for this cycle. Extra bits are ignored.
  pub fn assign_inputs(&mut self, bits: &[bool]) -> Result<(), Error> {
    let mut next = 0;
    let mut expected = 0;

    for i in 0..self.gates.len() {
      if self.gates.get(i).gate_type != GateType::Input {
        continue;
      }
      expected += 1;
      if let Some(&b) = bits.get(next) {
        self.gates.get_mut(i).value = Signal::Bit(b);
        next += 1;
      }
    }

    if next < expected {
      return Err(Error::InputArityMismatch { expected, got: bits.len() });
    }
    Ok(())
  }

  /// Single sweep in declaration order. A gate computes only if it is
  /// still `Unknown` and every fan-in value is resolved; otherwise it
  /// is skipped for the rest of the cycle.
  pub fn evaluate(&mut self) {
    for i in 0..self.gates.len() {
      let gate = self.gates.get(i);
      if gate.gate_type == GateType::Input || gate.value.is_resolved() {
        continue;
      }
      let Some(bits) = fan_in_bits(&self.gates, gate) else {
        continue;
      };
      let (value, retained) = compute(gate.gate_type, &bits, gate.retained);
      let gate = self.gates.get_mut(i);
      gate.value = value;
      gate.retained = retained;
    }
  }

  /// Clears every gate value back to `Unknown`. FLIPFLOP retained
  /// state is untouched. Idempotent.
  pub fn reset_cycle(&mut self) {
    for i in 0..self.gates.len() {
      self.gates.get_mut(i).value = Signal::Unknown;
    }
  }

  /// The value of every OUTPUT gate in declaration order.
  pub fn outputs(&self) -> Vec<Signal> {
    self.gates
      .iter()
      .filter(|g| g.gate_type == GateType::Output)
      .map(|g| g.value)
      .collect()
  }

  pub fn gates(&self) -> &Gates {
    &self.gates
  }
}

// None if any fan-in value is still unresolved.
fn fan_in_bits(gates: &Gates, gate: &Gate) -> Option<Vec<bool>> {
  gate.fan_in.iter().map(|&i| gates.get(i).value.bit()).collect()
}

fn compute(gate_type: GateType, bits: &[bool], retained: bool) -> (Signal, bool) {
  match gate_type {
    GateType::And => {
      let res = bits.iter().copied().reduce(|a, b| a & b);
      (res.map_or(Signal::Unknown, Signal::Bit), retained)
    },
    GateType::Or => {
      let res = bits.iter().copied().reduce(|a, b| a | b);
      (res.map_or(Signal::Unknown, Signal::Bit), retained)
    },
    GateType::Not => {
      match bits.first() {
        Some(&b) => (Signal::Bit(!b), retained),
        None => (Signal::Unknown, retained),
      }
    },
    GateType::Output => {
      match bits.first() {
        Some(&b) => (Signal::Bit(b), retained),
        None => (Signal::Unknown, retained),
      }
    },
    GateType::FlipFlop => {
      match bits.first() {
        // d=0 emits the retained bit unchanged;
        // d=1 emits !q and toggles the retained bit
        Some(&d) => match (d, retained) {
          (false, q) => (Signal::Bit(q), q),
          (true, false) => (Signal::Bit(true), true),
          (true, true) => (Signal::Bit(false), false),
        },
        None => (Signal::Unknown, retained),
      }
    },
    // INPUT values come from assign_inputs, never from the sweep
    GateType::Input => (Signal::Unknown, retained),
  }
}
