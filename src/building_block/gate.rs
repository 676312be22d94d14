use crate::building_block::{
  gate_type::GateType,
  signal::Signal,
};

// Fan-in edges are indices into the owning registry's gate vector.
// `retained` is meaningful for FLIPFLOP only; it survives cycle
// resets, unlike `value`.

#[derive(Debug)]
pub struct Gate {
  pub gate_type: GateType,
  pub name: String,
  pub fan_in: Vec<usize>,
  pub value: Signal,
  pub retained: bool,
}

impl Gate {
  pub fn new(gate_type: GateType, name: &str) -> Self {
    Gate {
      gate_type,
      name: name.to_string(),
      fan_in: Vec::new(),
      value: Signal::Unknown,
      retained: false,
    }
  }
}
