use std::collections::HashMap;

use crate::building_block::{
  gate::Gate,
  gate_type::GateType,
};
use crate::error::Error;

// Owns every gate of one circuit in declaration order. Gates are
// created during construction and never removed.

pub struct Gates {
  gates: Vec<Gate>,
  by_name: HashMap<String, usize>,
}

impl Gates {
  pub fn new() -> Self {
    Gates {
      gates: Vec::new(),
      by_name: HashMap::new(),
    }
  }

  pub fn create(&mut self, gate_type: GateType, name: &str) -> Result<usize, Error> {
    if self.by_name.contains_key(name) {
      return Err(Error::DuplicateName(name.to_string()));
    }
    let index = self.gates.len();
    self.gates.push(Gate::new(gate_type, name));
    self.by_name.insert(name.to_string(), index);
    Ok(index)
  }

  pub fn find(&self, name: &str) -> Result<usize, Error> {
    self.by_name
      .get(name)
      .copied()
      .ok_or_else(|| Error::UnknownGate(name.to_string()))
  }

  pub fn add_fan_in(&mut self, dst_name: &str, src_name: &str) -> Result<(), Error> {
    let src = self.find(src_name)?;
    let dst = self.find(dst_name)?;
    self.gates[dst].fan_in.push(src);
    Ok(())
  }

  pub fn get(&self, index: usize) -> &Gate {
    &self.gates[index]
  }

  pub fn get_mut(&mut self, index: usize) -> &mut Gate {
    &mut self.gates[index]
  }

  pub fn len(&self) -> usize {
    self.gates.len()
  }

  pub fn is_empty(&self) -> bool {
    self.gates.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Gate> {
    self.gates.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_create_preserves_declaration_order() {
    let mut gates = Gates::new();
    gates.create(GateType::Input, "a").unwrap();
    gates.create(GateType::And, "c").unwrap();
    gates.create(GateType::Input, "b").unwrap();

    let names: Vec<&str> = gates.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c", "b"]);
  }

  #[test]
  fn test_duplicate_name_leaves_prior_gate_intact() {
    let mut gates = Gates::new();
    let a = gates.create(GateType::Input, "a").unwrap();

    let res = gates.create(GateType::And, "a");
    assert_eq!(res, Err(Error::DuplicateName("a".to_string())));

    assert_eq!(gates.len(), 1);
    assert!(gates.get(a).gate_type == GateType::Input);
    assert_eq!(gates.find("a"), Ok(a));
  }

  #[test]
  fn test_find_unknown_name() {
    let gates = Gates::new();
    assert_eq!(gates.find("z"), Err(Error::UnknownGate("z".to_string())));
  }

  #[test]
  fn test_add_fan_in() {
    let mut gates = Gates::new();
    let a = gates.create(GateType::Input, "a").unwrap();
    let b = gates.create(GateType::Input, "b").unwrap();
    let c = gates.create(GateType::And, "c").unwrap();

    gates.add_fan_in("c", "a").unwrap();
    gates.add_fan_in("c", "b").unwrap();

    assert_eq!(gates.get(c).fan_in, vec![a, b]);
  }

  #[test]
  fn test_add_fan_in_with_unresolved_endpoint() {
    let mut gates = Gates::new();
    gates.create(GateType::And, "c").unwrap();

    // same error kind whether the name comes later or never
    let res = gates.add_fan_in("c", "a");
    assert_eq!(res, Err(Error::UnknownGate("a".to_string())));
    let res = gates.add_fan_in("d", "c");
    assert_eq!(res, Err(Error::UnknownGate("d".to_string())));

    assert!(gates.get(0).fan_in.is_empty());
  }
}
