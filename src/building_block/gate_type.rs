#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateType {
  Input,
  Output,
  And,
  Or,
  Not,
  FlipFlop,
}

impl GateType {
  // Kind tokens in the circuit description are case-sensitive
  // exact matches.
  pub fn from_token(s: &str) -> Option<Self> {
    match s {
      "INPUT" => Some(GateType::Input),
      "OUTPUT" => Some(GateType::Output),
      "AND" => Some(GateType::And),
      "OR" => Some(GateType::Or),
      "NOT" => Some(GateType::Not),
      "FLIPFLOP" => Some(GateType::FlipFlop),
      _ => None,
    }
  }
}
