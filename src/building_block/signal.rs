use std::fmt;

// A gate output carries one of three values: 0, 1, or Unknown.
// Unknown means "not yet computed this cycle" and is distinct from
// both valid bits so it can never be mistaken for a low signal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
  Unknown,
  Bit(bool),
}

impl Signal {
  pub fn is_resolved(&self) -> bool {
    matches!(self, Signal::Bit(_))
  }

  pub fn bit(&self) -> Option<bool> {
    match self {
      Signal::Bit(b) => Some(*b),
      Signal::Unknown => None,
    }
  }
}

impl From<bool> for Signal {
  fn from(b: bool) -> Self {
    Signal::Bit(b)
  }
}

impl fmt::Display for Signal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Signal::Bit(false) => write!(f, "0"),
      Signal::Bit(true) => write!(f, "1"),
      Signal::Unknown => write!(f, "x"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolved() {
    assert!(Signal::Bit(false).is_resolved());
    assert!(Signal::Bit(true).is_resolved());
    assert!(!Signal::Unknown.is_resolved());
  }

  #[test]
  fn test_bit() {
    assert!(Signal::Bit(true).bit() == Some(true));
    assert!(Signal::Bit(false).bit() == Some(false));
    assert!(Signal::Unknown.bit() == None);
  }

  #[test]
  fn test_display() {
    assert_eq!(Signal::Bit(false).to_string(), "0");
    assert_eq!(Signal::Bit(true).to_string(), "1");
    assert_eq!(Signal::Unknown.to_string(), "x");
  }
}
