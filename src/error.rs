use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("gate `{0}` is already declared")]
  DuplicateName(String),

  #[error("gate `{0}` is not declared")]
  UnknownGate(String),

  #[error("input vector has {got} bits but the circuit has {expected} INPUT gates")]
  InputArityMismatch { expected: usize, got: usize },

  #[error("line {line}: malformed circuit record `{text}`")]
  MalformedLine { line: usize, text: String },

  #[error("invalid character `{0}` in input vector")]
  BadVectorChar(char),
}
