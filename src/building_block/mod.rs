pub mod circuit;
pub mod gate;
pub mod gates;
pub mod gate_type;
pub mod signal;
