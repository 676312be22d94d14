pub mod building_block;
pub mod error;
pub mod netlist;

pub use error::Error;
