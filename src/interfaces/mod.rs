//! Input adapters for feeding the pipeline from outside the process.

pub mod csv;
