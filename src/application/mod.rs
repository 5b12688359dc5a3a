//! Application layer containing the order pipeline.
//!
//! The calculation steps (validation, normalization, pricing, risk) are plain
//! functions; `OrderPipeline` sequences them and drives the two collaborators.

pub mod normalizer;
pub mod notification;
pub mod pipeline;
pub mod pricing;
pub mod risk;
pub mod validator;

pub use pipeline::OrderPipeline;
