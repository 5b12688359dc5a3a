//! Domain layer: order and money value types plus the collaborator ports
//! the pipeline depends on.

pub mod money;
pub mod order;
pub mod payment;
pub mod ports;
