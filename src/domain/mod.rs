// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std and the ads value types.

pub mod model;
pub mod ports;
