// Domain layer: value objects, winning rules and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod winning;
