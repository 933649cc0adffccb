// Domain layer: directory entities and the ports the client and configuration implement.

pub mod model;
pub mod ports;
