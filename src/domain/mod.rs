// Domain layer: the car model and the ports (interfaces) the registry depends on.

pub mod model;
pub mod ports;
