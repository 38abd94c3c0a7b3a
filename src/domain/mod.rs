// Domain layer: check cases and the calculator port. std only.

pub mod model;
pub mod ports;
