// Domain layer: herd models, breeding constants and ports (interfaces).
// No I/O happens here.

pub mod constants;
pub mod herd;
pub mod model;
pub mod ports;
