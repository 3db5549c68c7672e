// Domain layer: core models and ports (interfaces). No I/O beyond what
// implementors of the ports choose to do.

pub mod model;
pub mod ports;
