// Domain layer: the GTIN value type and the seam a host type registry binds to.

pub mod model;
pub mod ports;
