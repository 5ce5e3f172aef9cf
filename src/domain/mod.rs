// Domain layer: shipment input model, carrier wire payload and ports.

pub mod model;
pub mod payload;
pub mod ports;
