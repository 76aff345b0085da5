// Domain layer: core models, the client store, and ports (interfaces).
// No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
pub mod store;
