// Domain layer: request-side models and ports. Content entities themselves
// stay opaque JSON owned by the CMS.

pub mod model;
pub mod ports;
