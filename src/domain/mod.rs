// Domain layer: card model, slug rules and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod presets;
pub mod slug;
