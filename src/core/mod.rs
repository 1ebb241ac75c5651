// IconGen - core/mod.rs
//
// Rendering, packing and the driver that strings them together.

pub mod icns_packer;
pub mod ico_packer;
pub mod model;
pub mod pipeline;
pub mod raster;
