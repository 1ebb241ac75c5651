// IconGen - lib.rs
//
// Library entry point. The binary in `main.rs` is a thin CLI over
// `core::pipeline::run`; everything else lives here so the end-to-end
// tests can drive the pipeline directly.

pub mod core;
pub mod platform;
pub mod util;
