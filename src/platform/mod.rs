// IconGen - platform/mod.rs
//
// Filesystem helpers.
// Must NOT depend on: core.

pub mod fs;
