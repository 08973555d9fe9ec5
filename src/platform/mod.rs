// codesweep - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library only.
// Must NOT depend on: core, app.

pub mod fs;
