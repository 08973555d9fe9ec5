// codesweep - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform or app.

pub mod discovery;
pub mod marker;
pub mod remover;
