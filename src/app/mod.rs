// codesweep - app/mod.rs
//
// Application layer: ties discovery, marker sweeping and file I/O into a
// clean-up run.

pub mod cleanup;
