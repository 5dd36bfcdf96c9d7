//! World-generation plumbing around the repair pass.

pub mod preset;
pub mod region;
pub mod repair;
