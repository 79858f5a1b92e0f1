//! Core data models for the team balancer.

mod participant;
mod team;

pub use participant::*;
pub use team::*;
