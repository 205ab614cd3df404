//! Constellation coverage simulator.
//!
//! Propagates a simplified circular-orbit constellation, checks which ground sites
//! fall inside each satellite's footprint and derives redundancy and revisit-gap
//! metrics.

pub mod config;
pub mod coverage;
pub mod geodesy;
pub mod metrics;
pub mod mission;
pub mod propagator;
pub mod report;
pub mod simulation;
pub mod sites;
