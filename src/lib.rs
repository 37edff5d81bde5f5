//! SCOR Readiness - Supply-chain AI readiness assessment.
//!
//! This crate scores self-reported readiness across the five SCOR process
//! categories (Plan, Source, Make, Deliver, Return) plus an IoT sub-score,
//! derives SWOT groupings and strategic postures, compares the assessed
//! company against competitors, and exports the results.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
