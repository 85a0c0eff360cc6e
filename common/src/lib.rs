//! Shared models for the webaudit tools: validated CLI inputs, runtime
//! configuration, and the serializable report shapes every audit emits.

pub mod config;
pub mod report;
pub mod web;
