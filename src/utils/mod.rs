//! Utility functions and helpers

pub mod naming;
