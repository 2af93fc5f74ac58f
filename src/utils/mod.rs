//! Shared utility functions.

pub mod filename;
