//! Core module - Shared path utilities
//!
//! This module provides:
//! - Lexical path normalization for document references
//! - Resolution of references against the root document's directory

pub mod paths;
