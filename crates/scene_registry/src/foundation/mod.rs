//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the registry:
//! - Math types for transforms and camera orientation
//! - Arena keys and opaque native handles
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
