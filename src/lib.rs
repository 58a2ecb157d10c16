//! UtilKit - device classification and friendly date helpers
//!
//! This library provides two independent, stateless components: a
//! classifier that maps Apple hardware identifier strings (such as
//! "iPhone5,1") to a closed model/platform enumeration with display
//! names and derived screen attributes, and a set of date helpers for
//! interval arithmetic, relative-day comparisons, and human-friendly
//! formatting ("Today at 14:30").
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`constants`] - Screen-resolution and time constants
//! * [`device`] - Hardware identifier classification and screen attributes
//! * [`logger`] - Logging setup for the demo binary
//! * [`utils`] - Date/time utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Screen-resolution and time constants
pub mod constants;

/// Hardware identifier classification, screen metrics, and network lookup
pub mod device;

/// Logging initialization built on fern
pub mod logger;

/// Utility functions for date/time handling
pub mod utils;

// Re-export the classification types for convenient access
pub use device::{classify, Classification, DeviceModel, DevicePlatform, DeviceType, ScreenMetrics};
