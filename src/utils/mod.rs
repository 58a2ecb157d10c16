//! Utility modules for UtilKit.
//!
//! This module contains the date/time helpers shared by the library and
//! the demo binary. All functions here are pure given their inputs; the
//! only host interaction is reading the current local time.

pub mod datetime;
