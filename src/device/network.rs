//! Link-layer address lookup
//!
//! Thin wrapper around the host networking query. Callers that just want a
//! value use [`mac_address`], which degrades to an empty sentinel string
//! when the host refuses or has no interface to report.

use thiserror::Error;

/// Errors from the link-layer address query
#[derive(Debug, Error)]
pub enum MacLookupError {
    #[error("no network interface reported a MAC address")]
    NoInterface,

    #[error("MAC address lookup failed: {0}")]
    Lookup(#[from] mac_address::MacAddressError),
}

/// Query the primary interface's MAC address.
pub fn try_mac_address() -> Result<String, MacLookupError> {
    match mac_address::get_mac_address()? {
        Some(address) => Ok(address.to_string()),
        None => Err(MacLookupError::NoInterface),
    }
}

/// MAC address of the primary interface, or an empty string when the
/// lookup fails. Failures are logged, never surfaced to the caller.
#[must_use]
pub fn mac_address() -> String {
    match try_mac_address() {
        Ok(address) => address,
        Err(err) => {
            log::warn!("MAC address unavailable: {}", err);
            String::new()
        }
    }
}
