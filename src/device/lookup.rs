//! Static hardware identifier table
//!
//! Exact-match entries only; prefix fallback lives in [`super::classify`].
//! The table is built once and never mutated at runtime.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::DeviceModel;

/// Known identifier strings and the model each resolves to
pub const KNOWN_IDENTIFIERS: &[(&str, DeviceModel)] = &[
    ("iPhone1,1", DeviceModel::Phone1),
    ("iPhone1,2", DeviceModel::Phone3G),
    ("iPhone2,1", DeviceModel::Phone3Gs),
    ("iPhone3,1", DeviceModel::Phone4),
    ("iPhone3,2", DeviceModel::Phone4),
    ("iPhone3,3", DeviceModel::Phone4Verizon),
    ("iPhone4,1", DeviceModel::Phone4SGsm),
    ("iPhone4,2", DeviceModel::Phone4SCdma),
    ("iPhone5,1", DeviceModel::Phone5Gsm),
    ("iPhone5,2", DeviceModel::Phone5Cdma),
    ("iPod1,1", DeviceModel::Pod1),
    ("iPod2,1", DeviceModel::Pod2),
    ("iPod3,1", DeviceModel::Pod3),
    ("iPod4,1", DeviceModel::Pod4),
    ("iPod5,1", DeviceModel::Pod5),
    ("iPad1,1", DeviceModel::Pad1),
    ("iPad2,1", DeviceModel::Pad2),
    ("iPad2,2", DeviceModel::Pad2Gsm),
    ("iPad2,3", DeviceModel::Pad2Cdma),
    ("iPad2,4", DeviceModel::Pad2),
    ("iPad3,1", DeviceModel::Pad3),
    ("iPad3,2", DeviceModel::Pad3Cdma),
    ("iPad3,3", DeviceModel::Pad3Gsm),
    ("AppleTV2,1", DeviceModel::AppleTv2),
    ("AppleTV3,1", DeviceModel::AppleTv3),
    ("i386", DeviceModel::Simulator),
    ("x86_64", DeviceModel::Simulator),
    ("iFPGA", DeviceModel::Ifpga),
];

static TABLE: Lazy<HashMap<&'static str, DeviceModel>> =
    Lazy::new(|| KNOWN_IDENTIFIERS.iter().copied().collect());

/// Exact-match lookup of an identifier string
#[must_use]
pub fn model_for_identifier(identifier: &str) -> Option<DeviceModel> {
    TABLE.get(identifier).copied()
}
