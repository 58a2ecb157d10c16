//! Hardware identifier classification
//!
//! This module maps raw hardware identifier strings (e.g. "iPhone5,1") to a
//! closed set of device models and platforms with human-readable names. The
//! lookup is an exact match against a static table; identifiers the table
//! does not know degrade to the "Unknown" variant of their family when the
//! family can be inferred from the identifier's prefix, and to the global
//! unknown variant otherwise. Classification never fails.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod lookup;
pub mod network;
pub mod screen;

pub use screen::ScreenMetrics;

/// Specific hardware model variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceModel {
    Unknown,

    Simulator,
    SimulatorPhone,
    SimulatorPad,
    SimulatorAppleTv,

    Phone1,
    Phone3G,
    Phone3Gs,
    Phone4,
    Phone4Verizon,
    Phone4SGsm,
    Phone4SCdma,
    Phone5Gsm,
    Phone5Cdma,

    Pod1,
    Pod2,
    Pod3,
    Pod4,
    Pod5,

    Pad1,
    Pad2,
    Pad2Gsm,
    Pad2Cdma,
    Pad3,
    Pad3Gsm,
    Pad3Cdma,

    AppleTv2,
    AppleTv3,

    PhoneUnknown,
    PodUnknown,
    PadUnknown,
    AppleTvUnknown,
    Ifpga,
}

/// Platform variants (models collapsed by radio revision)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DevicePlatform {
    Unknown,

    Simulator,
    SimulatorPhone,
    SimulatorPad,
    SimulatorAppleTv,

    Phone1,
    Phone3G,
    Phone3Gs,
    Phone4,
    Phone4S,
    Phone5,

    Pod1,
    Pod2,
    Pod3,
    Pod4,
    Pod5,

    Pad1,
    Pad2,
    Pad3,

    AppleTv2,
    AppleTv3,

    PhoneUnknown,
    PodUnknown,
    PadUnknown,
    AppleTvUnknown,
    Ifpga,
}

/// Coarse device category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    Phone,
    Pod,
    Pad,
    AppleTv,
    Unknown,
}

/// Result of classifying a hardware identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub model: DeviceModel,
    pub platform: DevicePlatform,
    pub name: &'static str,
}

impl DeviceModel {
    /// Every model variant, in declaration order
    pub const ALL: &'static [DeviceModel] = &[
        DeviceModel::Unknown,
        DeviceModel::Simulator,
        DeviceModel::SimulatorPhone,
        DeviceModel::SimulatorPad,
        DeviceModel::SimulatorAppleTv,
        DeviceModel::Phone1,
        DeviceModel::Phone3G,
        DeviceModel::Phone3Gs,
        DeviceModel::Phone4,
        DeviceModel::Phone4Verizon,
        DeviceModel::Phone4SGsm,
        DeviceModel::Phone4SCdma,
        DeviceModel::Phone5Gsm,
        DeviceModel::Phone5Cdma,
        DeviceModel::Pod1,
        DeviceModel::Pod2,
        DeviceModel::Pod3,
        DeviceModel::Pod4,
        DeviceModel::Pod5,
        DeviceModel::Pad1,
        DeviceModel::Pad2,
        DeviceModel::Pad2Gsm,
        DeviceModel::Pad2Cdma,
        DeviceModel::Pad3,
        DeviceModel::Pad3Gsm,
        DeviceModel::Pad3Cdma,
        DeviceModel::AppleTv2,
        DeviceModel::AppleTv3,
        DeviceModel::PhoneUnknown,
        DeviceModel::PodUnknown,
        DeviceModel::PadUnknown,
        DeviceModel::AppleTvUnknown,
        DeviceModel::Ifpga,
    ];

    /// Human-readable display name for this model
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DeviceModel::Unknown => "Unknown iOS device",
            DeviceModel::Simulator => "iOS Simulator",
            DeviceModel::SimulatorPhone => "iPhone Simulator",
            DeviceModel::SimulatorPad => "iPad Simulator",
            DeviceModel::SimulatorAppleTv => "Apple TV Simulator",
            DeviceModel::Phone1 => "iPhone 1",
            DeviceModel::Phone3G => "iPhone 3G",
            DeviceModel::Phone3Gs => "iPhone 3GS",
            DeviceModel::Phone4 => "iPhone 4",
            DeviceModel::Phone4Verizon => "iPhone 4 (Verizon)",
            DeviceModel::Phone4SGsm => "iPhone 4S (GSM)",
            DeviceModel::Phone4SCdma => "iPhone 4S (CDMA)",
            DeviceModel::Phone5Gsm => "iPhone 5 (GSM)",
            DeviceModel::Phone5Cdma => "iPhone 5 (CDMA)",
            DeviceModel::Pod1 => "iPod Touch 1G",
            DeviceModel::Pod2 => "iPod Touch 2G",
            DeviceModel::Pod3 => "iPod Touch 3G",
            DeviceModel::Pod4 => "iPod Touch 4G",
            DeviceModel::Pod5 => "iPod Touch 5G",
            DeviceModel::Pad1 => "iPad 1",
            DeviceModel::Pad2 => "iPad 2",
            DeviceModel::Pad2Gsm => "iPad 2 (GSM)",
            DeviceModel::Pad2Cdma => "iPad 2 (CDMA)",
            DeviceModel::Pad3 => "iPad 3",
            DeviceModel::Pad3Gsm => "iPad 3 (GSM)",
            DeviceModel::Pad3Cdma => "iPad 3 (CDMA)",
            DeviceModel::AppleTv2 => "Apple TV 2G",
            DeviceModel::AppleTv3 => "Apple TV 3G",
            DeviceModel::PhoneUnknown => "Unknown iPhone",
            DeviceModel::PodUnknown => "Unknown iPod",
            DeviceModel::PadUnknown => "Unknown iPad",
            DeviceModel::AppleTvUnknown => "Unknown Apple TV",
            DeviceModel::Ifpga => "iFPGA",
        }
    }

    /// Platform family for this model (radio revisions collapse)
    #[must_use]
    pub fn platform(self) -> DevicePlatform {
        match self {
            DeviceModel::Unknown => DevicePlatform::Unknown,
            DeviceModel::Simulator => DevicePlatform::Simulator,
            DeviceModel::SimulatorPhone => DevicePlatform::SimulatorPhone,
            DeviceModel::SimulatorPad => DevicePlatform::SimulatorPad,
            DeviceModel::SimulatorAppleTv => DevicePlatform::SimulatorAppleTv,
            DeviceModel::Phone1 => DevicePlatform::Phone1,
            DeviceModel::Phone3G => DevicePlatform::Phone3G,
            DeviceModel::Phone3Gs => DevicePlatform::Phone3Gs,
            DeviceModel::Phone4 | DeviceModel::Phone4Verizon => DevicePlatform::Phone4,
            DeviceModel::Phone4SGsm | DeviceModel::Phone4SCdma => DevicePlatform::Phone4S,
            DeviceModel::Phone5Gsm | DeviceModel::Phone5Cdma => DevicePlatform::Phone5,
            DeviceModel::Pod1 => DevicePlatform::Pod1,
            DeviceModel::Pod2 => DevicePlatform::Pod2,
            DeviceModel::Pod3 => DevicePlatform::Pod3,
            DeviceModel::Pod4 => DevicePlatform::Pod4,
            DeviceModel::Pod5 => DevicePlatform::Pod5,
            DeviceModel::Pad1 => DevicePlatform::Pad1,
            DeviceModel::Pad2 | DeviceModel::Pad2Gsm | DeviceModel::Pad2Cdma => DevicePlatform::Pad2,
            DeviceModel::Pad3 | DeviceModel::Pad3Gsm | DeviceModel::Pad3Cdma => DevicePlatform::Pad3,
            DeviceModel::AppleTv2 => DevicePlatform::AppleTv2,
            DeviceModel::AppleTv3 => DevicePlatform::AppleTv3,
            DeviceModel::PhoneUnknown => DevicePlatform::PhoneUnknown,
            DeviceModel::PodUnknown => DevicePlatform::PodUnknown,
            DeviceModel::PadUnknown => DevicePlatform::PadUnknown,
            DeviceModel::AppleTvUnknown => DevicePlatform::AppleTvUnknown,
            DeviceModel::Ifpga => DevicePlatform::Ifpga,
        }
    }

    /// Coarse category for this model
    #[must_use]
    pub fn device_type(self) -> DeviceType {
        match self {
            DeviceModel::SimulatorPhone
            | DeviceModel::Phone1
            | DeviceModel::Phone3G
            | DeviceModel::Phone3Gs
            | DeviceModel::Phone4
            | DeviceModel::Phone4Verizon
            | DeviceModel::Phone4SGsm
            | DeviceModel::Phone4SCdma
            | DeviceModel::Phone5Gsm
            | DeviceModel::Phone5Cdma
            | DeviceModel::PhoneUnknown => DeviceType::Phone,
            DeviceModel::Pod1
            | DeviceModel::Pod2
            | DeviceModel::Pod3
            | DeviceModel::Pod4
            | DeviceModel::Pod5
            | DeviceModel::PodUnknown => DeviceType::Pod,
            DeviceModel::SimulatorPad
            | DeviceModel::Pad1
            | DeviceModel::Pad2
            | DeviceModel::Pad2Gsm
            | DeviceModel::Pad2Cdma
            | DeviceModel::Pad3
            | DeviceModel::Pad3Gsm
            | DeviceModel::Pad3Cdma
            | DeviceModel::PadUnknown => DeviceType::Pad,
            DeviceModel::SimulatorAppleTv
            | DeviceModel::AppleTv2
            | DeviceModel::AppleTv3
            | DeviceModel::AppleTvUnknown => DeviceType::AppleTv,
            DeviceModel::Unknown | DeviceModel::Simulator | DeviceModel::Ifpga => DeviceType::Unknown,
        }
    }
}

impl DevicePlatform {
    /// Human-readable display name for this platform
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DevicePlatform::Unknown => "Unknown iOS device",
            DevicePlatform::Simulator => "iOS Simulator",
            DevicePlatform::SimulatorPhone => "iPhone Simulator",
            DevicePlatform::SimulatorPad => "iPad Simulator",
            DevicePlatform::SimulatorAppleTv => "Apple TV Simulator",
            DevicePlatform::Phone1 => "iPhone 1",
            DevicePlatform::Phone3G => "iPhone 3G",
            DevicePlatform::Phone3Gs => "iPhone 3GS",
            DevicePlatform::Phone4 => "iPhone 4",
            DevicePlatform::Phone4S => "iPhone 4S",
            DevicePlatform::Phone5 => "iPhone 5",
            DevicePlatform::Pod1 => "iPod Touch 1G",
            DevicePlatform::Pod2 => "iPod Touch 2G",
            DevicePlatform::Pod3 => "iPod Touch 3G",
            DevicePlatform::Pod4 => "iPod Touch 4G",
            DevicePlatform::Pod5 => "iPod Touch 5G",
            DevicePlatform::Pad1 => "iPad 1",
            DevicePlatform::Pad2 => "iPad 2",
            DevicePlatform::Pad3 => "iPad 3",
            DevicePlatform::AppleTv2 => "Apple TV 2G",
            DevicePlatform::AppleTv3 => "Apple TV 3G",
            DevicePlatform::PhoneUnknown => "Unknown iPhone",
            DevicePlatform::PodUnknown => "Unknown iPod",
            DevicePlatform::PadUnknown => "Unknown iPad",
            DevicePlatform::AppleTvUnknown => "Unknown Apple TV",
            DevicePlatform::Ifpga => "iFPGA",
        }
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DevicePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Classification {
    /// Coarse category for the classified model
    #[must_use]
    pub fn device_type(&self) -> DeviceType {
        self.model.device_type()
    }

    #[must_use]
    pub fn is_phone(&self) -> bool {
        self.device_type() == DeviceType::Phone
    }

    #[must_use]
    pub fn is_pad(&self) -> bool {
        self.device_type() == DeviceType::Pad
    }
}

/// Classify a raw hardware identifier string.
///
/// Exact identifiers resolve through the static lookup table. Identifiers
/// with a recognizable family prefix but no table entry degrade to that
/// family's unknown variant; everything else degrades to
/// [`DeviceModel::Unknown`]. Future hardware therefore never breaks
/// classification, it lands in a named unknown bucket.
#[must_use]
pub fn classify(identifier: &str) -> Classification {
    let model = match lookup::model_for_identifier(identifier) {
        Some(model) => model,
        None if identifier.starts_with("iPhone") => DeviceModel::PhoneUnknown,
        None if identifier.starts_with("iPod") => DeviceModel::PodUnknown,
        None if identifier.starts_with("iPad") => DeviceModel::PadUnknown,
        None if identifier.starts_with("AppleTV") => DeviceModel::AppleTvUnknown,
        None => DeviceModel::Unknown,
    };

    Classification {
        model,
        platform: model.platform(),
        name: model.name(),
    }
}
