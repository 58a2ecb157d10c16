use utilkit::device::lookup::KNOWN_IDENTIFIERS;
use utilkit::{classify, DeviceModel, DevicePlatform, DeviceType};

#[test]
fn test_known_identifiers_exact_triples() {
    let c = classify("iPhone5,1");
    assert_eq!(c.model, DeviceModel::Phone5Gsm);
    assert_eq!(c.platform, DevicePlatform::Phone5);
    assert_eq!(c.name, "iPhone 5 (GSM)");

    let c = classify("iPhone3,3");
    assert_eq!(c.model, DeviceModel::Phone4Verizon);
    assert_eq!(c.platform, DevicePlatform::Phone4);
    assert_eq!(c.name, "iPhone 4 (Verizon)");

    let c = classify("iPad2,3");
    assert_eq!(c.model, DeviceModel::Pad2Cdma);
    assert_eq!(c.platform, DevicePlatform::Pad2);
    assert_eq!(c.name, "iPad 2 (CDMA)");

    let c = classify("iPod4,1");
    assert_eq!(c.model, DeviceModel::Pod4);
    assert_eq!(c.platform, DevicePlatform::Pod4);
    assert_eq!(c.name, "iPod Touch 4G");

    let c = classify("AppleTV3,1");
    assert_eq!(c.model, DeviceModel::AppleTv3);
    assert_eq!(c.platform, DevicePlatform::AppleTv3);
    assert_eq!(c.name, "Apple TV 3G");
}

#[test]
fn test_whole_table_round_trip() {
    for &(identifier, model) in KNOWN_IDENTIFIERS {
        let c = classify(identifier);
        assert_eq!(c.model, model, "identifier {}", identifier);
        assert_eq!(c.platform, model.platform(), "identifier {}", identifier);
        assert_eq!(c.name, model.name(), "identifier {}", identifier);
        assert_eq!(c.device_type(), model.device_type(), "identifier {}", identifier);
    }
}

#[test]
fn test_prefix_fallback_per_family() {
    let c = classify("iPhone99,1");
    assert_eq!(c.model, DeviceModel::PhoneUnknown);
    assert_eq!(c.name, "Unknown iPhone");
    assert_eq!(c.device_type(), DeviceType::Phone);

    let c = classify("iPod42,7");
    assert_eq!(c.model, DeviceModel::PodUnknown);
    assert_eq!(c.name, "Unknown iPod");
    assert_eq!(c.device_type(), DeviceType::Pod);

    let c = classify("iPad17,3");
    assert_eq!(c.model, DeviceModel::PadUnknown);
    assert_eq!(c.name, "Unknown iPad");
    assert_eq!(c.device_type(), DeviceType::Pad);

    let c = classify("AppleTV14,1");
    assert_eq!(c.model, DeviceModel::AppleTvUnknown);
    assert_eq!(c.name, "Unknown Apple TV");
    assert_eq!(c.device_type(), DeviceType::AppleTv);
}

#[test]
fn test_unrecognized_prefix_is_globally_unknown() {
    for identifier in ["Watch1,1", "MacBookPro11,3", "", "phone"] {
        let c = classify(identifier);
        assert_eq!(c.model, DeviceModel::Unknown, "identifier {:?}", identifier);
        assert_eq!(c.name, "Unknown iOS device");
        assert_eq!(c.device_type(), DeviceType::Unknown);
    }
}

#[test]
fn test_simulator_and_fpga_identifiers() {
    assert_eq!(classify("i386").model, DeviceModel::Simulator);
    assert_eq!(classify("x86_64").model, DeviceModel::Simulator);
    assert_eq!(classify("i386").name, "iOS Simulator");
    assert_eq!(classify("iFPGA").model, DeviceModel::Ifpga);
    assert_eq!(classify("iFPGA").name, "iFPGA");
}

#[test]
fn test_classification_is_pure() {
    assert_eq!(classify("iPhone4,1"), classify("iPhone4,1"));
    assert_eq!(classify("nonsense"), classify("nonsense"));
}

#[test]
fn test_model_mappings_are_total() {
    // Every variant has a non-empty name and a consistent type/platform pair.
    for &model in DeviceModel::ALL {
        assert!(!model.name().is_empty(), "{:?}", model);
        assert!(!model.platform().name().is_empty(), "{:?}", model);
        let _ = model.device_type();
    }
}

#[test]
fn test_phone_and_pad_conveniences() {
    assert!(classify("iPhone2,1").is_phone());
    assert!(!classify("iPhone2,1").is_pad());
    assert!(classify("iPad3,1").is_pad());
    assert!(!classify("iPad3,1").is_phone());
}

#[test]
fn test_radio_variants_collapse_to_one_platform() {
    assert_eq!(classify("iPhone4,1").platform, classify("iPhone4,2").platform);
    assert_eq!(classify("iPhone5,1").platform, classify("iPhone5,2").platform);
    assert_eq!(classify("iPad2,1").platform, classify("iPad2,3").platform);
    assert_eq!(classify("iPad3,2").platform, classify("iPad3,3").platform);
}
