use std::fmt::{Debug, Display};
use std::str::FromStr;

use graph_beta_abstractions::{serialize_enum_values, EnumValue, SerializationError};
use graph_beta_json::{deserialize_value, serialize_to_value};
use graph_beta_models::enums::{
    AccessReviewTimeoutBehavior, BookingStaffRole, DayOfWeek, DevicePlatformType, HorizontalSectionLayoutType,
    PageLayoutType, PagePromotionType, RunAsAccountType, SectionEmphasisType, TitleAreaLayoutType,
    TitleAreaTextAlignmentType, VpnServerCertificateType, VpnTrafficRuleAppType, VpnTrafficRuleRoutingPolicyType,
};
use graph_beta_models::search::AnswerState;
use graph_beta_models::VpnTrafficRule;
use serde_json::json;

fn check_total<E>()
where
    E: EnumValue + Debug + PartialEq + Display + FromStr<Err = SerializationError>,
{
    assert!(!E::VALUES.is_empty(), "{} has no members", E::TYPE_NAME);
    let mut seen = Vec::new();
    for &member in E::VALUES {
        let wire = member.as_str();
        assert!(!wire.is_empty());
        assert!(!seen.contains(&wire), "{} maps two members to `{wire}`", E::TYPE_NAME);
        seen.push(wire);

        assert_eq!(E::parse_str(wire).unwrap(), member);
        assert_eq!(wire.parse::<E>().unwrap(), member);
        assert_eq!(member.to_string(), wire);
    }

    for bad in ["", "not-a-member", "UNKNOWNFUTUREVALUE"] {
        match E::parse_str(bad) {
            Err(SerializationError::UnknownEnumValue { type_name, value }) => {
                assert_eq!(type_name, E::TYPE_NAME);
                assert_eq!(value, bad);
            }
            other => panic!("{} accepted `{bad}`: {other:?}", E::TYPE_NAME),
        }
    }
}

#[test]
fn every_enum_is_total_and_injective() {
    check_total::<AccessReviewTimeoutBehavior>();
    check_total::<BookingStaffRole>();
    check_total::<DayOfWeek>();
    check_total::<DevicePlatformType>();
    check_total::<HorizontalSectionLayoutType>();
    check_total::<PageLayoutType>();
    check_total::<PagePromotionType>();
    check_total::<RunAsAccountType>();
    check_total::<SectionEmphasisType>();
    check_total::<TitleAreaLayoutType>();
    check_total::<TitleAreaTextAlignmentType>();
    check_total::<VpnServerCertificateType>();
    check_total::<VpnTrafficRuleAppType>();
    check_total::<VpnTrafficRuleRoutingPolicyType>();
    check_total::<AnswerState>();
}

#[test]
fn vpn_certificate_type_codec() {
    assert_eq!(VpnServerCertificateType::Ecdsa256.as_str(), "ecdsa256");
    assert_eq!(
        VpnServerCertificateType::parse_str("ecdsa256").unwrap(),
        VpnServerCertificateType::Ecdsa256
    );
    assert!(matches!(
        VpnServerCertificateType::parse_str("ecdsa999"),
        Err(SerializationError::UnknownEnumValue {
            type_name: "VpnServerCertificateType",
            ..
        })
    ));
}

#[test]
fn wire_strings_are_case_sensitive() {
    assert!(PageLayoutType::parse_str("Article").is_err());
    assert!(DayOfWeek::parse_str("MONDAY").is_err());
    assert_eq!(DevicePlatformType::parse_str("iOS").unwrap(), DevicePlatformType::IOs);
    assert!(DevicePlatformType::parse_str("ios").is_err());
}

#[test]
fn enum_collections_serialize_in_order() {
    let days = [DayOfWeek::Friday, DayOfWeek::Monday, DayOfWeek::Friday];
    assert_eq!(serialize_enum_values(&days), vec!["friday", "monday", "friday"]);
}

#[test]
fn enum_fields_round_trip_through_models() {
    let payload = json!({
        "appType": "desktop",
        "name": "corp",
        "routingPolicyType": "splitTunnel"
    });
    let rule = deserialize_value(&payload, VpnTrafficRule::create_from_discriminator_value).unwrap();
    assert_eq!(rule.app_type(), Some(VpnTrafficRuleAppType::Desktop));
    assert_eq!(
        rule.routing_policy_type(),
        Some(VpnTrafficRuleRoutingPolicyType::SplitTunnel)
    );
    assert_eq!(serialize_to_value(&rule).unwrap(), payload);
}

#[test]
fn unknown_enum_in_payload_names_the_enum() {
    let payload = json!({"appType": "mainframe"});
    let err = deserialize_value(&payload, VpnTrafficRule::create_from_discriminator_value).unwrap_err();
    assert!(matches!(
        err,
        SerializationError::UnknownEnumValue { type_name: "VpnTrafficRuleAppType", ref value } if value == "mainframe"
    ));
}

#[test]
fn non_string_enum_value_is_a_type_error() {
    let payload = json!({"appType": 1});
    let err = deserialize_value(&payload, VpnTrafficRule::create_from_discriminator_value).unwrap_err();
    assert!(matches!(err, SerializationError::TypeMismatch { .. }));
}
