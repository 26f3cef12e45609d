//! Per-app and per-destination routing rules of a Windows VPN profile.

use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

use crate::enums::{VpnTrafficRuleAppType, VpnTrafficRuleRoutingPolicyType};

// ── VpnTrafficRule ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VpnTrafficRule {
    additional_data: AdditionalData,
    app_id: Option<String>,
    app_type: Option<VpnTrafficRuleAppType>,
    claims: Option<String>,
    local_address_ranges: Option<Vec<IPv4Range>>,
    local_port_ranges: Option<Vec<NumberRange>>,
    name: Option<String>,
    odata_type: Option<String>,
    protocols: Option<i32>,
    remote_address_ranges: Option<Vec<IPv4Range>>,
    remote_port_ranges: Option<Vec<NumberRange>>,
    routing_policy_type: Option<VpnTrafficRuleRoutingPolicyType>,
}

impl VpnTrafficRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn set_app_id(&mut self, value: Option<String>) {
        self.app_id = value;
    }

    pub fn app_type(&self) -> Option<VpnTrafficRuleAppType> {
        self.app_type
    }

    pub fn set_app_type(&mut self, value: Option<VpnTrafficRuleAppType>) {
        self.app_type = value;
    }

    pub fn claims(&self) -> Option<&str> {
        self.claims.as_deref()
    }

    pub fn set_claims(&mut self, value: Option<String>) {
        self.claims = value;
    }

    pub fn local_address_ranges(&self) -> Option<&[IPv4Range]> {
        self.local_address_ranges.as_deref()
    }

    pub fn set_local_address_ranges(&mut self, value: Option<Vec<IPv4Range>>) {
        self.local_address_ranges = value;
    }

    pub fn local_port_ranges(&self) -> Option<&[NumberRange]> {
        self.local_port_ranges.as_deref()
    }

    pub fn set_local_port_ranges(&mut self, value: Option<Vec<NumberRange>>) {
        self.local_port_ranges = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    /// IANA protocol number, 0 through 255.
    pub fn protocols(&self) -> Option<i32> {
        self.protocols
    }

    pub fn set_protocols(&mut self, value: Option<i32>) {
        self.protocols = value;
    }

    pub fn remote_address_ranges(&self) -> Option<&[IPv4Range]> {
        self.remote_address_ranges.as_deref()
    }

    pub fn set_remote_address_ranges(&mut self, value: Option<Vec<IPv4Range>>) {
        self.remote_address_ranges = value;
    }

    pub fn remote_port_ranges(&self) -> Option<&[NumberRange]> {
        self.remote_port_ranges.as_deref()
    }

    pub fn set_remote_port_ranges(&mut self, value: Option<Vec<NumberRange>>) {
        self.remote_port_ranges = value;
    }

    pub fn routing_policy_type(&self) -> Option<VpnTrafficRuleRoutingPolicyType> {
        self.routing_policy_type
    }

    pub fn set_routing_policy_type(&mut self, value: Option<VpnTrafficRuleRoutingPolicyType>) {
        self.routing_policy_type = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("appId", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_app_id(Some(v));
            }
            Ok(())
        });
        res.insert("appType", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_app_type(Some(v));
            }
            Ok(())
        });
        res.insert("claims", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_claims(Some(v));
            }
            Ok(())
        });
        res.insert("localAddressRanges", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(IPv4Range::create_from_discriminator_value)? {
                m.set_local_address_ranges(Some(v));
            }
            Ok(())
        });
        res.insert("localPortRanges", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(NumberRange::create_from_discriminator_value)? {
                m.set_local_port_ranges(Some(v));
            }
            Ok(())
        });
        res.insert("name", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_name(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("protocols", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_protocols(Some(v));
            }
            Ok(())
        });
        res.insert("remoteAddressRanges", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(IPv4Range::create_from_discriminator_value)? {
                m.set_remote_address_ranges(Some(v));
            }
            Ok(())
        });
        res.insert("remotePortRanges", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(NumberRange::create_from_discriminator_value)? {
                m.set_remote_port_ranges(Some(v));
            }
            Ok(())
        });
        res.insert("routingPolicyType", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_routing_policy_type(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for VpnTrafficRule {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for VpnTrafficRule {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("appId", self.app_id())?;
        writer.write_enum_value("appType", self.app_type())?;
        writer.write_string_value("claims", self.claims())?;
        writer.write_objects("localAddressRanges", self.local_address_ranges())?;
        writer.write_objects("localPortRanges", self.local_port_ranges())?;
        writer.write_string_value("name", self.name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_int32_value("protocols", self.protocols())?;
        writer.write_objects("remoteAddressRanges", self.remote_address_ranges())?;
        writer.write_objects("remotePortRanges", self.remote_port_ranges())?;
        writer.write_enum_value("routingPolicyType", self.routing_policy_type())?;
        writer.write_additional_data(&self.additional_data)
    }
}

// ── IPv4Range ─────────────────────────────────────────────────────────────

/// Inclusive range of IPv4 addresses, kept in dotted-quad text form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IPv4Range {
    additional_data: AdditionalData,
    lower_address: Option<String>,
    odata_type: Option<String>,
    upper_address: Option<String>,
}

impl IPv4Range {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.iPv4Range";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn lower_address(&self) -> Option<&str> {
        self.lower_address.as_deref()
    }

    pub fn set_lower_address(&mut self, value: Option<String>) {
        self.lower_address = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn upper_address(&self) -> Option<&str> {
        self.upper_address.as_deref()
    }

    pub fn set_upper_address(&mut self, value: Option<String>) {
        self.upper_address = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("lowerAddress", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_lower_address(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("upperAddress", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_upper_address(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for IPv4Range {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for IPv4Range {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("lowerAddress", self.lower_address())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_string_value("upperAddress", self.upper_address())?;
        writer.write_additional_data(&self.additional_data)
    }
}

// ── NumberRange ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberRange {
    additional_data: AdditionalData,
    lower_number: Option<i32>,
    odata_type: Option<String>,
    upper_number: Option<i32>,
}

impl NumberRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn lower_number(&self) -> Option<i32> {
        self.lower_number
    }

    pub fn set_lower_number(&mut self, value: Option<i32>) {
        self.lower_number = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn upper_number(&self) -> Option<i32> {
        self.upper_number
    }

    pub fn set_upper_number(&mut self, value: Option<i32>) {
        self.upper_number = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("lowerNumber", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_lower_number(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("upperNumber", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_upper_number(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for NumberRange {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for NumberRange {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_int32_value("lowerNumber", self.lower_number())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_int32_value("upperNumber", self.upper_number())?;
        writer.write_additional_data(&self.additional_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_json::{deserialize_value, serialize_to_value};
    use serde_json::json;

    #[test]
    fn split_tunnel_rule_round_trips() {
        let payload = json!({
            "appId": "%windir%\\system32\\mstsc.exe",
            "appType": "desktop",
            "localPortRanges": [{"lowerNumber": 3389, "upperNumber": 3389}],
            "name": "rdp",
            "protocols": 6,
            "remoteAddressRanges": [
                {"@odata.type": "#microsoft.graph.iPv4Range", "lowerAddress": "10.0.0.1", "upperAddress": "10.0.0.254"}
            ],
            "routingPolicyType": "splitTunnel"
        });
        let rule = deserialize_value(&payload, VpnTrafficRule::create_from_discriminator_value).unwrap();
        assert_eq!(rule.app_type(), Some(VpnTrafficRuleAppType::Desktop));
        assert_eq!(rule.local_port_ranges().unwrap()[0].lower_number(), Some(3389));
        assert_eq!(rule.remote_address_ranges().unwrap()[0].upper_address(), Some("10.0.0.254"));
        assert_eq!(rule.routing_policy_type(), Some(VpnTrafficRuleRoutingPolicyType::SplitTunnel));
        assert_eq!(serialize_to_value(&rule).unwrap(), payload);
    }

    #[test]
    fn port_out_of_i32_range_is_invalid() {
        let payload = json!({"lowerNumber": 4_294_967_296u64});
        let err = deserialize_value(&payload, NumberRange::create_from_discriminator_value).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { .. }));
    }
}
