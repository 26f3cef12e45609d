use std::ops::{Deref, DerefMut};

use chrono::{DateTime, FixedOffset};
use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, IsoDuration, Parsable,
    ParseNode, SerializationError, SerializationWriter,
};

use crate::enums::RunAsAccountType;
use crate::Entity;

/// A shell script pushed to managed macOS devices.
///
/// Assignments, run states and the run summary are navigation properties
/// and are not bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceShellScript {
    base: Entity,
    block_execution_notifications: Option<bool>,
    created_date_time: Option<DateTime<FixedOffset>>,
    description: Option<String>,
    display_name: Option<String>,
    execution_frequency: Option<IsoDuration>,
    file_name: Option<String>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    retry_count: Option<i32>,
    role_scope_tag_ids: Option<Vec<String>>,
    run_as_account: Option<RunAsAccountType>,
    script_content: Option<Vec<u8>>,
}

impl Deref for DeviceShellScript {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for DeviceShellScript {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl DeviceShellScript {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceShellScript";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn block_execution_notifications(&self) -> Option<bool> {
        self.block_execution_notifications
    }

    pub fn set_block_execution_notifications(&mut self, value: Option<bool>) {
        self.block_execution_notifications = value;
    }

    pub fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    /// How often the script reruns; absent means it runs once.
    pub fn execution_frequency(&self) -> Option<IsoDuration> {
        self.execution_frequency
    }

    pub fn set_execution_frequency(&mut self, value: Option<IsoDuration>) {
        self.execution_frequency = value;
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn set_file_name(&mut self, value: Option<String>) {
        self.file_name = value;
    }

    pub fn last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_modified_date_time = value;
    }

    pub fn retry_count(&self) -> Option<i32> {
        self.retry_count
    }

    pub fn set_retry_count(&mut self, value: Option<i32>) {
        self.retry_count = value;
    }

    pub fn role_scope_tag_ids(&self) -> Option<&[String]> {
        self.role_scope_tag_ids.as_deref()
    }

    pub fn set_role_scope_tag_ids(&mut self, value: Option<Vec<String>>) {
        self.role_scope_tag_ids = value;
    }

    pub fn run_as_account(&self) -> Option<RunAsAccountType> {
        self.run_as_account
    }

    pub fn set_run_as_account(&mut self, value: Option<RunAsAccountType>) {
        self.run_as_account = value;
    }

    /// Raw script bytes; base64 on the wire.
    pub fn script_content(&self) -> Option<&[u8]> {
        self.script_content.as_deref()
    }

    pub fn set_script_content(&mut self, value: Option<Vec<u8>>) {
        self.script_content = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("blockExecutionNotifications", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_block_execution_notifications(Some(v));
            }
            Ok(())
        });
        res.insert("createdDateTime", |m, n| {
            if let Some(v) = n.get_time_value()? {
                m.set_created_date_time(Some(v));
            }
            Ok(())
        });
        res.insert("description", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_description(Some(v));
            }
            Ok(())
        });
        res.insert("displayName", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_display_name(Some(v));
            }
            Ok(())
        });
        res.insert("executionFrequency", |m, n| {
            if let Some(v) = n.get_iso_duration_value()? {
                m.set_execution_frequency(Some(v));
            }
            Ok(())
        });
        res.insert("fileName", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_file_name(Some(v));
            }
            Ok(())
        });
        res.insert("lastModifiedDateTime", |m, n| {
            if let Some(v) = n.get_time_value()? {
                m.set_last_modified_date_time(Some(v));
            }
            Ok(())
        });
        res.insert("retryCount", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_retry_count(Some(v));
            }
            Ok(())
        });
        res.insert("roleScopeTagIds", |m, n| {
            if let Some(v) = n.get_collection_of_primitive_values()? {
                m.set_role_scope_tag_ids(Some(v));
            }
            Ok(())
        });
        res.insert("runAsAccount", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_run_as_account(Some(v));
            }
            Ok(())
        });
        res.insert("scriptContent", |m, n| {
            if let Some(v) = n.get_byte_array_value()? {
                m.set_script_content(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for DeviceShellScript {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for DeviceShellScript {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_bool_value("blockExecutionNotifications", self.block_execution_notifications())?;
        writer.write_time_value("createdDateTime", self.created_date_time())?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_iso_duration_value("executionFrequency", self.execution_frequency())?;
        writer.write_string_value("fileName", self.file_name())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time())?;
        writer.write_int32_value("retryCount", self.retry_count())?;
        writer.write_collection_of_string_values("roleScopeTagIds", self.role_scope_tag_ids())?;
        writer.write_enum_value("runAsAccount", self.run_as_account())?;
        writer.write_byte_array_value("scriptContent", self.script_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_json::{deserialize_value, serialize_to_value};
    use serde_json::json;

    #[test]
    fn script_payload_round_trips() {
        let payload = json!({
            "id": "s-1",
            "@odata.type": "#microsoft.graph.deviceShellScript",
            "displayName": "Rotate logs",
            "executionFrequency": "P1DT12H",
            "fileName": "rotate.sh",
            "retryCount": 3,
            "roleScopeTagIds": ["0", "7"],
            "runAsAccount": "system",
            "scriptContent": "IyEvYmluL3NoCmVjaG8gaGkK",
            "assignments": [{"id": "a-1"}]
        });
        let script = deserialize_value(&payload, DeviceShellScript::create_from_discriminator_value).unwrap();

        assert_eq!(script.script_content(), Some(&b"#!/bin/sh\necho hi\n"[..]));
        assert_eq!(
            script.execution_frequency(),
            Some(IsoDuration { days: 1, hours: 12, ..IsoDuration::default() })
        );
        assert_eq!(script.role_scope_tag_ids(), Some(&["0".to_string(), "7".to_string()][..]));
        assert_eq!(script.run_as_account(), Some(RunAsAccountType::System));
        assert!(script.additional_data().contains_key("assignments"));

        assert_eq!(serialize_to_value(&script).unwrap(), payload);
    }

    #[test]
    fn month_frequency_is_rejected() {
        let payload = json!({"executionFrequency": "P1M"});
        let err = deserialize_value(&payload, DeviceShellScript::create_from_discriminator_value).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "duration", .. }));
    }

    #[test]
    fn script_content_must_be_base64() {
        let payload = json!({"scriptContent": "***"});
        assert!(deserialize_value(&payload, DeviceShellScript::create_from_discriminator_value).is_err());
    }
}
