//! Root of the entity hierarchy.

use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

/// Every addressable resource carries an `id` and its concrete type name.
///
/// Subtypes embed an `Entity` and reach its fields through `Deref`. Wire
/// fields no subtype binds end up in this value's additional data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    additional_data: AdditionalData,
    id: Option<String>,
    odata_type: Option<String>,
}

impl Entity {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.entity";

    /// All fields absent except `@odata.type`, which names this type.
    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    /// Reads start from `Default`, so only the wire decides `@odata.type`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("id", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_id(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for Entity {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for Entity {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("id", self.id())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_additional_data(&self.additional_data)
    }
}

/// An open object with no bound properties; every field is kept as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Json {
    additional_data: AdditionalData,
    odata_type: Option<String>,
}

impl Json {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for Json {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for Json {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_additional_data(&self.additional_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_json::{deserialize_value, serialize_to_value};
    use serde_json::json;

    #[test]
    fn unmapped_fields_round_trip_through_additional_data() {
        let payload = json!({"id": "1", "@odata.type": "#x", "extra": {"a": [1, 2]}});
        let entity = deserialize_value(&payload, Entity::create_from_discriminator_value).unwrap();
        assert_eq!(entity.id(), Some("1"));
        assert_eq!(entity.additional_data()["extra"], json!({"a": [1, 2]}));
        assert_eq!(serialize_to_value(&entity).unwrap(), payload);
    }

    #[test]
    fn json_keeps_everything() {
        let payload = json!({"b": 1, "a": null, "c": "x"});
        let value = deserialize_value(&payload, Json::create_from_discriminator_value).unwrap();
        assert_eq!(value.additional_data().len(), 3);
        assert_eq!(serialize_to_value(&value).unwrap(), payload);
    }

    #[test]
    fn new_names_its_type_and_default_is_empty() {
        let entity = Entity::new();
        assert_eq!(entity.id(), None);
        assert_eq!(entity.odata_type(), Some(Entity::ODATA_TYPE));
        assert!(entity.additional_data().is_empty());

        assert_eq!(serialize_to_value(&Entity::default()).unwrap(), json!({}));
    }

    #[test]
    fn read_without_discriminator_stays_without_one() {
        let payload = json!({"id": "e-1"});
        let entity = deserialize_value(&payload, Entity::create_from_discriminator_value).unwrap();
        assert_eq!(entity.odata_type(), None);
        assert_eq!(serialize_to_value(&entity).unwrap(), payload);
    }
}
