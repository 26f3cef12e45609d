//! Sensitivity label descriptions, nested through their parent labels.

use std::ops::{Deref, DerefMut};

use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

// ── ParentLabelDetails ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParentLabelDetails {
    additional_data: AdditionalData,
    color: Option<String>,
    description: Option<String>,
    id: Option<String>,
    is_active: Option<bool>,
    name: Option<String>,
    odata_type: Option<String>,
    parent: Option<Box<ParentLabelDetailsKind>>,
    sensitivity: Option<i32>,
    tooltip: Option<String>,
}

impl ParentLabelDetails {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.parentLabelDetails";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color(&mut self, value: Option<String>) {
        self.color = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn is_active(&self) -> Option<bool> {
        self.is_active
    }

    pub fn set_is_active(&mut self, value: Option<bool>) {
        self.is_active = value;
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

    pub fn parent(&self) -> Option<&ParentLabelDetailsKind> {
        self.parent.as_deref()
    }

    pub fn set_parent(&mut self, value: Option<ParentLabelDetailsKind>) {
        self.parent = value.map(Box::new);
    }

    /// Higher numbers are more sensitive.
    pub fn sensitivity(&self) -> Option<i32> {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, value: Option<i32>) {
        self.sensitivity = value;
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn set_tooltip(&mut self, value: Option<String>) {
        self.tooltip = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("color", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_color(Some(v));
            }
            Ok(())
        });
        res.insert("description", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_description(Some(v));
            }
            Ok(())
        });
        res.insert("id", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_id(Some(v));
            }
            Ok(())
        });
        res.insert("isActive", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_is_active(Some(v));
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
        res.insert("parent", |m, n| {
            if let Some(v) = n.get_object_value(ParentLabelDetailsKind::create_from_discriminator_value)? {
                m.set_parent(Some(v));
            }
            Ok(())
        });
        res.insert("sensitivity", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_sensitivity(Some(v));
            }
            Ok(())
        });
        res.insert("tooltip", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_tooltip(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for ParentLabelDetails {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for ParentLabelDetails {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("color", self.color())?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("id", self.id())?;
        writer.write_bool_value("isActive", self.is_active())?;
        writer.write_string_value("name", self.name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_object("parent", self.parent())?;
        writer.write_int32_value("sensitivity", self.sensitivity())?;
        writer.write_string_value("tooltip", self.tooltip())?;
        writer.write_additional_data(&self.additional_data)
    }
}

// ── LabelDetails ──────────────────────────────────────────────────────────

/// A label applied to content; shape-identical to its parent type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelDetails {
    base: ParentLabelDetails,
}

impl Deref for LabelDetails {
    type Target = ParentLabelDetails;

    fn deref(&self) -> &ParentLabelDetails {
        &self.base
    }
}

impl DerefMut for LabelDetails {
    fn deref_mut(&mut self) -> &mut ParentLabelDetails {
        &mut self.base
    }
}

impl LabelDetails {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.labelDetails";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::inherit(ParentLabelDetails::field_deserializers(), |m: &mut Self| &mut m.base)
    }
}

impl AdditionalDataHolder for LabelDetails {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for LabelDetails {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)
    }
}

// ── ParentLabelDetailsKind ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ParentLabelDetailsKind {
    ParentLabelDetails(ParentLabelDetails),
    LabelDetails(LabelDetails),
}

impl Default for ParentLabelDetailsKind {
    fn default() -> Self {
        ParentLabelDetailsKind::ParentLabelDetails(ParentLabelDetails::default())
    }
}

impl ParentLabelDetailsKind {
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, SerializationError> {
        let discriminator = node.get_discriminator_value()?;
        Ok(match discriminator.as_deref() {
            Some(LabelDetails::ODATA_TYPE) => ParentLabelDetailsKind::LabelDetails(LabelDetails::default()),
            Some(ParentLabelDetails::ODATA_TYPE) => {
                ParentLabelDetailsKind::ParentLabelDetails(ParentLabelDetails::default())
            }
            other => {
                tracing::debug!(discriminator = ?other, "unrecognized label type, using base");
                ParentLabelDetailsKind::ParentLabelDetails(ParentLabelDetails::default())
            }
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ParentLabelDetailsKind::ParentLabelDetails(_) => ParentLabelDetails::ODATA_TYPE,
            ParentLabelDetailsKind::LabelDetails(_) => LabelDetails::ODATA_TYPE,
        }
    }

    pub fn as_parent_label_details(&self) -> &ParentLabelDetails {
        match self {
            ParentLabelDetailsKind::ParentLabelDetails(v) => v,
            ParentLabelDetailsKind::LabelDetails(v) => &v.base,
        }
    }
}

impl AdditionalDataHolder for ParentLabelDetailsKind {
    fn additional_data(&self) -> &AdditionalData {
        self.as_parent_label_details().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        match self {
            ParentLabelDetailsKind::ParentLabelDetails(v) => v.additional_data_mut(),
            ParentLabelDetailsKind::LabelDetails(v) => v.additional_data_mut(),
        }
    }
}

impl Parsable for ParentLabelDetailsKind {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        match self {
            ParentLabelDetailsKind::ParentLabelDetails(v) => v.assign_field_values(node),
            ParentLabelDetailsKind::LabelDetails(v) => v.assign_field_values(node),
        }
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        match self {
            ParentLabelDetailsKind::ParentLabelDetails(v) => v.serialize(writer),
            ParentLabelDetailsKind::LabelDetails(v) => v.serialize(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_json::{deserialize_value, serialize_to_value};
    use serde_json::json;

    #[test]
    fn nested_parents_resolve_independently() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.labelDetails",
            "name": "Confidential / Finance",
            "sensitivity": 3,
            "parent": {
                "@odata.type": "#microsoft.graph.parentLabelDetails",
                "name": "Confidential",
                "sensitivity": 2
            }
        });
        let kind = deserialize_value(&payload, ParentLabelDetailsKind::create_from_discriminator_value).unwrap();
        assert_eq!(kind.type_name(), LabelDetails::ODATA_TYPE);
        let parent = kind.as_parent_label_details().parent().unwrap();
        assert_eq!(parent.type_name(), ParentLabelDetails::ODATA_TYPE);
        assert_eq!(parent.as_parent_label_details().name(), Some("Confidential"));
        assert_eq!(serialize_to_value(&kind).unwrap(), payload);
    }

    #[test]
    fn explicit_null_keeps_an_existing_parent() {
        let mut details = ParentLabelDetails::new();
        details.set_name(Some("Finance".to_owned()));
        details.set_parent(Some(ParentLabelDetailsKind::default()));
        details
            .assign_field_values(&graph_beta_json::JsonParseNode::from_value(json!({
                "parent": null,
                "name": null
            })))
            .unwrap();
        assert!(details.parent().is_some());
        assert_eq!(details.name(), Some("Finance"));
    }
}
