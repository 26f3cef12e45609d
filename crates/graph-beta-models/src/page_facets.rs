//! Small value objects hanging off a site page.

use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

use crate::IdentitySet;

// ── ContentTypeInfo ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTypeInfo {
    additional_data: AdditionalData,
    id: Option<String>,
    name: Option<String>,
    odata_type: Option<String>,
}

impl ContentTypeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
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

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("id", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_id(Some(v));
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
        res
    }
}

impl AdditionalDataHolder for ContentTypeInfo {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for ContentTypeInfo {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("id", self.id())?;
        writer.write_string_value("name", self.name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_additional_data(&self.additional_data)
    }
}

// ── PublicationFacet ──────────────────────────────────────────────────────

/// Publishing state of a page: `published` or `checkout`, plus the version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationFacet {
    additional_data: AdditionalData,
    checked_out_by: Option<IdentitySet>,
    level: Option<String>,
    odata_type: Option<String>,
    version_id: Option<String>,
}

impl PublicationFacet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn checked_out_by(&self) -> Option<&IdentitySet> {
        self.checked_out_by.as_ref()
    }

    pub fn set_checked_out_by(&mut self, value: Option<IdentitySet>) {
        self.checked_out_by = value;
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn set_level(&mut self, value: Option<String>) {
        self.level = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    pub fn set_version_id(&mut self, value: Option<String>) {
        self.version_id = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("checkedOutBy", |m, n| {
            if let Some(v) = n.get_object_value(IdentitySet::create_from_discriminator_value)? {
                m.set_checked_out_by(Some(v));
            }
            Ok(())
        });
        res.insert("level", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_level(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("versionId", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_version_id(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for PublicationFacet {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for PublicationFacet {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_object("checkedOutBy", self.checked_out_by())?;
        writer.write_string_value("level", self.level())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_string_value("versionId", self.version_id())?;
        writer.write_additional_data(&self.additional_data)
    }
}

// ── ReactionsFacet ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionsFacet {
    additional_data: AdditionalData,
    comment_count: Option<i32>,
    like_count: Option<i32>,
    odata_type: Option<String>,
    share_count: Option<i32>,
}

impl ReactionsFacet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn comment_count(&self) -> Option<i32> {
        self.comment_count
    }

    pub fn set_comment_count(&mut self, value: Option<i32>) {
        self.comment_count = value;
    }

    pub fn like_count(&self) -> Option<i32> {
        self.like_count
    }

    pub fn set_like_count(&mut self, value: Option<i32>) {
        self.like_count = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn share_count(&self) -> Option<i32> {
        self.share_count
    }

    pub fn set_share_count(&mut self, value: Option<i32>) {
        self.share_count = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("commentCount", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_comment_count(Some(v));
            }
            Ok(())
        });
        res.insert("likeCount", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_like_count(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("shareCount", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_share_count(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for ReactionsFacet {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for ReactionsFacet {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_int32_value("commentCount", self.comment_count())?;
        writer.write_int32_value("likeCount", self.like_count())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_int32_value("shareCount", self.share_count())?;
        writer.write_additional_data(&self.additional_data)
    }
}
