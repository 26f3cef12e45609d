use std::ops::{Deref, DerefMut};

use chrono::{DateTime, FixedOffset};
use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter,
};

use crate::{Entity, IdentitySet, ItemReference};

/// Common properties of drive items, lists and pages.
///
/// The `createdByUser` and `lastModifiedByUser` navigation properties are
/// not bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseItem {
    base: Entity,
    created_by: Option<IdentitySet>,
    created_date_time: Option<DateTime<FixedOffset>>,
    description: Option<String>,
    e_tag: Option<String>,
    last_modified_by: Option<IdentitySet>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    name: Option<String>,
    parent_reference: Option<ItemReference>,
    web_url: Option<String>,
}

impl Deref for BaseItem {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for BaseItem {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl BaseItem {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.baseItem";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn created_by(&self) -> Option<&IdentitySet> {
        self.created_by.as_ref()
    }

    pub fn set_created_by(&mut self, value: Option<IdentitySet>) {
        self.created_by = value;
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

    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    pub fn set_e_tag(&mut self, value: Option<String>) {
        self.e_tag = value;
    }

    pub fn last_modified_by(&self) -> Option<&IdentitySet> {
        self.last_modified_by.as_ref()
    }

    pub fn set_last_modified_by(&mut self, value: Option<IdentitySet>) {
        self.last_modified_by = value;
    }

    pub fn last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_modified_date_time = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn parent_reference(&self) -> Option<&ItemReference> {
        self.parent_reference.as_ref()
    }

    pub fn set_parent_reference(&mut self, value: Option<ItemReference>) {
        self.parent_reference = value;
    }

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    pub fn set_web_url(&mut self, value: Option<String>) {
        self.web_url = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("createdBy", |m, n| {
            if let Some(v) = n.get_object_value(IdentitySet::create_from_discriminator_value)? {
                m.set_created_by(Some(v));
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
        res.insert("eTag", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_e_tag(Some(v));
            }
            Ok(())
        });
        res.insert("lastModifiedBy", |m, n| {
            if let Some(v) = n.get_object_value(IdentitySet::create_from_discriminator_value)? {
                m.set_last_modified_by(Some(v));
            }
            Ok(())
        });
        res.insert("lastModifiedDateTime", |m, n| {
            if let Some(v) = n.get_time_value()? {
                m.set_last_modified_date_time(Some(v));
            }
            Ok(())
        });
        res.insert("name", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_name(Some(v));
            }
            Ok(())
        });
        res.insert("parentReference", |m, n| {
            if let Some(v) = n.get_object_value(ItemReference::create_from_discriminator_value)? {
                m.set_parent_reference(Some(v));
            }
            Ok(())
        });
        res.insert("webUrl", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_web_url(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for BaseItem {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for BaseItem {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_object("createdBy", self.created_by())?;
        writer.write_time_value("createdDateTime", self.created_date_time())?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("eTag", self.e_tag())?;
        writer.write_object("lastModifiedBy", self.last_modified_by())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time())?;
        writer.write_string_value("name", self.name())?;
        writer.write_object("parentReference", self.parent_reference())?;
        writer.write_string_value("webUrl", self.web_url())
    }
}
