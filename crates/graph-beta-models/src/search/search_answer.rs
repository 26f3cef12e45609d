use std::ops::{Deref, DerefMut};

use chrono::{DateTime, FixedOffset};
use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter,
};

use super::{Bookmark, Qna};
use crate::{Entity, IdentitySet};

// ── SearchAnswer ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchAnswer {
    base: Entity,
    description: Option<String>,
    display_name: Option<String>,
    last_modified_by: Option<IdentitySet>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    web_url: Option<String>,
}

impl Deref for SearchAnswer {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for SearchAnswer {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl SearchAnswer {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.search.searchAnswer";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
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

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    pub fn set_web_url(&mut self, value: Option<String>) {
        self.web_url = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base);
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
        res.insert("webUrl", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_web_url(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for SearchAnswer {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for SearchAnswer {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_object("lastModifiedBy", self.last_modified_by())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time())?;
        writer.write_string_value("webUrl", self.web_url())
    }
}

// ── SearchAnswerKind ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAnswerKind {
    SearchAnswer(SearchAnswer),
    Bookmark(Bookmark),
    Qna(Qna),
}

impl Default for SearchAnswerKind {
    fn default() -> Self {
        SearchAnswerKind::SearchAnswer(SearchAnswer::default())
    }
}

impl SearchAnswerKind {
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, SerializationError> {
        let discriminator = node.get_discriminator_value()?;
        Ok(match discriminator.as_deref() {
            Some(Bookmark::ODATA_TYPE) => SearchAnswerKind::Bookmark(Bookmark::default()),
            Some(Qna::ODATA_TYPE) => SearchAnswerKind::Qna(Qna::default()),
            Some(SearchAnswer::ODATA_TYPE) => SearchAnswerKind::SearchAnswer(SearchAnswer::default()),
            other => {
                tracing::debug!(discriminator = ?other, "unrecognized search answer type, using base");
                SearchAnswerKind::SearchAnswer(SearchAnswer::default())
            }
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SearchAnswerKind::SearchAnswer(_) => SearchAnswer::ODATA_TYPE,
            SearchAnswerKind::Bookmark(_) => Bookmark::ODATA_TYPE,
            SearchAnswerKind::Qna(_) => Qna::ODATA_TYPE,
        }
    }

    pub fn as_search_answer(&self) -> &SearchAnswer {
        match self {
            SearchAnswerKind::SearchAnswer(v) => v,
            SearchAnswerKind::Bookmark(v) => &**v,
            SearchAnswerKind::Qna(v) => &**v,
        }
    }
}

impl AdditionalDataHolder for SearchAnswerKind {
    fn additional_data(&self) -> &AdditionalData {
        self.as_search_answer().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        match self {
            SearchAnswerKind::SearchAnswer(v) => v.additional_data_mut(),
            SearchAnswerKind::Bookmark(v) => v.additional_data_mut(),
            SearchAnswerKind::Qna(v) => v.additional_data_mut(),
        }
    }
}

impl Parsable for SearchAnswerKind {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        match self {
            SearchAnswerKind::SearchAnswer(v) => v.assign_field_values(node),
            SearchAnswerKind::Bookmark(v) => v.assign_field_values(node),
            SearchAnswerKind::Qna(v) => v.assign_field_values(node),
        }
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        match self {
            SearchAnswerKind::SearchAnswer(v) => v.serialize(writer),
            SearchAnswerKind::Bookmark(v) => v.serialize(writer),
            SearchAnswerKind::Qna(v) => v.serialize(writer),
        }
    }
}
