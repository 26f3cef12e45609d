use std::ops::{Deref, DerefMut};

use chrono::{DateTime, FixedOffset};
use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter,
};

use super::{AnswerKeyword, AnswerState, AnswerVariant, SearchAnswer};
use crate::enums::DevicePlatformType;

/// A question and its answer, shown when a query matches its keywords.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Qna {
    base: SearchAnswer,
    availability_end_date_time: Option<DateTime<FixedOffset>>,
    availability_start_date_time: Option<DateTime<FixedOffset>>,
    group_ids: Option<Vec<String>>,
    is_suggested: Option<bool>,
    keywords: Option<AnswerKeyword>,
    language_tags: Option<Vec<String>>,
    platforms: Option<Vec<DevicePlatformType>>,
    state: Option<AnswerState>,
    targeted_variations: Option<Vec<AnswerVariant>>,
}

impl Deref for Qna {
    type Target = SearchAnswer;

    fn deref(&self) -> &SearchAnswer {
        &self.base
    }
}

impl DerefMut for Qna {
    fn deref_mut(&mut self) -> &mut SearchAnswer {
        &mut self.base
    }
}

impl Qna {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.search.qna";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn availability_end_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.availability_end_date_time
    }

    pub fn set_availability_end_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.availability_end_date_time = value;
    }

    pub fn availability_start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.availability_start_date_time
    }

    pub fn set_availability_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.availability_start_date_time = value;
    }

    pub fn group_ids(&self) -> Option<&[String]> {
        self.group_ids.as_deref()
    }

    pub fn set_group_ids(&mut self, value: Option<Vec<String>>) {
        self.group_ids = value;
    }

    pub fn is_suggested(&self) -> Option<bool> {
        self.is_suggested
    }

    pub fn set_is_suggested(&mut self, value: Option<bool>) {
        self.is_suggested = value;
    }

    pub fn keywords(&self) -> Option<&AnswerKeyword> {
        self.keywords.as_ref()
    }

    pub fn set_keywords(&mut self, value: Option<AnswerKeyword>) {
        self.keywords = value;
    }

    /// Tags of the form `{language}-{region}`, e.g. `en-us`.
    pub fn language_tags(&self) -> Option<&[String]> {
        self.language_tags.as_deref()
    }

    pub fn set_language_tags(&mut self, value: Option<Vec<String>>) {
        self.language_tags = value;
    }

    pub fn platforms(&self) -> Option<&[DevicePlatformType]> {
        self.platforms.as_deref()
    }

    pub fn set_platforms(&mut self, value: Option<Vec<DevicePlatformType>>) {
        self.platforms = value;
    }

    pub fn state(&self) -> Option<AnswerState> {
        self.state
    }

    pub fn set_state(&mut self, value: Option<AnswerState>) {
        self.state = value;
    }

    pub fn targeted_variations(&self) -> Option<&[AnswerVariant]> {
        self.targeted_variations.as_deref()
    }

    pub fn set_targeted_variations(&mut self, value: Option<Vec<AnswerVariant>>) {
        self.targeted_variations = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(SearchAnswer::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("availabilityEndDateTime", |m, n| {
            if let Some(v) = n.get_time_value()? {
                m.set_availability_end_date_time(Some(v));
            }
            Ok(())
        });
        res.insert("availabilityStartDateTime", |m, n| {
            if let Some(v) = n.get_time_value()? {
                m.set_availability_start_date_time(Some(v));
            }
            Ok(())
        });
        res.insert("groupIds", |m, n| {
            if let Some(v) = n.get_collection_of_primitive_values()? {
                m.set_group_ids(Some(v));
            }
            Ok(())
        });
        res.insert("isSuggested", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_is_suggested(Some(v));
            }
            Ok(())
        });
        res.insert("keywords", |m, n| {
            if let Some(v) = n.get_object_value(AnswerKeyword::create_from_discriminator_value)? {
                m.set_keywords(Some(v));
            }
            Ok(())
        });
        res.insert("languageTags", |m, n| {
            if let Some(v) = n.get_collection_of_primitive_values()? {
                m.set_language_tags(Some(v));
            }
            Ok(())
        });
        res.insert("platforms", |m, n| {
            if let Some(v) = n.get_collection_of_enum_values()? {
                m.set_platforms(Some(v));
            }
            Ok(())
        });
        res.insert("state", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_state(Some(v));
            }
            Ok(())
        });
        res.insert("targetedVariations", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(AnswerVariant::create_from_discriminator_value)? {
                m.set_targeted_variations(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for Qna {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for Qna {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_time_value("availabilityEndDateTime", self.availability_end_date_time())?;
        writer.write_time_value("availabilityStartDateTime", self.availability_start_date_time())?;
        writer.write_collection_of_string_values("groupIds", self.group_ids())?;
        writer.write_bool_value("isSuggested", self.is_suggested())?;
        writer.write_object("keywords", self.keywords())?;
        writer.write_collection_of_string_values("languageTags", self.language_tags())?;
        writer.write_collection_of_enum_values("platforms", self.platforms())?;
        writer.write_enum_value("state", self.state())?;
        writer.write_objects("targetedVariations", self.targeted_variations())
    }
}
