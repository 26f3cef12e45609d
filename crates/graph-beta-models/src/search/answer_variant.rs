use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

use crate::enums::DevicePlatformType;

/// An alternate rendering of an answer for one language or platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerVariant {
    additional_data: AdditionalData,
    description: Option<String>,
    display_name: Option<String>,
    language_tag: Option<String>,
    odata_type: Option<String>,
    platform: Option<DevicePlatformType>,
    web_url: Option<String>,
}

impl AnswerVariant {
    pub fn new() -> Self {
        Self::default()
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

    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref()
    }

    pub fn set_language_tag(&mut self, value: Option<String>) {
        self.language_tag = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn platform(&self) -> Option<DevicePlatformType> {
        self.platform
    }

    pub fn set_platform(&mut self, value: Option<DevicePlatformType>) {
        self.platform = value;
    }

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    pub fn set_web_url(&mut self, value: Option<String>) {
        self.web_url = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
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
        res.insert("languageTag", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_language_tag(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("platform", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_platform(Some(v));
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

impl AdditionalDataHolder for AnswerVariant {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for AnswerVariant {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_string_value("languageTag", self.language_tag())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_enum_value("platform", self.platform())?;
        writer.write_string_value("webUrl", self.web_url())?;
        writer.write_additional_data(&self.additional_data)
    }
}
