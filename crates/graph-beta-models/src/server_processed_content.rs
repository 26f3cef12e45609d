//! Server-rendered fragments of a page and the key/value pairs they are made of.

use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

use crate::Json;

// ── MetaDataKeyStringPair ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaDataKeyStringPair {
    additional_data: AdditionalData,
    key: Option<String>,
    odata_type: Option<String>,
    value: Option<String>,
}

impl MetaDataKeyStringPair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, value: Option<String>) {
        self.key = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("key", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_key(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("value", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_value(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for MetaDataKeyStringPair {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for MetaDataKeyStringPair {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("key", self.key())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_string_value("value", self.value())?;
        writer.write_additional_data(&self.additional_data)
    }
}

// ── MetaDataKeyValuePair ──────────────────────────────────────────────────

/// Like [`MetaDataKeyStringPair`] but the value is an arbitrary object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaDataKeyValuePair {
    additional_data: AdditionalData,
    key: Option<String>,
    odata_type: Option<String>,
    value: Option<Json>,
}

impl MetaDataKeyValuePair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, value: Option<String>) {
        self.key = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn value(&self) -> Option<&Json> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<Json>) {
        self.value = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("key", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_key(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("value", |m, n| {
            if let Some(v) = n.get_object_value(Json::create_from_discriminator_value)? {
                m.set_value(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for MetaDataKeyValuePair {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for MetaDataKeyValuePair {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("key", self.key())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_object("value", self.value())?;
        writer.write_additional_data(&self.additional_data)
    }
}

// ── ServerProcessedContent ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerProcessedContent {
    additional_data: AdditionalData,
    component_dependencies: Option<Vec<MetaDataKeyStringPair>>,
    custom_metadata: Option<Vec<MetaDataKeyValuePair>>,
    html_strings: Option<Vec<MetaDataKeyStringPair>>,
    image_sources: Option<Vec<MetaDataKeyStringPair>>,
    links: Option<Vec<MetaDataKeyStringPair>>,
    odata_type: Option<String>,
    searchable_plain_texts: Option<Vec<MetaDataKeyStringPair>>,
}

impl ServerProcessedContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn component_dependencies(&self) -> Option<&[MetaDataKeyStringPair]> {
        self.component_dependencies.as_deref()
    }

    pub fn set_component_dependencies(&mut self, value: Option<Vec<MetaDataKeyStringPair>>) {
        self.component_dependencies = value;
    }

    pub fn custom_metadata(&self) -> Option<&[MetaDataKeyValuePair]> {
        self.custom_metadata.as_deref()
    }

    pub fn set_custom_metadata(&mut self, value: Option<Vec<MetaDataKeyValuePair>>) {
        self.custom_metadata = value;
    }

    pub fn html_strings(&self) -> Option<&[MetaDataKeyStringPair]> {
        self.html_strings.as_deref()
    }

    pub fn set_html_strings(&mut self, value: Option<Vec<MetaDataKeyStringPair>>) {
        self.html_strings = value;
    }

    pub fn image_sources(&self) -> Option<&[MetaDataKeyStringPair]> {
        self.image_sources.as_deref()
    }

    pub fn set_image_sources(&mut self, value: Option<Vec<MetaDataKeyStringPair>>) {
        self.image_sources = value;
    }

    pub fn links(&self) -> Option<&[MetaDataKeyStringPair]> {
        self.links.as_deref()
    }

    pub fn set_links(&mut self, value: Option<Vec<MetaDataKeyStringPair>>) {
        self.links = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn searchable_plain_texts(&self) -> Option<&[MetaDataKeyStringPair]> {
        self.searchable_plain_texts.as_deref()
    }

    pub fn set_searchable_plain_texts(&mut self, value: Option<Vec<MetaDataKeyStringPair>>) {
        self.searchable_plain_texts = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("componentDependencies", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(MetaDataKeyStringPair::create_from_discriminator_value)? {
                m.set_component_dependencies(Some(v));
            }
            Ok(())
        });
        res.insert("customMetadata", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(MetaDataKeyValuePair::create_from_discriminator_value)? {
                m.set_custom_metadata(Some(v));
            }
            Ok(())
        });
        res.insert("htmlStrings", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(MetaDataKeyStringPair::create_from_discriminator_value)? {
                m.set_html_strings(Some(v));
            }
            Ok(())
        });
        res.insert("imageSources", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(MetaDataKeyStringPair::create_from_discriminator_value)? {
                m.set_image_sources(Some(v));
            }
            Ok(())
        });
        res.insert("links", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(MetaDataKeyStringPair::create_from_discriminator_value)? {
                m.set_links(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("searchablePlainTexts", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(MetaDataKeyStringPair::create_from_discriminator_value)? {
                m.set_searchable_plain_texts(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for ServerProcessedContent {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for ServerProcessedContent {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_objects("componentDependencies", self.component_dependencies())?;
        writer.write_objects("customMetadata", self.custom_metadata())?;
        writer.write_objects("htmlStrings", self.html_strings())?;
        writer.write_objects("imageSources", self.image_sources())?;
        writer.write_objects("links", self.links())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_objects("searchablePlainTexts", self.searchable_plain_texts())?;
        writer.write_additional_data(&self.additional_data)
    }
}
