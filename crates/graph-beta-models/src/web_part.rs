//! Web parts placed on a site page and their polymorphic family.

use std::ops::{Deref, DerefMut};

use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

use crate::{Entity, Json, ServerProcessedContent};

// ── WebPart ───────────────────────────────────────────────────────────────

/// Abstract base of the web part family; it binds no fields of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPart {
    base: Entity,
}

impl Deref for WebPart {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for WebPart {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl WebPart {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.webPart";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base)
    }
}

impl AdditionalDataHolder for WebPart {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for WebPart {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)
    }
}

// ── StandardWebPart ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardWebPart {
    base: WebPart,
    data: Option<WebPartData>,
    web_part_type: Option<String>,
}

impl Deref for StandardWebPart {
    type Target = WebPart;

    fn deref(&self) -> &WebPart {
        &self.base
    }
}

impl DerefMut for StandardWebPart {
    fn deref_mut(&mut self) -> &mut WebPart {
        &mut self.base
    }
}

impl StandardWebPart {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.standardWebPart";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn data(&self) -> Option<&WebPartData> {
        self.data.as_ref()
    }

    pub fn set_data(&mut self, value: Option<WebPartData>) {
        self.data = value;
    }

    /// Component id of the client-side web part.
    pub fn web_part_type(&self) -> Option<&str> {
        self.web_part_type.as_deref()
    }

    pub fn set_web_part_type(&mut self, value: Option<String>) {
        self.web_part_type = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(WebPart::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("data", |m, n| {
            if let Some(v) = n.get_object_value(WebPartData::create_from_discriminator_value)? {
                m.set_data(Some(v));
            }
            Ok(())
        });
        res.insert("webPartType", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_web_part_type(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for StandardWebPart {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for StandardWebPart {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_object("data", self.data())?;
        writer.write_string_value("webPartType", self.web_part_type())
    }
}

// ── TextWebPart ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextWebPart {
    base: WebPart,
    inner_html: Option<String>,
}

impl Deref for TextWebPart {
    type Target = WebPart;

    fn deref(&self) -> &WebPart {
        &self.base
    }
}

impl DerefMut for TextWebPart {
    fn deref_mut(&mut self) -> &mut WebPart {
        &mut self.base
    }
}

impl TextWebPart {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.textWebPart";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn inner_html(&self) -> Option<&str> {
        self.inner_html.as_deref()
    }

    pub fn set_inner_html(&mut self, value: Option<String>) {
        self.inner_html = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(WebPart::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("innerHtml", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_inner_html(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for TextWebPart {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for TextWebPart {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_string_value("innerHtml", self.inner_html())
    }
}

// ── WebPartKind ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum WebPartKind {
    WebPart(WebPart),
    Standard(StandardWebPart),
    Text(TextWebPart),
}

impl Default for WebPartKind {
    fn default() -> Self {
        WebPartKind::WebPart(WebPart::default())
    }
}

impl WebPartKind {
    /// Picks the variant named by `@odata.type`; absent or unknown names
    /// yield a plain [`WebPart`].
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, SerializationError> {
        let discriminator = node.get_discriminator_value()?;
        Ok(match discriminator.as_deref() {
            Some(StandardWebPart::ODATA_TYPE) => WebPartKind::Standard(StandardWebPart::default()),
            Some(TextWebPart::ODATA_TYPE) => WebPartKind::Text(TextWebPart::default()),
            Some(WebPart::ODATA_TYPE) => WebPartKind::WebPart(WebPart::default()),
            other => {
                tracing::debug!(discriminator = ?other, "unrecognized web part type, using base");
                WebPartKind::WebPart(WebPart::default())
            }
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            WebPartKind::WebPart(_) => WebPart::ODATA_TYPE,
            WebPartKind::Standard(_) => StandardWebPart::ODATA_TYPE,
            WebPartKind::Text(_) => TextWebPart::ODATA_TYPE,
        }
    }

    pub fn as_web_part(&self) -> &WebPart {
        match self {
            WebPartKind::WebPart(v) => v,
            WebPartKind::Standard(v) => &v.base,
            WebPartKind::Text(v) => &v.base,
        }
    }
}

impl AdditionalDataHolder for WebPartKind {
    fn additional_data(&self) -> &AdditionalData {
        match self {
            WebPartKind::WebPart(v) => v.additional_data(),
            WebPartKind::Standard(v) => v.additional_data(),
            WebPartKind::Text(v) => v.additional_data(),
        }
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        match self {
            WebPartKind::WebPart(v) => v.additional_data_mut(),
            WebPartKind::Standard(v) => v.additional_data_mut(),
            WebPartKind::Text(v) => v.additional_data_mut(),
        }
    }
}

impl Parsable for WebPartKind {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        match self {
            WebPartKind::WebPart(v) => v.assign_field_values(node),
            WebPartKind::Standard(v) => v.assign_field_values(node),
            WebPartKind::Text(v) => v.assign_field_values(node),
        }
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        match self {
            WebPartKind::WebPart(v) => v.serialize(writer),
            WebPartKind::Standard(v) => v.serialize(writer),
            WebPartKind::Text(v) => v.serialize(writer),
        }
    }
}

// ── WebPartData ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPartData {
    additional_data: AdditionalData,
    audiences: Option<Vec<String>>,
    data_version: Option<String>,
    description: Option<String>,
    odata_type: Option<String>,
    properties: Option<Json>,
    server_processed_content: Option<ServerProcessedContent>,
    title: Option<String>,
}

impl WebPartData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn audiences(&self) -> Option<&[String]> {
        self.audiences.as_deref()
    }

    pub fn set_audiences(&mut self, value: Option<Vec<String>>) {
        self.audiences = value;
    }

    pub fn data_version(&self) -> Option<&str> {
        self.data_version.as_deref()
    }

    pub fn set_data_version(&mut self, value: Option<String>) {
        self.data_version = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn properties(&self) -> Option<&Json> {
        self.properties.as_ref()
    }

    pub fn set_properties(&mut self, value: Option<Json>) {
        self.properties = value;
    }

    pub fn server_processed_content(&self) -> Option<&ServerProcessedContent> {
        self.server_processed_content.as_ref()
    }

    pub fn set_server_processed_content(&mut self, value: Option<ServerProcessedContent>) {
        self.server_processed_content = value;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, value: Option<String>) {
        self.title = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("audiences", |m, n| {
            if let Some(v) = n.get_collection_of_primitive_values()? {
                m.set_audiences(Some(v));
            }
            Ok(())
        });
        res.insert("dataVersion", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_data_version(Some(v));
            }
            Ok(())
        });
        res.insert("description", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_description(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("properties", |m, n| {
            if let Some(v) = n.get_object_value(Json::create_from_discriminator_value)? {
                m.set_properties(Some(v));
            }
            Ok(())
        });
        res.insert("serverProcessedContent", |m, n| {
            if let Some(v) = n.get_object_value(ServerProcessedContent::create_from_discriminator_value)? {
                m.set_server_processed_content(Some(v));
            }
            Ok(())
        });
        res.insert("title", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_title(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for WebPartData {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for WebPartData {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_collection_of_string_values("audiences", self.audiences())?;
        writer.write_string_value("dataVersion", self.data_version())?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_object("properties", self.properties())?;
        writer.write_object("serverProcessedContent", self.server_processed_content())?;
        writer.write_string_value("title", self.title())?;
        writer.write_additional_data(&self.additional_data)
    }
}
