use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

use crate::enums::{TitleAreaLayoutType, TitleAreaTextAlignmentType};
use crate::ServerProcessedContent;

/// Banner at the top of a site page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleArea {
    additional_data: AdditionalData,
    alternative_text: Option<String>,
    enable_gradient_effect: Option<bool>,
    image_web_url: Option<String>,
    layout: Option<TitleAreaLayoutType>,
    odata_type: Option<String>,
    server_processed_content: Option<ServerProcessedContent>,
    show_author: Option<bool>,
    show_published_date: Option<bool>,
    show_text_block_above_title: Option<bool>,
    text_above_title: Option<String>,
    text_alignment: Option<TitleAreaTextAlignmentType>,
}

impl TitleArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn alternative_text(&self) -> Option<&str> {
        self.alternative_text.as_deref()
    }

    pub fn set_alternative_text(&mut self, value: Option<String>) {
        self.alternative_text = value;
    }

    pub fn enable_gradient_effect(&self) -> Option<bool> {
        self.enable_gradient_effect
    }

    pub fn set_enable_gradient_effect(&mut self, value: Option<bool>) {
        self.enable_gradient_effect = value;
    }

    pub fn image_web_url(&self) -> Option<&str> {
        self.image_web_url.as_deref()
    }

    pub fn set_image_web_url(&mut self, value: Option<String>) {
        self.image_web_url = value;
    }

    pub fn layout(&self) -> Option<TitleAreaLayoutType> {
        self.layout
    }

    pub fn set_layout(&mut self, value: Option<TitleAreaLayoutType>) {
        self.layout = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn server_processed_content(&self) -> Option<&ServerProcessedContent> {
        self.server_processed_content.as_ref()
    }

    pub fn set_server_processed_content(&mut self, value: Option<ServerProcessedContent>) {
        self.server_processed_content = value;
    }

    pub fn show_author(&self) -> Option<bool> {
        self.show_author
    }

    pub fn set_show_author(&mut self, value: Option<bool>) {
        self.show_author = value;
    }

    pub fn show_published_date(&self) -> Option<bool> {
        self.show_published_date
    }

    pub fn set_show_published_date(&mut self, value: Option<bool>) {
        self.show_published_date = value;
    }

    pub fn show_text_block_above_title(&self) -> Option<bool> {
        self.show_text_block_above_title
    }

    pub fn set_show_text_block_above_title(&mut self, value: Option<bool>) {
        self.show_text_block_above_title = value;
    }

    pub fn text_above_title(&self) -> Option<&str> {
        self.text_above_title.as_deref()
    }

    pub fn set_text_above_title(&mut self, value: Option<String>) {
        self.text_above_title = value;
    }

    pub fn text_alignment(&self) -> Option<TitleAreaTextAlignmentType> {
        self.text_alignment
    }

    pub fn set_text_alignment(&mut self, value: Option<TitleAreaTextAlignmentType>) {
        self.text_alignment = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("alternativeText", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_alternative_text(Some(v));
            }
            Ok(())
        });
        res.insert("enableGradientEffect", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_enable_gradient_effect(Some(v));
            }
            Ok(())
        });
        res.insert("imageWebUrl", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_image_web_url(Some(v));
            }
            Ok(())
        });
        res.insert("layout", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_layout(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("serverProcessedContent", |m, n| {
            if let Some(v) = n.get_object_value(ServerProcessedContent::create_from_discriminator_value)? {
                m.set_server_processed_content(Some(v));
            }
            Ok(())
        });
        res.insert("showAuthor", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_show_author(Some(v));
            }
            Ok(())
        });
        res.insert("showPublishedDate", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_show_published_date(Some(v));
            }
            Ok(())
        });
        res.insert("showTextBlockAboveTitle", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_show_text_block_above_title(Some(v));
            }
            Ok(())
        });
        res.insert("textAboveTitle", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_text_above_title(Some(v));
            }
            Ok(())
        });
        res.insert("textAlignment", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_text_alignment(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for TitleArea {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for TitleArea {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("alternativeText", self.alternative_text())?;
        writer.write_bool_value("enableGradientEffect", self.enable_gradient_effect())?;
        writer.write_string_value("imageWebUrl", self.image_web_url())?;
        writer.write_enum_value("layout", self.layout())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_object("serverProcessedContent", self.server_processed_content())?;
        writer.write_bool_value("showAuthor", self.show_author())?;
        writer.write_bool_value("showPublishedDate", self.show_published_date())?;
        writer.write_bool_value("showTextBlockAboveTitle", self.show_text_block_above_title())?;
        writer.write_string_value("textAboveTitle", self.text_above_title())?;
        writer.write_enum_value("textAlignment", self.text_alignment())?;
        writer.write_additional_data(&self.additional_data)
    }
}
