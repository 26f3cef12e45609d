use std::ops::{Deref, DerefMut};

use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter,
};

use crate::enums::{PageLayoutType, PagePromotionType};
use crate::{
    BaseItem, CanvasLayout, ContentTypeInfo, PublicationFacet, ReactionsFacet, TitleArea, WebPartKind,
};

/// A modern SharePoint page.
///
/// The flat `webParts` collection holds every web part on the page; the
/// same parts also appear inside `canvasLayout` when the layout is
/// expanded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitePage {
    base: BaseItem,
    canvas_layout: Option<CanvasLayout>,
    content_type: Option<ContentTypeInfo>,
    page_layout: Option<PageLayoutType>,
    promotion_kind: Option<PagePromotionType>,
    publishing_state: Option<PublicationFacet>,
    reactions: Option<ReactionsFacet>,
    show_comments: Option<bool>,
    show_recommended_pages: Option<bool>,
    thumbnail_web_url: Option<String>,
    title: Option<String>,
    title_area: Option<TitleArea>,
    web_parts: Option<Vec<WebPartKind>>,
}

impl Deref for SitePage {
    type Target = BaseItem;

    fn deref(&self) -> &BaseItem {
        &self.base
    }
}

impl DerefMut for SitePage {
    fn deref_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }
}

impl SitePage {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.sitePage";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn canvas_layout(&self) -> Option<&CanvasLayout> {
        self.canvas_layout.as_ref()
    }

    pub fn set_canvas_layout(&mut self, value: Option<CanvasLayout>) {
        self.canvas_layout = value;
    }

    pub fn content_type(&self) -> Option<&ContentTypeInfo> {
        self.content_type.as_ref()
    }

    pub fn set_content_type(&mut self, value: Option<ContentTypeInfo>) {
        self.content_type = value;
    }

    pub fn page_layout(&self) -> Option<PageLayoutType> {
        self.page_layout
    }

    pub fn set_page_layout(&mut self, value: Option<PageLayoutType>) {
        self.page_layout = value;
    }

    pub fn promotion_kind(&self) -> Option<PagePromotionType> {
        self.promotion_kind
    }

    pub fn set_promotion_kind(&mut self, value: Option<PagePromotionType>) {
        self.promotion_kind = value;
    }

    pub fn publishing_state(&self) -> Option<&PublicationFacet> {
        self.publishing_state.as_ref()
    }

    pub fn set_publishing_state(&mut self, value: Option<PublicationFacet>) {
        self.publishing_state = value;
    }

    pub fn reactions(&self) -> Option<&ReactionsFacet> {
        self.reactions.as_ref()
    }

    pub fn set_reactions(&mut self, value: Option<ReactionsFacet>) {
        self.reactions = value;
    }

    pub fn show_comments(&self) -> Option<bool> {
        self.show_comments
    }

    pub fn set_show_comments(&mut self, value: Option<bool>) {
        self.show_comments = value;
    }

    pub fn show_recommended_pages(&self) -> Option<bool> {
        self.show_recommended_pages
    }

    pub fn set_show_recommended_pages(&mut self, value: Option<bool>) {
        self.show_recommended_pages = value;
    }

    pub fn thumbnail_web_url(&self) -> Option<&str> {
        self.thumbnail_web_url.as_deref()
    }

    pub fn set_thumbnail_web_url(&mut self, value: Option<String>) {
        self.thumbnail_web_url = value;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, value: Option<String>) {
        self.title = value;
    }

    pub fn title_area(&self) -> Option<&TitleArea> {
        self.title_area.as_ref()
    }

    pub fn set_title_area(&mut self, value: Option<TitleArea>) {
        self.title_area = value;
    }

    pub fn web_parts(&self) -> Option<&[WebPartKind]> {
        self.web_parts.as_deref()
    }

    pub fn set_web_parts(&mut self, value: Option<Vec<WebPartKind>>) {
        self.web_parts = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(BaseItem::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("canvasLayout", |m, n| {
            if let Some(v) = n.get_object_value(CanvasLayout::create_from_discriminator_value)? {
                m.set_canvas_layout(Some(v));
            }
            Ok(())
        });
        res.insert("contentType", |m, n| {
            if let Some(v) = n.get_object_value(ContentTypeInfo::create_from_discriminator_value)? {
                m.set_content_type(Some(v));
            }
            Ok(())
        });
        res.insert("pageLayout", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_page_layout(Some(v));
            }
            Ok(())
        });
        res.insert("promotionKind", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_promotion_kind(Some(v));
            }
            Ok(())
        });
        res.insert("publishingState", |m, n| {
            if let Some(v) = n.get_object_value(PublicationFacet::create_from_discriminator_value)? {
                m.set_publishing_state(Some(v));
            }
            Ok(())
        });
        res.insert("reactions", |m, n| {
            if let Some(v) = n.get_object_value(ReactionsFacet::create_from_discriminator_value)? {
                m.set_reactions(Some(v));
            }
            Ok(())
        });
        res.insert("showComments", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_show_comments(Some(v));
            }
            Ok(())
        });
        res.insert("showRecommendedPages", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_show_recommended_pages(Some(v));
            }
            Ok(())
        });
        res.insert("thumbnailWebUrl", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_thumbnail_web_url(Some(v));
            }
            Ok(())
        });
        res.insert("title", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_title(Some(v));
            }
            Ok(())
        });
        res.insert("titleArea", |m, n| {
            if let Some(v) = n.get_object_value(TitleArea::create_from_discriminator_value)? {
                m.set_title_area(Some(v));
            }
            Ok(())
        });
        res.insert("webParts", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(WebPartKind::create_from_discriminator_value)? {
                m.set_web_parts(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for SitePage {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for SitePage {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_object("canvasLayout", self.canvas_layout())?;
        writer.write_object("contentType", self.content_type())?;
        writer.write_enum_value("pageLayout", self.page_layout())?;
        writer.write_enum_value("promotionKind", self.promotion_kind())?;
        writer.write_object("publishingState", self.publishing_state())?;
        writer.write_object("reactions", self.reactions())?;
        writer.write_bool_value("showComments", self.show_comments())?;
        writer.write_bool_value("showRecommendedPages", self.show_recommended_pages())?;
        writer.write_string_value("thumbnailWebUrl", self.thumbnail_web_url())?;
        writer.write_string_value("title", self.title())?;
        writer.write_object("titleArea", self.title_area())?;
        writer.write_objects("webParts", self.web_parts())
    }
}
