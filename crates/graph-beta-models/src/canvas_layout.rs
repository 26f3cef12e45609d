//! Section layout of a modern page: horizontal sections split into columns,
//! plus an optional vertical section on the side.

use std::ops::{Deref, DerefMut};

use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter,
};

use crate::enums::{HorizontalSectionLayoutType, SectionEmphasisType};
use crate::{Entity, WebPartKind};

// ── CanvasLayout ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasLayout {
    base: Entity,
    horizontal_sections: Option<Vec<HorizontalSection>>,
    vertical_section: Option<VerticalSection>,
}

impl Deref for CanvasLayout {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for CanvasLayout {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl CanvasLayout {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.canvasLayout";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn horizontal_sections(&self) -> Option<&[HorizontalSection]> {
        self.horizontal_sections.as_deref()
    }

    pub fn set_horizontal_sections(&mut self, value: Option<Vec<HorizontalSection>>) {
        self.horizontal_sections = value;
    }

    pub fn vertical_section(&self) -> Option<&VerticalSection> {
        self.vertical_section.as_ref()
    }

    pub fn set_vertical_section(&mut self, value: Option<VerticalSection>) {
        self.vertical_section = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("horizontalSections", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(HorizontalSection::create_from_discriminator_value)? {
                m.set_horizontal_sections(Some(v));
            }
            Ok(())
        });
        res.insert("verticalSection", |m, n| {
            if let Some(v) = n.get_object_value(VerticalSection::create_from_discriminator_value)? {
                m.set_vertical_section(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for CanvasLayout {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for CanvasLayout {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_objects("horizontalSections", self.horizontal_sections())?;
        writer.write_object("verticalSection", self.vertical_section())
    }
}

// ── HorizontalSection ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSection {
    base: Entity,
    columns: Option<Vec<HorizontalSectionColumn>>,
    emphasis: Option<SectionEmphasisType>,
    layout: Option<HorizontalSectionLayoutType>,
}

impl Deref for HorizontalSection {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for HorizontalSection {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl HorizontalSection {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.horizontalSection";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn columns(&self) -> Option<&[HorizontalSectionColumn]> {
        self.columns.as_deref()
    }

    pub fn set_columns(&mut self, value: Option<Vec<HorizontalSectionColumn>>) {
        self.columns = value;
    }

    pub fn emphasis(&self) -> Option<SectionEmphasisType> {
        self.emphasis
    }

    pub fn set_emphasis(&mut self, value: Option<SectionEmphasisType>) {
        self.emphasis = value;
    }

    pub fn layout(&self) -> Option<HorizontalSectionLayoutType> {
        self.layout
    }

    pub fn set_layout(&mut self, value: Option<HorizontalSectionLayoutType>) {
        self.layout = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("columns", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(HorizontalSectionColumn::create_from_discriminator_value)? {
                m.set_columns(Some(v));
            }
            Ok(())
        });
        res.insert("emphasis", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_emphasis(Some(v));
            }
            Ok(())
        });
        res.insert("layout", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_layout(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for HorizontalSection {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for HorizontalSection {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_objects("columns", self.columns())?;
        writer.write_enum_value("emphasis", self.emphasis())?;
        writer.write_enum_value("layout", self.layout())
    }
}

// ── HorizontalSectionColumn ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSectionColumn {
    base: Entity,
    webparts: Option<Vec<WebPartKind>>,
    width: Option<i32>,
}

impl Deref for HorizontalSectionColumn {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for HorizontalSectionColumn {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl HorizontalSectionColumn {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.horizontalSectionColumn";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn webparts(&self) -> Option<&[WebPartKind]> {
        self.webparts.as_deref()
    }

    pub fn set_webparts(&mut self, value: Option<Vec<WebPartKind>>) {
        self.webparts = value;
    }

    /// Column width as a fraction of twelve.
    pub fn width(&self) -> Option<i32> {
        self.width
    }

    pub fn set_width(&mut self, value: Option<i32>) {
        self.width = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("webparts", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(WebPartKind::create_from_discriminator_value)? {
                m.set_webparts(Some(v));
            }
            Ok(())
        });
        res.insert("width", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_width(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for HorizontalSectionColumn {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for HorizontalSectionColumn {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_objects("webparts", self.webparts())?;
        writer.write_int32_value("width", self.width())
    }
}

// ── VerticalSection ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalSection {
    base: Entity,
    emphasis: Option<SectionEmphasisType>,
    webparts: Option<Vec<WebPartKind>>,
}

impl Deref for VerticalSection {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for VerticalSection {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl VerticalSection {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.verticalSection";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn emphasis(&self) -> Option<SectionEmphasisType> {
        self.emphasis
    }

    pub fn set_emphasis(&mut self, value: Option<SectionEmphasisType>) {
        self.emphasis = value;
    }

    pub fn webparts(&self) -> Option<&[WebPartKind]> {
        self.webparts.as_deref()
    }

    pub fn set_webparts(&mut self, value: Option<Vec<WebPartKind>>) {
        self.webparts = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("emphasis", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_emphasis(Some(v));
            }
            Ok(())
        });
        res.insert("webparts", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(WebPartKind::create_from_discriminator_value)? {
                m.set_webparts(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for VerticalSection {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for VerticalSection {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_enum_value("emphasis", self.emphasis())?;
        writer.write_objects("webparts", self.webparts())
    }
}
