//! Dispatch over every bound entity type.

use graph_beta_abstractions::{
    AdditionalData, AdditionalDataHolder, Parsable, ParseNode, SerializationError, SerializationWriter,
};

use crate::search::{Bookmark, Qna, SearchAnswer};
use crate::{
    BaseItem, BookingCustomer, BookingNamedEntity, BookingPerson, BookingStaffMember, CanvasLayout,
    DeviceShellScript, Entity, HorizontalSection, HorizontalSectionColumn, SalesOrderLine, SitePage,
    StandardWebPart, TextWebPart, VerticalSection, WebPart,
};

/// Any entity, resolved from `@odata.type` across all families at once.
///
/// Useful where a payload may hold any resource, such as a delta feed.
/// Names outside the bound set fall back to a plain [`Entity`] and keep
/// their fields in additional data.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Entity(Entity),
    BaseItem(BaseItem),
    SitePage(SitePage),
    CanvasLayout(CanvasLayout),
    HorizontalSection(HorizontalSection),
    HorizontalSectionColumn(HorizontalSectionColumn),
    VerticalSection(VerticalSection),
    WebPart(WebPart),
    StandardWebPart(StandardWebPart),
    TextWebPart(TextWebPart),
    BookingNamedEntity(BookingNamedEntity),
    BookingPerson(BookingPerson),
    BookingCustomer(BookingCustomer),
    BookingStaffMember(BookingStaffMember),
    SalesOrderLine(SalesOrderLine),
    DeviceShellScript(DeviceShellScript),
    SearchAnswer(SearchAnswer),
    Bookmark(Bookmark),
    Qna(Qna),
}

impl Default for EntityKind {
    fn default() -> Self {
        EntityKind::Entity(Entity::default())
    }
}

impl EntityKind {
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, SerializationError> {
        let discriminator = node.get_discriminator_value()?;
        Ok(match discriminator.as_deref() {
            Some(BaseItem::ODATA_TYPE) => EntityKind::BaseItem(BaseItem::default()),
            Some(SitePage::ODATA_TYPE) => EntityKind::SitePage(SitePage::default()),
            Some(CanvasLayout::ODATA_TYPE) => EntityKind::CanvasLayout(CanvasLayout::default()),
            Some(HorizontalSection::ODATA_TYPE) => EntityKind::HorizontalSection(HorizontalSection::default()),
            Some(HorizontalSectionColumn::ODATA_TYPE) => EntityKind::HorizontalSectionColumn(HorizontalSectionColumn::default()),
            Some(VerticalSection::ODATA_TYPE) => EntityKind::VerticalSection(VerticalSection::default()),
            Some(WebPart::ODATA_TYPE) => EntityKind::WebPart(WebPart::default()),
            Some(StandardWebPart::ODATA_TYPE) => EntityKind::StandardWebPart(StandardWebPart::default()),
            Some(TextWebPart::ODATA_TYPE) => EntityKind::TextWebPart(TextWebPart::default()),
            Some(BookingNamedEntity::ODATA_TYPE) => EntityKind::BookingNamedEntity(BookingNamedEntity::default()),
            Some(BookingPerson::ODATA_TYPE) => EntityKind::BookingPerson(BookingPerson::default()),
            Some(BookingCustomer::ODATA_TYPE) => EntityKind::BookingCustomer(BookingCustomer::default()),
            Some(BookingStaffMember::ODATA_TYPE) => EntityKind::BookingStaffMember(BookingStaffMember::default()),
            Some(SalesOrderLine::ODATA_TYPE) => EntityKind::SalesOrderLine(SalesOrderLine::default()),
            Some(DeviceShellScript::ODATA_TYPE) => EntityKind::DeviceShellScript(DeviceShellScript::default()),
            Some(SearchAnswer::ODATA_TYPE) => EntityKind::SearchAnswer(SearchAnswer::default()),
            Some(Bookmark::ODATA_TYPE) => EntityKind::Bookmark(Bookmark::default()),
            Some(Qna::ODATA_TYPE) => EntityKind::Qna(Qna::default()),
            Some(Entity::ODATA_TYPE) => EntityKind::Entity(Entity::default()),
            other => {
                tracing::debug!(discriminator = ?other, "unrecognized entity type, using base");
                EntityKind::Entity(Entity::default())
            }
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            EntityKind::Entity(_) => Entity::ODATA_TYPE,
            EntityKind::BaseItem(_) => BaseItem::ODATA_TYPE,
            EntityKind::SitePage(_) => SitePage::ODATA_TYPE,
            EntityKind::CanvasLayout(_) => CanvasLayout::ODATA_TYPE,
            EntityKind::HorizontalSection(_) => HorizontalSection::ODATA_TYPE,
            EntityKind::HorizontalSectionColumn(_) => HorizontalSectionColumn::ODATA_TYPE,
            EntityKind::VerticalSection(_) => VerticalSection::ODATA_TYPE,
            EntityKind::WebPart(_) => WebPart::ODATA_TYPE,
            EntityKind::StandardWebPart(_) => StandardWebPart::ODATA_TYPE,
            EntityKind::TextWebPart(_) => TextWebPart::ODATA_TYPE,
            EntityKind::BookingNamedEntity(_) => BookingNamedEntity::ODATA_TYPE,
            EntityKind::BookingPerson(_) => BookingPerson::ODATA_TYPE,
            EntityKind::BookingCustomer(_) => BookingCustomer::ODATA_TYPE,
            EntityKind::BookingStaffMember(_) => BookingStaffMember::ODATA_TYPE,
            EntityKind::SalesOrderLine(_) => SalesOrderLine::ODATA_TYPE,
            EntityKind::DeviceShellScript(_) => DeviceShellScript::ODATA_TYPE,
            EntityKind::SearchAnswer(_) => SearchAnswer::ODATA_TYPE,
            EntityKind::Bookmark(_) => Bookmark::ODATA_TYPE,
            EntityKind::Qna(_) => Qna::ODATA_TYPE,
        }
    }

    pub fn as_entity(&self) -> &Entity {
        match self {
            EntityKind::Entity(v) => v,
            EntityKind::BaseItem(v) => &**v,
            EntityKind::SitePage(v) => &***v,
            EntityKind::CanvasLayout(v) => &**v,
            EntityKind::HorizontalSection(v) => &**v,
            EntityKind::HorizontalSectionColumn(v) => &**v,
            EntityKind::VerticalSection(v) => &**v,
            EntityKind::WebPart(v) => &**v,
            EntityKind::StandardWebPart(v) => &***v,
            EntityKind::TextWebPart(v) => &***v,
            EntityKind::BookingNamedEntity(v) => &**v,
            EntityKind::BookingPerson(v) => &***v,
            EntityKind::BookingCustomer(v) => &****v,
            EntityKind::BookingStaffMember(v) => &****v,
            EntityKind::SalesOrderLine(v) => &**v,
            EntityKind::DeviceShellScript(v) => &**v,
            EntityKind::SearchAnswer(v) => &**v,
            EntityKind::Bookmark(v) => &***v,
            EntityKind::Qna(v) => &***v,
        }
    }
}

impl AdditionalDataHolder for EntityKind {
    fn additional_data(&self) -> &AdditionalData {
        self.as_entity().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        match self {
            EntityKind::Entity(v) => v.additional_data_mut(),
            EntityKind::BaseItem(v) => v.additional_data_mut(),
            EntityKind::SitePage(v) => v.additional_data_mut(),
            EntityKind::CanvasLayout(v) => v.additional_data_mut(),
            EntityKind::HorizontalSection(v) => v.additional_data_mut(),
            EntityKind::HorizontalSectionColumn(v) => v.additional_data_mut(),
            EntityKind::VerticalSection(v) => v.additional_data_mut(),
            EntityKind::WebPart(v) => v.additional_data_mut(),
            EntityKind::StandardWebPart(v) => v.additional_data_mut(),
            EntityKind::TextWebPart(v) => v.additional_data_mut(),
            EntityKind::BookingNamedEntity(v) => v.additional_data_mut(),
            EntityKind::BookingPerson(v) => v.additional_data_mut(),
            EntityKind::BookingCustomer(v) => v.additional_data_mut(),
            EntityKind::BookingStaffMember(v) => v.additional_data_mut(),
            EntityKind::SalesOrderLine(v) => v.additional_data_mut(),
            EntityKind::DeviceShellScript(v) => v.additional_data_mut(),
            EntityKind::SearchAnswer(v) => v.additional_data_mut(),
            EntityKind::Bookmark(v) => v.additional_data_mut(),
            EntityKind::Qna(v) => v.additional_data_mut(),
        }
    }
}

impl Parsable for EntityKind {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        match self {
            EntityKind::Entity(v) => v.assign_field_values(node),
            EntityKind::BaseItem(v) => v.assign_field_values(node),
            EntityKind::SitePage(v) => v.assign_field_values(node),
            EntityKind::CanvasLayout(v) => v.assign_field_values(node),
            EntityKind::HorizontalSection(v) => v.assign_field_values(node),
            EntityKind::HorizontalSectionColumn(v) => v.assign_field_values(node),
            EntityKind::VerticalSection(v) => v.assign_field_values(node),
            EntityKind::WebPart(v) => v.assign_field_values(node),
            EntityKind::StandardWebPart(v) => v.assign_field_values(node),
            EntityKind::TextWebPart(v) => v.assign_field_values(node),
            EntityKind::BookingNamedEntity(v) => v.assign_field_values(node),
            EntityKind::BookingPerson(v) => v.assign_field_values(node),
            EntityKind::BookingCustomer(v) => v.assign_field_values(node),
            EntityKind::BookingStaffMember(v) => v.assign_field_values(node),
            EntityKind::SalesOrderLine(v) => v.assign_field_values(node),
            EntityKind::DeviceShellScript(v) => v.assign_field_values(node),
            EntityKind::SearchAnswer(v) => v.assign_field_values(node),
            EntityKind::Bookmark(v) => v.assign_field_values(node),
            EntityKind::Qna(v) => v.assign_field_values(node),
        }
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        match self {
            EntityKind::Entity(v) => v.serialize(writer),
            EntityKind::BaseItem(v) => v.serialize(writer),
            EntityKind::SitePage(v) => v.serialize(writer),
            EntityKind::CanvasLayout(v) => v.serialize(writer),
            EntityKind::HorizontalSection(v) => v.serialize(writer),
            EntityKind::HorizontalSectionColumn(v) => v.serialize(writer),
            EntityKind::VerticalSection(v) => v.serialize(writer),
            EntityKind::WebPart(v) => v.serialize(writer),
            EntityKind::StandardWebPart(v) => v.serialize(writer),
            EntityKind::TextWebPart(v) => v.serialize(writer),
            EntityKind::BookingNamedEntity(v) => v.serialize(writer),
            EntityKind::BookingPerson(v) => v.serialize(writer),
            EntityKind::BookingCustomer(v) => v.serialize(writer),
            EntityKind::BookingStaffMember(v) => v.serialize(writer),
            EntityKind::SalesOrderLine(v) => v.serialize(writer),
            EntityKind::DeviceShellScript(v) => v.serialize(writer),
            EntityKind::SearchAnswer(v) => v.serialize(writer),
            EntityKind::Bookmark(v) => v.serialize(writer),
            EntityKind::Qna(v) => v.serialize(writer),
        }
    }
}
