//! Graph beta model bindings.
//!
//! Each model reads itself from a [`ParseNode`](graph_beta_abstractions::ParseNode)
//! through a table of field deserializers and writes itself to a
//! [`SerializationWriter`](graph_beta_abstractions::SerializationWriter).
//! Subtypes embed their supertype and extend its table. Polymorphic
//! families are `…Kind` enums resolved from `@odata.type`.
//!
//! ```
//! use graph_beta_models::{SitePage, WebPartKind};
//!
//! let payload = br##"{
//!     "@odata.type": "#microsoft.graph.sitePage",
//!     "title": "Home",
//!     "webParts": [{"@odata.type": "#microsoft.graph.textWebPart", "innerHtml": "<p>hi</p>"}]
//! }"##;
//! let page = graph_beta_json::deserialize(payload, SitePage::create_from_discriminator_value).unwrap();
//! assert_eq!(page.title(), Some("Home"));
//! assert!(matches!(page.web_parts().unwrap()[0], WebPartKind::Text(_)));
//! ```

mod assignment_review_settings;
mod base_item;
mod booking;
mod canvas_layout;
mod device_shell_script;
mod entity;
mod entity_kind;
pub mod enums;
mod identity;
mod item_reference;
mod label_details;
mod page_facets;
mod sales_order_line;
pub mod search;
mod server_processed_content;
mod site_page;
mod title_area;
mod user_set;
mod vpn_traffic_rule;
mod web_part;

pub use assignment_review_settings::AssignmentReviewSettings;
pub use base_item::BaseItem;
pub use booking::{
    BookingCustomer, BookingNamedEntity, BookingPerson, BookingPersonKind, BookingStaffMember,
    BookingWorkHours, BookingWorkTimeSlot,
};
pub use canvas_layout::{CanvasLayout, HorizontalSection, HorizontalSectionColumn, VerticalSection};
pub use device_shell_script::DeviceShellScript;
pub use entity::{Entity, Json};
pub use entity_kind::EntityKind;
pub use identity::{Identity, IdentitySet};
pub use item_reference::ItemReference;
pub use label_details::{LabelDetails, ParentLabelDetails, ParentLabelDetailsKind};
pub use page_facets::{ContentTypeInfo, PublicationFacet, ReactionsFacet};
pub use sales_order_line::SalesOrderLine;
pub use server_processed_content::{MetaDataKeyStringPair, MetaDataKeyValuePair, ServerProcessedContent};
pub use site_page::SitePage;
pub use title_area::TitleArea;
pub use user_set::{
    ConnectedOrganizationMembers, ExternalSponsors, GroupMembers, InternalSponsors, RequestorManager,
    SingleUser, UserSet, UserSetKind,
};
pub use vpn_traffic_rule::{IPv4Range, NumberRange, VpnTrafficRule};
pub use web_part::{StandardWebPart, TextWebPart, WebPart, WebPartData, WebPartKind};
