use graph_beta_abstractions::{AdditionalDataHolder, Parsable, ParsableFactory};
use graph_beta_json::{deserialize_value, serialize_to_value};
use graph_beta_models::search::{Bookmark, Qna, SearchAnswer, SearchAnswerKind};
use graph_beta_models::{
    BaseItem, BookingCustomer, BookingNamedEntity, BookingPerson, BookingPersonKind, BookingStaffMember,
    CanvasLayout, ConnectedOrganizationMembers, DeviceShellScript, Entity, EntityKind, ExternalSponsors,
    GroupMembers, HorizontalSection, HorizontalSectionColumn, InternalSponsors, LabelDetails,
    ParentLabelDetails, ParentLabelDetailsKind, RequestorManager, SalesOrderLine, SingleUser, SitePage,
    StandardWebPart, TextWebPart, UserSet, UserSetKind, VerticalSection, WebPart, WebPartKind,
};
use serde_json::{json, Value};

fn resolve<T: Parsable>(factory: ParsableFactory<T>, payload: &Value) -> T {
    deserialize_value(payload, factory).unwrap()
}

#[test]
fn entity_kind_resolves_every_bound_type() {
    let names = [
        Entity::ODATA_TYPE,
        BaseItem::ODATA_TYPE,
        SitePage::ODATA_TYPE,
        CanvasLayout::ODATA_TYPE,
        HorizontalSection::ODATA_TYPE,
        HorizontalSectionColumn::ODATA_TYPE,
        VerticalSection::ODATA_TYPE,
        WebPart::ODATA_TYPE,
        StandardWebPart::ODATA_TYPE,
        TextWebPart::ODATA_TYPE,
        BookingNamedEntity::ODATA_TYPE,
        BookingPerson::ODATA_TYPE,
        BookingCustomer::ODATA_TYPE,
        BookingStaffMember::ODATA_TYPE,
        SalesOrderLine::ODATA_TYPE,
        DeviceShellScript::ODATA_TYPE,
        SearchAnswer::ODATA_TYPE,
        Bookmark::ODATA_TYPE,
        Qna::ODATA_TYPE,
    ];
    for name in names {
        let payload = json!({"@odata.type": name, "id": "e-1"});
        let kind = resolve(EntityKind::create_from_discriminator_value, &payload);
        assert_eq!(kind.type_name(), name, "dispatch for {name}");
        assert_eq!(kind.as_entity().id(), Some("e-1"), "id for {name}");
        assert_eq!(kind.as_entity().odata_type(), Some(name));
        assert_eq!(serialize_to_value(&kind).unwrap(), payload, "round trip for {name}");
    }
}

#[test]
fn entity_kind_falls_back_to_entity() {
    for payload in [
        json!({"id": "x"}),
        json!({"@odata.type": null, "id": "x"}),
        json!({"@odata.type": "#microsoft.graph.driveItem", "id": "x", "name": "report.docx"}),
    ] {
        let kind = resolve(EntityKind::create_from_discriminator_value, &payload);
        assert!(matches!(kind, EntityKind::Entity(_)), "{payload}");
        assert_eq!(kind.type_name(), Entity::ODATA_TYPE);
    }

    let payload = json!({"@odata.type": "#microsoft.graph.driveItem", "id": "x", "name": "report.docx"});
    let kind = resolve(EntityKind::create_from_discriminator_value, &payload);
    assert_eq!(kind.additional_data().get("name"), Some(&json!("report.docx")));
    assert_eq!(kind.as_entity().odata_type(), Some("#microsoft.graph.driveItem"));
    assert_eq!(serialize_to_value(&kind).unwrap(), payload);
}

#[test]
fn discriminator_is_case_sensitive() {
    let payload = json!({"@odata.type": "#microsoft.graph.SitePage"});
    let kind = resolve(EntityKind::create_from_discriminator_value, &payload);
    assert!(matches!(kind, EntityKind::Entity(_)));
}

#[test]
fn user_set_kind_table() {
    let cases = [
        (Some(UserSet::ODATA_TYPE), UserSet::ODATA_TYPE),
        (Some(SingleUser::ODATA_TYPE), SingleUser::ODATA_TYPE),
        (Some(GroupMembers::ODATA_TYPE), GroupMembers::ODATA_TYPE),
        (Some(ConnectedOrganizationMembers::ODATA_TYPE), ConnectedOrganizationMembers::ODATA_TYPE),
        (Some(RequestorManager::ODATA_TYPE), RequestorManager::ODATA_TYPE),
        (Some(InternalSponsors::ODATA_TYPE), InternalSponsors::ODATA_TYPE),
        (Some(ExternalSponsors::ODATA_TYPE), ExternalSponsors::ODATA_TYPE),
        (Some("#microsoft.graph.sitePage"), UserSet::ODATA_TYPE),
        (None, UserSet::ODATA_TYPE),
    ];
    for (discriminator, expected) in cases {
        let payload = match discriminator {
            Some(name) => json!({"@odata.type": name, "isBackup": true}),
            None => json!({"isBackup": true}),
        };
        let kind = resolve(UserSetKind::create_from_discriminator_value, &payload);
        assert_eq!(kind.type_name(), expected, "{payload}");
        assert_eq!(kind.as_user_set().is_backup(), Some(true));
    }
}

#[test]
fn web_part_kind_table() {
    let cases = [
        (json!({"@odata.type": WebPart::ODATA_TYPE}), WebPart::ODATA_TYPE),
        (
            json!({"@odata.type": StandardWebPart::ODATA_TYPE, "webPartType": "d1d91016"}),
            StandardWebPart::ODATA_TYPE,
        ),
        (
            json!({"@odata.type": TextWebPart::ODATA_TYPE, "innerHtml": "<p>x</p>"}),
            TextWebPart::ODATA_TYPE,
        ),
        (json!({"@odata.type": "#microsoft.graph.imageWebPart"}), WebPart::ODATA_TYPE),
        (json!({}), WebPart::ODATA_TYPE),
    ];
    for (payload, expected) in cases {
        let kind = resolve(WebPartKind::create_from_discriminator_value, &payload);
        assert_eq!(kind.type_name(), expected, "{payload}");
        assert_eq!(serialize_to_value(&kind).unwrap(), payload);
    }
}

#[test]
fn search_answer_kind_table() {
    let cases = [
        (Some(SearchAnswer::ODATA_TYPE), SearchAnswer::ODATA_TYPE),
        (Some(Bookmark::ODATA_TYPE), Bookmark::ODATA_TYPE),
        (Some(Qna::ODATA_TYPE), Qna::ODATA_TYPE),
        (Some("#microsoft.graph.search.acronym"), SearchAnswer::ODATA_TYPE),
        (None, SearchAnswer::ODATA_TYPE),
    ];
    for (discriminator, expected) in cases {
        let mut payload = json!({"displayName": "Answer"});
        if let Some(name) = discriminator {
            payload["@odata.type"] = json!(name);
        }
        let kind = resolve(SearchAnswerKind::create_from_discriminator_value, &payload);
        assert_eq!(kind.type_name(), expected, "{payload}");
        assert_eq!(kind.as_search_answer().display_name(), Some("Answer"));
    }
}

#[test]
fn booking_person_kind_table() {
    let cases = [
        (Some(BookingPerson::ODATA_TYPE), BookingPerson::ODATA_TYPE),
        (Some(BookingCustomer::ODATA_TYPE), BookingCustomer::ODATA_TYPE),
        (Some(BookingStaffMember::ODATA_TYPE), BookingStaffMember::ODATA_TYPE),
        (Some(BookingNamedEntity::ODATA_TYPE), BookingPerson::ODATA_TYPE),
        (None, BookingPerson::ODATA_TYPE),
    ];
    for (discriminator, expected) in cases {
        let mut payload = json!({"displayName": "Dana", "emailAddress": "dana@contoso.com"});
        if let Some(name) = discriminator {
            payload["@odata.type"] = json!(name);
        }
        let kind = resolve(BookingPersonKind::create_from_discriminator_value, &payload);
        assert_eq!(kind.type_name(), expected, "{payload}");
        assert_eq!(kind.as_booking_person().email_address(), Some("dana@contoso.com"));
        assert_eq!(kind.as_booking_person().display_name(), Some("Dana"));
    }
}

#[test]
fn label_details_kind_table() {
    let cases = [
        (Some(ParentLabelDetails::ODATA_TYPE), ParentLabelDetails::ODATA_TYPE),
        (Some(LabelDetails::ODATA_TYPE), LabelDetails::ODATA_TYPE),
        (Some("#microsoft.graph.sensitivityLabel"), ParentLabelDetails::ODATA_TYPE),
        (None, ParentLabelDetails::ODATA_TYPE),
    ];
    for (discriminator, expected) in cases {
        let mut payload = json!({"name": "Confidential"});
        if let Some(name) = discriminator {
            payload["@odata.type"] = json!(name);
        }
        let kind = resolve(ParentLabelDetailsKind::create_from_discriminator_value, &payload);
        assert_eq!(kind.type_name(), expected, "{payload}");
        assert_eq!(kind.as_parent_label_details().name(), Some("Confidential"));
    }
}

#[test]
fn non_string_discriminator_is_a_type_error() {
    let payload = json!({"@odata.type": 7});
    assert!(deserialize_value(&payload, EntityKind::create_from_discriminator_value).is_err());
}
