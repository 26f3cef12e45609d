use graph_beta_abstractions::{AdditionalDataHolder, FieldDeserializers, Parsable};
use graph_beta_json::{deserialize, deserialize_value, serialize, serialize_to_value};
use graph_beta_models::enums::{
    HorizontalSectionLayoutType, PageLayoutType, PagePromotionType, SectionEmphasisType, TitleAreaLayoutType,
};
use graph_beta_models::search::{Bookmark, SearchAnswer};
use graph_beta_models::{
    AssignmentReviewSettings, BaseItem, BookingCustomer, BookingNamedEntity, BookingPerson, BookingPersonKind,
    BookingStaffMember, CanvasLayout, DeviceShellScript, Entity, EntityKind, HorizontalSection, LabelDetails,
    ParentLabelDetails, SalesOrderLine, SitePage, TextWebPart, UserSet, VpnTrafficRule, WebPart, WebPartKind,
};
use serde_json::{json, Value};

fn site_page_payload() -> Value {
    json!({
        "id": "page-1",
        "@odata.type": "#microsoft.graph.sitePage",
        "createdBy": {"user": {"displayName": "Ada", "id": "u-1"}},
        "createdDateTime": "2024-02-01T09:00:00Z",
        "eTag": "\"{A1B2},3\"",
        "lastModifiedDateTime": "2024-02-03T17:45:30-05:00",
        "name": "Home.aspx",
        "parentReference": {"siteId": "contoso.sharepoint.com,1,2"},
        "webUrl": "https://contoso.sharepoint.com/SitePages/Home.aspx",
        "canvasLayout": {
            "horizontalSections": [{
                "id": "1",
                "emphasis": "soft",
                "layout": "twoColumns",
                "columns": [
                    {
                        "id": "1",
                        "width": 8,
                        "webparts": [
                            {"@odata.type": "#microsoft.graph.textWebPart", "id": "tw-1", "innerHtml": "<h2>Welcome</h2>"}
                        ]
                    },
                    {
                        "id": "2",
                        "width": 4,
                        "webparts": [{
                            "@odata.type": "#microsoft.graph.standardWebPart",
                            "id": "sw-1",
                            "webPartType": "daf0b71c-6de8-4ef7-b511-faae7c388708",
                            "data": {
                                "dataVersion": "1.0",
                                "title": "Quick links",
                                "audiences": ["all-staff"],
                                "properties": {"layoutId": "CompactCard", "items": [{"title": "Payroll"}]},
                                "serverProcessedContent": {
                                    "htmlStrings": [{"key": "caption", "value": "Links"}],
                                    "searchablePlainTexts": []
                                }
                            }
                        }]
                    }
                ]
            }],
            "verticalSection": {"id": "v", "emphasis": "none"}
        },
        "pageLayout": "article",
        "promotionKind": "newsPost",
        "publishingState": {"level": "published", "versionId": "3.0"},
        "reactions": {"commentCount": 2, "likeCount": 17, "shareCount": 0},
        "showComments": true,
        "showRecommendedPages": false,
        "title": "Welcome home",
        "titleArea": {
            "enableGradientEffect": true,
            "layout": "imageAndTitle",
            "textAlignment": "left",
            "showAuthor": true
        },
        "contentType": {"id": "0x0101009D1CB255DA76424F860D91F20E6C4118", "name": "Site Page"},
        "siteDesignVersion": 4,
        "pageAnalytics@odata.navigationLink": "https://graph.microsoft.com/beta/analytics"
    })
}

#[test]
fn site_page_round_trip_preserves_payload() {
    let payload = site_page_payload();
    let page = deserialize_value(&payload, SitePage::create_from_discriminator_value).unwrap();

    assert_eq!(page.id(), Some("page-1"));
    assert_eq!(page.name(), Some("Home.aspx"));
    assert_eq!(page.title(), Some("Welcome home"));
    assert_eq!(page.page_layout(), Some(PageLayoutType::Article));
    assert_eq!(page.promotion_kind(), Some(PagePromotionType::NewsPost));
    assert_eq!(page.reactions().unwrap().like_count(), Some(17));
    assert_eq!(page.title_area().unwrap().layout(), Some(TitleAreaLayoutType::ImageAndTitle));

    let layout = page.canvas_layout().unwrap();
    let section = &layout.horizontal_sections().unwrap()[0];
    assert_eq!(section.layout(), Some(HorizontalSectionLayoutType::TwoColumns));
    assert_eq!(section.emphasis(), Some(SectionEmphasisType::Soft));
    let columns = section.columns().unwrap();
    assert_eq!(columns[0].width(), Some(8));
    match &columns[0].webparts().unwrap()[0] {
        WebPartKind::Text(text) => assert_eq!(text.inner_html(), Some("<h2>Welcome</h2>")),
        other => panic!("expected text web part, got {other:?}"),
    }
    match &columns[1].webparts().unwrap()[0] {
        WebPartKind::Standard(part) => {
            let data = part.data().unwrap();
            assert_eq!(data.title(), Some("Quick links"));
            assert_eq!(
                data.properties().unwrap().additional_data().get("layoutId"),
                Some(&json!("CompactCard"))
            );
        }
        other => panic!("expected standard web part, got {other:?}"),
    }
    assert_eq!(
        layout.vertical_section().unwrap().emphasis(),
        Some(SectionEmphasisType::None)
    );

    assert_eq!(page.additional_data().len(), 2);
    assert_eq!(page.additional_data().get("siteDesignVersion"), Some(&json!(4)));

    assert_eq!(serialize_to_value(&page).unwrap(), payload);
}

#[test]
fn site_page_survives_byte_round_trip() {
    let bytes = serde_json::to_vec(&site_page_payload()).unwrap();
    let page = deserialize(&bytes, SitePage::create_from_discriminator_value).unwrap();
    let written = serialize(&page).unwrap();
    let again = deserialize(&written, SitePage::create_from_discriminator_value).unwrap();
    assert_eq!(again, page);
}

#[test]
fn site_page_through_entity_kind_matches_direct_read() {
    let payload = site_page_payload();
    let direct = deserialize_value(&payload, SitePage::create_from_discriminator_value).unwrap();
    let kind = deserialize_value(&payload, EntityKind::create_from_discriminator_value).unwrap();
    assert_eq!(kind, EntityKind::SitePage(direct));
}

#[test]
fn unmapped_fields_keep_their_json_shape() {
    let payload = json!({
        "id": "x",
        "nested": {"a": [1, 2.5, null, "s"], "b": {"c": false}},
        "nothing": null
    });
    let entity = deserialize_value(&payload, Entity::create_from_discriminator_value).unwrap();
    assert_eq!(entity.additional_data().get("nested"), Some(&payload["nested"]));
    assert_eq!(entity.additional_data().get("nothing"), Some(&Value::Null));
    assert_eq!(serialize_to_value(&entity).unwrap(), payload);
}

#[test]
fn models_built_through_setters_serialize_only_present_fields() {
    let mut text = TextWebPart::new();
    text.set_inner_html(Some("<p>hi</p>".to_owned()));
    text.set_id(Some("tw".to_owned()));

    let mut column_section = HorizontalSection::new();
    column_section.set_layout(Some(HorizontalSectionLayoutType::FullWidth));

    let mut layout = CanvasLayout::new();
    layout.set_horizontal_sections(Some(vec![column_section]));

    let mut page = SitePage::new();
    page.set_title(Some("Draft".to_owned()));
    page.set_show_comments(Some(false));
    page.set_canvas_layout(Some(layout));
    page.set_web_parts(Some(vec![WebPartKind::Text(text)]));

    assert_eq!(
        serialize_to_value(&page).unwrap(),
        json!({
            "@odata.type": "#microsoft.graph.sitePage",
            "canvasLayout": {
                "@odata.type": "#microsoft.graph.canvasLayout",
                "horizontalSections": [{"@odata.type": "#microsoft.graph.horizontalSection", "layout": "fullWidth"}]
            },
            "showComments": false,
            "title": "Draft",
            "webParts": [{"@odata.type": "#microsoft.graph.textWebPart", "id": "tw", "innerHtml": "<p>hi</p>"}]
        })
    );
}

#[test]
fn setter_built_subtype_keeps_its_variant_after_a_round_trip() {
    let mut text = TextWebPart::new();
    text.set_inner_html(Some("<p>draft</p>".to_owned()));

    let mut page = SitePage::new();
    page.set_title(Some("Draft".to_owned()));
    page.set_web_parts(Some(vec![WebPartKind::Text(text)]));

    let written = serialize_to_value(&page).unwrap();
    let kind = deserialize_value(&written, EntityKind::create_from_discriminator_value).unwrap();
    let read = match &kind {
        EntityKind::SitePage(read) => read,
        other => panic!("expected site page, got {other:?}"),
    };
    match &read.web_parts().unwrap()[0] {
        WebPartKind::Text(part) => assert_eq!(part.inner_html(), Some("<p>draft</p>")),
        other => panic!("expected text web part, got {other:?}"),
    }
    assert_eq!(read, &page);
    assert_eq!(serialize_to_value(&kind).unwrap(), written);
}

#[test]
fn sub_millisecond_timestamps_round_trip_exactly() {
    let payload = json!({
        "createdDateTime": "2023-05-01T10:00:00.1234567Z",
        "lastModifiedDateTime": "2023-05-01T10:00:00.5+02:00"
    });
    let page = deserialize_value(&payload, SitePage::create_from_discriminator_value).unwrap();
    assert_eq!(page.created_date_time().unwrap().timestamp_subsec_nanos(), 123_456_700);
    assert_eq!(serialize_to_value(&page).unwrap(), payload);
}

#[test]
fn default_models_serialize_to_empty_objects() {
    let empties: Vec<Box<dyn Parsable>> = vec![
        Box::new(Entity::default()),
        Box::new(BaseItem::default()),
        Box::new(SitePage::default()),
        Box::new(CanvasLayout::default()),
        Box::new(WebPart::default()),
        Box::new(TextWebPart::default()),
        Box::new(UserSet::default()),
        Box::new(AssignmentReviewSettings::default()),
        Box::new(AssignmentReviewSettings::new()),
        Box::new(VpnTrafficRule::new()),
        Box::new(BookingStaffMember::default()),
        Box::new(ParentLabelDetails::default()),
        Box::new(LabelDetails::default()),
        Box::new(SalesOrderLine::default()),
        Box::new(DeviceShellScript::default()),
        Box::new(VpnTrafficRule::default()),
        Box::new(SearchAnswer::default()),
        Box::new(Bookmark::default()),
    ];
    for model in &empties {
        assert_eq!(serialize_to_value(model.as_ref()).unwrap(), json!({}));
    }
}

#[test]
fn new_models_carry_only_their_type_name() {
    let named: Vec<(Box<dyn Parsable>, &str)> = vec![
        (Box::new(Entity::new()), Entity::ODATA_TYPE),
        (Box::new(BaseItem::new()), BaseItem::ODATA_TYPE),
        (Box::new(SitePage::new()), SitePage::ODATA_TYPE),
        (Box::new(WebPart::new()), WebPart::ODATA_TYPE),
        (Box::new(TextWebPart::new()), TextWebPart::ODATA_TYPE),
        (Box::new(UserSet::new()), UserSet::ODATA_TYPE),
        (Box::new(BookingStaffMember::new()), BookingStaffMember::ODATA_TYPE),
        (Box::new(ParentLabelDetails::new()), ParentLabelDetails::ODATA_TYPE),
        (Box::new(LabelDetails::new()), LabelDetails::ODATA_TYPE),
        (Box::new(SalesOrderLine::new()), SalesOrderLine::ODATA_TYPE),
        (Box::new(DeviceShellScript::new()), DeviceShellScript::ODATA_TYPE),
        (Box::new(SearchAnswer::new()), SearchAnswer::ODATA_TYPE),
        (Box::new(Bookmark::new()), Bookmark::ODATA_TYPE),
    ];
    for (model, name) in &named {
        assert_eq!(serialize_to_value(model.as_ref()).unwrap(), json!({"@odata.type": name}));
    }
}

#[test]
fn explicit_null_reads_as_absent() {
    let payload = json!({"title": null, "showComments": null, "webParts": null});
    let page = deserialize_value(&payload, SitePage::create_from_discriminator_value).unwrap();
    assert_eq!(page, SitePage::default());
    assert_eq!(serialize_to_value(&page).unwrap(), json!({}));
}

#[test]
fn null_collection_elements_are_skipped() {
    let payload = json!({"webParts": [null, {"@odata.type": "#microsoft.graph.textWebPart", "innerHtml": "a"}]});
    let page = deserialize_value(&payload, SitePage::create_from_discriminator_value).unwrap();
    assert_eq!(page.web_parts().unwrap().len(), 1);
    assert_eq!(
        serialize_to_value(&page).unwrap(),
        json!({"webParts": [{"@odata.type": "#microsoft.graph.textWebPart", "innerHtml": "a"}]})
    );
}

#[test]
fn type_mismatch_aborts_the_whole_read() {
    let payload = json!({"title": "ok", "showComments": "yes"});
    assert!(deserialize_value(&payload, SitePage::create_from_discriminator_value).is_err());

    let payload = json!({"canvasLayout": {"horizontalSections": [{"columns": [{"width": "wide"}]}]}});
    assert!(deserialize_value(&payload, SitePage::create_from_discriminator_value).is_err());
}

fn keys<T: 'static>(table: &FieldDeserializers<T>) -> Vec<&'static str> {
    table.keys().collect()
}

fn assert_superset<B: 'static, S: 'static>(base: &FieldDeserializers<B>, sub: &FieldDeserializers<S>) {
    for key in base.keys() {
        assert!(sub.contains_key(key), "subtype table lost `{key}`");
    }
    assert!(sub.len() >= base.len());
}

#[test]
fn subtype_tables_extend_their_supertype() {
    assert_superset(&Entity::field_deserializers(), &BaseItem::field_deserializers());
    assert_superset(&BaseItem::field_deserializers(), &SitePage::field_deserializers());
    assert_superset(&Entity::field_deserializers(), &WebPart::field_deserializers());
    assert_superset(&WebPart::field_deserializers(), &TextWebPart::field_deserializers());
    assert_superset(&Entity::field_deserializers(), &BookingNamedEntity::field_deserializers());
    assert_superset(&BookingNamedEntity::field_deserializers(), &BookingPerson::field_deserializers());
    assert_superset(&BookingPerson::field_deserializers(), &BookingStaffMember::field_deserializers());
    assert_superset(&Entity::field_deserializers(), &SearchAnswer::field_deserializers());
    assert_superset(&SearchAnswer::field_deserializers(), &Bookmark::field_deserializers());
    assert_superset(&ParentLabelDetails::field_deserializers(), &LabelDetails::field_deserializers());
}

#[test]
fn subtype_tables_list_base_keys_first() {
    let base = keys(&BookingPerson::field_deserializers());
    let sub = keys(&BookingStaffMember::field_deserializers());
    assert_eq!(&sub[..base.len()], &base[..]);
    assert!(sub.contains(&"workingHours"));

    assert_eq!(
        keys(&BookingCustomer::field_deserializers()),
        keys(&BookingPerson::field_deserializers())
    );
}

#[test]
fn subtype_serialization_writes_base_fields_too() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.bookingStaffMember",
        "id": "staff-1",
        "displayName": "Dana",
        "emailAddress": "dana@contoso.com",
        "role": "administrator",
        "useBusinessHours": true
    });
    let member = deserialize_value(&payload, BookingStaffMember::create_from_discriminator_value).unwrap();
    assert_eq!(member.id(), Some("staff-1"));
    assert_eq!(serialize_to_value(&member).unwrap(), payload);
}

#[test]
fn unknown_subtype_keeps_its_own_fields_as_additional_data() {
    let payload = json!({
        "@odata.type": "#microsoft.graph.bookingWorker",
        "id": "w-1",
        "displayName": "Dana",
        "emailAddress": "dana@contoso.com",
        "role": "administrator",
        "workingHours": [{"day": "monday"}]
    });
    let kind = deserialize_value(&payload, BookingPersonKind::create_from_discriminator_value).unwrap();
    assert!(matches!(kind, BookingPersonKind::Person(_)), "{kind:?}");

    let person = kind.as_booking_person();
    assert_eq!(person.display_name(), Some("Dana"));
    assert_eq!(person.odata_type(), Some("#microsoft.graph.bookingWorker"));
    assert_eq!(person.additional_data().get("role"), Some(&json!("administrator")));
    assert_eq!(person.additional_data().get("workingHours"), Some(&payload["workingHours"]));
    assert_eq!(serialize_to_value(&kind).unwrap(), payload);
}
