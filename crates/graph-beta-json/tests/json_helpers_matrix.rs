use chrono::{NaiveDate, NaiveTime};
use graph_beta_abstractions::{
    assign_fields, unknown_enum_value, AdditionalData, AdditionalDataHolder, EnumValue,
    FieldDeserializers, Parsable, ParseNode, SerializationError, SerializationWriter,
};
use graph_beta_json::{
    default_registry, deserialize, deserialize_value, serialize, serialize_to_value, JsonParseNode,
};
use serde_json::{json, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shade {
    Light,
    Dark,
}

impl EnumValue for Shade {
    const TYPE_NAME: &'static str = "shade";
    const VALUES: &'static [Self] = &[Shade::Light, Shade::Dark];

    fn as_str(&self) -> &'static str {
        match self {
            Shade::Light => "light",
            Shade::Dark => "dark",
        }
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "light" => Ok(Shade::Light),
            "dark" => Ok(Shade::Dark),
            _ => Err(unknown_enum_value::<Self>(s)),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Tile {
    label: Option<String>,
    additional_data: AdditionalData,
}

impl Tile {
    fn create(_: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut table = FieldDeserializers::new();
        table.insert("label", |m: &mut Self, n: &dyn ParseNode| {
            m.label = n.get_string_value()?;
            Ok(())
        });
        table
    }
}

impl AdditionalDataHolder for Tile {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for Tile {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("label", self.label.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Board {
    id: Option<Uuid>,
    size: Option<i32>,
    weight: Option<f64>,
    day: Option<NaiveDate>,
    opens: Option<NaiveTime>,
    shade: Option<Shade>,
    shades: Option<Vec<Shade>>,
    tags: Option<Vec<String>>,
    tiles: Option<Vec<Tile>>,
    cover: Option<Tile>,
    blob: Option<Vec<u8>>,
    additional_data: AdditionalData,
}

impl Board {
    fn create(_: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut table = FieldDeserializers::new();
        table.insert("id", |m: &mut Self, n: &dyn ParseNode| {
            m.id = n.get_uuid_value()?;
            Ok(())
        });
        table.insert("size", |m: &mut Self, n: &dyn ParseNode| {
            m.size = n.get_int32_value()?;
            Ok(())
        });
        table.insert("weight", |m: &mut Self, n: &dyn ParseNode| {
            m.weight = n.get_float64_value()?;
            Ok(())
        });
        table.insert("day", |m: &mut Self, n: &dyn ParseNode| {
            m.day = n.get_date_only_value()?;
            Ok(())
        });
        table.insert("opens", |m: &mut Self, n: &dyn ParseNode| {
            m.opens = n.get_time_only_value()?;
            Ok(())
        });
        table.insert("shade", |m: &mut Self, n: &dyn ParseNode| {
            m.shade = n.get_enum_value()?;
            Ok(())
        });
        table.insert("shades", |m: &mut Self, n: &dyn ParseNode| {
            m.shades = n.get_collection_of_enum_values()?;
            Ok(())
        });
        table.insert("tags", |m: &mut Self, n: &dyn ParseNode| {
            m.tags = n.get_collection_of_primitive_values()?;
            Ok(())
        });
        table.insert("tiles", |m: &mut Self, n: &dyn ParseNode| {
            m.tiles = n.get_collection_of_object_values(Tile::create)?;
            Ok(())
        });
        table.insert("cover", |m: &mut Self, n: &dyn ParseNode| {
            m.cover = n.get_object_value(Tile::create)?;
            Ok(())
        });
        table.insert("blob", |m: &mut Self, n: &dyn ParseNode| {
            m.blob = n.get_byte_array_value()?;
            Ok(())
        });
        table
    }
}

impl AdditionalDataHolder for Board {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for Board {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_uuid_value("id", self.id)?;
        writer.write_int32_value("size", self.size)?;
        writer.write_float64_value("weight", self.weight)?;
        writer.write_date_only_value("day", self.day)?;
        writer.write_time_only_value("opens", self.opens)?;
        writer.write_enum_value("shade", self.shade)?;
        writer.write_collection_of_enum_values("shades", self.shades.as_deref())?;
        writer.write_collection_of_string_values("tags", self.tags.as_deref())?;
        writer.write_objects("tiles", self.tiles.as_deref())?;
        writer.write_object("cover", self.cover.as_ref())?;
        writer.write_byte_array_value("blob", self.blob.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

fn full_board() -> Value {
    json!({
        "id": "0b6e3c1a-94d4-4f5e-9a40-7b0f6c1d2e3f",
        "size": 12,
        "weight": 2.5,
        "day": "2024-02-29",
        "opens": "08:30:00",
        "shade": "dark",
        "shades": ["light", "dark", "light"],
        "tags": ["b", "a", "b"],
        "tiles": [{"label": "one"}, {"label": "two", "extra": 1}],
        "cover": {"label": "front"},
        "blob": "AAEC",
        "@odata.etag": "W/\"1\""
    })
}

#[test]
fn round_trip_preserves_every_field_and_order() {
    let payload = full_board();
    let board = deserialize_value(&payload, Board::create).unwrap();
    assert_eq!(board.size, Some(12));
    assert_eq!(board.blob.as_deref(), Some(&[0u8, 1, 2][..]));
    assert_eq!(
        board.shades.as_deref(),
        Some(&[Shade::Light, Shade::Dark, Shade::Light][..])
    );
    assert_eq!(board.tiles.as_ref().unwrap()[1].additional_data["extra"], json!(1));

    let written = serialize_to_value(&board).unwrap();
    assert_eq!(written, payload);
    let keys: Vec<_> = written.as_object().unwrap().keys().cloned().collect();
    let expected: Vec<_> = payload.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, expected);
}

#[test]
fn bytes_and_registry_agree() {
    let board = deserialize_value(&full_board(), Board::create).unwrap();
    let direct = serialize(&board).unwrap();
    let registry = default_registry();
    let via_registry = registry.serialize("application/json; charset=utf-8", &board).unwrap();
    assert_eq!(direct, via_registry);

    let back: Board = registry
        .deserialize("application/vnd.ms-graph+json", &direct, Board::create)
        .unwrap();
    assert_eq!(back, board);
    assert_eq!(deserialize(&direct, Board::create).unwrap(), board);
}

#[test]
fn registry_rejects_other_content_types() {
    let registry = default_registry();
    assert_eq!(registry.content_types().collect::<Vec<_>>(), vec!["application/json"]);
    assert!(matches!(
        registry.get_root_parse_node("application/xml", b"<a/>"),
        Err(SerializationError::UnsupportedContentType(ct)) if ct == "application/xml"
    ));
    assert!(matches!(
        registry.get_root_parse_node("application/json", b""),
        Err(SerializationError::InvalidValue { kind: "payload", .. })
    ));
}

#[test]
fn null_elements_are_skipped_and_order_kept() {
    let payload = json!({
        "tags": ["x", null, "y"],
        "shades": [null, "dark"],
        "tiles": [null, {"label": "only"}]
    });
    let board = deserialize_value(&payload, Board::create).unwrap();
    assert_eq!(board.tags, Some(vec!["x".to_string(), "y".to_string()]));
    assert_eq!(board.shades, Some(vec![Shade::Dark]));
    assert_eq!(board.tiles.as_ref().map(Vec::len), Some(1));
}

#[test]
fn empty_collection_is_present_and_null_is_absent() {
    let board = deserialize_value(&json!({"tags": [], "cover": null, "size": null}), Board::create).unwrap();
    assert_eq!(board.tags, Some(Vec::new()));
    assert_eq!(board.cover, None);
    assert_eq!(board.size, None);
    assert_eq!(serialize_to_value(&board).unwrap(), json!({"tags": []}));
}

#[test]
fn malformed_values_abort_the_object() {
    let cases = [
        json!({"id": "not-a-uuid"}),
        json!({"day": "29/02/2024"}),
        json!({"opens": "8am"}),
        json!({"size": 3_000_000_000i64}),
        json!({"size": 1.5}),
        json!({"blob": "%%"}),
    ];
    for payload in cases {
        assert!(
            matches!(
                deserialize_value(&payload, Board::create),
                Err(SerializationError::InvalidValue { .. })
            ),
            "{payload}"
        );
    }
    assert!(matches!(
        deserialize_value(&json!({"size": "12"}), Board::create),
        Err(SerializationError::TypeMismatch { expected: "number", found: "string" })
    ));
    assert!(matches!(
        deserialize_value(&json!({"shade": "grey"}), Board::create),
        Err(SerializationError::UnknownEnumValue { type_name: "shade", .. })
    ));
    assert!(matches!(
        deserialize_value(&json!({"shades": ["dark", "grey"]}), Board::create),
        Err(SerializationError::UnknownEnumValue { .. })
    ));
}

#[test]
fn root_must_be_an_object() {
    assert!(matches!(
        deserialize(b"null", Board::create),
        Err(SerializationError::TypeMismatch { expected: "object", found: "null" })
    ));
    assert!(matches!(
        deserialize(b"[1, 2]", Board::create),
        Err(SerializationError::TypeMismatch { expected: "object", found: "array" })
    ));
    assert!(matches!(deserialize(b"{", Board::create), Err(SerializationError::Json(_))));
}

#[test]
fn discriminator_value_matrix() {
    let cases = [
        (json!({"@odata.type": "#microsoft.graph.x"}), Some("#microsoft.graph.x")),
        (json!({}), None),
        (json!({"@odata.type": null}), None),
    ];
    for (payload, expected) in cases {
        let node = JsonParseNode::borrowed(&payload);
        let node: &dyn ParseNode = &node;
        assert_eq!(node.get_discriminator_value().unwrap().as_deref(), expected);
    }
    let bad = json!({"@odata.type": 7});
    let node = JsonParseNode::borrowed(&bad);
    let node: &dyn ParseNode = &node;
    assert!(node.get_discriminator_value().is_err());
}

#[test]
fn pretty_output_parses_back_to_the_same_value() {
    use graph_beta_json::JsonSerializationWriter;

    let board = deserialize_value(&full_board(), Board::create).unwrap();
    let mut writer = JsonSerializationWriter::pretty();
    writer.write_object_value("", Some(&board)).unwrap();
    let bytes = writer.get_serialized_content().unwrap();
    assert!(bytes.contains(&b'\n'));
    let reparsed: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(reparsed, full_board());
}
