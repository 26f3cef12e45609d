use chrono::{DateTime, NaiveDate, NaiveTime};
use graph_beta_abstractions::{
    AdditionalData, EnumValue, IsoDuration, Parsable, SerializationError, SerializationWriter,
};
use serde_json::{json, Value};
use uuid::Uuid;

/// Records `(key, value)` pairs instead of building a payload.
#[derive(Default)]
struct RecordingWriter {
    calls: Vec<(String, Value)>,
}

impl RecordingWriter {
    fn push(&mut self, key: &str, value: Value) -> Result<(), SerializationError> {
        self.calls.push((key.to_string(), value));
        Ok(())
    }
}

impl SerializationWriter for RecordingWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.push(key, json!(v)),
            None => Ok(()),
        }
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.push(key, json!(v)),
            None => Ok(()),
        }
    }

    fn write_int32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.push(key, json!(v)),
            None => Ok(()),
        }
    }

    fn write_int64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.push(key, json!(v)),
            None => Ok(()),
        }
    }

    fn write_float64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.push(key, json!(v)),
            None => Ok(()),
        }
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.push(key, json!(v.len())),
            None => Ok(()),
        }
    }

    fn write_null_value(&mut self, key: &str) -> Result<(), SerializationError> {
        self.push(key, Value::Null)
    }

    fn write_untyped_value(&mut self, key: &str, value: Option<&Value>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.push(key, v.clone()),
            None => Ok(()),
        }
    }

    fn write_object_value(
        &mut self,
        key: &str,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(v) => {
                self.push(key, json!("{"))?;
                v.serialize(&mut *self)?;
                self.push(key, json!("}"))
            }
            None => Ok(()),
        }
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError> {
        match values {
            Some(v) => self.push(key, json!(v.len())),
            None => Ok(()),
        }
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError> {
        match values {
            Some(v) => self.push(key, json!(v)),
            None => Ok(()),
        }
    }

    fn get_serialized_content(&mut self) -> Result<Vec<u8>, SerializationError> {
        let calls = std::mem::take(&mut self.calls);
        Ok(serde_json::to_vec(&calls)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Colour {
    Red,
    Green,
}

impl EnumValue for Colour {
    const TYPE_NAME: &'static str = "colour";
    const VALUES: &'static [Self] = &[Colour::Red, Colour::Green];

    fn as_str(&self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Green => "green",
        }
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "red" => Ok(Colour::Red),
            "green" => Ok(Colour::Green),
            _ => Err(graph_beta_abstractions::unknown_enum_value::<Self>(s)),
        }
    }
}

struct Pair {
    left: Option<String>,
    right: Option<i32>,
}

impl Parsable for Pair {
    fn assign_field_values(
        &mut self,
        _node: &dyn graph_beta_abstractions::ParseNode,
    ) -> Result<(), SerializationError> {
        Ok(())
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("left", self.left.as_deref())?;
        writer.write_int32_value("right", self.right)
    }
}

#[test]
fn text_encoded_defaults_matrix() {
    let mut writer = RecordingWriter::default();
    let id = Uuid::parse_str("6F9619FF-8B86-D011-B42D-00CF4FC964FF").unwrap();
    writer.write_uuid_value("id", Some(id)).unwrap();
    writer
        .write_time_value(
            "at",
            Some(DateTime::parse_from_rfc3339("2024-03-01T10:15:00+02:00").unwrap()),
        )
        .unwrap();
    writer
        .write_time_value(
            "utc",
            Some(DateTime::parse_from_rfc3339("2024-03-01T10:15:00.250Z").unwrap()),
        )
        .unwrap();
    writer
        .write_time_value(
            "ticks",
            Some(DateTime::parse_from_rfc3339("2023-05-01T10:00:00.1234567Z").unwrap()),
        )
        .unwrap();
    writer
        .write_date_only_value("day", NaiveDate::from_ymd_opt(2024, 2, 29))
        .unwrap();
    writer
        .write_time_only_value("start", NaiveTime::from_hms_opt(8, 30, 0))
        .unwrap();
    writer
        .write_iso_duration_value(
            "timeout",
            Some(IsoDuration {
                minutes: 90,
                ..IsoDuration::default()
            }),
        )
        .unwrap();

    assert_eq!(
        writer.calls,
        vec![
            ("id".to_string(), json!("6f9619ff-8b86-d011-b42d-00cf4fc964ff")),
            ("at".to_string(), json!("2024-03-01T10:15:00+02:00")),
            ("utc".to_string(), json!("2024-03-01T10:15:00.25Z")),
            ("ticks".to_string(), json!("2023-05-01T10:00:00.1234567Z")),
            ("day".to_string(), json!("2024-02-29")),
            ("start".to_string(), json!("08:30:00")),
            ("timeout".to_string(), json!("PT90M")),
        ]
    );
}

#[test]
fn absent_values_write_nothing() {
    let mut writer = RecordingWriter::default();
    writer.write_uuid_value("id", None).unwrap();
    writer.write_time_value("at", None).unwrap();
    writer.write_date_only_value("day", None).unwrap();
    writer.write_time_only_value("start", None).unwrap();
    writer.write_iso_duration_value("timeout", None).unwrap();
    let dyn_writer: &mut dyn SerializationWriter = &mut writer;
    dyn_writer.write_object::<Pair>("pair", None).unwrap();
    dyn_writer.write_objects::<Pair>("pairs", None).unwrap();
    dyn_writer.write_enum_value::<Colour>("colour", None).unwrap();
    dyn_writer
        .write_collection_of_enum_values::<Colour>("colours", None)
        .unwrap();
    assert!(writer.calls.is_empty());
}

#[test]
fn additional_data_is_written_in_insertion_order() {
    let mut data = AdditionalData::new();
    data.insert("zeta".to_string(), json!(1));
    data.insert("alpha".to_string(), json!({"nested": [true, null]}));
    data.insert("mid".to_string(), Value::Null);

    let mut writer = RecordingWriter::default();
    writer.write_additional_data(&data).unwrap();
    let keys: Vec<_> = writer.calls.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    assert_eq!(writer.calls[1].1, json!({"nested": [true, null]}));
}

#[test]
fn dyn_helpers_matrix() {
    let mut writer = RecordingWriter::default();
    let pairs = [
        Pair {
            left: Some("a".to_string()),
            right: None,
        },
        Pair {
            left: None,
            right: Some(7),
        },
    ];
    {
        let w: &mut dyn SerializationWriter = &mut writer;
        w.write_object("first", Some(&pairs[0])).unwrap();
        w.write_objects("all", Some(&pairs[..])).unwrap();
        w.write_enum_value("colour", Some(Colour::Green)).unwrap();
        w.write_collection_of_enum_values("colours", Some(&[Colour::Green, Colour::Red, Colour::Green][..]))
            .unwrap();
    }
    assert_eq!(
        writer.calls,
        vec![
            ("first".to_string(), json!("{")),
            ("left".to_string(), json!("a")),
            ("first".to_string(), json!("}")),
            ("all".to_string(), json!(2)),
            ("colour".to_string(), json!("green")),
            ("colours".to_string(), json!(["green", "red", "green"])),
        ]
    );
}

#[test]
fn enum_codec_contract() {
    for value in Colour::VALUES {
        assert_eq!(Colour::parse_str(value.as_str()).unwrap(), *value);
    }
    let err = Colour::parse_str("blue").unwrap_err();
    assert!(err.to_string().contains("blue"));
    assert_eq!(
        graph_beta_abstractions::serialize_enum_values(&[Colour::Red, Colour::Red]),
        vec!["red".to_string(), "red".to_string()]
    );
}
