//! `SerializationWriter` that builds a `serde_json::Value` tree.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use graph_beta_abstractions::{Parsable, SerializationError, SerializationWriter};
use serde_json::{Map, Number, Value};

enum Frame {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

impl Frame {
    fn into_value(self) -> Value {
        match self {
            Frame::Object(map) => Value::Object(map),
            Frame::Array(items) => Value::Array(items),
        }
    }
}

/// Objects and collections being built are kept on a stack; a finished one
/// is attached to its parent under the key it was opened with.
#[derive(Default)]
pub struct JsonSerializationWriter {
    stack: Vec<Frame>,
    root: Option<Value>,
    pretty: bool,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`JsonSerializationWriter::new`] but emits indented output.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Takes the finished root value, leaving the writer empty.
    pub fn take_value(&mut self) -> Result<Option<Value>, SerializationError> {
        if !self.stack.is_empty() {
            return Err(SerializationError::WriterState(format!(
                "{} unfinished object(s) or collection(s)",
                self.stack.len()
            )));
        }
        Ok(self.root.take())
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), SerializationError> {
        match self.stack.last_mut() {
            Some(Frame::Object(map)) if !key.is_empty() => {
                map.insert(key.to_owned(), value);
                Ok(())
            }
            Some(Frame::Array(items)) if key.is_empty() => {
                items.push(value);
                Ok(())
            }
            Some(Frame::Object(_)) => Err(SerializationError::WriterState(
                "unkeyed value written inside an object".to_string(),
            )),
            Some(Frame::Array(_)) => Err(SerializationError::WriterState(format!(
                "field `{key}` written inside a collection"
            ))),
            None if key.is_empty() => {
                if self.root.is_some() {
                    return Err(SerializationError::WriterState(
                        "root value already written".to_string(),
                    ));
                }
                self.root = Some(value);
                Ok(())
            }
            None => Err(SerializationError::WriterState(format!(
                "field `{key}` written with no open object"
            ))),
        }
    }

    /// Opens `frame`, lets `fill` write into it, then closes it. The frame
    /// is closed even when `fill` fails.
    fn nested(
        &mut self,
        frame: Frame,
        fill: impl FnOnce(&mut Self) -> Result<(), SerializationError>,
    ) -> Result<Value, SerializationError> {
        self.stack.push(frame);
        let filled = fill(self);
        let frame = self
            .stack
            .pop()
            .ok_or_else(|| SerializationError::WriterState("frame stack underflow".to_string()))?;
        filled?;
        Ok(frame.into_value())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.put(key, Value::String(v.to_owned())),
            None => Ok(()),
        }
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.put(key, Value::Bool(v)),
            None => Ok(()),
        }
    }

    fn write_int32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.put(key, Value::from(v)),
            None => Ok(()),
        }
    }

    fn write_int64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.put(key, Value::from(v)),
            None => Ok(()),
        }
    }

    fn write_float64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), SerializationError> {
        let Some(v) = value else {
            return Ok(());
        };
        let number = Number::from_f64(v)
            .ok_or_else(|| SerializationError::invalid_value("float64", v.to_string(), "not finite"))?;
        self.put(key, Value::Number(number))
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.put(key, Value::String(STANDARD.encode(v))),
            None => Ok(()),
        }
    }

    fn write_null_value(&mut self, key: &str) -> Result<(), SerializationError> {
        self.put(key, Value::Null)
    }

    fn write_untyped_value(&mut self, key: &str, value: Option<&Value>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.put(key, v.clone()),
            None => Ok(()),
        }
    }

    fn write_object_value(
        &mut self,
        key: &str,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError> {
        let Some(model) = value else {
            return Ok(());
        };
        let object = self.nested(Frame::Object(Map::new()), |w| model.serialize(w))?;
        self.put(key, object)
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError> {
        let Some(models) = values else {
            return Ok(());
        };
        let array = self.nested(Frame::Array(Vec::with_capacity(models.len())), |w| {
            for model in models {
                w.write_object_value("", Some(*model))?;
            }
            Ok(())
        })?;
        self.put(key, array)
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError> {
        match values {
            Some(v) => self.put(key, Value::Array(v.iter().cloned().map(Value::String).collect())),
            None => Ok(()),
        }
    }

    fn get_serialized_content(&mut self) -> Result<Vec<u8>, SerializationError> {
        let Some(value) = self.take_value()? else {
            return Ok(Vec::new());
        };
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        tracing::trace!(len = bytes.len(), "serialized json payload");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyed_write_without_open_object_fails() {
        let mut writer = JsonSerializationWriter::new();
        assert!(matches!(
            writer.write_string_value("name", Some("x")),
            Err(SerializationError::WriterState(_))
        ));
        writer.write_string_value("name", None).unwrap();
    }

    #[test]
    fn root_scalar_and_double_root() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_int64_value("", Some(5)).unwrap();
        assert!(writer.write_int64_value("", Some(6)).is_err());
        assert_eq!(writer.take_value().unwrap(), Some(json!(5)));
        assert_eq!(writer.take_value().unwrap(), None);
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        let mut writer = JsonSerializationWriter::new();
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                writer.write_float64_value("", Some(v)),
                Err(SerializationError::InvalidValue { kind: "float64", .. })
            ));
        }
    }

    #[test]
    fn empty_writer_yields_empty_content() {
        let mut writer = JsonSerializationWriter::new();
        assert!(writer.get_serialized_content().unwrap().is_empty());
    }
}
