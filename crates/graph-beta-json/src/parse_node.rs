//! `ParseNode` over a `serde_json::Value` tree.

use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use graph_beta_abstractions::{ParseNode, SerializationError};
use serde_json::{Number, Value};

pub struct JsonParseNode<'a> {
    value: Cow<'a, Value>,
}

impl JsonParseNode<'static> {
    pub fn from_slice(content: &[u8]) -> Result<Self, SerializationError> {
        Ok(Self::from_value(serde_json::from_slice(content)?))
    }

    pub fn from_value(value: Value) -> Self {
        Self {
            value: Cow::Owned(value),
        }
    }
}

impl<'a> JsonParseNode<'a> {
    pub fn borrowed(value: &'a Value) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    fn mismatch(&self, expected: &'static str) -> SerializationError {
        SerializationError::TypeMismatch {
            expected,
            found: kind_of(&self.value),
        }
    }

    fn string(&self) -> Result<Option<&str>, SerializationError> {
        match self.value.as_ref() {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            _ => Err(self.mismatch("string")),
        }
    }

    fn number(&self) -> Result<Option<&Number>, SerializationError> {
        match self.value.as_ref() {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(Some(n)),
            _ => Err(self.mismatch("number")),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Accepts integers and floats with no fractional part.
fn integral(n: &Number) -> Result<i64, SerializationError> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(SerializationError::invalid_value(
            "integer",
            n.to_string(),
            "not an integral number in range",
        )),
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn get_child_node(&self, key: &str) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError> {
        match self.value.as_ref() {
            Value::Object(map) => Ok(map
                .get(key)
                .map(|v| Box::new(JsonParseNode::borrowed(v)) as Box<dyn ParseNode + '_>)),
            Value::Null => Ok(None),
            _ => Err(self.mismatch("object")),
        }
    }

    fn object_fields(
        &self,
    ) -> Result<Option<Vec<(&str, Box<dyn ParseNode + '_>)>>, SerializationError> {
        match self.value.as_ref() {
            Value::Object(map) => Ok(Some(
                map.iter()
                    .map(|(k, v)| {
                        (
                            k.as_str(),
                            Box::new(JsonParseNode::borrowed(v)) as Box<dyn ParseNode + '_>,
                        )
                    })
                    .collect(),
            )),
            Value::Null => Ok(None),
            _ => Err(self.mismatch("object")),
        }
    }

    fn collection_elements(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, SerializationError> {
        match self.value.as_ref() {
            Value::Array(items) => Ok(Some(
                items
                    .iter()
                    .map(|v| Box::new(JsonParseNode::borrowed(v)) as Box<dyn ParseNode + '_>)
                    .collect(),
            )),
            Value::Null => Ok(None),
            _ => Err(self.mismatch("array")),
        }
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn get_string_value(&self) -> Result<Option<String>, SerializationError> {
        Ok(self.string()?.map(str::to_owned))
    }

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError> {
        match self.value.as_ref() {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    fn get_int32_value(&self) -> Result<Option<i32>, SerializationError> {
        let Some(n) = self.number()? else {
            return Ok(None);
        };
        let wide = integral(n)?;
        i32::try_from(wide)
            .map(Some)
            .map_err(|e| SerializationError::invalid_value("int32", wide.to_string(), e))
    }

    fn get_int64_value(&self) -> Result<Option<i64>, SerializationError> {
        self.number()?.map(integral).transpose()
    }

    fn get_float64_value(&self) -> Result<Option<f64>, SerializationError> {
        self.number()?
            .map(|n| {
                n.as_f64().ok_or_else(|| {
                    SerializationError::invalid_value("float64", n.to_string(), "not representable")
                })
            })
            .transpose()
    }

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError> {
        self.string()?
            .map(|s| {
                STANDARD
                    .decode(s)
                    .map_err(|e| SerializationError::invalid_value("base64", s, e))
            })
            .transpose()
    }

    fn get_untyped_value(&self) -> Result<Value, SerializationError> {
        Ok(self.value.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_reads_as_absent_for_every_getter() {
        let node = JsonParseNode::from_value(Value::Null);
        assert!(node.is_null());
        assert_eq!(node.get_string_value().unwrap(), None);
        assert_eq!(node.get_bool_value().unwrap(), None);
        assert_eq!(node.get_int32_value().unwrap(), None);
        assert_eq!(node.get_int64_value().unwrap(), None);
        assert_eq!(node.get_float64_value().unwrap(), None);
        assert_eq!(node.get_byte_array_value().unwrap(), None);
        assert!(node.get_child_node("x").unwrap().is_none());
        assert!(node.object_fields().unwrap().is_none());
        assert!(node.collection_elements().unwrap().is_none());
    }

    #[test]
    fn integer_coercion_matrix() {
        let cases = [
            (json!(7), Some(7i64)),
            (json!(-3), Some(-3)),
            (json!(4.0), Some(4)),
            (json!(4.5), None),
            (json!(u64::MAX), None),
        ];
        for (value, expected) in cases {
            let node = JsonParseNode::from_value(value.clone());
            match expected {
                Some(n) => assert_eq!(node.get_int64_value().unwrap(), Some(n), "{value}"),
                None => assert!(
                    matches!(node.get_int64_value(), Err(SerializationError::InvalidValue { .. })),
                    "{value}"
                ),
            }
        }
        let wide = JsonParseNode::from_value(json!(i64::from(i32::MAX) + 1));
        assert!(matches!(
            wide.get_int32_value(),
            Err(SerializationError::InvalidValue { kind: "int32", .. })
        ));
    }

    #[test]
    fn wrong_json_type_is_a_mismatch() {
        let node = JsonParseNode::from_value(json!("true"));
        assert!(matches!(
            node.get_bool_value(),
            Err(SerializationError::TypeMismatch {
                expected: "boolean",
                found: "string"
            })
        ));
        let node = JsonParseNode::from_value(json!([1]));
        assert!(matches!(
            node.get_child_node("a"),
            Err(SerializationError::TypeMismatch { expected: "object", found: "array" })
        ));
    }

    #[test]
    fn object_fields_keep_payload_order() {
        let node = JsonParseNode::from_value(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<_> = node
            .object_fields()
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn byte_arrays_use_standard_base64() {
        let node = JsonParseNode::from_value(json!("aGVsbG8="));
        assert_eq!(node.get_byte_array_value().unwrap(), Some(b"hello".to_vec()));
        let bad = JsonParseNode::from_value(json!("not base64!"));
        assert!(matches!(
            bad.get_byte_array_value(),
            Err(SerializationError::InvalidValue { kind: "base64", .. })
        ));
    }
}
