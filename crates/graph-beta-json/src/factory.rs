use graph_beta_abstractions::{
    clean_content_type, ParseNode, ParseNodeFactory, SerializationError, SerializationWriter,
    SerializationWriterFactory,
};

use crate::{JsonParseNode, JsonSerializationWriter, JSON_CONTENT_TYPE};

fn check_content_type(content_type: &str) -> Result<(), SerializationError> {
    if clean_content_type(content_type) == JSON_CONTENT_TYPE {
        Ok(())
    } else {
        Err(SerializationError::UnsupportedContentType(content_type.to_owned()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParseNodeFactory;

impl ParseNodeFactory for JsonParseNodeFactory {
    fn valid_content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    fn get_root_parse_node(
        &self,
        content_type: &str,
        content: &[u8],
    ) -> Result<Box<dyn ParseNode>, SerializationError> {
        check_content_type(content_type)?;
        if content.is_empty() {
            return Err(SerializationError::invalid_value("payload", "", "empty content"));
        }
        Ok(Box::new(JsonParseNode::from_slice(content)?))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializationWriterFactory {
    pretty: bool,
}

impl JsonSerializationWriterFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl SerializationWriterFactory for JsonSerializationWriterFactory {
    fn valid_content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    fn get_serialization_writer(
        &self,
        content_type: &str,
    ) -> Result<Box<dyn SerializationWriter>, SerializationError> {
        check_content_type(content_type)?;
        let writer = if self.pretty {
            JsonSerializationWriter::pretty()
        } else {
            JsonSerializationWriter::new()
        };
        Ok(Box::new(writer))
    }
}
