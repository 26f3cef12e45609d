use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

/// Query words that trigger an answer.
///
/// Reserved keywords always trigger the answer and may not be claimed by
/// any other answer in the tenant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerKeyword {
    additional_data: AdditionalData,
    keywords: Option<Vec<String>>,
    match_similar_keywords: Option<bool>,
    odata_type: Option<String>,
    reserved_keywords: Option<Vec<String>>,
}

impl AnswerKeyword {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }

    pub fn set_keywords(&mut self, value: Option<Vec<String>>) {
        self.keywords = value;
    }

    pub fn match_similar_keywords(&self) -> Option<bool> {
        self.match_similar_keywords
    }

    pub fn set_match_similar_keywords(&mut self, value: Option<bool>) {
        self.match_similar_keywords = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn reserved_keywords(&self) -> Option<&[String]> {
        self.reserved_keywords.as_deref()
    }

    pub fn set_reserved_keywords(&mut self, value: Option<Vec<String>>) {
        self.reserved_keywords = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("keywords", |m, n| {
            if let Some(v) = n.get_collection_of_primitive_values()? {
                m.set_keywords(Some(v));
            }
            Ok(())
        });
        res.insert("matchSimilarKeywords", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_match_similar_keywords(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("reservedKeywords", |m, n| {
            if let Some(v) = n.get_collection_of_primitive_values()? {
                m.set_reserved_keywords(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for AnswerKeyword {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for AnswerKeyword {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_collection_of_string_values("keywords", self.keywords())?;
        writer.write_bool_value("matchSimilarKeywords", self.match_similar_keywords())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_collection_of_string_values("reservedKeywords", self.reserved_keywords())?;
        writer.write_additional_data(&self.additional_data)
    }
}
