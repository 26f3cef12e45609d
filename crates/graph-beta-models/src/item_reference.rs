use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

/// Locates an item inside a drive. `sharepointIds` is not bound and is kept
/// in additional data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemReference {
    additional_data: AdditionalData,
    drive_id: Option<String>,
    drive_type: Option<String>,
    id: Option<String>,
    name: Option<String>,
    odata_type: Option<String>,
    path: Option<String>,
    share_id: Option<String>,
    site_id: Option<String>,
}

impl ItemReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn drive_id(&self) -> Option<&str> {
        self.drive_id.as_deref()
    }

    pub fn set_drive_id(&mut self, value: Option<String>) {
        self.drive_id = value;
    }

    /// `personal`, `business` or `documentLibrary`.
    pub fn drive_type(&self) -> Option<&str> {
        self.drive_type.as_deref()
    }

    pub fn set_drive_type(&mut self, value: Option<String>) {
        self.drive_type = value;
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, value: Option<String>) {
        self.path = value;
    }

    pub fn share_id(&self) -> Option<&str> {
        self.share_id.as_deref()
    }

    pub fn set_share_id(&mut self, value: Option<String>) {
        self.share_id = value;
    }

    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    pub fn set_site_id(&mut self, value: Option<String>) {
        self.site_id = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("driveId", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_drive_id(Some(v));
            }
            Ok(())
        });
        res.insert("driveType", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_drive_type(Some(v));
            }
            Ok(())
        });
        res.insert("id", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_id(Some(v));
            }
            Ok(())
        });
        res.insert("name", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_name(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("path", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_path(Some(v));
            }
            Ok(())
        });
        res.insert("shareId", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_share_id(Some(v));
            }
            Ok(())
        });
        res.insert("siteId", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_site_id(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for ItemReference {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for ItemReference {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("driveId", self.drive_id())?;
        writer.write_string_value("driveType", self.drive_type())?;
        writer.write_string_value("id", self.id())?;
        writer.write_string_value("name", self.name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_string_value("path", self.path())?;
        writer.write_string_value("shareId", self.share_id())?;
        writer.write_string_value("siteId", self.site_id())?;
        writer.write_additional_data(&self.additional_data)
    }
}
