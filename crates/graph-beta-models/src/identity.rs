use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

/// A user, device or application acting on a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    additional_data: AdditionalData,
    display_name: Option<String>,
    id: Option<String>,
    odata_type: Option<String>,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("displayName", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_display_name(Some(v));
            }
            Ok(())
        });
        res.insert("id", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_id(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for Identity {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for Identity {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_string_value("id", self.id())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_additional_data(&self.additional_data)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentitySet {
    additional_data: AdditionalData,
    application: Option<Identity>,
    device: Option<Identity>,
    odata_type: Option<String>,
    user: Option<Identity>,
}

impl IdentitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn application(&self) -> Option<&Identity> {
        self.application.as_ref()
    }

    pub fn set_application(&mut self, value: Option<Identity>) {
        self.application = value;
    }

    pub fn device(&self) -> Option<&Identity> {
        self.device.as_ref()
    }

    pub fn set_device(&mut self, value: Option<Identity>) {
        self.device = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, value: Option<Identity>) {
        self.user = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("application", |m, n| {
            if let Some(v) = n.get_object_value(Identity::create_from_discriminator_value)? {
                m.set_application(Some(v));
            }
            Ok(())
        });
        res.insert("device", |m, n| {
            if let Some(v) = n.get_object_value(Identity::create_from_discriminator_value)? {
                m.set_device(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("user", |m, n| {
            if let Some(v) = n.get_object_value(Identity::create_from_discriminator_value)? {
                m.set_user(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for IdentitySet {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for IdentitySet {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_object("application", self.application())?;
        writer.write_object("device", self.device())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_object("user", self.user())?;
        writer.write_additional_data(&self.additional_data)
    }
}
