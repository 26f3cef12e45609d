//! Reviewer and approver sets used by access reviews and access packages.

use std::ops::{Deref, DerefMut};

use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

// ── UserSet ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSet {
    additional_data: AdditionalData,
    is_backup: Option<bool>,
    odata_type: Option<String>,
}

impl UserSet {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.userSet";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    /// Backup members are only asked when the primary set cannot respond.
    pub fn is_backup(&self) -> Option<bool> {
        self.is_backup
    }

    pub fn set_is_backup(&mut self, value: Option<bool>) {
        self.is_backup = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("isBackup", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_is_backup(Some(v));
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

impl AdditionalDataHolder for UserSet {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for UserSet {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_bool_value("isBackup", self.is_backup())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_additional_data(&self.additional_data)
    }
}

/// Subtypes that add nothing beyond `UserSet` itself.
macro_rules! marker_user_set {
    ($(#[$meta:meta])* $name:ident, $odata:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            base: UserSet,
        }

        impl Deref for $name {
            type Target = UserSet;

            fn deref(&self) -> &UserSet {
                &self.base
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut UserSet {
                &mut self.base
            }
        }

        impl $name {
            pub const ODATA_TYPE: &'static str = $odata;

            pub fn new() -> Self {
                let mut m = Self::default();
                m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
                m
            }

            pub fn create_from_discriminator_value(
                _node: &dyn ParseNode,
            ) -> Result<Self, SerializationError> {
                Ok(Self::default())
            }

            pub fn field_deserializers() -> FieldDeserializers<Self> {
                FieldDeserializers::inherit(UserSet::field_deserializers(), |m: &mut Self| &mut m.base)
            }
        }

        impl AdditionalDataHolder for $name {
            fn additional_data(&self) -> &AdditionalData {
                self.base.additional_data()
            }

            fn additional_data_mut(&mut self) -> &mut AdditionalData {
                self.base.additional_data_mut()
            }
        }

        impl Parsable for $name {
            fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
                assign_fields(self, &Self::field_deserializers(), node)
            }

            fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
                self.base.serialize(writer)
            }
        }
    };
}

marker_user_set!(
    /// Sponsors of the requestor who are members of the tenant.
    InternalSponsors,
    "#microsoft.graph.internalSponsors"
);

marker_user_set!(
    /// Sponsors of the requestor from a connected organization.
    ExternalSponsors,
    "#microsoft.graph.externalSponsors"
);

// ── SingleUser ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleUser {
    base: UserSet,
    description: Option<String>,
    id: Option<String>,
}

impl Deref for SingleUser {
    type Target = UserSet;

    fn deref(&self) -> &UserSet {
        &self.base
    }
}

impl DerefMut for SingleUser {
    fn deref_mut(&mut self) -> &mut UserSet {
        &mut self.base
    }
}

impl SingleUser {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.singleUser";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    /// Object id of the user.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(UserSet::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("description", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_description(Some(v));
            }
            Ok(())
        });
        res.insert("id", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_id(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for SingleUser {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for SingleUser {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("id", self.id())
    }
}

// ── GroupMembers ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMembers {
    base: UserSet,
    description: Option<String>,
    id: Option<String>,
}

impl Deref for GroupMembers {
    type Target = UserSet;

    fn deref(&self) -> &UserSet {
        &self.base
    }
}

impl DerefMut for GroupMembers {
    fn deref_mut(&mut self) -> &mut UserSet {
        &mut self.base
    }
}

impl GroupMembers {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.groupMembers";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    /// Object id of the group.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(UserSet::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("description", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_description(Some(v));
            }
            Ok(())
        });
        res.insert("id", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_id(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for GroupMembers {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for GroupMembers {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("id", self.id())
    }
}

// ── ConnectedOrganizationMembers ──────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectedOrganizationMembers {
    base: UserSet,
    connected_organization_id: Option<String>,
    description: Option<String>,
}

impl Deref for ConnectedOrganizationMembers {
    type Target = UserSet;

    fn deref(&self) -> &UserSet {
        &self.base
    }
}

impl DerefMut for ConnectedOrganizationMembers {
    fn deref_mut(&mut self) -> &mut UserSet {
        &mut self.base
    }
}

impl ConnectedOrganizationMembers {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.connectedOrganizationMembers";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn connected_organization_id(&self) -> Option<&str> {
        self.connected_organization_id.as_deref()
    }

    pub fn set_connected_organization_id(&mut self, value: Option<String>) {
        self.connected_organization_id = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(UserSet::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("connectedOrganizationId", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_connected_organization_id(Some(v));
            }
            Ok(())
        });
        res.insert("description", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_description(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for ConnectedOrganizationMembers {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for ConnectedOrganizationMembers {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_string_value("connectedOrganizationId", self.connected_organization_id())?;
        writer.write_string_value("description", self.description())
    }
}

// ── RequestorManager ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestorManager {
    base: UserSet,
    manager_level: Option<i32>,
}

impl Deref for RequestorManager {
    type Target = UserSet;

    fn deref(&self) -> &UserSet {
        &self.base
    }
}

impl DerefMut for RequestorManager {
    fn deref_mut(&mut self) -> &mut UserSet {
        &mut self.base
    }
}

impl RequestorManager {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.requestorManager";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    /// 1 is the direct manager, 2 the manager's manager, and so on.
    pub fn manager_level(&self) -> Option<i32> {
        self.manager_level
    }

    pub fn set_manager_level(&mut self, value: Option<i32>) {
        self.manager_level = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(UserSet::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("managerLevel", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_manager_level(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for RequestorManager {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for RequestorManager {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_int32_value("managerLevel", self.manager_level())
    }
}

// ── UserSetKind ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum UserSetKind {
    UserSet(UserSet),
    SingleUser(SingleUser),
    GroupMembers(GroupMembers),
    ConnectedOrganizationMembers(ConnectedOrganizationMembers),
    RequestorManager(RequestorManager),
    InternalSponsors(InternalSponsors),
    ExternalSponsors(ExternalSponsors),
}

impl Default for UserSetKind {
    fn default() -> Self {
        UserSetKind::UserSet(UserSet::default())
    }
}

impl UserSetKind {
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, SerializationError> {
        let discriminator = node.get_discriminator_value()?;
        Ok(match discriminator.as_deref() {
            Some(SingleUser::ODATA_TYPE) => UserSetKind::SingleUser(SingleUser::default()),
            Some(GroupMembers::ODATA_TYPE) => UserSetKind::GroupMembers(GroupMembers::default()),
            Some(ConnectedOrganizationMembers::ODATA_TYPE) => {
                UserSetKind::ConnectedOrganizationMembers(ConnectedOrganizationMembers::default())
            }
            Some(RequestorManager::ODATA_TYPE) => UserSetKind::RequestorManager(RequestorManager::default()),
            Some(InternalSponsors::ODATA_TYPE) => UserSetKind::InternalSponsors(InternalSponsors::default()),
            Some(ExternalSponsors::ODATA_TYPE) => UserSetKind::ExternalSponsors(ExternalSponsors::default()),
            Some(UserSet::ODATA_TYPE) => UserSetKind::UserSet(UserSet::default()),
            other => {
                tracing::debug!(discriminator = ?other, "unrecognized user set type, using base");
                UserSetKind::UserSet(UserSet::default())
            }
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            UserSetKind::UserSet(_) => UserSet::ODATA_TYPE,
            UserSetKind::SingleUser(_) => SingleUser::ODATA_TYPE,
            UserSetKind::GroupMembers(_) => GroupMembers::ODATA_TYPE,
            UserSetKind::ConnectedOrganizationMembers(_) => ConnectedOrganizationMembers::ODATA_TYPE,
            UserSetKind::RequestorManager(_) => RequestorManager::ODATA_TYPE,
            UserSetKind::InternalSponsors(_) => InternalSponsors::ODATA_TYPE,
            UserSetKind::ExternalSponsors(_) => ExternalSponsors::ODATA_TYPE,
        }
    }

    pub fn as_user_set(&self) -> &UserSet {
        match self {
            UserSetKind::UserSet(v) => v,
            UserSetKind::SingleUser(v) => &v.base,
            UserSetKind::GroupMembers(v) => &v.base,
            UserSetKind::ConnectedOrganizationMembers(v) => &v.base,
            UserSetKind::RequestorManager(v) => &v.base,
            UserSetKind::InternalSponsors(v) => &v.base,
            UserSetKind::ExternalSponsors(v) => &v.base,
        }
    }
}

impl AdditionalDataHolder for UserSetKind {
    fn additional_data(&self) -> &AdditionalData {
        self.as_user_set().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        match self {
            UserSetKind::UserSet(v) => v.additional_data_mut(),
            UserSetKind::SingleUser(v) => v.additional_data_mut(),
            UserSetKind::GroupMembers(v) => v.additional_data_mut(),
            UserSetKind::ConnectedOrganizationMembers(v) => v.additional_data_mut(),
            UserSetKind::RequestorManager(v) => v.additional_data_mut(),
            UserSetKind::InternalSponsors(v) => v.additional_data_mut(),
            UserSetKind::ExternalSponsors(v) => v.additional_data_mut(),
        }
    }
}

impl Parsable for UserSetKind {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        match self {
            UserSetKind::UserSet(v) => v.assign_field_values(node),
            UserSetKind::SingleUser(v) => v.assign_field_values(node),
            UserSetKind::GroupMembers(v) => v.assign_field_values(node),
            UserSetKind::ConnectedOrganizationMembers(v) => v.assign_field_values(node),
            UserSetKind::RequestorManager(v) => v.assign_field_values(node),
            UserSetKind::InternalSponsors(v) => v.assign_field_values(node),
            UserSetKind::ExternalSponsors(v) => v.assign_field_values(node),
        }
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        match self {
            UserSetKind::UserSet(v) => v.serialize(writer),
            UserSetKind::SingleUser(v) => v.serialize(writer),
            UserSetKind::GroupMembers(v) => v.serialize(writer),
            UserSetKind::ConnectedOrganizationMembers(v) => v.serialize(writer),
            UserSetKind::RequestorManager(v) => v.serialize(writer),
            UserSetKind::InternalSponsors(v) => v.serialize(writer),
            UserSetKind::ExternalSponsors(v) => v.serialize(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_json::{deserialize_value, serialize_to_value};
    use serde_json::json;

    #[test]
    fn single_user_table_extends_user_set() {
        let keys: Vec<&str> = SingleUser::field_deserializers().keys().collect();
        assert_eq!(keys, vec!["isBackup", "@odata.type", "description", "id"]);
    }

    #[test]
    fn marker_subtypes_bind_only_base_keys() {
        let base: Vec<&str> = UserSet::field_deserializers().keys().collect();
        let internal: Vec<&str> = InternalSponsors::field_deserializers().keys().collect();
        assert_eq!(internal, base);
    }

    #[test]
    fn requestor_manager_reads_level() {
        let payload = json!({"@odata.type": "#microsoft.graph.requestorManager", "managerLevel": 2, "isBackup": false});
        let kind = deserialize_value(&payload, UserSetKind::create_from_discriminator_value).unwrap();
        match &kind {
            UserSetKind::RequestorManager(m) => {
                assert_eq!(m.manager_level(), Some(2));
                assert_eq!(m.is_backup(), Some(false));
            }
            other => panic!("unexpected variant {other:?}"),
        }
        assert_eq!(serialize_to_value(&kind).unwrap(), json!({
            "isBackup": false,
            "@odata.type": "#microsoft.graph.requestorManager",
            "managerLevel": 2
        }));
    }
}
