use crate::{Entity, EntityMeta};
use serde::{Deserialize, Serialize};

/// A customer account.
///
/// Contact fields are free text; no format validation is applied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub meta: EntityMeta,
    /// Short business code, e.g. "CUST001".
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl Customer {
    pub const ENTITY_TYPE: &'static str = "Customer";

    /// Creates a customer with empty contact details.
    pub fn new(meta: EntityMeta, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            meta,
            code: code.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

impl Entity for Customer {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn entity_type(&self) -> &'static str {
        Self::ENTITY_TYPE
    }
}
