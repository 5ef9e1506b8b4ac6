use crate::{Entity, EntityMeta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub meta: EntityMeta,
    /// Short business code, e.g. "ORD001".
    pub code: String,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub po_number: String,
    #[serde(default)]
    pub tax_code: String,
}

impl Order {
    pub const ENTITY_TYPE: &'static str = "Order";

    pub fn new(meta: EntityMeta, code: impl Into<String>, order_date: DateTime<Utc>) -> Self {
        Self {
            meta,
            code: code.into(),
            order_date,
            delivery_address: String::new(),
            po_number: String::new(),
            tax_code: String::new(),
        }
    }

    #[must_use]
    pub fn with_delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = address.into();
        self
    }

    #[must_use]
    pub fn with_po_number(mut self, po_number: impl Into<String>) -> Self {
        self.po_number = po_number.into();
        self
    }

    #[must_use]
    pub fn with_tax_code(mut self, tax_code: impl Into<String>) -> Self {
        self.tax_code = tax_code.into();
        self
    }
}

impl Entity for Order {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn entity_type(&self) -> &'static str {
        Self::ENTITY_TYPE
    }
}
