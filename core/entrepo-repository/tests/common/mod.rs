//! Shared test helpers for repository tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use entrepo_model::{Customer, EntityId, EntityMeta, Order};

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

pub fn id(raw: u64) -> EntityId {
    EntityId::new(raw).unwrap()
}

pub fn customer(raw_id: u64, name: &str) -> Customer {
    Customer::new(EntityMeta::new(id(raw_id), at(1_700_000_000)), format!("CUST{raw_id:03}"), name)
}

pub fn alice() -> Customer {
    customer(3, "Alice Johnson")
        .with_email("alice.johnson@example.com")
        .with_phone("555-9876")
        .with_address("789 Elm St")
}

pub fn order(raw_id: u64) -> Order {
    Order::new(
        EntityMeta::new(id(raw_id), at(1_700_000_000)),
        format!("ORD{raw_id:03}"),
        at(1_700_000_500),
    )
}
