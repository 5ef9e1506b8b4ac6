use crate::{Customer, Entity, EntityMeta, Order};
use chrono::{DateTime, Utc};
use entrepo_types::EntityId;
use std::iter;

/// Representative seed entities for a variant.
///
/// Seeds carry distinct identifiers starting at [`EntityId::MIN`], are
/// active, and are stamped with the supplied `now`.
pub trait SampleData: Entity + Sized {
    fn samples(now: DateTime<Utc>) -> Vec<Self>;
}

/// Consecutive identifiers starting at [`EntityId::MIN`].
fn seed_ids() -> impl Iterator<Item = EntityId> {
    iter::successors(Some(EntityId::MIN), EntityId::successor)
}

impl SampleData for Customer {
    fn samples(now: DateTime<Utc>) -> Vec<Self> {
        const SEEDS: [(&str, &str, &str, &str, &str); 2] = [
            ("CUST001", "John Doe", "john.doe@example.com", "555-1234", "123 Main St"),
            ("CUST002", "Jane Smith", "jane.smith@example.com", "555-5678", "456 Market St"),
        ];
        seed_ids()
            .zip(SEEDS)
            .map(|(id, (code, name, email, phone, address))| {
                Customer::new(EntityMeta::new(id, now), code, name)
                    .with_email(email)
                    .with_phone(phone)
                    .with_address(address)
            })
            .collect()
    }
}

impl SampleData for Order {
    fn samples(now: DateTime<Utc>) -> Vec<Self> {
        const SEEDS: [(&str, &str, &str, &str); 2] = [
            ("ORD001", "123 Main St", "PO001", "TX001"),
            ("ORD002", "456 Market St", "PO002", "TX002"),
        ];
        seed_ids()
            .zip(SEEDS)
            .map(|(id, (code, address, po_number, tax_code))| {
                Order::new(EntityMeta::new(id, now), code, now)
                    .with_delivery_address(address)
                    .with_po_number(po_number)
                    .with_tax_code(tax_code)
            })
            .collect()
    }
}
