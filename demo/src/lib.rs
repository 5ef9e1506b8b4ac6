//! Demonstration driver for entrepo.
//!
//! Seeds customer and order repositories, exercises every lifecycle
//! operation, and audits both stores through the general entity view.
//! All sample data is built here and injected into the repositories.

use anyhow::{Context, Result};
use chrono::Utc;
use entrepo_audit::{AuditReport, describe};
use entrepo_events::{
    CustomerEventPublisher, EventPublisher, EventPublisherExt, OrderEventPublisher,
    RecordingPublisher,
};
use entrepo_model::{Customer, Entity, EntityHeader, EntityMeta, Order, SampleData, widen_all};
use entrepo_repository::{
    CustomerRepository, OrderRepository, ReadRepository, ReadRepositoryExt, Repository,
    RepositoryConfig,
};
use entrepo_types::LifecycleEvent;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Settings read from a JSON configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub repository: RepositoryConfig,
}

/// Reads a [`DemoConfig`] from a JSON file.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

/// How the audit report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => report.to_json().context("rendering audit report"),
    }
}

/// What a demo run produced.
#[derive(Debug)]
pub struct DemoOutcome {
    /// Audit of the final customer and order stores.
    pub report: AuditReport,
    /// Notifications the shared general-view recorder received from both
    /// repositories once it was narrowed and installed.
    pub trail: Vec<(LifecycleEvent, EntityHeader)>,
}

/// Runs the full demonstration scenario.
pub fn run(config: RepositoryConfig) -> Result<DemoOutcome> {
    let now = Utc::now();

    // A specific variant is usable wherever the general view is expected.
    let samples = Customer::samples(now);
    for entity in widen_all(&samples) {
        info!("{} {} active={}", entity.entity_type(), entity.id(), entity.is_active());
    }
    for order in Order::samples(now) {
        info!("{}", describe(&order));
    }

    let mut customers =
        CustomerRepository::seeded(Some(Arc::new(CustomerEventPublisher))).with_config(config);
    let mut orders =
        OrderRepository::seeded(Some(Arc::new(OrderEventPublisher))).with_config(config);

    for record in AuditReport::from_repository(&customers.as_entities()).records {
        info!("Audit: {} {}", record.entity_type, record.id);
    }

    let alice_id = customers.next_id().context("customer identifiers exhausted")?;
    let alice = Customer::new(EntityMeta::new(alice_id, now), "CUST003", "Alice Johnson")
        .with_email("alice.johnson@example.com")
        .with_phone("555-9876")
        .with_address("789 Elm St");
    customers.add(alice.clone()).context("adding customer")?;

    let mut renamed = alice.clone();
    renamed.name = "Alice Johnson-Smith".to_string();
    renamed.meta.touch(Utc::now());
    customers.update(renamed).context("updating customer")?;

    // Deleting something that is not stored; notifies under the default policy.
    customers.delete(&alice).context("deleting stale customer")?;

    let order_id = orders.next_id().context("order identifiers exhausted")?;
    let next_order = Order::new(EntityMeta::new(order_id, now), "ORD003", now)
        .with_delivery_address("789 Elm St")
        .with_po_number("PO003")
        .with_tax_code("TX003");
    orders.add(next_order).context("adding order")?;

    // One recorder for the general view, narrowed to both variants.
    let recorder = Arc::new(RecordingPublisher::<EntityHeader>::new());
    let customer_publisher: Arc<dyn EventPublisher<Customer>> =
        Arc::new(Arc::clone(&recorder).narrow::<dyn Entity>());
    let order_publisher: Arc<dyn EventPublisher<Order>> =
        Arc::new(Arc::clone(&recorder).narrow::<dyn Entity>());

    let mut customers =
        CustomerRepository::with_entities(customers.as_slice().to_vec(), Some(customer_publisher))
            .with_config(config);
    let robert_id = customers.next_id().context("customer identifiers exhausted")?;
    let robert = Customer::new(EntityMeta::new(robert_id, now), "CUST007", "Robert Brown")
        .with_email("robert.brown@example.com")
        .with_phone("555-9876")
        .with_address("321 Oak St");
    customers.add(robert).context("adding customer through narrowed recorder")?;

    let first = customers.as_slice().first().cloned();
    if let Some(first) = first {
        customers.delete(&first).context("deleting first customer")?;
    }

    let mut orders =
        OrderRepository::with_entities(orders.as_slice().to_vec(), Some(order_publisher))
            .with_config(config);
    let stored = orders.find_by_id(order_id).cloned();
    if let Some(mut redirected) = stored {
        redirected.delivery_address = "321 Oak St".to_string();
        redirected.meta.touch(Utc::now());
        orders.update(redirected).context("updating order through narrowed recorder")?;
    }

    let report = AuditReport::from_repository(&customers.as_entities())
        .merge(AuditReport::from_repository(&orders.as_entities()));
    info!(
        "Audited {} entities across customers and orders",
        report.summary.total
    );

    Ok(DemoOutcome {
        report,
        trail: recorder.events(),
    })
}
