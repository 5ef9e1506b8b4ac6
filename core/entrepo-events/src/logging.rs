//! Publishers that report lifecycle notifications through `tracing`.

use crate::{EventPublisher, PublishResult};
use entrepo_model::{Customer, Entity, Order};
use tracing::info;

/// Logs customer notifications by display name.
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerEventPublisher;

impl EventPublisher<Customer> for CustomerEventPublisher {
    fn on_create(&self, entity: &Customer) -> PublishResult<()> {
        info!("Customer created: {}", entity.name);
        Ok(())
    }

    fn on_update(&self, entity: &Customer) -> PublishResult<()> {
        info!("Customer updated: {}", entity.name);
        Ok(())
    }

    fn on_delete(&self, entity: &Customer) -> PublishResult<()> {
        info!("Customer deleted: {}", entity.name);
        Ok(())
    }
}

/// Logs order notifications by order code.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderEventPublisher;

impl EventPublisher<Order> for OrderEventPublisher {
    fn on_create(&self, entity: &Order) -> PublishResult<()> {
        info!("Order created: {}", entity.code);
        Ok(())
    }

    fn on_update(&self, entity: &Order) -> PublishResult<()> {
        info!("Order updated: {}", entity.code);
        Ok(())
    }

    fn on_delete(&self, entity: &Order) -> PublishResult<()> {
        info!("Order deleted: {}", entity.code);
        Ok(())
    }
}

/// Logs notifications for any entity by type tag and identifier.
///
/// Implemented for the general view only; narrow it to serve a specific
/// repository.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericEventPublisher;

impl EventPublisher<dyn Entity> for GenericEventPublisher {
    fn on_create(&self, entity: &dyn Entity) -> PublishResult<()> {
        info!(entity_type = entity.entity_type(), "entity created: {}", entity.id());
        Ok(())
    }

    fn on_update(&self, entity: &dyn Entity) -> PublishResult<()> {
        info!(entity_type = entity.entity_type(), "entity updated: {}", entity.id());
        Ok(())
    }

    fn on_delete(&self, entity: &dyn Entity) -> PublishResult<()> {
        info!(entity_type = entity.entity_type(), "entity deleted: {}", entity.id());
        Ok(())
    }
}
