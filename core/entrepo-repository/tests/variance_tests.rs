//! Widening of read-only repositories and narrowing of publishers, as seen
//! from the repository side.

mod common;

use common::{alice, customer, id, order};
use entrepo_events::{EventPublisher, EventPublisherExt, GenericEventPublisher, RecordingPublisher};
use entrepo_model::{Customer, Entity, EntityHeader, Order};
use entrepo_repository::{
    CustomerRepository, InMemoryRepository, OrderRepository, ReadRepository, ReadRepositoryExt,
    Repository, Widened,
};
use entrepo_types::LifecycleEvent;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

fn headers(repo: &dyn ReadRepository<dyn Entity>) -> Vec<EntityHeader> {
    repo.get_all().into_iter().map(|e| e.header()).collect()
}

// ── Widening ─────────────────────────────────────────────────────

#[test]
fn widened_view_enumerates_same_entities() {
    let repo = CustomerRepository::seeded(None);
    let specific: Vec<_> = repo.get_all().into_iter().map(|c| c.header()).collect();
    assert_eq!(headers(&repo.as_entities()), specific);
}

#[test]
fn widened_view_tags_every_entity_with_its_variant() {
    let orders = OrderRepository::seeded(None);
    let tags: Vec<_> = headers(&orders.as_entities())
        .into_iter()
        .map(|h| h.entity_type)
        .collect();
    assert_eq!(tags, vec!["Order", "Order"]);
}

#[test]
fn widened_find_by_id_matches_specific() {
    let repo = CustomerRepository::seeded(None);
    let general = repo.widen::<dyn Entity>();
    assert_eq!(general.find_by_id(id(1)).map(|e| e.id()), Some(id(1)));
    assert!(general.find_by_id(id(3)).is_none());
}

#[test]
fn widened_view_tracks_later_mutations() {
    let mut repo = CustomerRepository::seeded(None);
    repo.add(alice()).unwrap();
    let general = repo.as_entities();
    assert_eq!(general.get_all().len(), 3);
    assert_eq!(general.inner().len(), 3);
}

#[test]
fn heterogeneous_repositories_share_one_audit_signature() {
    let customers = CustomerRepository::seeded(None);
    let orders = OrderRepository::seeded(None);
    let views: [&dyn ReadRepository<dyn Entity>; 2] = [&customers.as_entities(), &orders.as_entities()];
    let total: usize = views.iter().map(|v| v.get_all().len()).sum();
    assert_eq!(total, 4);
}

#[test]
fn widening_through_boxed_trait_object() {
    let boxed: Box<dyn ReadRepository<Order>> = Box::new(OrderRepository::seeded(None));
    let general: Widened<'_, _, Order, dyn Entity> = boxed.widen();
    assert_eq!(headers(&general).len(), 2);
}

#[test]
fn widening_shared_repository() {
    let shared = Arc::new(CustomerRepository::seeded(None));
    assert_eq!(headers(&shared.as_entities()).len(), 2);
}

// ── Narrowing into repositories ──────────────────────────────────

#[test]
fn general_publisher_serves_customer_repository() {
    let recorder = Arc::new(RecordingPublisher::<EntityHeader>::new());
    let publisher: Arc<dyn EventPublisher<Customer>> =
        Arc::new(Arc::clone(&recorder).narrow::<dyn Entity>());
    let mut repo = CustomerRepository::seeded(Some(publisher));

    let robert = customer(4, "Robert Brown");
    repo.add(robert.clone()).unwrap();
    repo.update(robert.clone()).unwrap();
    repo.delete(&robert).unwrap();

    let expected: Vec<_> = LifecycleEvent::ALL
        .into_iter()
        .map(|event| (event, robert.header()))
        .collect();
    assert_eq!(recorder.events(), expected);
}

#[test]
fn one_general_publisher_shared_by_both_repositories() {
    let recorder = Arc::new(RecordingPublisher::<EntityHeader>::new());
    let mut customers =
        CustomerRepository::seeded(Some(Arc::new(Arc::clone(&recorder).narrow::<dyn Entity>())));
    let mut orders =
        OrderRepository::seeded(Some(Arc::new(Arc::clone(&recorder).narrow::<dyn Entity>())));

    customers.add(alice()).unwrap();
    orders.add(order(3)).unwrap();

    let tags: Vec<_> = recorder.events().into_iter().map(|(_, h)| h.entity_type).collect();
    assert_eq!(tags, vec!["Customer", "Order"]);
}

#[test]
fn narrowed_logging_publisher_accepts_mutations() {
    let mut repo = InMemoryRepository::<Order>::seeded(Some(Arc::new(
        GenericEventPublisher.narrow::<dyn Entity>(),
    )));
    assert!(repo.add(order(3)).is_ok());
    assert!(repo.delete(&order(3)).is_ok());
    assert!(repo.has_publisher());
}

// ── Properties ───────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add(u64),
    Update(u64),
    Delete(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..20).prop_map(Op::Add),
        (1u64..20).prop_map(Op::Update),
        (1u64..20).prop_map(Op::Delete),
    ]
}

proptest! {
    /// find_by_id hits exactly the identifiers that were added and not since deleted.
    #[test]
    fn find_by_id_tracks_live_ids(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut repo = InMemoryRepository::<Order>::new(None);
        let mut model: Vec<Order> = Vec::new();

        for op in ops {
            match op {
                Op::Add(raw) => {
                    repo.add(order(raw)).unwrap();
                    model.push(order(raw));
                }
                Op::Update(raw) => {
                    let replacement = order(raw).with_tax_code("TX-UPDATED");
                    if let Some(slot) = model.iter_mut().find(|o| o.id() == id(raw)) {
                        *slot = replacement.clone();
                    }
                    repo.update(replacement).unwrap();
                }
                Op::Delete(raw) => {
                    let target = order(raw);
                    if let Some(index) = model.iter().position(|o| *o == target) {
                        model.remove(index);
                    }
                    repo.delete(&target).unwrap();
                }
            }
        }

        for raw in 1u64..20 {
            let expected = model.iter().find(|o| o.id() == id(raw));
            prop_assert_eq!(repo.find_by_id(id(raw)), expected);
        }
        let all: Vec<_> = repo.get_all().into_iter().cloned().collect();
        prop_assert_eq!(all, model);
    }

    /// Widening neither filters nor reorders.
    #[test]
    fn widening_preserves_enumeration(raw_ids in prop::collection::vec(1u64..1000, 0..30)) {
        let repo = InMemoryRepository::with_entities(
            raw_ids.iter().map(|&raw| customer(raw, "c")).collect(),
            None,
        );
        let specific: Vec<_> = repo.get_all().into_iter().map(|c| c.id()).collect();
        let general: Vec<_> = repo.as_entities().get_all().into_iter().map(|e| e.id()).collect();
        prop_assert_eq!(general, specific);
    }

    /// Every mutation reaches a narrowed general publisher exactly once, unmodified.
    #[test]
    fn narrowed_publisher_sees_every_mutation(raw_ids in prop::collection::vec(1u64..50, 1..20)) {
        let recorder = Arc::new(RecordingPublisher::<EntityHeader>::new());
        let mut repo = CustomerRepository::new(Some(Arc::new(
            Arc::clone(&recorder).narrow::<dyn Entity>(),
        )));

        for &raw in &raw_ids {
            repo.add(customer(raw, "c")).unwrap();
        }

        let seen: Vec<_> = recorder.events().into_iter().map(|(_, h)| h.id.get()).collect();
        prop_assert_eq!(seen, raw_ids);
        prop_assert_eq!(recorder.count(LifecycleEvent::Created), repo.len());
    }
}
