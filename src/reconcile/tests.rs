//! Tests for reconcile module

use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Default, PartialEq)]
struct Ticket {
    id: Option<u64>,
    label: String,
    tags: Vec<String>,
    price: Option<f64>,
    note: Option<String>,
}

crate::impl_reconcile!(Ticket {
    id,
    label,
    tags,
    price,
    note,
});

fn full() -> Ticket {
    Ticket {
        id: Some(7),
        label: "request".into(),
        tags: vec!["a".into(), "b".into()],
        price: Some(1.5),
        note: Some("from request".into()),
    }
}

// ============================================================================
// Presence Tests
// ============================================================================

#[test]
fn test_presence() {
    assert!(None::<u8>.is_absent());
    assert!(!Some(0u8).is_absent());
    assert!(String::new().is_absent());
    assert!(!"x".to_string().is_absent());
    assert!(Vec::<u8>::new().is_absent());
    assert!(!vec![0u8].is_absent());
}

#[test]
fn test_some_zero_is_present() {
    let mut target = Some(0.0_f64);
    fill_absent(&mut target, &Some(3.0));
    assert_eq!(target, Some(0.0));
}

// ============================================================================
// Reconcile Tests
// ============================================================================

#[test]
fn test_empty_response_takes_every_request_field() {
    let merged = Ticket::default().reconcile(&full());
    assert_eq!(merged, full());
}

#[test]
fn test_response_wins_on_conflict() {
    let response = Ticket {
        id: Some(99),
        label: "response".into(),
        tags: vec!["z".into()],
        price: Some(2.0),
        note: Some("from response".into()),
    };
    let merged = response.clone().reconcile(&full());
    assert_eq!(merged, response);
}

#[test]
fn test_mixed_fields() {
    let response = Ticket {
        id: Some(99),
        note: Some("server".into()),
        ..Default::default()
    };
    let merged = response.reconcile(&full());

    assert_eq!(
        merged,
        Ticket {
            id: Some(99),
            label: "request".into(),
            tags: vec!["a".into(), "b".into()],
            price: Some(1.5),
            note: Some("server".into()),
        }
    );
}

#[test]
fn test_both_absent_stays_absent() {
    let merged = Ticket::default().reconcile(&Ticket::default());
    assert_eq!(merged, Ticket::default());
}

#[test]
fn test_fill_absent_from_in_place() {
    let mut response = Ticket {
        label: "kept".into(),
        ..Default::default()
    };
    response.fill_absent_from(&full());
    assert_eq!(response.label, "kept");
    assert_eq!(response.id, Some(7));
}
