use entrepo_types::{Error, LifecycleEvent};

#[test]
fn as_str_matches_display() {
    for event in LifecycleEvent::ALL {
        assert_eq!(event.as_str(), event.to_string());
    }
}

#[test]
fn parse_known_events() {
    assert_eq!("created".parse::<LifecycleEvent>(), Ok(LifecycleEvent::Created));
    assert_eq!("updated".parse::<LifecycleEvent>(), Ok(LifecycleEvent::Updated));
    assert_eq!("deleted".parse::<LifecycleEvent>(), Ok(LifecycleEvent::Deleted));
}

#[test]
fn parse_unknown_event() {
    assert_eq!(
        "archived".parse::<LifecycleEvent>(),
        Err(Error::UnknownEvent("archived".to_string()))
    );
}

#[test]
fn serde_uses_snake_case() {
    let json = serde_json::to_string(&LifecycleEvent::Deleted).unwrap();
    assert_eq!(json, r#""deleted""#);
    let parsed: LifecycleEvent = serde_json::from_str(r#""updated""#).unwrap();
    assert_eq!(parsed, LifecycleEvent::Updated);
}
