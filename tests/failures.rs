//! Factory failure handling.

use named_loggers::{Logger, NamedLoggerCache};

mod common;

use common::{BackendDown, CountingFactory};

#[test]
fn test_error_propagates_unchanged() {
    let cache = NamedLoggerCache::new(CountingFactory::failing_first(1));

    let err = cache.logger("Payments").unwrap_err();

    assert_eq!(err, BackendDown("Payments".to_string()));
    assert!(!cache.contains("payments"));
    assert!(cache.is_empty());
}

#[test]
fn test_retry_after_failure_invokes_factory_again() {
    let cache = NamedLoggerCache::new(CountingFactory::failing_first(2));

    assert!(cache.logger("x").is_err());
    assert!(cache.logger("X").is_err());

    let logger = cache.logger("x").unwrap();
    assert_eq!(logger.name(), "x");
    assert_eq!(logger.serial, 2);
    assert_eq!(cache.factory().calls(), 3);

    // Now cached; no further calls.
    cache.logger("x").unwrap();
    assert_eq!(cache.factory().calls(), 3);
}

#[test]
fn test_failure_for_one_name_does_not_affect_others() {
    let cache = NamedLoggerCache::new(CountingFactory::failing_first(1));

    assert!(cache.logger("first").is_err());
    let second = cache.logger("second").unwrap();

    assert_eq!(second.name(), "second");
    assert_eq!(cache.len(), 1);
    assert!(!cache.contains("first"));
}

#[test]
fn test_none_and_empty_after_failure() {
    let cache = NamedLoggerCache::new(CountingFactory::failing_first(1));

    assert_eq!(cache.get_logger(None).unwrap_err(), BackendDown(String::new()));
    let empty = cache.get_logger(Some("")).unwrap();
    let absent = cache.get_logger(None).unwrap();

    assert!(std::sync::Arc::ptr_eq(&empty, &absent));
    assert_eq!(cache.factory().calls(), 2);
}
