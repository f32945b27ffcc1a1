//! Error extension tests

use std::io;

use weft_domain::Error;
use weft_infrastructure::error_ext::ErrorContext;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_as_internal() {
    let err = failing().context("Loading bindings").unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
    assert_eq!(err.to_string(), "Internal error: Loading bindings: missing");
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);
}

#[test]
fn test_config_context_keeps_source() {
    let err = failing().config_context("Reading weft.toml").unwrap_err();
    assert!(matches!(
        err,
        Error::Configuration {
            source: Some(_),
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "Configuration error: Reading weft.toml: missing"
    );
}

#[test]
fn test_supply_context_is_a_supply_failure() {
    let err = "eighty".parse::<u16>().supply_context("Invalid port").unwrap_err();
    assert!(matches!(err, Error::SupplyFailed { .. }));
    assert!(err.to_string().starts_with("Invalid port: "));
}
