//! Orchestrator behaviour against fake registries

use std::sync::Arc;

use warden_core::{AuthorityConfig, EnclaveIdentityType::*, WardenConfig};
use warden_init::{
    initialize_enclave_assertion_authorities, initialize_from_config, InitializationError,
};
use warden_registry::AuthorityRegistries;
use warden_testkit::*;

/// Run the orchestrator with an empty record sequence
fn initialize_without_records(registries: &AuthorityRegistries) -> Result<(), InitializationError> {
    initialize_enclave_assertion_authorities(Vec::<AuthorityConfig>::new(), registries)
}

#[test]
fn record_matching_only_a_generator_still_reports_failure() {
    let generator = fake(NullIdentity, "Any");
    let registries = registries(&[generator.clone()], &[]);

    let configs = [authority_config(NullIdentity, "Any", b"payload")];
    let result = initialize_enclave_assertion_authorities(&configs, &registries);

    assert_eq!(result, Err(InitializationError));
    assert_eq!(generator.initialized_config().as_deref(), Some(&b"payload"[..]));
}

#[test]
fn empty_input_initializes_every_authority_with_empty_config() {
    let generators = [fake(NullIdentity, "Any"), fake(CodeIdentity, "Local")];
    let verifiers = [fake(NullIdentity, "Any"), fake(CertIdentity, "X509")];
    let registries = registries(&generators, &verifiers);

    let result = initialize_without_records(&registries);

    assert_eq!(result, Ok(()));
    for authority in generators.iter().chain(&verifiers) {
        assert_eq!(authority.attempts(), vec![Vec::<u8>::new()]);
        assert_eq!(authority.initialized_config().as_deref(), Some(&b""[..]));
    }
}

#[test]
fn empty_input_fails_when_an_authority_rejects_the_empty_config() {
    let picky = Arc::new(FakeAuthority::new(CodeIdentity, "Local").rejecting(Vec::new()));
    let relaxed = fake(NullIdentity, "Any");
    let registries = registries(&[picky.clone()], &[relaxed.clone()]);

    let result = initialize_without_records(&registries);

    assert_eq!(result, Err(InitializationError));
    assert!(picky.initialized_config().is_none());
    assert!(relaxed.initialized_config().is_some());
}

#[test]
fn one_failing_authority_fails_the_whole_call() {
    let healthy = [fake(NullIdentity, "Any"), fake(CodeIdentity, "Local")];
    let broken = Arc::new(FakeAuthority::new(CertIdentity, "X509").failing());
    let verifiers = [fake(NullIdentity, "Any"), fake(CodeIdentity, "Local")];
    let registries = registries(
        &[healthy[0].clone(), broken.clone(), healthy[1].clone()],
        &verifiers,
    );

    let result = initialize_without_records(&registries);

    assert_eq!(result, Err(InitializationError));
    assert!(broken.initialized_config().is_none());
    for authority in healthy.iter().chain(&verifiers) {
        assert!(authority.initialized_config().is_some());
    }
}

#[test]
fn derivation_failure_does_not_stop_later_records() {
    let generator = fake(CodeIdentity, "Local");
    let verifier = fake(CodeIdentity, "Local");
    let registries = registries(&[generator.clone()], &[verifier.clone()]);

    let configs = vec![
        authority_config(UnknownIdentity, "Local", b"bad"),
        authority_config(CodeIdentity, "", b"bad"),
        authority_config(CodeIdentity, "Local", b"good"),
    ];
    let result = initialize_enclave_assertion_authorities(&configs, &registries);

    assert_eq!(result, Err(InitializationError));
    assert_eq!(generator.initialized_config().as_deref(), Some(&b"good"[..]));
    assert_eq!(verifier.initialized_config().as_deref(), Some(&b"good"[..]));
}

#[test]
fn unmatched_record_does_not_stop_later_records() {
    let generator = fake(CodeIdentity, "Local");
    let verifier = fake(CodeIdentity, "Local");
    let registries = registries(&[generator.clone()], &[verifier.clone()]);

    let configs = [
        authority_config(CertIdentity, "Nowhere", b"lost"),
        authority_config(CodeIdentity, "Local", b"good"),
    ];
    let result = initialize_enclave_assertion_authorities(&configs, &registries);

    assert_eq!(result, Err(InitializationError));
    assert_eq!(generator.initialized_config().as_deref(), Some(&b"good"[..]));
    assert_eq!(verifier.initialized_config().as_deref(), Some(&b"good"[..]));
}

#[test]
fn failed_record_payload_is_retried_by_fallback_pass() {
    let generator = Arc::new(FakeAuthority::new(CodeIdentity, "Local").rejecting(b"bad".to_vec()));
    let verifier = fake(CodeIdentity, "Local");
    let registries = registries(&[generator.clone()], &[verifier.clone()]);

    let configs = [authority_config(CodeIdentity, "Local", b"bad")];
    let result = initialize_enclave_assertion_authorities(&configs, &registries);

    assert_eq!(result, Err(InitializationError));
    assert_eq!(generator.attempts(), vec![b"bad".to_vec(), Vec::new()]);
    assert_eq!(generator.execution_count(), 2);
    assert_eq!(generator.initialized_config().as_deref(), Some(&b""[..]));
}

#[test]
fn repeated_records_keep_the_first_successful_payload() {
    let generator = fake(NullIdentity, "Any");
    let verifier = fake(NullIdentity, "Any");
    let registries = registries(&[generator.clone()], &[verifier.clone()]);

    let configs = [
        authority_config(NullIdentity, "Any", b"first"),
        authority_config(NullIdentity, "Any", b"second"),
    ];
    let result = initialize_enclave_assertion_authorities(&configs, &registries);

    assert_eq!(result, Ok(()));
    for authority in [&generator, &verifier] {
        assert_eq!(authority.attempt_count(), 3);
        assert_eq!(authority.execution_count(), 1);
        assert_eq!(authority.initialized_config().as_deref(), Some(&b"first"[..]));
    }
}

#[test]
fn second_call_has_no_further_effect() {
    let generator = fake(NullIdentity, "Any");
    let verifier = fake(CodeIdentity, "Local");
    let registries = registries(&[generator.clone()], &[verifier.clone()]);
    let configs = [authority_config(NullIdentity, "Any", b"cfg")];

    // No verifier matches the record, so the first call fails.
    let first = initialize_enclave_assertion_authorities(&configs, &registries);
    let second = initialize_without_records(&registries);

    assert_eq!(first, Err(InitializationError));
    assert_eq!(second, Ok(()));
    assert_eq!(generator.execution_count(), 1);
    assert_eq!(verifier.execution_count(), 1);
    assert_eq!(generator.initialized_config().as_deref(), Some(&b"cfg"[..]));
}

#[test]
fn identical_calls_are_idempotent() {
    let generator = fake(NullIdentity, "Any");
    let verifier = fake(NullIdentity, "Any");
    let registries = registries(&[generator.clone()], &[verifier.clone()]);
    let configs = [authority_config(NullIdentity, "Any", b"cfg")];

    assert_eq!(initialize_enclave_assertion_authorities(&configs, &registries), Ok(()));
    assert_eq!(initialize_enclave_assertion_authorities(&configs, &registries), Ok(()));

    for authority in [&generator, &verifier] {
        assert_eq!(authority.execution_count(), 1);
        assert_eq!(authority.attempt_count(), 4);
    }
}

#[test]
fn authority_that_recovers_succeeds_on_a_later_call() {
    let generator = Arc::new(FakeAuthority::new(NullIdentity, "Any").failing());
    let registries = registries(&[generator.clone()], &[]);

    let first = initialize_without_records(&registries);
    generator.set_failing(false);
    let second = initialize_without_records(&registries);

    assert_eq!(first, Err(InitializationError));
    assert_eq!(second, Ok(()));
    assert_eq!(generator.execution_count(), 2);
}

#[test]
fn accepts_lazily_produced_records() {
    let generator = fake(CodeIdentity, "Local");
    let verifier = fake(CodeIdentity, "Local");
    let registries = registries(&[generator.clone()], &[verifier.clone()]);

    let records = ["Local"]
        .into_iter()
        .map(|authority_type| authority_config(CodeIdentity, authority_type, b"lazy"));
    let result = initialize_enclave_assertion_authorities(records, &registries);

    assert_eq!(result, Ok(()));
    assert_eq!(generator.initialized_config().as_deref(), Some(&b"lazy"[..]));
}

#[test]
fn initializes_from_loaded_config_file() {
    let generator = fake(NullIdentity, "Any");
    let verifier = fake(NullIdentity, "Any");
    let registries = registries(&[generator.clone()], &[verifier.clone()]);

    let config = WardenConfig {
        authorities: vec![authority_config(NullIdentity, "Any", b"from-file")],
    };
    assert_eq!(initialize_from_config(&config, &registries), Ok(()));
    assert_eq!(verifier.initialized_config().as_deref(), Some(&b"from-file"[..]));
}

#[test]
fn aggregate_error_message_is_generic() {
    let registries = registries(&[], &[]);
    let configs = [authority_config(NullIdentity, "Any", b"")];

    let err = initialize_enclave_assertion_authorities(&configs, &registries).unwrap_err();
    assert_eq!(
        err.to_string(),
        "One or more errors occurred while attempting to initialize assertion generators and \
         assertion verifiers"
    );
}
