//! Concurrent orchestrator invocations

use assert_matches::assert_matches;
use std::sync::{Arc, Barrier};
use std::time::Duration;

use warden_core::{AuthorityConfig, EnclaveAssertionAuthority, EnclaveIdentityType};
use warden_init::{initialize_enclave_assertion_authorities, InitializationError};
use warden_testkit::*;

const CALLERS: usize = 8;

#[test]
fn concurrent_callers_initialize_each_authority_once() {
    let slow = |authority_type: &str| {
        Arc::new(
            FakeAuthority::new(EnclaveIdentityType::CodeIdentity, authority_type)
                .with_init_delay(Duration::from_millis(5)),
        )
    };
    let generators = vec![slow("Local"), slow("Remote")];
    let verifiers = vec![slow("Local"), slow("Remote")];
    let registries = registries(&generators, &verifiers);
    let configs = vec![authority_config(EnclaveIdentityType::CodeIdentity, "Local", b"cfg")];
    let barrier = Barrier::new(CALLERS);

    let results: Vec<_> = std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(CALLERS);
        for _ in 0..CALLERS {
            handles.push(scope.spawn(|| {
                barrier.wait();
                initialize_enclave_assertion_authorities(&configs, &registries)
            }));
        }
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(Result::is_ok));
    for authority in generators.iter().chain(&verifiers) {
        assert_eq!(authority.execution_count(), 1);
        // The record and the fallback pass both reach "Local"; only the fallback reaches "Remote".
        let per_call = if authority.authority_type() == "Local" { 2 } else { 1 };
        assert_eq!(authority.attempt_count(), CALLERS * per_call);
    }
}

#[test]
fn each_concurrent_caller_reports_only_its_own_failures() {
    let generator = fake(EnclaveIdentityType::NullIdentity, "Any");
    let verifier = fake(EnclaveIdentityType::NullIdentity, "Any");
    let registries = registries(&[generator.clone()], &[verifier.clone()]);

    let good = vec![authority_config(EnclaveIdentityType::NullIdentity, "Any", b"")];
    let bad = vec![authority_config(EnclaveIdentityType::CertIdentity, "Missing", b"")];
    let barrier = Barrier::new(2);

    let (good_result, bad_result) = std::thread::scope(|scope| {
        let good_handle = scope.spawn(|| {
            barrier.wait();
            initialize_enclave_assertion_authorities(&good, &registries)
        });
        let bad_handle = scope.spawn(|| {
            barrier.wait();
            initialize_enclave_assertion_authorities(&bad, &registries)
        });
        (good_handle.join().unwrap(), bad_handle.join().unwrap())
    });

    assert_eq!(good_result, Ok(()));
    assert_matches!(bad_result, Err(InitializationError));
    assert_eq!(generator.execution_count(), 1);
    assert_eq!(verifier.execution_count(), 1);
}

#[test]
fn empty_config_sequence_from_many_threads() {
    let generator = fake(EnclaveIdentityType::NullIdentity, "Any");
    let registries = registries(&[generator.clone()], &[]);

    std::thread::scope(|scope| {
        for _ in 0..CALLERS {
            scope.spawn(|| {
                assert_eq!(
                    initialize_enclave_assertion_authorities(
                        std::iter::empty::<AuthorityConfig>(),
                        &registries
                    ),
                    Ok(())
                );
            });
        }
    });

    assert_eq!(generator.execution_count(), 1);
    assert_eq!(generator.attempt_count(), CALLERS);
}
