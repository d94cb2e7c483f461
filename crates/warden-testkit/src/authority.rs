//! Controllable fake authority
//!
//! [`FakeAuthority`] honours the real initialization contract (it is built on
//! [`InitLatch`]) while recording every call, so tests can observe exactly
//! what an orchestrator did to it.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use warden_core::{
    Assertion, AssertionDescription, AssertionGenerator, AssertionOffer, AssertionRequest,
    AssertionVerifier, AuthorityError, EnclaveAssertionAuthority, EnclaveIdentity,
    EnclaveIdentityType, InitLatch, LatchTransition,
};

/// Authority whose initialization outcome is scripted by the test
#[derive(Debug)]
pub struct FakeAuthority {
    description: AssertionDescription,
    latch: InitLatch<Vec<u8>>,
    attempts: Mutex<Vec<Vec<u8>>>,
    executions: AtomicUsize,
    rejected_configs: Vec<Vec<u8>>,
    failing: AtomicBool,
    init_delay: Option<Duration>,
}

impl FakeAuthority {
    /// Create a fake that accepts every configuration
    pub fn new(identity_type: EnclaveIdentityType, authority_type: impl Into<String>) -> Self {
        Self {
            description: AssertionDescription::new(identity_type, authority_type),
            latch: InitLatch::new(),
            attempts: Mutex::new(Vec::new()),
            executions: AtomicUsize::new(0),
            rejected_configs: Vec::new(),
            failing: AtomicBool::new(false),
            init_delay: None,
        }
    }

    /// Reject initialization with exactly this configuration
    pub fn rejecting(mut self, config: impl Into<Vec<u8>>) -> Self {
        self.rejected_configs.push(config.into());
        self
    }

    /// Reject every initialization until [`set_failing(false)`](Self::set_failing)
    pub fn failing(self) -> Self {
        self.failing.store(true, Ordering::SeqCst);
        self
    }

    /// Sleep inside the underlying initialization, widening race windows
    pub fn with_init_delay(mut self, delay: Duration) -> Self {
        self.init_delay = Some(delay);
        self
    }

    /// Toggle unconditional rejection
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Configurations passed to every `try_initialize` call, in call order
    pub fn attempts(&self) -> Vec<Vec<u8>> {
        self.attempts.lock().clone()
    }

    /// Number of `try_initialize` calls
    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().len()
    }

    /// Number of times the underlying initialization actually ran
    pub fn execution_count(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }

    /// Configuration the authority was successfully initialized with
    pub fn initialized_config(&self) -> Option<Vec<u8>> {
        self.latch.get().map(|config| config.as_ref().clone())
    }

    fn ensure_initialized(&self) -> Result<(), AuthorityError> {
        if self.latch.is_initialized() {
            Ok(())
        } else {
            Err(AuthorityError::not_initialized(&self.description))
        }
    }
}

impl EnclaveAssertionAuthority for FakeAuthority {
    fn identity_type(&self) -> EnclaveIdentityType {
        self.description.identity_type
    }

    fn authority_type(&self) -> &str {
        &self.description.authority_type
    }

    fn is_initialized(&self) -> bool {
        self.latch.is_initialized()
    }

    fn try_initialize(&self, config: &[u8]) -> Result<(), AuthorityError> {
        self.attempts.lock().push(config.to_vec());

        self.latch
            .try_initialize(|| {
                self.executions.fetch_add(1, Ordering::SeqCst);
                if let Some(delay) = self.init_delay {
                    std::thread::sleep(delay);
                }

                if self.failing.load(Ordering::SeqCst) {
                    return Err(AuthorityError::unavailable("scripted failure"));
                }
                if self.rejected_configs.iter().any(|rejected| rejected == config) {
                    return Err(AuthorityError::invalid_config("scripted rejection"));
                }
                Ok(config.to_vec())
            })
            .map(|_: LatchTransition| ())
    }
}

impl AssertionGenerator for FakeAuthority {
    fn create_assertion_offer(&self) -> Result<AssertionOffer, AuthorityError> {
        self.ensure_initialized()?;
        Ok(AssertionOffer {
            description: self.description.clone(),
            additional_information: Vec::new(),
        })
    }

    fn can_generate(&self, request: &AssertionRequest) -> Result<bool, AuthorityError> {
        self.ensure_initialized()?;
        Ok(request.description == self.description)
    }

    fn generate(
        &self,
        user_data: &[u8],
        _request: &AssertionRequest,
    ) -> Result<Assertion, AuthorityError> {
        self.ensure_initialized()?;
        Ok(Assertion {
            description: self.description.clone(),
            assertion: user_data.to_vec(),
        })
    }
}

impl AssertionVerifier for FakeAuthority {
    fn create_assertion_request(&self) -> Result<AssertionRequest, AuthorityError> {
        self.ensure_initialized()?;
        Ok(AssertionRequest {
            description: self.description.clone(),
            additional_information: Vec::new(),
        })
    }

    fn can_verify(&self, offer: &AssertionOffer) -> Result<bool, AuthorityError> {
        self.ensure_initialized()?;
        Ok(offer.description == self.description)
    }

    fn verify(
        &self,
        user_data: &[u8],
        assertion: &Assertion,
    ) -> Result<EnclaveIdentity, AuthorityError> {
        self.ensure_initialized()?;
        if assertion.assertion != user_data {
            return Err(AuthorityError::verification("user data mismatch"));
        }
        Ok(EnclaveIdentity {
            description: self.description.clone(),
            identity: Vec::new(),
        })
    }
}
