//! Null assertion verifier

use warden_core::{
    Assertion, AssertionOffer, AssertionRequest, AssertionVerifier, AuthorityError,
    EnclaveAssertionAuthority, EnclaveIdentity, EnclaveIdentityType, InitLatch, LatchTransition,
};

use crate::assertion::{null_description, NullAssertion, NULL_AUTHORITY_TYPE};

/// Verifier of null-identity assertions
///
/// Accepts any configuration; the payload is ignored.
#[derive(Debug, Default)]
pub struct NullAssertionVerifier {
    initialized: InitLatch<()>,
}

impl NullAssertionVerifier {
    /// Create an uninitialized verifier
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_initialized(&self) -> Result<(), AuthorityError> {
        if self.initialized.is_initialized() {
            Ok(())
        } else {
            Err(AuthorityError::not_initialized(null_description()))
        }
    }
}

impl EnclaveAssertionAuthority for NullAssertionVerifier {
    fn identity_type(&self) -> EnclaveIdentityType {
        EnclaveIdentityType::NullIdentity
    }

    fn authority_type(&self) -> &str {
        NULL_AUTHORITY_TYPE
    }

    fn is_initialized(&self) -> bool {
        self.initialized.is_initialized()
    }

    fn try_initialize(&self, _config: &[u8]) -> Result<(), AuthorityError> {
        let transition = self.initialized.try_initialize(|| Ok::<_, AuthorityError>(()))?;
        if transition == LatchTransition::Initialized {
            tracing::debug!("Null assertion verifier initialized");
        }
        Ok(())
    }
}

impl AssertionVerifier for NullAssertionVerifier {
    fn create_assertion_request(&self) -> Result<AssertionRequest, AuthorityError> {
        self.ensure_initialized()?;
        Ok(AssertionRequest {
            description: self.description(),
            additional_information: Vec::new(),
        })
    }

    fn can_verify(&self, offer: &AssertionOffer) -> Result<bool, AuthorityError> {
        self.ensure_initialized()?;
        Ok(offer.description == self.description())
    }

    fn verify(
        &self,
        user_data: &[u8],
        assertion: &Assertion,
    ) -> Result<EnclaveIdentity, AuthorityError> {
        self.ensure_initialized()?;
        if assertion.description != self.description() {
            return Err(AuthorityError::invalid_argument(format!(
                "Assertion from {} cannot be verified by the null verifier",
                assertion.description
            )));
        }

        let body = NullAssertion::decode(&assertion.assertion)?;
        if !body.is_bound_to(user_data) {
            return Err(AuthorityError::verification(
                "Assertion is not bound to the provided user data",
            ));
        }

        Ok(EnclaveIdentity {
            description: self.description(),
            identity: Vec::new(),
        })
    }
}
