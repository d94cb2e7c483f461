//! Null assertion generator

use warden_core::{
    Assertion, AssertionGenerator, AssertionOffer, AssertionRequest, AuthorityError,
    EnclaveAssertionAuthority, EnclaveIdentityType, InitLatch, LatchTransition,
};

use crate::assertion::{null_description, NullAssertion, NULL_AUTHORITY_TYPE};

/// Generator of null-identity assertions
///
/// Accepts any configuration. A non-empty configuration becomes the
/// `additional_information` of every assertion it generates.
#[derive(Debug, Default)]
pub struct NullAssertionGenerator {
    additional_information: InitLatch<Vec<u8>>,
}

impl NullAssertionGenerator {
    /// Create an uninitialized generator
    pub fn new() -> Self {
        Self::default()
    }

    fn initialized_information(&self) -> Result<Vec<u8>, AuthorityError> {
        self.additional_information
            .get()
            .map(|info| info.as_ref().clone())
            .ok_or_else(|| AuthorityError::not_initialized(null_description()))
    }
}

impl EnclaveAssertionAuthority for NullAssertionGenerator {
    fn identity_type(&self) -> EnclaveIdentityType {
        EnclaveIdentityType::NullIdentity
    }

    fn authority_type(&self) -> &str {
        NULL_AUTHORITY_TYPE
    }

    fn is_initialized(&self) -> bool {
        self.additional_information.is_initialized()
    }

    fn try_initialize(&self, config: &[u8]) -> Result<(), AuthorityError> {
        let transition = self
            .additional_information
            .try_initialize(|| Ok::<_, AuthorityError>(config.to_vec()))?;
        if transition == LatchTransition::Initialized {
            tracing::debug!(config_len = config.len(), "Null assertion generator initialized");
        }
        Ok(())
    }
}

impl AssertionGenerator for NullAssertionGenerator {
    fn create_assertion_offer(&self) -> Result<AssertionOffer, AuthorityError> {
        self.initialized_information()?;
        Ok(AssertionOffer {
            description: self.description(),
            additional_information: Vec::new(),
        })
    }

    fn can_generate(&self, request: &AssertionRequest) -> Result<bool, AuthorityError> {
        self.initialized_information()?;
        Ok(request.description == self.description())
    }

    fn generate(
        &self,
        user_data: &[u8],
        request: &AssertionRequest,
    ) -> Result<Assertion, AuthorityError> {
        let additional_information = self.initialized_information()?;
        if request.description != self.description() {
            return Err(AuthorityError::invalid_argument(format!(
                "Request for {} cannot be satisfied by the null generator",
                request.description
            )));
        }

        Ok(Assertion {
            description: self.description(),
            assertion: NullAssertion::new(additional_information, user_data).encode()?,
        })
    }
}
