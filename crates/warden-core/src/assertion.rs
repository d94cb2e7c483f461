//! Assertion exchange messages
//!
//! A generator advertises what it can produce with an [`AssertionOffer`], a
//! verifier says what it will accept with an [`AssertionRequest`], and the
//! generator answers with an [`Assertion`] bound to caller-supplied user data.

use serde::{Deserialize, Serialize};

use crate::identity::AssertionDescription;

/// Advertisement of an assertion a generator is able to produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionOffer {
    /// Authority producing the assertion
    pub description: AssertionDescription,
    /// Authority-specific offer details
    #[serde(default)]
    pub additional_information: Vec<u8>,
}

/// Request for an assertion a verifier is able to check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionRequest {
    /// Authority expected to produce the assertion
    pub description: AssertionDescription,
    /// Authority-specific request details
    #[serde(default)]
    pub additional_information: Vec<u8>,
}

/// Statement about an enclave's identity, bound to user data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// Authority that produced the assertion
    pub description: AssertionDescription,
    /// Authority-specific encoding of the assertion
    pub assertion: Vec<u8>,
}
