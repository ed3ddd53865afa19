/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public OCCE adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    API_VERSION,
    ClientConfig,
    Credentials,
    DEFAULT_ERROR_MESSAGE,
    Endpoint,
    OcceClient,
    OcceError,
    RequestSigner,
    Result,
    Verb,
    check_response,
};

// Re-export all types
pub use types::*;
