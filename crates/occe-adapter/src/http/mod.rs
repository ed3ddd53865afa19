/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and validated API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod public;
pub mod response;
pub mod signature;
pub mod trade;

pub use error::{OcceError, Result};
pub use signature::RequestSigner;

pub use client::{API_VERSION, ClientConfig, Credentials, OcceClient};
pub use endpoint::{Endpoint, Verb};
pub use response::{DEFAULT_ERROR_MESSAGE, check_response};
