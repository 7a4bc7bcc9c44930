/*
[INPUT]:  Client configuration, method names and positional arguments
[OUTPUT]: Signed requests, classified responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod endpoints;
pub mod error;
pub mod executor;
pub mod invoker;
pub mod signature;
pub mod url_builder;

pub use error::{PaladinsError, Result};
pub use signature::RequestSigner;

pub use client::PaladinsClient;
pub use executor::{DomainFailure, Envelope};
pub use invoker::{CallOptions, MAX_SESSION_RETRIES, Shape};
pub use url_builder::{SignedRequest, UrlArgs};
