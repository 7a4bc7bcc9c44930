/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Paladins API client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod config;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Session, SessionManager, SessionStore};

pub use config::{ClientConfig, ClientOptions};

// Re-export commonly used types from http
pub use http::{
    CallOptions,
    PaladinsClient,
    PaladinsError,
    RequestSigner,
    Result,
    Shape,
    UrlArgs,
};

// Re-export all types
pub use types::*;
