/*
[INPUT]:  Developer credentials and the session file
[OUTPUT]: Session tokens, created, persisted and renewed on demand
[POS]:    Auth layer - handles Paladins API session lifecycle
[UPDATE]: When the session flow or persistence format changes
*/

pub mod manager;
pub mod session;
pub mod store;

pub use manager::SessionManager;
pub use session::{Session, SessionRecord};
pub use store::SessionStore;
