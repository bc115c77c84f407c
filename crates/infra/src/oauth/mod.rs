//! OAuth 2.0 authorization code flow: loopback callback and token exchange

pub mod callback;
pub mod coordinator;

pub use callback::CallbackServer;
pub use coordinator::{callback_target, AuthCoordinator};
