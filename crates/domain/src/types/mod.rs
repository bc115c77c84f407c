//! Domain types and models

pub mod playback;
pub mod session;
pub mod token;

pub use playback::NowPlaying;
pub use session::{AuthState, Session};
pub use token::TokenResponse;
