//! Board model, state transitions, projection and persistence. Nothing in
//! here touches the UI; views drive it through [`session::Session`].

pub mod format;
pub mod model;
pub mod palette;
pub mod platform;
pub mod projection;
pub mod session;
pub mod state;
pub mod storage;
