//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the session value, `session` owns it reactively, `bootstrap`
//! fills it in once at startup, and `actions` are the user-initiated flows
//! that change it.

pub mod actions;
pub mod auth;
pub mod bootstrap;
pub mod session;
