//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages never check auth themselves; `AuthProvider` only
//! renders them once the session agrees with the route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod post_editor;
pub mod posts;
pub mod register;
