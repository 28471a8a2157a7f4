//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session and API client from Leptos context providers
//! installed by `App`.

pub mod auth_provider;
pub mod loading;
pub mod nav_bar;
pub mod post_card;
pub mod post_form;
