//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure render functions of their inputs; pages own the state
//! and the handlers wired into them.

pub mod error_banner;
pub mod footer;
pub mod search_bar;
pub mod weather_card;
