//! Event types and observers.
//!
//! Submodules:
//! - [`activation`] – the scene was tapped; the toggle controller reacts
//! - [`switchdebug`] – toggle the diagnostics overlay on/off
pub mod activation;
pub mod switchdebug;
