//! Ready-made widgets for **parlor** dialogue screens.
//!
//! Every widget in this crate implements [`parlor_core::Component`], so it
//! can be embedded inside any [`parlor_core::Model`] and placed anywhere in a
//! [`ratatui`] layout.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chat`] | Dialogue log with left/right speaker rows and tappable choice buttons |

pub mod chat;

pub use chat::{ChatConfig, ChatError, ChatWidget, OptionStyle, Side};
