//! **parlor** -- a dialogue chat widget for [`ratatui`] with tap and drag input.
//!
//! This is the umbrella crate that re-exports everything needed to put a
//! dialogue screen on the terminal from a single dependency:
//!
//! ```toml
//! [dependencies]
//! parlor = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`parlor_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`],
//!   [`run_with`], etc.).
//! * The [`scene`] module re-exports [`parlor_scene`]: geometry, colors,
//!   fonts, labels, nodes and touches.
//! * The [`widgets`] module re-exports [`parlor_widgets`], home of
//!   [`ChatWidget`](widgets::chat::ChatWidget).
//! * [`ratatui`], [`crossterm`], [`tokio`] and [`tracing`] are re-exported so
//!   downstream crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use parlor::scene::FontLibrary;
//! use parlor::widgets::chat::{self, ChatConfig, ChatWidget, Side};
//! use parlor::{Command, Component, Model, TerminalEvent};
//!
//! struct Screen { chat: ChatWidget }
//!
//! impl Model for Screen {
//!     type Message = chat::Message;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<chat::Message>) {
//!         let mut chat = ChatWidget::new(ChatConfig::default(), &FontLibrary::terminal())
//!             .expect("built-in font");
//!         chat.add_message(Side::Left, "Guide", "Welcome to the parlor.");
//!         (Screen { chat }, Command::none())
//!     }
//!     fn update(&mut self, msg: chat::Message) -> Command<chat::Message> {
//!         self.chat.update(msg)
//!     }
//!     fn view(&self, frame: &mut parlor::ratatui::Frame) {
//!         let area = frame.area();
//!         self.chat.view(frame, area);
//!     }
//!     fn on_event(&self, event: TerminalEvent) -> Option<chat::Message> {
//!         match event {
//!             TerminalEvent::Mouse(m) => Some(chat::Message::Mouse(m)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     parlor::run::<Screen>(()).await.unwrap();
//! }
//! ```

pub use parlor_core::*;
pub mod scene {
    pub use parlor_scene::*;
}
pub mod widgets {
    pub use parlor_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
pub use tracing;
