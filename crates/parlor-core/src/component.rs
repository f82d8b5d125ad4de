use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that its
/// [`view`](Component::view) receives the `area` to draw into, so a parent
/// decides where each child sits.  Widgets in `parlor-widgets` implement it.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// lift the returned commands with [`Command::map`]:
///
/// ```rust,ignore
/// use parlor_core::{Command, Component, Model, TerminalEvent};
/// use parlor_widgets::chat::{self, ChatWidget};
///
/// struct Screen { chat: ChatWidget }
///
/// enum Msg { Chat(chat::Message), Quit }
///
/// impl Model for Screen {
///     type Message = Msg;
///     type Flags = ChatWidget;
///
///     fn init(chat: ChatWidget) -> (Self, Command<Msg>) {
///         (Screen { chat }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Chat(m) => self.chat.update(m).map(Msg::Chat),
///             Msg::Quit => Command::quit(),
///         }
///     }
///
///     fn view(&self, frame: &mut ratatui::Frame) {
///         let area = frame.area();
///         self.chat.view(frame, area);
///     }
///
///     fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
///         match event {
///             TerminalEvent::Mouse(m) => Some(Msg::Chat(chat::Message::Mouse(m))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area` of the [`Frame`].
    ///
    /// Implementations should confine all drawing to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);
}
