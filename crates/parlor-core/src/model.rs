use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The [`Program`](crate::Program) runtime drives the cycle:
///
/// 1. [`init`](Model::init) builds the initial state and a startup command.
/// 2. [`view`](Model::view) renders the state to a [`ratatui::Frame`].
/// 3. Terminal input is offered to [`on_event`](Model::on_event), which maps
///    the events the model cares about into messages.
/// 4. [`update`](Model::update) applies each message and returns a
///    [`Command`] for further work.
/// 5. Steps 2--4 repeat until a [`Command::quit`] is returned.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state.  Should read state only.
    fn view(&self, frame: &mut Frame);

    /// Map a terminal event into a message, or `None` to ignore it.
    ///
    /// The default ignores every event.
    fn on_event(&self, event: TerminalEvent) -> Option<Self::Message> {
        let _ = event;
        None
    }
}
