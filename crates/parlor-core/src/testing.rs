use crate::command::{Command, CommandInner};
use crate::component::Component;
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Synchronous commands ([`Command::message`]) are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages); async commands are
/// ignored and quitting is recorded in [`quit_requested`](TestProgram::quit_requested).
///
/// ```rust,ignore
/// use parlor_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Dialogue>::new(script);
/// prog.event(TerminalEvent::Mouse(click));
/// prog.drain_messages();
/// assert!(prog.render_string(60, 20).contains("Alice:"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message through a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Offer a terminal event to [`Model::on_event`], sending any message it maps to.
    pub fn event(&mut self, event: TerminalEvent) {
        if let Some(msg) = self.model.on_event(event) {
            self.send(msg);
        }
    }

    /// Process queued synchronous messages until none remain.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Whether any update so far returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Render the model to a buffer of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the screen as newline-separated rows.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::Quit => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
            // Async commands can't be executed synchronously in tests
            CommandInner::Future(_) => {}
        }
    }
}

/// Render a [`Component`] into a `width` x `height` test terminal, filling
/// the whole screen, and return the buffer.
pub fn render_component<C: Component>(component: &C, width: u16, height: u16) -> Buffer {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            component.view(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Concatenate each buffer row into a line; rows are joined by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::widgets::Paragraph;

    struct Transcript {
        lines: Vec<String>,
    }

    #[derive(Debug)]
    enum Msg {
        Say(String),
        Echo(String),
        Leave,
    }

    impl Model for Transcript {
        type Message = Msg;
        type Flags = Vec<String>;

        fn init(lines: Vec<String>) -> (Self, Command<Msg>) {
            (Transcript { lines }, Command::none())
        }

        fn update(&mut self, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Say(line) => {
                    self.lines.push(line.clone());
                    Command::message(Msg::Echo(line))
                }
                Msg::Echo(line) => {
                    self.lines.push(format!("({line})"));
                    Command::none()
                }
                Msg::Leave => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(self.lines.join(" ")), frame.area());
        }

        fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
            match event {
                TerminalEvent::Key(key) if key.code == KeyCode::Char('q') => Some(Msg::Leave),
                _ => None,
            }
        }
    }

    #[test]
    fn init_with_flags() {
        let prog = TestProgram::<Transcript>::new(vec!["hello".into()]);
        assert_eq!(prog.model().lines, vec!["hello"]);
    }

    #[test]
    fn message_chaining_needs_drain() {
        let mut prog = TestProgram::<Transcript>::new(vec![]);
        prog.send(Msg::Say("hi".into()));
        assert_eq!(prog.model().lines, vec!["hi"]);
        prog.drain_messages();
        assert_eq!(prog.model().lines, vec!["hi", "(hi)"]);
    }

    #[test]
    fn events_map_through_on_event() {
        let mut prog = TestProgram::<Transcript>::new(vec![]);
        prog.event(TerminalEvent::Key(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!prog.quit_requested());
        prog.event(TerminalEvent::Key(KeyEvent::from(KeyCode::Char('q'))));
        assert!(prog.quit_requested());
    }

    #[test]
    fn render_string_shows_view() {
        let mut prog = TestProgram::<Transcript>::new(vec![]);
        prog.send(Msg::Say("ahoy".into()));
        prog.drain_messages();
        let screen = prog.render_string(20, 2);
        assert!(screen.starts_with("ahoy (ahoy)"));
        assert_eq!(screen.lines().count(), 2);
    }
}
