//! Example: a branching tavern conversation driven by taps.
//!
//! Click (or press Enter) anywhere in the log to reveal the next line, click
//! a choice button to branch, drag or use the wheel to scroll back through
//! the history.  Diagnostics go to `dialogue.log`; set `RUST_LOG` to tune them.
//!
//! Run with: `cargo run --example dialogue`

use std::sync::{mpsc, Mutex};
use std::time::Duration;

use parlor::crossterm::event::KeyCode;
use parlor::ratatui::layout::{Constraint, Flex, Layout};
use parlor::ratatui::Frame;
use parlor::scene::{Color, FontLibrary, Size};
use parlor::widgets::chat::{self, ChatConfig, ChatWidget, OptionStyle, Side};
use parlor::{log_to_file, Command, Component, Model, ProgramOptions, TerminalEvent};
use tracing_subscriber::EnvFilter;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 20;

/// Delay before a choice set appears after the line that prompts it.
const PAUSE: Duration = Duration::from_millis(400);

const CHOICE: OptionStyle = OptionStyle {
    fill: Color::from_argb(0xFF3B_3355),
    border: Color::TRANSPARENT,
};

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

enum Beat {
    Say(Side, &'static str, &'static str),
    /// Choice labels with the beat each one jumps to.
    Choose(&'static [(&'static str, usize)]),
    End,
}

const SCRIPT: &[Beat] = &[
    Beat::Say(Side::Left, "Innkeeper", "Evening, traveller. Rough road?"),
    Beat::Say(Side::Right, "You", "Rougher than most."),
    Beat::Choose(&[("Ask about a room", 3), ("Ask about the road north", 6)]),
    Beat::Say(Side::Left, "Innkeeper", "Two silver a night, breakfast included."),
    Beat::Say(Side::Right, "You", "I'll take it."),
    Beat::End,
    Beat::Say(
        Side::Left,
        "Innkeeper",
        "Wolves, mostly. And worse after dark, if you believe the carters.",
    ),
    Beat::Say(Side::Right, "You", "Then I'll leave at dawn."),
    Beat::End,
];

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the widget's callbacks report back.
enum Input {
    Picked(i64),
    Advance,
}

struct Dialogue {
    chat: ChatWidget,
    inputs: mpsc::Receiver<Input>,
    /// Index of the next beat to reveal.
    beat: usize,
    finished: bool,
}

#[derive(Debug)]
enum Msg {
    Chat(chat::Message),
    Advance,
    ShowChoices,
    Quit,
}

impl Dialogue {
    /// Apply everything the callbacks reported during the last widget update.
    fn drain_inputs(&mut self) -> Command<Msg> {
        let mut cmds = Vec::new();
        while let Ok(input) = self.inputs.try_recv() {
            match input {
                Input::Picked(target) => {
                    self.beat = target as usize;
                    cmds.push(self.reveal());
                }
                Input::Advance => cmds.push(self.advance()),
            }
        }
        Command::batch(cmds)
    }

    /// Reveal the next line unless a choice is pending or about to appear.
    fn advance(&mut self) -> Command<Msg> {
        if self.chat.has_options() || matches!(SCRIPT.get(self.beat), Some(Beat::Choose(_))) {
            return Command::none();
        }
        self.reveal()
    }

    fn reveal(&mut self) -> Command<Msg> {
        match SCRIPT.get(self.beat) {
            Some(Beat::Say(side, speaker, text)) => {
                self.chat.add_message(*side, speaker, text);
                self.beat += 1;
                if matches!(SCRIPT.get(self.beat), Some(Beat::Choose(_))) {
                    return Command::perform(tokio::time::sleep(PAUSE), |_| Msg::ShowChoices);
                }
                Command::none()
            }
            Some(Beat::Choose(choices)) => {
                for (text, target) in choices.iter() {
                    self.chat.create_option_with(text, *target as i64, CHOICE);
                }
                self.beat += 1;
                Command::none()
            }
            Some(Beat::End) | None => {
                if !self.finished {
                    self.finished = true;
                    tracing::info!("conversation finished");
                    self.chat.add_message(
                        Side::Left,
                        "Narrator",
                        "The fire burns low. Press q to leave.",
                    );
                }
                Command::none()
            }
        }
    }
}

impl Model for Dialogue {
    type Message = Msg;
    type Flags = (ChatWidget, mpsc::Receiver<Input>);

    fn init((chat, inputs): Self::Flags) -> (Self, Command<Msg>) {
        let mut app = Dialogue {
            chat,
            inputs,
            beat: 0,
            finished: false,
        };
        let cmd = app.reveal();
        (app, cmd)
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Chat(m) => {
                let cmd = self.chat.update(m).map(Msg::Chat);
                let follow = self.drain_inputs();
                Command::batch([cmd, follow])
            }
            Msg::Advance => self.advance(),
            Msg::ShowChoices => self.reveal(),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [column] = Layout::horizontal([Constraint::Length(WIDTH)])
            .flex(Flex::Center)
            .areas(frame.area());
        let [area] = Layout::vertical([Constraint::Length(HEIGHT)])
            .flex(Flex::Center)
            .areas(column);
        self.chat.view(frame, area);
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Mouse(mouse) => Some(Msg::Chat(chat::Message::Mouse(mouse))),
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::Advance),
                KeyCode::Up | KeyCode::PageUp => {
                    Some(Msg::Chat(chat::Message::MouseWheel { up: true }))
                }
                KeyCode::Down | KeyCode::PageDown => {
                    Some(Msg::Chat(chat::Message::MouseWheel { up: false }))
                }
                _ => None,
            },
            TerminalEvent::Resize(..) => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("parlor_widgets=debug,dialogue=debug")),
        )
        .with_writer(Mutex::new(log_to_file("dialogue.log")?))
        .with_ansi(false)
        .init();

    let (cols, rows) = parlor::crossterm::terminal::size()?;
    let (tx, inputs) = mpsc::channel();
    let picked = tx.clone();
    let config = ChatConfig::for_view(Size::new(cols as f32, rows as f32))
        .with_size(WIDTH as f32, HEIGHT as f32)
        .with_title("The Crooked Lantern")
        .with_border(1.0, Color::from_argb(0xFF8A_7F6A))
        .with_title_color(Color::from_argb(0xFFE8_C170))
        .on_option_click(move |choice| {
            let _ = picked.send(Input::Picked(choice));
        })
        .on_chat_click(move || {
            let _ = tx.send(Input::Advance);
        });
    let chat = ChatWidget::new(config, &FontLibrary::terminal())?;

    let options = ProgramOptions {
        title: Some("parlor dialogue".into()),
        ..ProgramOptions::default()
    };
    parlor::run_with::<Dialogue>((chat, inputs), options).await?;
    Ok(())
}
