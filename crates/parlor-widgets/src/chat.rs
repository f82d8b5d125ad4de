//! Dialogue chat log with speaker rows and tappable choice buttons.
//!
//! A [`ChatWidget`] owns a fixed-size viewport split into a title strip and a
//! content region.  The content region holds two layers: the message log,
//! which scrolls when dragged, and the option layer, which paints in front of
//! it.  A bordered frame and a rule under the title are drawn on top of both.
//!
//! The owner feeds dialogue in with [`add_message`](ChatWidget::add_message)
//! and builds a choice set with [`create_option`](ChatWidget::create_option).
//! The widget reports back only through the two callbacks in [`ChatConfig`]:
//! one when an option is tapped and one when the log is tapped without
//! dragging.
//!
//! Coordinates are widget-local scene units: x grows to the right, y grows
//! upward from the bottom edge, and one unit is one terminal cell.
//!
//! # Example
//!
//! ```ignore
//! use parlor_scene::FontLibrary;
//! use parlor_widgets::chat::{ChatConfig, ChatWidget, Side};
//!
//! let config = ChatConfig::default()
//!     .with_size(60.0, 20.0)
//!     .on_option_click(|choice| println!("picked {choice}"));
//! let mut chat = ChatWidget::new(config, &FontLibrary::terminal())?;
//! chat.add_message(Side::Left, "Alice", "Which way?");
//! chat.create_option("North", 0);
//! chat.create_option("South", 1);
//! ```

use std::cell::Cell;
use std::fmt;

use crossterm::event::{MouseEvent, MouseEventKind};
use parlor_core::command::Command;
use parlor_core::component::Component;
use parlor_scene::shape::rect_points;
use parlor_scene::{
    anchor, Bounds, Color, DrawList, Font, FontLibrary, Label, Node, Painter, Placement,
    SceneError, Size, TapPhase, TextAlign, Touch, TouchTracker, Vec2, BUILTIN_MONO,
};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Stroke width of an option button's border.
const OPTION_BORDER_WIDTH: f32 = 1.0;

/// Callback fired with the choice index of a tapped option.
pub type OptionClickHandler = Box<dyn FnMut(i64) + Send>;

/// Callback fired when the log is tapped without dragging.
pub type ChatClickHandler = Box<dyn FnMut() + Send>;

/// Which edge of the viewport a message row hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl From<bool> for Side {
    /// `true` is the left side.
    fn from(left: bool) -> Self {
        if left {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Colors of a single option button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionStyle {
    pub fill: Color,
    pub border: Color,
}

impl Default for OptionStyle {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            border: Color::TRANSPARENT,
        }
    }
}

/// Construction options for a [`ChatWidget`].
///
/// Every field has a default; override the ones you need with the `with_*`
/// builders or struct update syntax.
pub struct ChatConfig {
    /// Bottom-left corner of the viewport, relative to the render area's
    /// bottom-left corner.
    pub position: Vec2,
    /// Viewport size in cells.
    pub size: Size,
    /// Font size of message rows and option labels; also the margin unit.
    pub chat_size: f32,
    /// Font size of the title, and the height of the title strip.
    pub title_size: f32,
    pub title: String,
    /// Font resource resolved through the [`FontLibrary`].
    pub font_path: String,
    pub border_width: f32,
    pub border_color: Color,
    pub chat_color: Color,
    pub title_color: Color,
    /// Scale applied to a drag's vertical delta before it moves the log.
    pub drag_factor: f32,
    /// A release whose vertical travel stays under this counts as a tap.
    pub tap_threshold: f32,
    /// Distance the log moves per mouse wheel notch.
    pub wheel_step: f32,
    pub on_option_click: OptionClickHandler,
    pub on_chat_click: ChatClickHandler,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Size::new(60.0, 20.0),
            chat_size: 1.0,
            title_size: 1.0,
            title: "Dialogue".to_string(),
            font_path: BUILTIN_MONO.to_string(),
            border_width: 1.0,
            border_color: Color::WHITE,
            chat_color: Color::WHITE,
            title_color: Color::WHITE,
            drag_factor: 1.0,
            tap_threshold: 0.1,
            wheel_step: 3.0,
            on_option_click: Box::new(|_| {}),
            on_chat_click: Box::new(|| {}),
        }
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("position", &self.position)
            .field("size", &self.size)
            .field("chat_size", &self.chat_size)
            .field("title_size", &self.title_size)
            .field("title", &self.title)
            .field("font_path", &self.font_path)
            .field("border_width", &self.border_width)
            .field("border_color", &self.border_color)
            .field("chat_color", &self.chat_color)
            .field("title_color", &self.title_color)
            .field("drag_factor", &self.drag_factor)
            .field("tap_threshold", &self.tap_threshold)
            .field("wheel_step", &self.wheel_step)
            .finish_non_exhaustive()
    }
}

impl ChatConfig {
    /// Defaults with the title size derived from the host view.
    pub fn for_view(view: Size) -> Self {
        Self {
            title_size: title_size_for_view(view.width),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_chat_size(mut self, size: f32) -> Self {
        self.chat_size = size;
        self
    }

    pub fn with_title_size(mut self, size: f32) -> Self {
        self.title_size = size;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_font(mut self, path: impl Into<String>) -> Self {
        self.font_path = path.into();
        self
    }

    pub fn with_border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    pub fn with_chat_color(mut self, color: Color) -> Self {
        self.chat_color = color;
        self
    }

    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    pub fn with_drag_factor(mut self, factor: f32) -> Self {
        self.drag_factor = factor;
        self
    }

    pub fn with_tap_threshold(mut self, threshold: f32) -> Self {
        self.tap_threshold = threshold;
        self
    }

    pub fn with_wheel_step(mut self, step: f32) -> Self {
        self.wheel_step = step;
        self
    }

    pub fn on_option_click(mut self, handler: impl FnMut(i64) + Send + 'static) -> Self {
        self.on_option_click = Box::new(handler);
        self
    }

    pub fn on_chat_click(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_chat_click = Box::new(handler);
        self
    }
}

/// Title font size for a host view `view_width` cells wide.
///
/// One row per 80 columns, never less than one.
pub fn title_size_for_view(view_width: f32) -> f32 {
    (view_width / 80.0).floor().max(1.0)
}

/// Errors raised while building a [`ChatWidget`].
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The font resource could not back the title label.
    #[error("failed to create the title label")]
    TitleLabel(#[from] SceneError),
}

/// Messages understood by [`ChatWidget`]'s [`Component`] impl.
#[derive(Debug, Clone)]
pub enum Message {
    /// A mouse event in terminal cells; left-button gestures become taps and
    /// drags, wheel notches inside the viewport scroll the log.
    Mouse(MouseEvent),
    /// Scroll the log by one wheel step; `up` reveals earlier rows.
    MouseWheel { up: bool },
}

/// Scrollable dialogue log with speaker rows and choice buttons.
pub struct ChatWidget {
    position: Vec2,
    size: Size,
    font: Font,
    chat_size: f32,
    title_size: f32,
    chat_color: Color,
    drag_factor: f32,
    tap_threshold: f32,
    wheel_step: f32,
    on_option_click: OptionClickHandler,
    on_chat_click: ChatClickHandler,

    message_cursor: f32,
    option_cursor: f32,
    option_count: usize,
    message_layer: Node,
    option_layer: Node<i64>,
    overlay: Node,
    title: Node,

    /// Gesture currently driving the log.
    tracking: Option<u64>,
    /// Vertical distance the tracked gesture has dragged, summed per move.
    travel: f32,
    tracker: TouchTracker,
    /// Where the last `view` placed the viewport (interior mutability).
    placement: Cell<Placement>,
}

impl fmt::Debug for ChatWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatWidget")
            .field("size", &self.size)
            .field("message_cursor", &self.message_cursor)
            .field("option_cursor", &self.option_cursor)
            .field("option_count", &self.option_count)
            .finish_non_exhaustive()
    }
}

impl ChatWidget {
    /// Build the widget, resolving its font through `fonts`.
    ///
    /// Fails with [`ChatError::TitleLabel`] when the font path does not
    /// resolve; no partially built widget is returned.
    pub fn new(config: ChatConfig, fonts: &FontLibrary) -> Result<Self, ChatError> {
        let font = fonts.resolve(&config.font_path)?;
        let ChatConfig {
            position,
            size,
            chat_size,
            title_size,
            title,
            border_width,
            border_color,
            chat_color,
            title_color,
            drag_factor,
            tap_threshold,
            wheel_step,
            on_option_click,
            on_chat_click,
            ..
        } = config;

        let title = Label::new(font.clone(), title_size)
            .with_anchor(anchor::LEFT_TOP)
            .with_alignment(TextAlign::Left)
            .with_color(title_color)
            .with_text_width((size.width - 2.0 * chat_size).max(0.0))
            .with_text(title);

        let rule_y = size.height - title_size;
        let mut decorations = DrawList::new();
        decorations.draw_segment(
            Vec2::new(0.0, rule_y),
            Vec2::new(size.width, rule_y),
            border_width,
            border_color,
        );
        decorations.draw_polygon(
            rect_points(size),
            Color::TRANSPARENT,
            border_width,
            border_color,
        );

        let overlay = Node::draw(decorations);
        let title = Node::label(title).with_position(Vec2::new(chat_size, size.height));

        tracing::debug!(
            width = size.width,
            height = size.height,
            font = font.path(),
            "chat widget created"
        );

        Ok(Self {
            position,
            size,
            font,
            chat_size,
            title_size,
            chat_color,
            drag_factor,
            tap_threshold,
            wheel_step,
            on_option_click,
            on_chat_click,
            message_cursor: 0.0,
            option_cursor: -size.height,
            option_count: 0,
            message_layer: Node::group(),
            option_layer: Node::group().with_position(Vec2::new(0.0, size.height)),
            overlay,
            title,
            tracking: None,
            travel: 0.0,
            tracker: TouchTracker::new(),
            placement: Cell::new(Placement::default()),
        })
    }

    /// Append a speaker row below the previous one.
    ///
    /// The row shows `"speaker:"` with the body one chat-size step beneath
    /// it, both wrapped at half the viewport width and hugging `side`.
    pub fn add_message(&mut self, side: impl Into<Side>, speaker: &str, text: &str) {
        let side = side.into();
        let (anchor, alignment, x) = match side {
            Side::Left => (anchor::LEFT_TOP, TextAlign::Left, self.chat_size),
            Side::Right => (
                anchor::RIGHT_TOP,
                TextAlign::Right,
                self.size.width - self.chat_size,
            ),
        };
        let wrap = self.size.width / 2.0;
        let name = self.text_label(format!("{speaker}:"), anchor, alignment, wrap);
        let body = self.text_label(text, anchor, alignment, wrap);
        let advance = body.height() + self.chat_size;

        let top = self.size.height - self.title_size - self.chat_size - self.message_cursor;
        let mut row = Node::group().with_position(Vec2::new(x, top));
        row.add_child(Node::label(name));
        row.add_child(Node::label(body).with_position(Vec2::new(0.0, -self.chat_size)));
        self.message_layer.add_child(row);

        self.message_cursor += advance;
        tracing::trace!(?side, speaker, cursor = self.message_cursor, "message added");
    }

    /// Append a choice button with the default [`OptionStyle`].
    pub fn create_option(&mut self, text: &str, choice: i64) {
        self.create_option_with(text, choice, OptionStyle::default());
    }

    /// Append a choice button reporting `choice` when tapped.
    ///
    /// Buttons added without an intervening [`clear_options`](Self::clear_options)
    /// join the current set.
    pub fn create_option_with(&mut self, text: &str, choice: i64, style: OptionStyle) {
        let inner_width = (self.size.width - 2.0 * self.chat_size).max(0.0);
        let label = self.text_label(
            format!(" {text}"),
            anchor::LEFT_BOTTOM,
            TextAlign::Left,
            inner_width,
        );
        let button_size = Size::new(inner_width, label.height());
        let advance = label.height() + self.chat_size / 2.0;

        let mut background = DrawList::new();
        background.draw_polygon(
            rect_points(button_size),
            style.fill,
            OPTION_BORDER_WIDTH,
            style.border,
        );

        let inset = Vec2::new(self.chat_size, 0.0);
        let mut button =
            Node::group().with_position(Vec2::new(0.0, self.option_cursor + self.chat_size));
        button.add_child_ordered(Node::hit_region(button_size, choice).with_position(inset), 0);
        button.add_child_ordered(Node::draw(background).with_position(inset), 1);
        button.add_child_ordered(Node::label(label).with_position(inset), 2);
        self.option_layer.add_child(button);

        self.option_cursor += advance;
        self.option_count += 1;
        tracing::trace!(choice, count = self.option_count, "option added");
    }

    /// Remove every option button.  Safe to call with no options present.
    pub fn clear_options(&mut self) {
        self.option_layer.remove_all_children();
        self.option_cursor = -self.size.height;
        self.option_count = 0;
    }

    /// Whether a choice set is waiting for a tap.
    pub fn has_options(&self) -> bool {
        self.option_count > 0
    }

    /// Dispatch a tap gesture; `touch.location` is in widget-local units.
    ///
    /// A tap that begins on an option consumes the touch, reports the choice
    /// and clears the set.  Any other touch inside the viewport drives the
    /// log: moves scroll it, and a release advances the chat only when the
    /// gesture never travelled vertically past the tap threshold.
    pub fn handle_touch(&mut self, phase: TapPhase, touch: &mut Touch) {
        match phase {
            TapPhase::Began => {
                self.tracking = None;
                if !touch.is_enabled() || !self.viewport_bounds().contains(touch.location) {
                    return;
                }
                if self.content_bounds().contains(touch.location) {
                    let hit = self.option_layer.hits(touch.location).first().map(|c| **c);
                    if let Some(choice) = hit {
                        touch.consume();
                        self.select_option(choice);
                        return;
                    }
                }
                self.tracking = Some(touch.id());
                self.travel = 0.0;
            }
            TapPhase::Moved => {
                if self.is_tracking(touch) {
                    self.travel += touch.delta.y.abs();
                    self.scroll_by(touch.delta.y * self.drag_factor);
                }
            }
            TapPhase::Ended => {
                let still = self.travel.max(touch.delta.y.abs()) < self.tap_threshold;
                if self.is_tracking(touch) && still {
                    tracing::debug!("chat advanced");
                    (self.on_chat_click)();
                }
                self.tracking = None;
            }
        }
    }

    /// Total height consumed by message rows so far.
    pub fn message_cursor(&self) -> f32 {
        self.message_cursor
    }

    /// Offset of the next option button, starting at `-height`.
    pub fn option_cursor(&self) -> f32 {
        self.option_cursor
    }

    pub fn option_count(&self) -> usize {
        self.option_count
    }

    /// Vertical offset of the message log; positive moves rows up.
    pub fn message_scroll(&self) -> f32 {
        self.message_layer.position().y
    }

    pub fn message_layer(&self) -> &Node {
        &self.message_layer
    }

    pub fn option_layer(&self) -> &Node<i64> {
        &self.option_layer
    }

    /// The frame and the rule under the title.
    pub fn overlay(&self) -> &Node {
        &self.overlay
    }

    /// The title label, painted over the frame.
    pub fn title(&self) -> &Node {
        &self.title
    }

    /// The strip between the side margins that the title is clipped to.
    pub fn title_bounds(&self) -> Bounds {
        Bounds::new(
            self.chat_size,
            (self.size.height - self.title_size).max(0.0),
            (self.size.width - 2.0 * self.chat_size).max(0.0),
            self.title_size.min(self.size.height),
        )
    }

    /// The region below the title strip that messages and options paint into.
    pub fn content_bounds(&self) -> Bounds {
        Bounds::new(
            0.0,
            0.0,
            self.size.width,
            (self.size.height - self.title_size).max(0.0),
        )
    }

    pub fn viewport_bounds(&self) -> Bounds {
        Bounds::from_size(self.size)
    }

    fn text_label(
        &self,
        text: impl Into<String>,
        anchor: Vec2,
        alignment: TextAlign,
        wrap: f32,
    ) -> Label {
        Label::new(self.font.clone(), self.chat_size)
            .with_anchor(anchor)
            .with_alignment(alignment)
            .with_color(self.chat_color)
            .with_text_width(wrap)
            .with_text(text)
    }

    fn is_tracking(&self, touch: &Touch) -> bool {
        touch.is_enabled() && self.tracking == Some(touch.id())
    }

    fn select_option(&mut self, choice: i64) {
        tracing::debug!(choice, "option selected");
        (self.on_option_click)(choice);
        self.clear_options();
    }

    fn scroll_by(&mut self, dy: f32) {
        let position = self.message_layer.position() + Vec2::new(0.0, dy);
        self.message_layer.set_position(position);
    }

    fn placement_in(&self, area: Rect) -> Placement {
        let left = area.x as i32 + self.position.x.round() as i32;
        let top = area.bottom() as i32 - (self.position.y + self.size.height).round() as i32;
        Placement::new(left, top, self.size.height)
    }
}

impl Component for ChatWidget {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Mouse(event) => {
                let placement = self.placement.get();
                match event.kind {
                    MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                        let at = placement.cell_center(event.column as i32, event.row as i32);
                        if self.viewport_bounds().contains(at) {
                            let up = event.kind == MouseEventKind::ScrollUp;
                            return self.update(Message::MouseWheel { up });
                        }
                    }
                    _ => {
                        let to_local =
                            |col: u16, row: u16| placement.cell_center(col as i32, row as i32);
                        if let Some((phase, mut touch)) = self.tracker.track(&event, to_local) {
                            self.handle_touch(phase, &mut touch);
                            self.tracker.commit(&touch);
                        }
                    }
                }
                Command::none()
            }
            Message::MouseWheel { up } => {
                let step = if up { -self.wheel_step } else { self.wheel_step };
                self.scroll_by(step);
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let placement = self.placement_in(area);
        self.placement.set(placement);

        let mut painter = Painter::new(frame.buffer_mut(), placement).with_clip(area);
        {
            let mut content = painter.clipped(self.content_bounds());
            content.paint(&self.message_layer, Vec2::ZERO);
            content.paint(&self.option_layer, Vec2::ZERO);
        }
        painter
            .clipped(self.viewport_bounds())
            .paint(&self.overlay, Vec2::ZERO);
        painter
            .clipped(self.title_bounds())
            .paint(&self.title, Vec2::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};
    use parlor_core::testing::{buffer_to_string, render_component};
    use std::sync::{Arc, Mutex};

    const WIDTH: f32 = 40.0;
    const HEIGHT: f32 = 12.0;

    fn config() -> ChatConfig {
        ChatConfig::default().with_size(WIDTH, HEIGHT)
    }

    fn widget(config: ChatConfig) -> ChatWidget {
        ChatWidget::new(config, &FontLibrary::terminal()).unwrap()
    }

    /// A widget whose callbacks record into the returned logs.
    fn recording() -> (ChatWidget, Arc<Mutex<Vec<i64>>>, Arc<Mutex<usize>>) {
        let choices = Arc::new(Mutex::new(Vec::new()));
        let taps = Arc::new(Mutex::new(0));
        let (c, t) = (choices.clone(), taps.clone());
        let chat = widget(
            config()
                .on_option_click(move |choice| c.lock().unwrap().push(choice))
                .on_chat_click(move || *t.lock().unwrap() += 1),
        );
        (chat, choices, taps)
    }

    fn tap(chat: &mut ChatWidget, id: u64, at: Vec2, release_delta: Vec2) -> Touch {
        let mut touch = Touch::new(id, at);
        chat.handle_touch(TapPhase::Began, &mut touch);
        let mut release = touch.clone().with_delta(release_delta);
        chat.handle_touch(TapPhase::Ended, &mut release);
        touch
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Message {
        Message::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn screen(chat: &ChatWidget) -> Vec<String> {
        buffer_to_string(&render_component(chat, WIDTH as u16, HEIGHT as u16))
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn body_height(row: &Node) -> f32 {
        row.children()[1].as_label().unwrap().height()
    }

    #[test]
    fn unknown_font_fails_construction() {
        let result = ChatWidget::new(
            config().with_font("fonts/missing.ttf"),
            &FontLibrary::terminal(),
        );
        match result.unwrap_err() {
            ChatError::TitleLabel(SceneError::FontUnavailable { path }) => {
                assert_eq!(path, "fonts/missing.ttf");
            }
        }
    }

    #[test]
    fn new_widget_is_empty() {
        let chat = widget(config());
        assert_eq!(chat.message_cursor(), 0.0);
        assert_eq!(chat.option_cursor(), -HEIGHT);
        assert_eq!(chat.option_count(), 0);
        assert!(!chat.has_options());
        assert_eq!(chat.message_layer().child_count(), 0);
        assert_eq!(chat.option_layer().position(), Vec2::new(0.0, HEIGHT));
    }

    #[test]
    fn message_cursor_sums_body_heights() {
        let mut chat = widget(config());
        let texts = [
            "hi",
            "",
            "a much longer line that has to wrap across several rows",
        ];
        let mut previous = chat.message_cursor();
        for (i, text) in texts.iter().enumerate() {
            chat.add_message(i % 2 == 0, "Alice", text);
            assert!(chat.message_cursor() >= previous);
            previous = chat.message_cursor();
        }

        let rows = chat.message_layer().children();
        let bodies: f32 = rows.iter().map(body_height).sum();
        assert_eq!(chat.message_cursor(), bodies + texts.len() as f32);
        assert_eq!(body_height(&rows[1]), 1.0);
        assert!(body_height(&rows[2]) > 1.0);
    }

    #[test]
    fn left_and_right_rows_mirror() {
        let mut chat = widget(config());
        chat.add_message(true, "Alice", "hi");
        chat.add_message(false, "Bob", "hello");

        let rows = chat.message_layer().children();
        let alice = rows[0].children()[0].as_label().unwrap();
        let bob = rows[1].children()[0].as_label().unwrap();
        assert_eq!(alice.text(), "Alice:");
        assert_eq!(alice.anchor(), anchor::LEFT_TOP);
        assert_eq!(alice.alignment(), TextAlign::Left);
        assert_eq!(bob.anchor(), anchor::RIGHT_TOP);
        assert_eq!(bob.alignment(), TextAlign::Right);

        assert_eq!(rows[0].position().x, 1.0);
        assert_eq!(rows[1].position().x, WIDTH - 1.0);
        assert!(rows[0].position().y - rows[1].position().y >= 1.0);
        assert_eq!(rows[0].position().y, HEIGHT - 2.0);
    }

    #[test]
    fn body_sits_one_step_below_name() {
        let mut chat = widget(config().with_chat_size(2.0));
        chat.add_message(Side::Left, "Alice", "hi");
        let row = &chat.message_layer().children()[0];
        assert_eq!(row.children()[1].position(), Vec2::new(0.0, -2.0));
        assert_eq!(row.children()[1].as_label().unwrap().text(), "hi");
    }

    #[test]
    fn options_count_until_cleared() {
        let mut chat = widget(config());
        for choice in 0..3 {
            chat.create_option("go", choice);
        }
        assert_eq!(chat.option_count(), 3);
        assert!(chat.has_options());
        assert_eq!(chat.option_cursor(), -HEIGHT + 3.0 * 1.5);

        chat.clear_options();
        assert_eq!(chat.option_count(), 0);
        assert!(!chat.has_options());
        assert_eq!(chat.option_layer().child_count(), 0);
        assert_eq!(chat.option_cursor(), -HEIGHT);

        chat.clear_options();
        assert_eq!(chat.option_count(), 0);
        assert_eq!(chat.option_cursor(), -HEIGHT);
    }

    #[test]
    fn option_button_layout() {
        let mut chat = widget(config());
        chat.create_option_with(
            "North",
            4,
            OptionStyle {
                fill: Color::BLACK,
                border: Color::WHITE,
            },
        );
        let button = &chat.option_layer().children()[0];
        assert_eq!(button.position().y, -HEIGHT + 1.0);

        let region = button.children()[0].as_hit_region().unwrap();
        assert_eq!(region.binding, 4);
        assert_eq!(region.size, Size::new(WIDTH - 2.0, 1.0));
        assert_eq!(button.children()[0].position().x, 1.0);
        assert!(button.children()[1].as_draw().is_some());
        assert_eq!(button.children()[2].as_label().unwrap().text(), " North");
    }

    #[test]
    fn tapping_option_reports_choice_and_clears() {
        let (mut chat, choices, taps) = recording();
        chat.create_option("North", 3);
        chat.create_option("South", 7);

        // second button sits one label height plus half a step above the first
        let touch = tap(&mut chat, 1, Vec2::new(5.0, 3.0), Vec2::ZERO);
        assert!(!touch.is_enabled());
        assert_eq!(*choices.lock().unwrap(), vec![7]);
        assert!(!chat.has_options());
        assert_eq!(chat.option_layer().child_count(), 0);
        assert_eq!(*taps.lock().unwrap(), 0);
    }

    #[test]
    fn first_option_hit_region() {
        let (mut chat, choices, _) = recording();
        chat.create_option("North", 3);
        tap(&mut chat, 1, Vec2::new(1.5, 1.5), Vec2::ZERO);
        assert_eq!(*choices.lock().unwrap(), vec![3]);
    }

    #[test]
    fn margin_outside_option_advances_instead() {
        let (mut chat, choices, taps) = recording();
        chat.create_option("North", 3);
        tap(&mut chat, 1, Vec2::new(0.5, 1.5), Vec2::ZERO);
        assert!(choices.lock().unwrap().is_empty());
        assert_eq!(*taps.lock().unwrap(), 1);
        assert!(chat.has_options());
    }

    #[test]
    fn release_threshold_separates_tap_from_drag() {
        let (mut chat, _, taps) = recording();
        tap(&mut chat, 1, Vec2::new(5.0, 5.0), Vec2::new(0.0, 0.05));
        assert_eq!(*taps.lock().unwrap(), 1);

        tap(&mut chat, 2, Vec2::new(5.0, 5.0), Vec2::new(0.0, 5.0));
        tap(&mut chat, 3, Vec2::new(5.0, 5.0), Vec2::new(0.0, -5.0));
        assert_eq!(*taps.lock().unwrap(), 1);
    }

    #[test]
    fn pending_options_do_not_block_chat_taps() {
        let (mut chat, _, taps) = recording();
        chat.create_option("North", 0);
        tap(&mut chat, 1, Vec2::new(5.0, 8.0), Vec2::ZERO);
        assert_eq!(*taps.lock().unwrap(), 1);
    }

    #[test]
    fn touches_outside_viewport_are_ignored() {
        let (mut chat, _, taps) = recording();
        tap(&mut chat, 1, Vec2::new(-1.0, 5.0), Vec2::ZERO);
        tap(&mut chat, 2, Vec2::new(5.0, HEIGHT + 1.0), Vec2::ZERO);
        assert_eq!(*taps.lock().unwrap(), 0);
    }

    #[test]
    fn consumed_touch_is_ignored() {
        let (mut chat, _, taps) = recording();
        let mut touch = Touch::new(1, Vec2::new(5.0, 5.0));
        touch.consume();
        chat.handle_touch(TapPhase::Began, &mut touch);
        chat.handle_touch(TapPhase::Ended, &mut touch);
        assert_eq!(*taps.lock().unwrap(), 0);
    }

    #[test]
    fn drag_moves_log_by_delta() {
        let mut chat = widget(config().with_drag_factor(2.0));
        let mut touch = Touch::new(1, Vec2::new(5.0, 5.0));
        chat.handle_touch(TapPhase::Began, &mut touch);

        let mut moved = touch.clone().with_delta(Vec2::new(0.0, 1.5));
        chat.handle_touch(TapPhase::Moved, &mut moved);
        assert_eq!(chat.message_scroll(), 3.0);

        let mut back = touch.with_delta(Vec2::new(4.0, -1.0));
        chat.handle_touch(TapPhase::Moved, &mut back);
        assert_eq!(chat.message_scroll(), 1.0);
        assert_eq!(chat.message_layer().position().x, 0.0);
    }

    #[test]
    fn returning_drag_is_not_a_tap() {
        let (mut chat, _, taps) = recording();
        let mut touch = Touch::new(1, Vec2::new(5.0, 5.0));
        chat.handle_touch(TapPhase::Began, &mut touch);
        let mut away = touch.clone().with_delta(Vec2::new(0.0, 3.0));
        chat.handle_touch(TapPhase::Moved, &mut away);
        let mut back = touch.clone().with_delta(Vec2::new(0.0, -3.0));
        chat.handle_touch(TapPhase::Moved, &mut back);
        let mut release = touch.with_delta(Vec2::ZERO);
        chat.handle_touch(TapPhase::Ended, &mut release);
        assert_eq!(chat.message_scroll(), 0.0);
        assert_eq!(*taps.lock().unwrap(), 0);
    }

    #[test]
    fn mouse_click_advances_chat() {
        let (mut chat, _, taps) = recording();
        screen(&chat);
        chat.update(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5));
        chat.update(mouse(MouseEventKind::Up(MouseButton::Left), 5, 5));
        assert_eq!(*taps.lock().unwrap(), 1);
    }

    #[test]
    fn mouse_drag_scrolls_without_advancing() {
        let (mut chat, _, taps) = recording();
        screen(&chat);
        chat.update(mouse(MouseEventKind::Down(MouseButton::Left), 5, 6));
        chat.update(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 4));
        assert_eq!(chat.message_scroll(), 2.0);
        chat.update(mouse(MouseEventKind::Up(MouseButton::Left), 5, 4));
        assert_eq!(*taps.lock().unwrap(), 0);
    }

    #[test]
    fn drag_away_and_back_does_not_advance() {
        let (mut chat, _, taps) = recording();
        screen(&chat);
        chat.update(mouse(MouseEventKind::Down(MouseButton::Left), 5, 8));
        chat.update(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 4));
        assert_eq!(chat.message_scroll(), 4.0);
        chat.update(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 8));
        assert_eq!(chat.message_scroll(), 0.0);
        chat.update(mouse(MouseEventKind::Up(MouseButton::Left), 5, 8));
        assert_eq!(*taps.lock().unwrap(), 0);

        // the next plain click starts from a clean slate
        chat.update(mouse(MouseEventKind::Down(MouseButton::Left), 5, 8));
        chat.update(mouse(MouseEventKind::Up(MouseButton::Left), 5, 8));
        assert_eq!(*taps.lock().unwrap(), 1);
    }

    #[test]
    fn mouse_click_on_option_selects_it() {
        let (mut chat, choices, taps) = recording();
        chat.create_option("North", 9);
        screen(&chat);
        // the first button's label sits on the row above the bottom border
        let row = HEIGHT as u16 - 2;
        chat.update(mouse(MouseEventKind::Down(MouseButton::Left), 6, row));
        chat.update(mouse(MouseEventKind::Up(MouseButton::Left), 6, row));
        assert_eq!(*choices.lock().unwrap(), vec![9]);
        assert_eq!(*taps.lock().unwrap(), 0);
    }

    #[test]
    fn wheel_scrolls_by_step() {
        let mut chat = widget(config().with_wheel_step(2.0));
        screen(&chat);
        chat.update(mouse(MouseEventKind::ScrollDown, 5, 5));
        assert_eq!(chat.message_scroll(), 2.0);
        chat.update(Message::MouseWheel { up: true });
        chat.update(Message::MouseWheel { up: true });
        assert_eq!(chat.message_scroll(), -2.0);
        chat.update(mouse(MouseEventKind::ScrollDown, WIDTH as u16 + 5, 5));
        assert_eq!(chat.message_scroll(), -2.0);
    }

    #[test]
    fn renders_frame_title_and_rows() {
        let mut chat = widget(config());
        chat.add_message(Side::Left, "Alice", "hi");
        chat.add_message(Side::Right, "Bob", "hello");
        let rows = screen(&chat);

        assert!(rows[0].starts_with("┌Dialogue"));
        assert!(rows[0].ends_with('┐'));
        assert!(rows[1].contains("───"));
        assert!(rows[2].starts_with("│Alice:"));
        assert!(rows[3].starts_with("│hi"));
        assert!(rows[4].ends_with("Bob:│"));
        assert!(rows[5].ends_with("hello│"));
        assert!(rows[HEIGHT as usize - 1].starts_with('└'));
    }

    #[test]
    fn renders_option_above_bottom_border() {
        let mut chat = widget(config());
        chat.create_option_with(
            "Go left",
            0,
            OptionStyle {
                fill: Color::BLACK,
                border: Color::TRANSPARENT,
            },
        );
        let rows = screen(&chat);
        assert!(rows[HEIGHT as usize - 2].starts_with("│ Go left"));
    }

    #[test]
    fn scrolled_rows_stay_under_title() {
        let mut chat = widget(config());
        chat.add_message(Side::Left, "Alice", "hi");
        chat.update(Message::MouseWheel { up: false });
        let rows = screen(&chat);
        assert!(rows[0].starts_with("┌Dialogue"));
        assert!(!rows.join("\n").contains("Alice:"));
    }

    #[test]
    fn long_title_stays_in_its_strip() {
        let mut chat = widget(config().with_title("word ".repeat(30)));
        chat.add_message(Side::Left, "Alice", "hi");
        let rows = screen(&chat);
        assert!(rows[0].starts_with("┌word"));
        assert!(rows[0].ends_with('┐'));
        assert!(rows[1].contains("───"));
        assert!(!rows[1].contains("word"));
        assert!(rows[2].starts_with("│Alice:"));
        assert!(!rows[3..].join("\n").contains("word"));
    }

    #[test]
    fn title_size_follows_view_width() {
        assert_eq!(title_size_for_view(40.0), 1.0);
        assert_eq!(title_size_for_view(80.0), 1.0);
        assert_eq!(title_size_for_view(200.0), 2.0);
        assert_eq!(ChatConfig::for_view(Size::new(240.0, 60.0)).title_size, 3.0);
    }

    #[test]
    fn side_from_bool() {
        assert_eq!(Side::from(true), Side::Left);
        assert_eq!(Side::from(false), Side::Right);
    }
}
