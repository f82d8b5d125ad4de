use futures::future::BoxFuture;
use std::future::Future;

/// A side effect returned from [`Model::update`](crate::Model::update),
/// [`Model::init`](crate::Model::init) or
/// [`Component::update`](crate::Component::update).
///
/// Commands describe work the runtime performs after the update returns:
/// feeding a message straight back into the update loop, running an async
/// task whose result becomes a message, or quitting the program.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Reveal the next dialogue line after a pause:
/// let cmd = Command::perform(
///     tokio::time::sleep(Duration::from_millis(400)),
///     |_| Msg::Reveal,
/// );
///
/// // Quit the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Quit,
    Future(BoxFuture<'static, Msg>),
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// A command that does nothing.
    pub fn none() -> Self {
        Self {
            inner: CommandInner::None,
        }
    }

    /// Run `future` on the runtime and map its output to a message.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        Self {
            inner: CommandInner::Future(Box::pin(async move { map(future.await) })),
        }
    }

    /// Deliver `msg` to the update loop immediately.
    pub fn message(msg: Msg) -> Self {
        Self {
            inner: CommandInner::Message(msg),
        }
    }

    /// Stop the program after the current update.
    pub fn quit() -> Self {
        Self {
            inner: CommandInner::Quit,
        }
    }

    /// Run several commands; `none` entries are dropped.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::none(),
            _ => Self {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Translate the messages this command produces.
    ///
    /// Parents use this to lift a child component's commands into their own
    /// message type.
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        let f = std::sync::Arc::new(f);
        self.map_shared(f)
    }

    fn map_shared<NewMsg: Send + 'static>(
        self,
        f: std::sync::Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        let inner = match self.inner {
            CommandInner::None => CommandInner::None,
            CommandInner::Message(msg) => CommandInner::Message(f(msg)),
            CommandInner::Quit => CommandInner::Quit,
            CommandInner::Future(fut) => {
                CommandInner::Future(Box::pin(async move { f(fut.await) }))
            }
            CommandInner::Batch(cmds) => CommandInner::Batch(
                cmds.into_iter()
                    .map(|cmd| cmd.map_shared(f.clone()))
                    .collect(),
            ),
        };
        Command { inner }
    }

    /// Whether this command does nothing.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Whether this command quits the program.
    pub fn is_quit(&self) -> bool {
        matches!(self.inner, CommandInner::Quit)
    }

    /// The immediate message carried by this command, if that is all it is.
    ///
    /// Mostly useful in tests.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<Msg: Send + 'static> std::fmt::Debug for Command<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.inner {
            CommandInner::None => "None",
            CommandInner::Message(_) => "Message",
            CommandInner::Quit => "Quit",
            CommandInner::Future(_) => "Future",
            CommandInner::Batch(_) => "Batch",
        };
        f.debug_tuple("Command").field(&kind).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Child {
        Ping,
    }

    #[derive(Debug, PartialEq)]
    enum Parent {
        Child(Child),
    }

    #[test]
    fn map_lifts_messages() {
        let cmd = Command::message(Child::Ping).map(Parent::Child);
        assert_eq!(cmd.into_message(), Some(Parent::Child(Child::Ping)));
    }

    #[test]
    fn batch_of_nones_is_none() {
        let cmd: Command<Child> = Command::batch([Command::none(), Command::none()]);
        assert!(cmd.is_none());
    }

    #[test]
    fn batch_keeps_real_commands() {
        let cmd = Command::batch([Command::none(), Command::message(Child::Ping)]);
        assert!(!cmd.is_none());
        assert!(cmd.into_message().is_none());
    }

    #[test]
    fn quit_survives_map() {
        let cmd: Command<Child> = Command::quit();
        assert!(cmd.map(Parent::Child).is_quit());
    }
}
