//! State owned by a task that folds commands into it.
//!
//! An [`Actor`] holds a `Mutable<T>` that only its own task writes. The task
//! pulls commands from a stream (usually several relay streams merged into
//! one) and hands each to a reducer. Views read the state through signals.

use futures::{Stream, StreamExt};
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// ```rust
/// let (year_preset_clicked_relay, year_preset_clicked_stream) = relay();
///
/// let selection = Actor::new(
///     ExplorerSelection::default(),
///     year_preset_clicked_stream.map(SelectionCommand::SetYear),
///     |selection, command| selection.apply(command),
/// );
///
/// year_preset_clicked_relay.send(Some(1271));
/// selection.signal() // ExplorerSelection with the year set
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    // Dropping the last clone stops the fold.
    _fold_task: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Fold `commands` into `initial` with `reduce`. The reducer edits a
    /// copy of the state and returns whether it changed; only changes are
    /// published to signals. The fold ends when `commands` is exhausted.
    pub fn new<C, S, R>(initial: T, commands: S, mut reduce: R) -> Self
    where
        S: Stream<Item = C> + Send + 'static,
        R: FnMut(&mut T, C) -> bool + Send + 'static,
    {
        let state = Mutable::new(initial);
        let fold = {
            let state = state.clone();
            async move {
                let mut commands = Box::pin(commands);
                while let Some(command) = commands.next().await {
                    let mut next = state.get_cloned();
                    if reduce(&mut next, command) {
                        state.set(next);
                    }
                }
            }
        };

        Self {
            state,
            _fold_task: Arc::new(Task::start_droppable(fold)),
        }
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    /// Signal of a projection of the state, without cloning the whole value.
    pub fn signal_ref<U>(&self, f: impl Fn(&T) -> U + Send + Sync + 'static) -> impl Signal<Item = U>
    where
        U: PartialEq + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }
}
