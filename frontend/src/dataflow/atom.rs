//! Local UI state of a single view.
//!
//! An [`Atom`] is an [`Actor`] with its own update relay. Use it for state
//! no other view cares about, like a button's hover flag or the locally
//! highlighted timeline card; shared state belongs to the explorer.

use crate::dataflow::{Actor, Relay, relay};
use zoon::Signal;

#[derive(Clone, Debug)]
enum AtomUpdate<T> {
    SetNeq(T),
    Toggle { value: T, otherwise: T },
}

// Pressing the same value twice falls back to `otherwise`.
fn toggled<T: PartialEq>(current: &T, value: T, otherwise: T) -> T {
    if *current == value { otherwise } else { value }
}

fn apply_update<T: PartialEq>(state: &mut T, update: AtomUpdate<T>) -> bool {
    let next = match update {
        AtomUpdate::SetNeq(value) => value,
        AtomUpdate::Toggle { value, otherwise } => toggled(state, value, otherwise),
    };
    if *state == next {
        return false;
    }
    *state = next;
    true
}

#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    update_relay: Relay<AtomUpdate<T>>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + PartialEq + 'static,
{
    pub fn new(initial: T) -> Self {
        let (update_relay, updates) = relay();
        Self {
            actor: Actor::new(initial, updates, apply_update),
            update_relay,
        }
    }

    // Every update goes out from here, so the relay keeps a single call site.
    fn send_update(&self, update: AtomUpdate<T>) {
        self.update_relay.send(update);
    }

    pub fn set_neq(&self, value: T) {
        self.send_update(AtomUpdate::SetNeq(value));
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }

    pub fn signal_ref<U>(&self, f: impl Fn(&T) -> U + Send + Sync + 'static) -> impl Signal<Item = U>
    where
        U: PartialEq + Send + Sync + 'static,
    {
        self.actor.signal_ref(f)
    }
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + PartialEq + Default + 'static,
{
    /// Set `value`, or reset to the default when it is already set.
    pub fn toggle(&self, value: T) {
        self.send_update(AtomUpdate::Toggle {
            value,
            otherwise: T::default(),
        });
    }
}

impl<T> Default for Atom<T>
where
    T: Clone + Send + Sync + Default + PartialEq + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use zoon::SignalExt;

    async fn settle() {
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    }

    async fn current<T: Clone + Send + Sync + PartialEq + 'static>(atom: &Atom<T>) -> T {
        atom.signal().to_stream().next().await.unwrap()
    }

    #[test]
    fn test_toggled_resets_on_repeat() {
        let current = Some("book-written".to_string());
        assert_eq!(toggled(&current, Some("book-written".to_string()), None), None);
        assert_eq!(
            toggled(&current, Some("marco-imprisoned".to_string()), None),
            Some("marco-imprisoned".to_string())
        );
        assert_eq!(toggled(&None, Some("book-written".to_string()), None), current);
    }

    #[test]
    fn test_apply_update_reports_change() {
        let mut hovered = false;
        assert!(!apply_update(&mut hovered, AtomUpdate::SetNeq(false)));
        assert!(apply_update(&mut hovered, AtomUpdate::SetNeq(true)));
        assert!(apply_update(
            &mut hovered,
            AtomUpdate::Toggle {
                value: true,
                otherwise: false
            }
        ));
        assert!(!hovered);
    }

    #[tokio::test]
    async fn test_atom_toggle_sequence() {
        let highlighted: Atom<Option<String>> = Atom::default();
        settle().await;

        for id in ["polos-reach-court", "polos-reach-court", "book-written"] {
            highlighted.toggle(Some(id.to_string()));
        }
        settle().await;

        assert_eq!(current(&highlighted).await, Some("book-written".to_string()));
    }

    #[tokio::test]
    async fn test_set_neq_and_toggle_on_one_atom() {
        let highlighted: Atom<Option<String>> = Atom::default();
        settle().await;

        highlighted.set_neq(Some("book-written".to_string()));
        highlighted.toggle(Some("book-written".to_string()));
        settle().await;
        assert_eq!(current(&highlighted).await, None);

        highlighted.toggle(Some("polos-reach-court".to_string()));
        highlighted.set_neq(Some("marco-imprisoned".to_string()));
        settle().await;
        assert_eq!(current(&highlighted).await, Some("marco-imprisoned".to_string()));
    }
}
