//! Event streams from the views to whoever owns the state they affect.
//!
//! A [`Relay`] is the sending half of an unbounded channel with one rule on
//! top: every relay has a single sending call site. Debug builds remember the
//! first caller of [`Relay::send`] and panic as soon as another one shows up,
//! so an event like `marker_clicked` can only ever originate from the map.
//!
//! Relays are named `{source}_{event}_relay`, e.g. `marker_clicked_relay`,
//! `year_preset_clicked_relay`, `detail_panel_closed_relay`.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
#[cfg(debug_assertions)]
use std::panic::Location;
#[cfg(debug_assertions)]
use std::sync::{Arc, OnceLock};

#[derive(Clone, Debug)]
pub struct Relay<T> {
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    call_site: Arc<OnceLock<&'static Location<'static>>>,
}

impl<T> Relay<T> {
    /// Queue `event` for the owner. Once the owner is gone the event is
    /// dropped; there is nobody left to react to it.
    #[track_caller]
    pub fn send(&self, event: T) {
        #[cfg(debug_assertions)]
        self.claim_call_site(Location::caller());

        let _ = self.sender.unbounded_send(event);
    }

    #[cfg(debug_assertions)]
    fn claim_call_site(&self, caller: &'static Location<'static>) {
        let owner = *self.call_site.get_or_init(|| caller);
        if owner != caller {
            panic!("relay owned by {owner} was also sent from {caller}");
        }
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>) {
    let (sender, receiver) = unbounded();
    let relay = Relay {
        sender,
        #[cfg(debug_assertions)]
        call_site: Arc::new(OnceLock::new()),
    };
    (relay, receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use shared::dataset;

    #[tokio::test]
    async fn test_year_presets_arrive_in_click_order() {
        let (year_preset_clicked_relay, mut year_preset_clicked_stream) = relay::<Option<i32>>();

        for year in [Some(1271), None, Some(1292)] {
            year_preset_clicked_relay.send(year);
        }

        assert_eq!(year_preset_clicked_stream.next().await, Some(Some(1271)));
        assert_eq!(year_preset_clicked_stream.next().await, Some(None));
        assert_eq!(year_preset_clicked_stream.next().await, Some(Some(1292)));
    }

    #[tokio::test]
    async fn test_clones_share_the_call_site() {
        let (marker_clicked_relay, mut marker_clicked_stream) = relay();
        // one click handler per marker, all built from the same closure
        let handlers: Vec<_> = dataset::locations()
            .iter()
            .take(3)
            .map(|location| {
                let marker_clicked_relay = marker_clicked_relay.clone();
                let location = location.clone();
                move || marker_clicked_relay.send(location.clone())
            })
            .collect();
        for handler in handlers.iter().rev() {
            handler();
        }

        let first = marker_clicked_stream.next().await.map(|location| location.id);
        assert_eq!(first.as_deref(), Some(dataset::locations()[2].id.as_str()));
    }

    #[tokio::test]
    async fn test_send_after_owner_dropped_is_ignored() {
        let (detail_panel_closed_relay, detail_panel_closed_stream) = relay::<()>();
        drop(detail_panel_closed_stream);
        detail_panel_closed_relay.send(());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "was also sent from")]
    fn test_second_call_site_panics() {
        let (show_all_clicked_relay, _show_all_clicked_stream) = relay::<()>();
        show_all_clicked_relay.send(());
        show_all_clicked_relay.send(());
    }
}
