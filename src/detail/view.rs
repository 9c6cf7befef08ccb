use crate::detail::traits::PropertySource;
use crate::detail::{resolve_property, DetailState};
use crate::models::PropertyId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Detail view state machine: `Loading -> Found | NotFound`, re-entered on
/// every navigation.
///
/// Each navigation bumps a generation counter. A response is committed only
/// if its generation is still the latest, so a slow response for an old id
/// can never overwrite the state of a newer one. The counter is only touched
/// while holding the watch channel's lock.
pub struct DetailView {
    source: Arc<dyn PropertySource>,
    generation: Arc<AtomicU64>,
    tx: Arc<watch::Sender<DetailState>>,
    rx: watch::Receiver<DetailState>,
    in_flight: Vec<JoinHandle<()>>,
}

impl DetailView {
    pub fn new(source: Arc<dyn PropertySource>) -> Self {
        let (tx, rx) = watch::channel(DetailState::Loading);
        Self {
            source,
            generation: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
            rx,
            in_flight: Vec::new(),
        }
    }

    /// Enter `Loading` for `id` and start resolving it
    pub fn navigate(&mut self, id: PropertyId) {
        let mut generation = 0;
        self.tx.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = DetailState::Loading;
        });
        debug!("Navigating to property {} (generation {})", id, generation);

        let source = Arc::clone(&self.source);
        let current = Arc::clone(&self.generation);
        let tx = Arc::clone(&self.tx);

        self.in_flight.retain(|handle| !handle.is_finished());
        self.in_flight.push(tokio::spawn(async move {
            let resolved = resolve_property(source.as_ref(), &id).await;
            let committed = tx.send_if_modified(|state| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *state = resolved;
                true
            });
            if !committed {
                debug!("Discarding stale response for {} (generation {})", id, generation);
            }
        }));
    }

    pub fn state(&self) -> DetailState {
        self.rx.borrow().clone()
    }

    /// Wait for the current navigation to reach `Found` or `NotFound`
    pub async fn settled(&mut self) -> DetailState {
        let settled = match self.rx.wait_for(DetailState::is_terminal).await {
            Ok(state) => Some(state.clone()),
            Err(_) => None,
        };
        settled.unwrap_or_else(|| self.state())
    }
}

impl Drop for DetailView {
    fn drop(&mut self) {
        for handle in &self.in_flight {
            handle.abort();
        }
    }
}
