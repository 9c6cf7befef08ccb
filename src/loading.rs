use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Placeholder cards shown while the listing is "loading"
pub const SKELETON_COUNT: usize = 6;

pub const DEFAULT_LISTING_DELAY: Duration = Duration::from_millis(1500);

/// Simulated network latency for the listing view.
///
/// A single timer flips the gate from loading to ready. Dropping the gate
/// aborts the timer, so a view torn down early never sees a late update.
pub struct LoadingGate {
    rx: watch::Receiver<bool>,
    timer: JoinHandle<()>,
}

impl LoadingGate {
    pub fn start(delay: Duration) -> Self {
        let (tx, rx) = watch::channel(true);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("Loading delay of {:?} elapsed", delay);
            let _ = tx.send(false);
        });

        Self { rx, timer }
    }

    pub fn is_loading(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until the delay has elapsed
    pub async fn ready(&mut self) {
        let _ = self.rx.wait_for(|loading| !*loading).await;
    }
}

impl Drop for LoadingGate {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn reveals_after_delay() {
        let mut gate = LoadingGate::start(DEFAULT_LISTING_DELAY);
        assert!(gate.is_loading());

        tokio::time::sleep(Duration::from_millis(1400)).await;
        assert!(gate.is_loading());

        gate.ready().await;
        assert!(!gate.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_timer() {
        let gate = LoadingGate::start(DEFAULT_LISTING_DELAY);
        let observer = gate.rx.clone();
        drop(gate);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(*observer.borrow());
        assert!(observer.has_changed().is_err());
    }
}
