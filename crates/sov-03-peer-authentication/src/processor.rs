//! # Peer Authentication Requests Processor
//!
//! Background coordinator task: INIT -> CHUNKED_SWEEP -> POLL -> DONE.
//!
//! The task is spawned at construction and owns its collaborators. It
//! terminates on the first of: fill threshold met, `close()` called, or the
//! hard deadline elapsing. Failures inside the task are silent; `close()` is
//! the only external signal.

use crate::algorithms::{missing_keys, required_messages, sample_without_replacement};
use crate::domain::{PeerAuthError, PeerAuthRequestsConfig};
use crate::ports::outbound::{NodesCoordinator, PeerAuthenticationCache, RequestHandler};
use parking_lot::Mutex;
use shared_types::PublicKey;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Handle to the background request cycle.
///
/// Construction validates the config and spawns the task on the current
/// tokio runtime. [`Self::close`] cancels it and is idempotent; dropping the
/// handle closes as well.
pub struct PeerAuthenticationRequestsProcessor {
    shutdown: Mutex<Option<oneshot::Sender<()>>>,
    completed: Arc<AtomicBool>,
}

impl PeerAuthenticationRequestsProcessor {
    /// Validate the config and start the background task.
    pub fn new(
        config: PeerAuthRequestsConfig,
        nodes_coordinator: Arc<dyn NodesCoordinator>,
        cache: Arc<dyn PeerAuthenticationCache>,
        request_handler: Arc<dyn RequestHandler>,
    ) -> Result<Self, PeerAuthError> {
        config.validate()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let completed = Arc::new(AtomicBool::new(false));

        let worker = RequestWorker {
            config,
            nodes_coordinator,
            cache,
            request_handler,
            completed: Arc::clone(&completed),
        };
        tokio::spawn(worker.run(shutdown_rx));

        Ok(Self { shutdown: Mutex::new(Some(shutdown_tx)), completed })
    }

    /// Cancel the background task. Idempotent; later calls are no-ops.
    pub fn close(&self) -> Result<(), PeerAuthError> {
        if let Some(tx) = self.shutdown.lock().take() {
            debug!("closing peer authentication requests processor");
            // The task may already have finished on its own.
            let _ = tx.send(());
        }
        Ok(())
    }

    /// Returns true once the background task has terminated.
    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }
}

impl Drop for PeerAuthenticationRequestsProcessor {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// State owned by the background task.
struct RequestWorker {
    config: PeerAuthRequestsConfig,
    nodes_coordinator: Arc<dyn NodesCoordinator>,
    cache: Arc<dyn PeerAuthenticationCache>,
    request_handler: Arc<dyn RequestHandler>,
    completed: Arc<AtomicBool>,
}

impl RequestWorker {
    async fn run(self, mut shutdown: oneshot::Receiver<()>) {
        info!(
            shard = self.config.shard_id,
            epoch = self.config.epoch,
            max_timeout_secs = self.config.max_timeout.as_secs(),
            "starting peer authentication request cycle"
        );

        let deadline = sleep(self.config.max_timeout);
        tokio::pin!(deadline);

        tokio::select! {
            _ = &mut shutdown => {
                debug!("request cycle cancelled");
            }
            _ = &mut deadline => {
                warn!("request cycle hit max timeout before threshold");
            }
            _ = self.request_cycle() => {}
        }

        self.completed.store(true, Ordering::SeqCst);
        debug!("peer authentication request cycle stopped");
    }

    /// INIT, sweep, then poll until the threshold is met. Cancellation and
    /// the deadline race this whole future from `run`.
    async fn request_cycle(&self) {
        let keys = match self.fetch_sorted_keys().await {
            Ok(keys) => keys,
            // Silent shutdown: no retry, close() remains the only signal.
            Err(err) => {
                debug!(error = %err, "validator set lookup failed, stopping");
                return;
            }
        };

        self.chunked_sweep(keys.len()).await;
        self.poll(&keys).await;
    }

    /// Fetch the eligible set for the epoch, flatten the per-shard mapping,
    /// sort ascending.
    async fn fetch_sorted_keys(&self) -> Result<Vec<PublicKey>, PeerAuthError> {
        let by_shard = self.nodes_coordinator.eligible_validators(self.config.epoch).await?;

        let mut keys: Vec<PublicKey> = by_shard.into_values().flatten().collect();
        keys.sort();

        debug!(validators = keys.len(), "fetched eligible validator keys");
        Ok(keys)
    }

    /// Issue one request per chunk of the expected message set, spacing every
    /// request - the last included - by the configured delay. The sweep
    /// always completes before the first poll request.
    async fn chunked_sweep(&self, total_keys: usize) {
        let max_chunks = total_keys.div_ceil(self.config.messages_in_chunk);
        debug!(chunks = max_chunks, "starting chunked sweep");

        for chunk_index in 0..max_chunks {
            self.request_handler
                .request_chunk(self.config.shard_id, chunk_index as u32)
                .await;
            sleep(self.config.delay_between_requests).await;
        }
    }

    /// Re-check the threshold on every tick; request a random sample of the
    /// missing keys while below it.
    async fn poll(&self, validator_keys: &[PublicKey]) {
        let required = required_messages(validator_keys.len(), self.config.min_peers_threshold);

        loop {
            let cached = self.cache.keys();
            if self.threshold_met(validator_keys, &cached, required) {
                info!(
                    required,
                    validators = validator_keys.len(),
                    "fill threshold met, stopping request cycle"
                );
                return;
            }

            let missing = missing_keys(validator_keys, &cached);
            let sample = {
                let mut rng = rand::thread_rng();
                sample_without_replacement(
                    &missing,
                    self.config.max_missing_keys_in_response,
                    &mut rng,
                )
            };
            debug!(missing = missing.len(), requested = sample.len(), "requesting missing keys");
            self.request_handler.request_by_hashes(self.config.shard_id, sample).await;

            sleep(self.config.delay_between_requests).await;
        }
    }

    /// Threshold counts only cached keys that belong to the validator set.
    fn threshold_met(
        &self,
        validator_keys: &[PublicKey],
        cached: &[PublicKey],
        required: usize,
    ) -> bool {
        let cached_set: HashSet<&PublicKey> = cached.iter().collect();
        let hits = validator_keys.iter().filter(|key| cached_set.contains(key)).count();
        hits >= required
    }
}
