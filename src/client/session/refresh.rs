//! Single-flight coordination of access token refreshes.
//!
//! Every request that observes a 401 on its first attempt funnels through one [`RefreshGate`].
//! The first caller starts the refresh operation and parks it in the gate's slot as a shared
//! future; callers arriving while it is in flight attach to that same future instead of
//! issuing their own refresh call. The slot is emptied by the operation itself the moment it
//! settles, so the next 401 after that starts a fresh refresh.

use std::future::Future;
use std::sync::{Arc, Weak};

use dioxus_logger::tracing;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;

/// Reason a refresh operation failed, shared by every caller that awaited it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshFailure(pub String);

pub type RefreshResult = Result<(), RefreshFailure>;

type InFlight = Shared<BoxFuture<'static, RefreshResult>>;

#[derive(Default)]
struct Slot {
    /// Incremented for every refresh operation started through the gate
    generation: u64,
    in_flight: Option<InFlight>,
}

/// Holds at most one in-flight refresh operation
#[derive(Default)]
pub struct RefreshGate {
    slot: Mutex<Slot>,
}

impl RefreshGate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Await the in-flight refresh, starting it with `start` if none is running.
    ///
    /// `start` is only invoked when this caller becomes the one that begins the operation;
    /// concurrent callers receive a clone of the same result.
    pub async fn run<F, Fut>(self: &Arc<Self>, start: F) -> RefreshResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RefreshResult> + Send + 'static,
    {
        let in_flight = {
            let mut slot = self.slot.lock();

            match &slot.in_flight {
                Some(in_flight) => {
                    tracing::debug!(
                        generation = slot.generation,
                        "Joining in-flight session refresh"
                    );

                    in_flight.clone()
                }
                None => {
                    slot.generation += 1;
                    let generation = slot.generation;
                    tracing::debug!(generation = generation, "Starting session refresh");

                    let gate: Weak<Self> = Arc::downgrade(self);
                    let operation = start();
                    let in_flight = async move {
                        let result = operation.await;

                        if let Some(gate) = gate.upgrade() {
                            gate.settle(generation);
                        }

                        result
                    }
                    .boxed()
                    .shared();

                    slot.in_flight = Some(in_flight.clone());
                    in_flight
                }
            }
        };

        in_flight.await
    }

    /// Returns true while a refresh operation is running
    pub fn is_in_flight(&self) -> bool {
        self.slot.lock().in_flight.is_some()
    }

    /// Number of refresh operations started through this gate so far
    pub fn generation(&self) -> u64 {
        self.slot.lock().generation
    }

    fn settle(&self, generation: u64) {
        let mut slot = self.slot.lock();

        if slot.generation == generation {
            slot.in_flight = None;
        }
    }
}
