use crate::state::SyncState;
use crate::{Result as SyncErrorResult, SyncError};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use error_location::ErrorLocation;
use tokio::sync::watch;

/// Cheap-clone shared state of one sync session.
///
/// Carries the guarded [`SyncState`], the remote-availability flag that
/// gates item saves, and the cancellation flag that keeps a torn-down
/// session from applying stale hydration results.
#[derive(Clone)]
pub struct SyncHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    state_tx: watch::Sender<SyncState>,
    remote_available: AtomicBool,
    cancelled: AtomicBool,
}

impl SyncHandle {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(SyncState::Idle);
        Self {
            inner: Arc::new(HandleInner {
                state_tx,
                remote_available: AtomicBool::new(true),
                cancelled: AtomicBool::new(false),
            }),
        }
    }

    pub fn state(&self) -> SyncState {
        *self.inner.state_tx.borrow()
    }

    pub fn watch_state(&self) -> watch::Receiver<SyncState> {
        self.inner.state_tx.subscribe()
    }

    #[track_caller]
    pub fn begin_hydration(&self) -> SyncErrorResult<()> {
        self.transition(SyncState::Hydrating)
    }

    #[track_caller]
    pub fn finish_hydration(&self) -> SyncErrorResult<()> {
        self.transition(SyncState::Ready)
    }

    #[track_caller]
    fn transition(&self, to: SyncState) -> SyncErrorResult<()> {
        let caller = Location::caller();
        let mut result = Ok(());
        self.inner.state_tx.send_modify(|state| {
            if state.can_become(to) {
                *state = to;
            } else {
                result = Err(SyncError::IllegalTransition {
                    from: *state,
                    to,
                    location: ErrorLocation::from(caller),
                });
            }
        });
        result
    }

    pub fn remote_available(&self) -> bool {
        self.inner.remote_available.load(Ordering::Acquire)
    }

    pub fn set_remote_available(&self, available: bool) {
        self.inner.remote_available.store(available, Ordering::Release);
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }
}

impl Default for SyncHandle {
    fn default() -> Self {
        Self::new()
    }
}
