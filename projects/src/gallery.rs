//! Gallery lifecycle: one resolution per load, three observable states.
//!
//! A [`GalleryLoader`] starts in [`GalleryState::Pending`] and moves exactly
//! once to `Empty` or `Populated`. Per-repository progress is never
//! published. Dropping the loader abandons the resolution.

use crate::errors::Result;
use crate::model::ProjectRecord;
use crate::ordering::sort_for_display;
use crate::resolver::ProjectResolver;
use crate::source::RepoSource;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryState {
    /// Resolution outstanding; render the skeleton
    Pending,
    /// Nothing to show ("no works yet"), including listing failures
    Empty,
    /// Projects in display order
    Populated(Vec<ProjectRecord>),
}

impl GalleryState {
    /// Map a finished resolution onto what the page shows.
    pub fn from_outcome(outcome: Result<Vec<ProjectRecord>>) -> Self {
        match outcome {
            Ok(records) if records.is_empty() => Self::Empty,
            Ok(mut records) => {
                sort_for_display(&mut records);
                Self::Populated(records)
            }
            Err(err) => {
                tracing::warn!(
                    category = err.category().as_str(),
                    error = %err,
                    "gallery unavailable"
                );
                Self::Empty
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        match self {
            Self::Populated(records) => records,
            Self::Pending | Self::Empty => &[],
        }
    }
}

/// Owns one in-flight resolution for the lifetime of a page.
///
/// Publishing and teardown both run under the channel's write lock, so a
/// state is either published before teardown or not at all.
pub struct GalleryLoader {
    state: watch::Receiver<GalleryState>,
    publisher: Arc<watch::Sender<GalleryState>>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl GalleryLoader {
    /// Start resolving `account` on the current tokio runtime.
    pub fn spawn<S>(resolver: Arc<ProjectResolver<S>>, account: Option<String>) -> Self
    where
        S: RepoSource + 'static,
    {
        let (tx, rx) = watch::channel(GalleryState::Pending);
        let publisher = Arc::new(tx);
        let cancel = CancellationToken::new();

        let task = tokio::spawn({
            let publisher = Arc::clone(&publisher);
            let token = cancel.clone();
            async move {
                let outcome = resolver
                    .resolve_projects_until(account.as_deref(), &token)
                    .await;
                let published = publisher.send_if_modified(|state| {
                    if token.is_cancelled() {
                        return false;
                    }
                    *state = GalleryState::from_outcome(outcome);
                    true
                });
                if !published {
                    tracing::debug!("gallery torn down before resolution settled");
                }
            }
        });

        Self {
            state: rx,
            publisher,
            cancel,
            task,
        }
    }

    /// Current state without waiting
    pub fn state(&self) -> GalleryState {
        self.state.borrow().clone()
    }

    /// Receiver for renderers that redraw on change
    pub fn subscribe(&self) -> watch::Receiver<GalleryState> {
        self.state.clone()
    }

    /// Wait until the gallery leaves `Pending`.
    ///
    /// If the resolution was torn down first the last published state is
    /// returned.
    pub async fn settled(&mut self) -> GalleryState {
        let cancel = self.cancel.clone();
        tokio::select! {
            biased;
            res = self.state.wait_for(|s| !s.is_pending()) => {
                if res.is_err() {
                    tracing::debug!("gallery publisher closed");
                }
            }
            _ = cancel.cancelled() => tracing::debug!("gallery resolution abandoned"),
        }
        self.state.borrow().clone()
    }

    /// Abandon the resolution. In-flight requests are dropped and the state
    /// stays where it was.
    pub fn teardown(&self) {
        self.publisher.send_if_modified(|_| {
            self.cancel.cancel();
            false
        });
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for GalleryLoader {
    fn drop(&mut self) {
        self.teardown();
    }
}
