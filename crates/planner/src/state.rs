//! The `Loading -> Ready | Failed` state machine every section runs.

use std::future::Future;

use crate::error::PlannerError;

/// Remote data as a section sees it.
///
/// Starts in `Loading` and is re-entered on every refetch. There is no
/// terminal state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Settle from a fetch result.
    pub fn settle(&mut self, result: Result<T, PlannerError>) {
        *self = match result {
            Ok(data) => Loadable::Ready(data),
            Err(e) => {
                if !e.is_cancelled() {
                    tracing::warn!(error = %e, "Section fetch failed");
                }
                Loadable::Failed(e.user_message())
            }
        };
    }

    /// Enter `Loading`, await `fetch`, then settle.
    pub async fn load<F>(&mut self, fetch: F)
    where
        F: Future<Output = Result<T, PlannerError>>,
    {
        *self = Loadable::Loading;
        let result = fetch.await;
        self.settle(result);
    }
}
