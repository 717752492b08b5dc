//! Request Generations
//!
//! Each flow stamps its requests with a generation token. A response whose
//! token is no longer the latest for its flow is stale and must not render.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::Flow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationToken(u64);

/// Monotonic counter for one flow
#[derive(Debug, Default)]
pub struct Generation {
    latest: AtomicU64,
}

impl Generation {
    /// Start a new request, superseding any in flight
    pub fn begin(&self) -> GenerationToken {
        GenerationToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: GenerationToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// One generation per flow, plus the background category refresh
#[derive(Debug, Default)]
pub struct FlowGenerations {
    update: Generation,
    overdue: Generation,
    category: Generation,
    pub categories: Generation,
}

impl FlowGenerations {
    pub fn for_flow(&self, flow: Flow) -> &Generation {
        match flow {
            Flow::Update => &self.update,
            Flow::Overdue => &self.overdue,
            Flow::Category => &self.category,
        }
    }
}
