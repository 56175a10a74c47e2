//! Fetch lifecycle state machine with stale-result discard.

use tracing::{debug, warn};

use vitrine_data::FetchError;

/// Identity of one issued fetch. Later requests supersede earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// What a page is fetching; phrases the failure copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSubject {
    ProductList,
    Product,
}

impl FetchSubject {
    /// Convert a fetch error into user-facing copy. Only a 404 on a
    /// single-record lookup is distinguished from generic failure.
    pub fn failure(self, error: &FetchError) -> LoadFailure {
        let not_found = self == FetchSubject::Product && error.is_not_found();
        let message = if not_found {
            "Product not found.".to_string()
        } else {
            match error {
                FetchError::Http { .. } => match self {
                    FetchSubject::ProductList => "Failed to load products.".to_string(),
                    FetchSubject::Product => "Failed to load product.".to_string(),
                },
                FetchError::Network(_) | FetchError::Parse(_) => "Something went wrong.".to_string(),
            }
        };
        LoadFailure { message, not_found }
    }
}

/// User-facing failure produced at the lifecycle boundary; no raw
/// [`FetchError`] ever reaches the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub message: String,
    pub not_found: bool,
}

/// What the page currently knows about its data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPhase<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(LoadFailure),
}

/// Lifecycle of a page fetch: `Idle → Loading → Loaded | Failed`.
///
/// [`begin`](Self::begin) hands out a fresh monotonic token and supersedes
/// any in-flight request; [`settle`](Self::settle) applies a result only
/// when it carries the most recent token. The owning view's event loop
/// serializes all transitions, so no locking is involved.
#[derive(Debug)]
pub struct FetchLifecycle<T> {
    subject: FetchSubject,
    phase: FetchPhase<T>,
    next_token: u64,
    active: Option<RequestToken>,
}

impl<T> FetchLifecycle<T> {
    pub fn new(subject: FetchSubject) -> Self {
        Self {
            subject,
            phase: FetchPhase::Idle,
            next_token: 0,
            active: None,
        }
    }

    pub fn phase(&self) -> &FetchPhase<T> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    /// The loaded value, if the last settled fetch succeeded.
    pub fn loaded(&self) -> Option<&T> {
        match &self.phase {
            FetchPhase::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if the last settled fetch failed.
    pub fn failure(&self) -> Option<&LoadFailure> {
        match &self.phase {
            FetchPhase::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Start a fetch: transition to `Loading` and return the token the
    /// result must present to [`settle`](Self::settle).
    pub fn begin(&mut self) -> RequestToken {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.active = Some(token);
        self.phase = FetchPhase::Loading;
        token
    }

    /// Apply a fetch result. Returns `false` (leaving state untouched) when
    /// `token` is not the most recent one: the most recent fetch wins, and
    /// an earlier in-flight result arriving late is discarded.
    pub fn settle(&mut self, token: RequestToken, result: Result<T, FetchError>) -> bool {
        if self.active != Some(token) {
            debug!(token = token.0, "discarding stale fetch result");
            return false;
        }
        self.active = None;
        self.phase = match result {
            Ok(value) => FetchPhase::Loaded(value),
            Err(error) => {
                warn!(%error, "fetch failed");
                FetchPhase::Failed(self.subject.failure(&error))
            }
        };
        true
    }

    /// Drop interest in any in-flight fetch (navigation or unmount); its
    /// result will no longer be applied.
    pub fn abandon(&mut self) {
        self.active = None;
    }
}
