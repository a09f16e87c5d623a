//! Debounced free-text search over the records endpoint.
//!
//! The controller owns no timers and performs no I/O. The caller:
//!
//! 1. forwards every keystroke to [`SearchController::input`] and (re)arms a
//!    single timer of [`SEARCH_DEBOUNCE_MS`] for the returned ticket;
//! 2. when the timer fires, calls [`SearchController::fire`] and performs the
//!    returned [`SearchDispatch`], if any;
//! 3. hands the response to [`SearchController::resolve`], which drops
//!    answers to anything but the latest dispatch.

use crate::shared::api_error::ApiError;

/// Quiet period after the last keystroke before a request goes out.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Identifies one scheduled dispatch. Only the most recent ticket can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    id: u64,
    due_at_ms: u64,
}

impl DebounceTicket {
    pub fn due_at_ms(&self) -> u64 {
        self.due_at_ms
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Empty or whitespace-only query: list everything.
    FetchAll,
    /// Trimmed query for the search endpoint.
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDispatch {
    pub request_id: u64,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResolution<T> {
    /// Latest request succeeded; replace the collection.
    Apply(T),
    /// Superseded or cancelled request; keep what is displayed.
    Stale,
    /// Latest request failed; keep what is displayed and report.
    Failed(ApiError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchController {
    query: String,
    last_ticket: u64,
    pending: Option<DebounceTicket>,
    last_request: u64,
    latest_dispatched: Option<u64>,
    in_flight: Option<u64>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True from dispatch until the latest request resolves.
    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a keystroke. The query updates at once; any previously
    /// scheduled dispatch is superseded by the returned ticket.
    pub fn input(&mut self, text: impl Into<String>, now_ms: u64) -> DebounceTicket {
        self.query = text.into();
        self.last_ticket += 1;
        let ticket = DebounceTicket {
            id: self.last_ticket,
            due_at_ms: now_ms.saturating_add(SEARCH_DEBOUNCE_MS),
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Timer callback for `ticket`. `None` when a newer keystroke replaced it
    /// or it was cancelled.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<SearchDispatch> {
        if self.pending != Some(ticket) {
            return None;
        }
        self.pending = None;
        Some(self.dispatch())
    }

    /// Clock-driven alternative to [`fire`](Self::fire): dispatch once the
    /// pending ticket's quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<SearchDispatch> {
        let ticket = self.pending?;
        if now_ms < ticket.due_at_ms {
            return None;
        }
        self.fire(ticket)
    }

    /// Dispatch the current query right away (initial load, refresh, after a
    /// write). Drops any pending keystroke timer.
    pub fn refresh(&mut self) -> SearchDispatch {
        self.pending = None;
        self.dispatch()
    }

    /// Empty the query and list everything immediately.
    pub fn clear(&mut self) -> SearchDispatch {
        self.query.clear();
        self.refresh()
    }

    fn dispatch(&mut self) -> SearchDispatch {
        self.last_request += 1;
        let request_id = self.last_request;
        self.latest_dispatched = Some(request_id);
        self.in_flight = Some(request_id);

        let trimmed = self.query.trim();
        let request = if trimmed.is_empty() {
            SearchRequest::FetchAll
        } else {
            SearchRequest::Search(trimmed.to_string())
        };
        SearchDispatch {
            request_id,
            request,
        }
    }

    /// Route a response. Only the latest dispatched request may change the
    /// displayed collection or clear the searching flag.
    pub fn resolve<T>(&mut self, request_id: u64, result: Result<T, ApiError>) -> SearchResolution<T> {
        if self.latest_dispatched != Some(request_id) {
            return SearchResolution::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(value) => SearchResolution::Apply(value),
            Err(err) => SearchResolution::Failed(err),
        }
    }

    /// Forget the pending timer and every outstanding request, e.g. when the
    /// owning view unmounts. Late responses then resolve as stale.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.latest_dispatched = None;
        self.in_flight = None;
    }
}
