//! Fetch sequencing: one request per effective query change, last issued
//! request wins.
//!
//! Every issued request carries a monotonically increasing sequence number.
//! A response is only committed when its sequence is still the latest one;
//! anything older is dropped on arrival, success or failure alike. There is
//! no cancellation and no retry.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::{
    error::FetchError,
    listing::{ListPage, ListState},
    query::{QueryState, RequestDescriptor},
};

/// Performs the HTTP round trip for a descriptor.
///
/// Futures are `!Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport {
    /// Fetches and validates one listing page.
    async fn fetch(&self, request: &RequestDescriptor) -> Result<ListPage, FetchError>;
}

/// Proof that a request was issued, consumed when its response arrives.
#[derive(Debug)]
pub struct Ticket {
    seq: u64,
    query: QueryState,
    descriptor: RequestDescriptor,
}

impl Ticket {
    /// Request to send.
    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }
}

/// Result of resolving a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the list state.
    Committed,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
    /// The latest request failed; the list state was left untouched.
    Failed(FetchError),
    /// The query equals the last issued one, so nothing was sent.
    Unchanged,
}

/// Sequence bookkeeping for listing requests.
#[derive(Debug, Default)]
pub struct FetchCoordinator {
    seq: u64,
    latest: Option<QueryState>,
}

impl FetchCoordinator {
    /// Creates a coordinator that has issued nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a request for `query`, or `None` if it equals the last issued
    /// query.
    pub fn issue(&mut self, query: QueryState) -> Option<Ticket> {
        if self.latest == Some(query) {
            return None;
        }
        self.seq += 1;
        self.latest = Some(query);
        let descriptor = query.descriptor();
        tracing::debug!(
            seq = self.seq,
            page = descriptor.page,
            page_size = descriptor.page_size.get(),
            sort = descriptor.sort.as_str(),
            "issuing listing request"
        );
        Some(Ticket {
            seq: self.seq,
            query,
            descriptor,
        })
    }

    /// Applies a response to `state` if `ticket` is still the latest.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<ListPage, FetchError>,
        state: &mut ListState,
    ) -> FetchOutcome {
        if ticket.seq != self.seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.seq,
                page = ticket.query.page(),
                "dropping stale listing response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                tracing::debug!(
                    seq = ticket.seq,
                    records = page.records.len(),
                    last_page = page.last_page,
                    "committing listing page"
                );
                state.commit(ticket.query, page);
                FetchOutcome::Committed
            },
            Err(err) => {
                tracing::warn!(
                    seq = ticket.seq,
                    page = ticket.query.page(),
                    error = %err,
                    "listing fetch failed, keeping previous page"
                );
                FetchOutcome::Failed(err)
            },
        }
    }
}

/// Coordinator, list state and transport bundled for a single view.
///
/// Meant to be shared as `Rc<Listing<_>>`; no borrow is held across the
/// transport's await point, so overlapping [`Listing::apply`] calls are
/// fine.
pub struct Listing<T> {
    transport: T,
    coordinator: RefCell<FetchCoordinator>,
    state: RefCell<ListState>,
}

impl<T: Transport> Listing<T> {
    /// Creates a listing in its initial loading state.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            coordinator: RefCell::new(FetchCoordinator::new()),
            state: RefCell::new(ListState::default()),
        }
    }

    /// Snapshot of the committed state.
    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Fetches `query` and commits the response if it is still current.
    pub async fn apply(&self, query: QueryState) -> FetchOutcome {
        let Some(ticket) = self.coordinator.borrow_mut().issue(query) else {
            return FetchOutcome::Unchanged;
        };

        let result = self.transport.fetch(ticket.descriptor()).await;

        let mut state = self.state.borrow_mut();
        self.coordinator
            .borrow_mut()
            .resolve(ticket, result, &mut state)
    }
}
