//! Load tickets: keeps late results from superseded requests out of a view.
//!
//! Every mount or input change issues a fresh [`LoadTicket`]. Only the most
//! recently issued ticket may settle the view, and only once. Unmounting
//! revokes the outstanding ticket.

/// Handle for one request issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Per-view counter deciding which in-flight request may still write state.
#[derive(Debug, Default)]
pub struct Generation {
    issued: u64,
    pending: Option<LoadTicket>,
}

impl Generation {
    /// Issue a new ticket, superseding any outstanding one.
    pub fn issue(&mut self) -> LoadTicket {
        self.issued += 1;
        let ticket = LoadTicket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    /// Revoke the outstanding ticket, if any.
    pub fn revoke(&mut self) {
        self.pending = None;
    }

    /// Whether `ticket` is the outstanding one.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Consume `ticket` if it is still outstanding.
    ///
    /// Returns `false` for stale, revoked, or already-settled tickets; the
    /// caller must then drop the result without touching state.
    pub fn settle(&mut self, ticket: LoadTicket) -> bool {
        if self.is_current(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
