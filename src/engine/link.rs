//! Single-slot request tracking for the opponent engine.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::reply::BestMove;
use crate::board::MoveParseError;
use crate::game::Position;

/// Identifies one submitted request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[inline]
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A position handed to the opponent engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineRequest {
    /// Position in FEN, as produced by [`Position::to_fen`]
    pub fen: String,
    /// Search depth chosen by the caller; passed through untouched
    pub depth: u32,
}

impl EngineRequest {
    pub const DEFAULT_DEPTH: u32 = 10;

    #[must_use]
    pub fn new(position: &Position, depth: u32) -> Self {
        EngineRequest {
            fen: position.to_fen(),
            depth,
        }
    }
}

impl Default for EngineRequest {
    fn default() -> Self {
        EngineRequest::new(&Position::initial(), EngineRequest::DEFAULT_DEPTH)
    }
}

/// Error type for the request slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A request is already outstanding
    Busy { pending: Ticket },
    /// A reply arrived for a ticket that was never issued
    NotAwaiting { ticket: Ticket },
    /// The request was stopped or replaced; its reply must not be applied
    Superseded { ticket: Ticket },
    /// The reply could not be decoded
    Decode(MoveParseError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Busy { pending } => {
                write!(f, "Engine request {pending} is still outstanding")
            }
            EngineError::NotAwaiting { ticket } => {
                write!(f, "No request {ticket} was submitted")
            }
            EngineError::Superseded { ticket } => {
                write!(f, "Engine request {ticket} was superseded")
            }
            EngineError::Decode(err) => write!(f, "Bad engine reply: {err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveParseError> for EngineError {
    fn from(err: MoveParseError) -> Self {
        EngineError::Decode(err)
    }
}

/// State of the request slot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Awaiting { ticket: Ticket, request: EngineRequest },
}

#[derive(Debug, Default)]
struct Slot {
    state: RequestState,
    issued: u64,
}

/// Shared handle to the at-most-one outstanding engine request.
///
/// Clones share the same slot, so the side that submits and the side that
/// delivers the reply (possibly another thread) agree on which request is
/// current.
#[derive(Clone, Debug, Default)]
pub struct EngineLink {
    slot: Arc<Mutex<Slot>>,
}

impl EngineLink {
    #[must_use]
    pub fn new() -> Self {
        EngineLink::default()
    }

    /// Claim the slot for `request`.
    ///
    /// Fails with [`EngineError::Busy`] while another request is awaiting its
    /// reply; nothing is queued.
    pub fn submit(&self, request: EngineRequest) -> Result<Ticket, EngineError> {
        let mut slot = self.slot.lock();
        if let RequestState::Awaiting { ticket, .. } = &slot.state {
            trace_event!(warn, "engine busy with {}, refusing new request", ticket);
            return Err(EngineError::Busy { pending: *ticket });
        }
        slot.issued += 1;
        let ticket = Ticket(slot.issued);
        trace_event!(debug, "engine request {} submitted: {}", ticket, request.fen);
        slot.state = RequestState::Awaiting { ticket, request };
        Ok(ticket)
    }

    /// Supersede the outstanding request, if any, without waiting for the
    /// engine to acknowledge. Its eventual reply will be refused.
    pub fn stop(&self) -> Option<Ticket> {
        let mut slot = self.slot.lock();
        match std::mem::take(&mut slot.state) {
            RequestState::Awaiting { ticket, .. } => {
                trace_event!(debug, "engine request {} stopped", ticket);
                Some(ticket)
            }
            RequestState::Idle => None,
        }
    }

    /// Deliver the engine's reply for `ticket`.
    ///
    /// Frees the slot and decodes the reply when `ticket` is the outstanding
    /// request. A "no move" reply yields `Ok(None)`. Replies for stopped or
    /// replaced requests fail with [`EngineError::Superseded`] and leave the
    /// slot untouched.
    pub fn resolve(&self, ticket: Ticket, reply: &str) -> Result<Option<BestMove>, EngineError> {
        let mut slot = self.slot.lock();
        let current = match &slot.state {
            RequestState::Awaiting { ticket, .. } => Some(*ticket),
            RequestState::Idle => None,
        };
        if current != Some(ticket) {
            if ticket.0 == 0 || ticket.0 > slot.issued {
                return Err(EngineError::NotAwaiting { ticket });
            }
            trace_event!(debug, "dropping stale reply '{}' for {}", reply, ticket);
            return Err(EngineError::Superseded { ticket });
        }
        slot.state = RequestState::Idle;
        drop(slot);

        let best = BestMove::parse(reply)?;
        match &best {
            Some(mv) => trace_event!(debug, "engine request {} answered {}", ticket, mv),
            None => trace_event!(debug, "engine request {} answered with no move", ticket),
        }
        Ok(best)
    }

    /// The ticket currently awaiting a reply
    #[must_use]
    pub fn pending(&self) -> Option<Ticket> {
        match &self.slot.lock().state {
            RequestState::Awaiting { ticket, .. } => Some(*ticket),
            RequestState::Idle => None,
        }
    }

    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        self.pending().is_some()
    }

    /// Snapshot of the slot state
    #[must_use]
    pub fn state(&self) -> RequestState {
        self.slot.lock().state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_is_refused() {
        let link = EngineLink::new();
        let first = link.submit(EngineRequest::default()).unwrap();
        assert_eq!(
            link.submit(EngineRequest::default()),
            Err(EngineError::Busy { pending: first })
        );
        assert_eq!(link.pending(), Some(first));
    }

    #[test]
    fn test_resolve_frees_slot() {
        let link = EngineLink::new();
        let ticket = link.submit(EngineRequest::default()).unwrap();
        let best = link.resolve(ticket, "e2e4").unwrap();
        assert_eq!(best.map(|b| b.to_string()), Some("e2e4".to_string()));
        assert!(!link.is_awaiting());
        assert!(link.submit(EngineRequest::default()).is_ok());
    }

    #[test]
    fn test_stale_reply_after_stop() {
        let link = EngineLink::new();
        let old = link.submit(EngineRequest::default()).unwrap();
        assert_eq!(link.stop(), Some(old));
        let new = link.submit(EngineRequest::default()).unwrap();
        assert_ne!(old, new);
        assert_eq!(
            link.resolve(old, "e2e4"),
            Err(EngineError::Superseded { ticket: old })
        );
        assert_eq!(link.pending(), Some(new));
    }

    #[test]
    fn test_unknown_ticket() {
        let link = EngineLink::new();
        assert_eq!(
            link.resolve(Ticket(7), "e2e4"),
            Err(EngineError::NotAwaiting { ticket: Ticket(7) })
        );
    }

    #[test]
    fn test_decode_error_still_frees_slot() {
        let link = EngineLink::new();
        let ticket = link.submit(EngineRequest::default()).unwrap();
        assert!(matches!(
            link.resolve(ticket, "zz"),
            Err(EngineError::Decode(_))
        ));
        assert_eq!(link.state(), RequestState::Idle);
    }

    #[test]
    fn test_stop_when_idle() {
        let link = EngineLink::new();
        assert_eq!(link.stop(), None);
    }

    #[test]
    fn test_default_request_encodes_start_position() {
        let request = EngineRequest::default();
        assert_eq!(
            request.fen,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
        assert_eq!(request.depth, EngineRequest::DEFAULT_DEPTH);
    }
}
