//! Boundary to the external opponent engine.
//!
//! The rules engine only encodes a position, hands it over and decodes the
//! single best-move reply. [`EngineLink`] enforces that at most one request
//! is outstanding: a second submission is refused, and a reply to a request
//! that was stopped or replaced is never handed back as a move.
//!
//! # Example
//! ```
//! use chess_rules::engine::{EngineLink, EngineRequest};
//! use chess_rules::game::Position;
//!
//! let link = EngineLink::new();
//! let ticket = link.submit(EngineRequest::new(&Position::initial(), 8)).unwrap();
//! assert!(link.submit(EngineRequest::default()).is_err());
//! let best = link.resolve(ticket, "e2e4").unwrap();
//! assert!(best.is_some());
//! ```

mod link;
mod opponent;
mod reply;

pub use link::{EngineError, EngineLink, EngineRequest, RequestState, Ticket};
pub use opponent::Opponent;
pub use reply::BestMove;
