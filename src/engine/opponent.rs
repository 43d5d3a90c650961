use super::link::{EngineError, EngineLink, EngineRequest};
use super::reply::BestMove;

/// Seam for a concrete opponent engine.
///
/// Implementations receive a FEN position and a depth and answer with a
/// long-algebraic move token, or one of the "no move" sentinels such as
/// `(none)`. No search lives in this crate.
pub trait Opponent {
    fn best_move(&mut self, fen: &str, depth: u32) -> String;
}

impl<F> Opponent for F
where
    F: FnMut(&str, u32) -> String,
{
    fn best_move(&mut self, fen: &str, depth: u32) -> String {
        self(fen, depth)
    }
}

impl EngineLink {
    /// Submit `request`, ask `opponent` synchronously and resolve its reply.
    ///
    /// Fails with [`EngineError::Busy`] if another request is outstanding.
    pub fn consult<O>(
        &self,
        opponent: &mut O,
        request: EngineRequest,
    ) -> Result<Option<BestMove>, EngineError>
    where
        O: Opponent + ?Sized,
    {
        let depth = request.depth;
        let fen = request.fen.clone();
        let ticket = self.submit(request)?;
        let reply = opponent.best_move(&fen, depth);
        self.resolve(ticket, &reply)
    }
}
