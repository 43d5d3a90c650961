use crate::board::{Color, GameStatus, Move, Piece, Square};
use crate::engine::{BestMove, EngineRequest};

use super::{GameError, GameOptions, Position};

/// Where the current ply is in its selection flow.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// A piece is selected and its legal moves are known
    Piece { from: Square, moves: Vec<Move> },
    /// A pawn move onto the last rank awaits the promotion piece
    Promotion { from: Square, to: Square },
}

/// Result of choosing a destination square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlyOutcome {
    /// The move was played; the status is for the new side to move
    Played(GameStatus),
    /// The move promotes; call [`Game::choose_promotion`] to finish it
    PromotionPending,
}

/// A game session: the position history plus the in-progress ply.
///
/// Every ply appends a fresh [`Position`], so earlier snapshots stay valid
/// for history navigation.
#[derive(Clone, Debug)]
pub struct Game {
    history: Vec<Position>,
    options: GameOptions,
    selection: Selection,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameOptions::default())
    }
}

impl Game {
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Game::from_position(Position::initial(), options)
    }

    /// Start a session from an arbitrary position.
    #[must_use]
    pub fn from_position(position: Position, options: GameOptions) -> Self {
        let status = position.status(options.status_rights);
        Game {
            history: vec![position],
            options,
            selection: Selection::None,
            status,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Position {
        // history always holds at least the starting position
        &self.history[self.history.len() - 1]
    }

    #[must_use]
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Number of plies played
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len() - 1
    }

    /// The position after `ply` plies (0 is the starting position).
    pub fn view(&self, ply: usize) -> Result<&Position, GameError> {
        self.history.get(ply).ok_or(GameError::PlyOutOfRange {
            ply,
            len: self.history.len(),
        })
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.current().side_to_move
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.current().to_fen()
    }

    /// Pieces `color` has captured so far, in the order taken.
    #[must_use]
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.history
            .iter()
            .filter_map(|pos| pos.captured)
            .filter(|&(victim, _)| victim == color.opponent())
            .map(|(_, piece)| piece)
            .collect()
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver {
                status: self.status,
            });
        }
        Ok(())
    }

    /// Select a piece of the side to move and return its legal moves.
    ///
    /// Selecting again replaces the previous selection, unless a promotion
    /// choice is pending.
    pub fn select(&mut self, square: Square) -> Result<Vec<Move>, GameError> {
        self.ensure_playing()?;
        if matches!(self.selection, Selection::Promotion { .. }) {
            return Err(GameError::PromotionPending);
        }
        let position = self.current();
        match position.board.piece_at(square) {
            Some((color, _)) if color == position.side_to_move => {}
            _ => return Err(GameError::NotOwnPiece { square }),
        }
        let moves = position.legal_moves(square);
        self.selection = Selection::Piece {
            from: square,
            moves: moves.clone(),
        };
        Ok(moves)
    }

    /// Drop the current selection, including a pending promotion.
    pub fn cancel_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Move the selected piece to `to`.
    pub fn choose_destination(&mut self, to: Square) -> Result<PlyOutcome, GameError> {
        self.ensure_playing()?;
        let (from, moves) = match &self.selection {
            Selection::Piece { from, moves } => (*from, moves),
            Selection::Promotion { .. } => return Err(GameError::PromotionPending),
            Selection::None => return Err(GameError::NoSelection),
        };
        let mv = Move::new(from, to);
        if !moves.iter().any(|m| m.to == to) {
            return Err(GameError::IllegalMove { mv });
        }
        if self.current().is_promotion(mv) {
            self.selection = Selection::Promotion { from, to };
            return Ok(PlyOutcome::PromotionPending);
        }
        Ok(PlyOutcome::Played(self.commit(mv)))
    }

    /// Finish a pending promotion with `piece`.
    pub fn choose_promotion(&mut self, piece: Piece) -> Result<GameStatus, GameError> {
        let Selection::Promotion { from, to } = self.selection else {
            return Err(GameError::NoPromotionPending);
        };
        if !piece.is_promotion_target() {
            return Err(GameError::InvalidPromotion { piece });
        }
        Ok(self.commit(Move::with_promotion(from, to, piece)))
    }

    /// Play a complete move, bypassing the selection flow.
    ///
    /// A promoting move without a piece promotes to a queen; a promotion
    /// piece on a non-promoting move is rejected.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        self.ensure_playing()?;
        if matches!(self.selection, Selection::Promotion { .. }) {
            return Err(GameError::PromotionPending);
        }
        let position = self.current();
        let legal = position
            .legal_moves(mv.from)
            .iter()
            .any(|m| m.to == mv.to);
        if !legal {
            return Err(GameError::IllegalMove { mv });
        }
        if let Some(piece) = mv.promotion {
            if !position.is_promotion(mv) {
                return Err(GameError::IllegalMove { mv });
            }
            if !piece.is_promotion_target() {
                return Err(GameError::InvalidPromotion { piece });
            }
        }
        Ok(self.commit(mv))
    }

    /// Play the opponent engine's reply to `request`.
    ///
    /// The reply is refused with [`GameError::StaleReply`] unless `request`
    /// was made for the current position; a takeback or another move since
    /// submission makes it stale. A "no move" reply means the engine sees the
    /// position as terminal; the current status is returned unchanged instead
    /// of an error.
    pub fn apply_engine_reply(
        &mut self,
        request: &EngineRequest,
        reply: Option<BestMove>,
    ) -> Result<GameStatus, GameError> {
        let current = self.to_fen();
        if request.fen != current {
            trace_event!(
                warn,
                "dropping engine reply for '{}', game is at '{}'",
                request.fen,
                current
            );
            return Err(GameError::StaleReply {
                requested: request.fen.clone(),
            });
        }
        match reply {
            Some(best) => self.play(best.into()),
            None => {
                trace_event!(
                    info,
                    "engine reported no move at ply {} ({})",
                    self.ply_count(),
                    self.status
                );
                Ok(self.status)
            }
        }
    }

    /// Remove the last ply and return the position it produced.
    pub fn takeback(&mut self) -> Result<Position, GameError> {
        if self.history.len() < 2 {
            return Err(GameError::NothingToTakeBack);
        }
        let undone = self.history.pop().ok_or(GameError::NothingToTakeBack)?;
        self.selection = Selection::None;
        self.status = self.current().status(self.options.status_rights);
        Ok(undone)
    }

    fn commit(&mut self, mv: Move) -> GameStatus {
        let next = self.current().after(mv);
        self.status = next.status(self.options.status_rights);
        trace_event!(
            debug,
            "ply {}: {} played {}, {} to move, {}",
            self.history.len(),
            self.current().side_to_move,
            mv,
            next.side_to_move,
            self.status
        );
        if self.status.is_over() {
            trace_event!(info, "game over: {} for {}", self.status, next.side_to_move);
        }
        self.history.push(next);
        self.selection = Selection::None;
        self.status
    }
}
