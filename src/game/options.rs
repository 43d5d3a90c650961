/// Which castling rights the terminal-status scan runs with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusRights {
    /// Thread the session's real castling rights through the scan.
    #[default]
    Actual,
    /// Scan as if no king or rook had moved.
    Assumed,
}

/// Session configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameOptions {
    pub status_rights: StatusRights,
}
