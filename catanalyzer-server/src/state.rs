//! Server state management
//!
//! The server plays the board editor: it owns the current board snapshot,
//! the last analysis of that snapshot, and the selected result.

use catanalyzer_core::{Analysis, AnalysisConfig, Board, DEFAULT_RADIUS};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Editor session for one board
#[derive(Clone, Debug, Default)]
pub struct BoardSession {
    pub board: Board,
    /// Bumped on every edit
    pub version: u64,
    /// Last analysis; `None` once the board has been edited since
    pub analysis: Option<Analysis>,
    /// Rank of the highlighted result
    pub selected: Option<usize>,
}

impl BoardSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            ..Default::default()
        }
    }

    /// Record an edit. Stale results are dropped rather than patched.
    pub fn touch(&mut self) {
        self.version += 1;
        self.analysis = None;
        self.selected = None;
    }

    /// Toggle selection of a ranked result; returns false for unknown ranks
    pub fn select(&mut self, rank: usize) -> bool {
        let known = self
            .analysis
            .as_ref()
            .map(|a| a.by_rank(rank).is_some())
            .unwrap_or(false);
        if !known {
            return false;
        }
        self.selected = if self.selected == Some(rank) {
            None
        } else {
            Some(rank)
        };
        true
    }
}

/// Server-wide shared state
pub struct ServerState {
    session: RwLock<BoardSession>,
    pub analysis_config: AnalysisConfig,
}

impl ServerState {
    pub fn new(radius: i32) -> Self {
        Self {
            session: RwLock::new(BoardSession::new(Board::new(radius))),
            analysis_config: AnalysisConfig::default(),
        }
    }

    pub fn session(&self) -> RwLockReadGuard<'_, BoardSession> {
        self.session.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn session_mut(&self) -> RwLockWriteGuard<'_, BoardSession> {
        self.session.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}
