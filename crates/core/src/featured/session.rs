//! Edit session state machine
//!
//! Models the confirmation gate the editors run around the ranking
//! functions: `Idle → Editing → Confirming → Committed | Cancelled`.
//! The session never performs I/O; the caller loads the collection, drives
//! the transitions and persists whatever [`EditSession::confirm`] returns.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::renumber::auto_renumber_priorities;
use super::reorder::reorder_featured;
use super::toggle::{feature_item, unfeature_item};
use super::types::{Direction, RankableItem, RankingError, RenumberConfig, ValidationResult};
use super::validate::validate_featured_operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Editing,
    Confirming,
    Committed,
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Committed | SessionState::Cancelled)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Editing => "editing",
            SessionState::Confirming => "confirming",
            SessionState::Committed => "committed",
            SessionState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// A single edit applied to the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Renumber,
    MoveUp(String),
    MoveDown(String),
    Feature(String),
    Unfeature(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        state: SessionState,
        action: &'static str,
    },

    #[error("Proposed changes failed validation: {}", .0.join("; "))]
    Rejected(Vec<String>),

    #[error(transparent)]
    Ranking(#[from] RankingError),
}

#[derive(Debug, Clone)]
pub struct EditSession {
    config: RenumberConfig,
    state: SessionState,
    original: Vec<RankableItem>,
    working: Vec<RankableItem>,
}

impl EditSession {
    pub fn new(config: RenumberConfig) -> Self {
        Self {
            config,
            state: SessionState::Idle,
            original: Vec::new(),
            working: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &RenumberConfig {
        &self.config
    }

    pub fn original(&self) -> &[RankableItem] {
        &self.original
    }

    pub fn working(&self) -> &[RankableItem] {
        &self.working
    }

    fn expect_state(&self, expected: SessionState, action: &'static str) -> Result<(), SessionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                state: self.state,
                action,
            })
        }
    }

    /// Idle → Editing.
    pub fn begin(&mut self, items: Vec<RankableItem>) -> Result<(), SessionError> {
        self.expect_state(SessionState::Idle, "begin")?;
        self.working = items.clone();
        self.original = items;
        self.state = SessionState::Editing;
        Ok(())
    }

    /// Apply `op` to the working copy. A failing op leaves the copy untouched.
    pub fn apply(&mut self, op: &EditOp) -> Result<(), SessionError> {
        self.expect_state(SessionState::Editing, "apply an edit")?;

        let next = match op {
            EditOp::Renumber => auto_renumber_priorities(&self.working, &self.config),
            EditOp::MoveUp(id) => reorder_featured(&self.working, id, Direction::Up)?,
            EditOp::MoveDown(id) => reorder_featured(&self.working, id, Direction::Down)?,
            EditOp::Feature(id) => feature_item(&self.working, id, &self.config)?,
            EditOp::Unfeature(id) => unfeature_item(&self.working, id, &self.config)?,
        };

        self.working = next;
        Ok(())
    }

    /// Editing → Confirming when the working copy validates.
    pub fn propose(&mut self) -> Result<ValidationResult, SessionError> {
        self.expect_state(SessionState::Editing, "propose")?;

        let verdict = validate_featured_operation(&self.working, &self.config);
        if !verdict.success {
            return Err(SessionError::Rejected(verdict.errors));
        }

        self.state = SessionState::Confirming;
        Ok(verdict)
    }

    /// Confirming → Editing.
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.expect_state(SessionState::Confirming, "go back")?;
        self.state = SessionState::Editing;
        Ok(())
    }

    /// Confirming → Committed, yielding the collection to persist.
    pub fn confirm(&mut self) -> Result<Vec<RankableItem>, SessionError> {
        self.expect_state(SessionState::Confirming, "confirm")?;
        self.state = SessionState::Committed;
        Ok(self.working.clone())
    }

    pub fn cancel(&mut self) -> Result<(), SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::InvalidTransition {
                state: self.state,
                action: "cancel",
            });
        }
        self.state = SessionState::Cancelled;
        Ok(())
    }

    /// Whether any item's `featured` or `priority` differs from the original.
    pub fn has_changes(&self) -> bool {
        self.original.len() != self.working.len()
            || self.working.iter().any(|new| {
                !self.original.iter().any(|old| {
                    old.id == new.id && old.featured == new.featured && old.priority == new.priority
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, featured: bool, priority: i64) -> RankableItem {
        RankableItem::new(id, id, featured, priority)
    }

    fn editing(items: Vec<RankableItem>) -> EditSession {
        let mut session = EditSession::new(RenumberConfig::CATEGORIES);
        session.begin(items).unwrap();
        session
    }

    // ============================================================================
    // Happy path
    // ============================================================================

    #[test]
    fn test_full_commit_flow() {
        let mut session = EditSession::new(RenumberConfig::CATEGORIES);
        assert_eq!(session.state(), SessionState::Idle);

        session
            .begin(vec![item("a", true, 2), item("b", false, 12)])
            .unwrap();
        assert_eq!(session.state(), SessionState::Editing);

        session.apply(&EditOp::Renumber).unwrap();
        assert!(session.has_changes());

        let verdict = session.propose().unwrap();
        assert!(verdict.success);
        assert_eq!(session.state(), SessionState::Confirming);

        let committed = session.confirm().unwrap();
        assert_eq!(session.state(), SessionState::Committed);
        assert_eq!(committed, vec![item("a", true, 1), item("b", false, 8)]);
    }

    #[test]
    fn test_ops_compose() {
        let mut session = editing(vec![
            item("a", true, 1),
            item("b", true, 2),
            item("c", false, 8),
        ]);

        session.apply(&EditOp::MoveDown("a".to_string())).unwrap();
        session.apply(&EditOp::Feature("c".to_string())).unwrap();
        session.apply(&EditOp::Unfeature("b".to_string())).unwrap();

        let working = session.working();
        let find = |id: &str| working.iter().find(|i| i.id == id).unwrap().clone();
        assert_eq!(find("a"), item("a", true, 1));
        assert_eq!(find("c"), item("c", true, 2));
        assert_eq!(find("b"), item("b", false, 8));
    }

    #[test]
    fn test_no_changes_detected() {
        let mut session = editing(vec![item("a", true, 1)]);
        session.apply(&EditOp::MoveUp("a".to_string())).unwrap();
        assert!(!session.has_changes());
    }

    // ============================================================================
    // Rejections and invalid transitions
    // ============================================================================

    #[test]
    fn test_propose_rejects_invalid_state() {
        let mut session = editing(vec![item("a", true, 1), item("b", true, 1)]);

        let err = session.propose().unwrap_err();
        assert!(matches!(err, SessionError::Rejected(ref errors) if errors.len() == 1));
        assert_eq!(session.state(), SessionState::Editing);
    }

    #[test]
    fn test_failed_op_leaves_working_copy() {
        let mut session = editing(vec![item("a", true, 1)]);
        let err = session.apply(&EditOp::Unfeature("zzz".to_string())).unwrap_err();

        assert_eq!(err, SessionError::Ranking(RankingError::NotFound("zzz".to_string())));
        assert_eq!(session.working(), &[item("a", true, 1)]);
    }

    #[test]
    fn test_apply_requires_editing() {
        let mut session = EditSession::new(RenumberConfig::TAGS);
        let err = session.apply(&EditOp::Renumber).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                state: SessionState::Idle,
                action: "apply an edit",
            }
        );
    }

    #[test]
    fn test_confirm_requires_confirming() {
        let mut session = editing(vec![]);
        assert!(session.confirm().is_err());
    }

    #[test]
    fn test_back_returns_to_editing() {
        let mut session = editing(vec![item("a", true, 1)]);
        session.propose().unwrap();
        session.back().unwrap();
        assert_eq!(session.state(), SessionState::Editing);
        session.apply(&EditOp::Renumber).unwrap();
    }

    #[test]
    fn test_cancel_from_any_open_state() {
        let mut idle = EditSession::new(RenumberConfig::CATEGORIES);
        idle.cancel().unwrap();
        assert_eq!(idle.state(), SessionState::Cancelled);

        let mut confirming = editing(vec![]);
        confirming.propose().unwrap();
        confirming.cancel().unwrap();
        assert_eq!(confirming.state(), SessionState::Cancelled);
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut session = editing(vec![]);
        session.propose().unwrap();
        session.confirm().unwrap();

        assert!(session.cancel().is_err());
        assert!(session.begin(vec![]).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SessionError::InvalidTransition {
            state: SessionState::Committed,
            action: "cancel",
        };
        assert_eq!(err.to_string(), "Cannot cancel while committed");

        let err = SessionError::Rejected(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(
            err.to_string(),
            "Proposed changes failed validation: one; two"
        );
    }
}
