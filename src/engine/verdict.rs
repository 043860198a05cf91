use std::fmt;

pub const SUCCESS_MESSAGE: &str = "🎉 Excellent! Workflow completed successfully!";
pub const FAILURE_MESSAGE: &str = "❌ Workflow incomplete or incorrect. Check the node order!";

/// The outcome of checking the current placement against the level's solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub pass: bool,
    pub message: &'static str,
    /// The solution, in slot order.
    pub expected: Vec<String>,
    /// What was placed, in slot order. `None` marks an empty slot.
    pub actual: Vec<Option<String>>,
}

impl Verdict {
    pub(super) fn judge(expected: &[String], actual: Vec<Option<String>>) -> Self {
        // An empty slot never matches.
        let pass = expected.len() == actual.len()
            && expected
                .iter()
                .zip(&actual)
                .all(|(want, got)| got.as_deref() == Some(want.as_str()));

        Self {
            pass,
            message: if pass { SUCCESS_MESSAGE } else { FAILURE_MESSAGE },
            expected: expected.to_vec(),
            actual,
        }
    }

    /// Slots whose placed node differs from the solution, including empty ones.
    pub fn mismatched_slots(&self) -> Vec<usize> {
        self.expected
            .iter()
            .zip(&self.actual)
            .enumerate()
            .filter(|(_, (want, got))| got.as_deref() != Some(want.as_str()))
            .map(|(slot, _)| slot)
            .collect()
    }
}

/// Where the learner is in solving the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// Nothing placed yet.
    Empty,
    /// Some nodes placed, or all placed but not checked since the last change.
    Partial,
    /// Every slot filled and the last check passed.
    CompletePass,
    /// Every slot filled and the last check failed.
    CompleteFail,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Empty => write!(f, "empty"),
            EngineState::Partial => write!(f, "partial"),
            EngineState::CompletePass => write!(f, "complete (pass)"),
            EngineState::CompleteFail => write!(f, "complete (fail)"),
        }
    }
}
