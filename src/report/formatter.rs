use crate::engine::Verdict;
use itertools::Itertools;

/// Formats verdicts into human-readable feedback.
pub struct VerdictFormatter;

impl VerdictFormatter {
    const EMPTY_SLOT: &'static str = "[empty]";
    const ARROW: &'static str = " -> ";

    /// Renders what was placed, in slot order.
    ///
    /// Correct slots show the node id, wrong ones add the expected id, and
    /// empty ones show `[empty]`:
    /// `set-var -> output (expected function) -> [empty]`.
    pub fn format_sequence(verdict: &Verdict) -> String {
        verdict
            .expected
            .iter()
            .zip(&verdict.actual)
            .map(|(want, got)| match got {
                Some(id) if id == want => id.clone(),
                Some(id) => format!("{} (expected {})", id, want),
                None => Self::EMPTY_SLOT.to_string(),
            })
            .join(Self::ARROW)
    }

    /// Renders the solution, in slot order.
    pub fn format_solution(verdict: &Verdict) -> String {
        verdict.expected.iter().join(Self::ARROW)
    }

    /// The verdict message, followed by the sequence when the check failed.
    pub fn format_feedback(verdict: &Verdict) -> String {
        if verdict.pass {
            verdict.message.to_string()
        } else {
            format!("{}\n  {}", verdict.message, Self::format_sequence(verdict))
        }
    }
}
