//! Cook-along execution session.
//!
//! Drives a sequential, forward-only pass over one recipe's steps and
//! turns the timed steps into a completion percentage. Purely in-memory;
//! the session holds no I/O and is discarded to cancel.

use crate::display::{Recipe, Step};

/// Tracks which step the cook is on.
///
/// `current_step_index` counts steps already completed: it starts at 0
/// and only moves forward, one step per [`ExecutionSession::advance`].
#[derive(Debug)]
pub struct ExecutionSession<'a> {
    recipe: &'a Recipe,
    current_step_index: usize,
}

impl<'a> ExecutionSession<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        Self {
            recipe,
            current_step_index: 0,
        }
    }

    pub fn recipe(&self) -> &'a Recipe {
        self.recipe
    }

    /// Number of steps already completed (0-based position of the
    /// current step).
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn total_steps(&self) -> usize {
        self.recipe.steps.len()
    }

    /// True once every step has been advanced past. A recipe with no
    /// steps is completed from the start.
    pub fn is_completed(&self) -> bool {
        self.current_step_index >= self.recipe.steps.len()
    }

    /// The step the cook is currently on, None once completed.
    pub fn current_step(&self) -> Option<&'a Step> {
        self.recipe.steps.get(self.current_step_index)
    }

    /// Preview of the step after the current one.
    pub fn upcoming_step(&self) -> Option<&'a Step> {
        self.recipe.steps.get(self.current_step_index + 1)
    }

    /// Minutes accounted for by completed steps (prefix sum of step
    /// durations strictly before the current index).
    pub fn time_elapsed(&self) -> u32 {
        self.recipe.steps[..self.current_step_index]
            .iter()
            .map(|step| step.duration_minutes)
            .sum()
    }

    /// Completion percentage against the recipe's declared total time.
    ///
    /// The declared total is trusted as-is: when it is smaller than the
    /// summed step durations the percentage can exceed 100 before the
    /// session completes. Not clamped. A zero declared total reports 0
    /// until completion; completion always reports 100.
    pub fn progress_percent(&self) -> f64 {
        if self.is_completed() {
            return 100.0;
        }
        if self.recipe.total_time_minutes == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.time_elapsed()) / f64::from(self.recipe.total_time_minutes)
    }

    /// Mark the current step done and move to the next one. Returns false
    /// with no effect once the session is already completed; the index
    /// never moves past the step count.
    pub fn advance(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        self.current_step_index += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Difficulty;

    fn recipe_with_durations(durations: &[u32], total_time_minutes: u32) -> Recipe {
        let steps = durations
            .iter()
            .enumerate()
            .map(|(i, &duration_minutes)| Step {
                id: format!("step-1-{}", i),
                order: i as u32 + 1,
                title: format!("Βήμα {}", i + 1),
                description: String::new(),
                duration_minutes,
            })
            .collect();
        Recipe {
            id: "1".to_string(),
            name: "Σπαγγέτι Καρμπονάρα".to_string(),
            category: "PASTA".to_string(),
            difficulty: Difficulty::Easy,
            total_time_minutes,
            ingredients: vec![],
            steps,
        }
    }

    #[test]
    fn worked_example_matches_the_declared_total() {
        let recipe = recipe_with_durations(&[10, 8, 7], 25);
        let mut session = ExecutionSession::new(&recipe);

        assert_eq!(session.time_elapsed(), 0);
        assert_eq!(session.progress_percent(), 0.0);

        assert!(session.advance());
        assert!(session.advance());
        assert_eq!(session.current_step_index(), 2);
        assert_eq!(session.time_elapsed(), 18);
        assert_eq!(session.progress_percent(), 72.0);
        assert!(!session.is_completed());

        assert!(session.advance());
        assert!(session.is_completed());
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn progress_is_monotonically_non_decreasing() {
        let recipe = recipe_with_durations(&[5, 0, 12, 3], 30);
        let mut session = ExecutionSession::new(&recipe);
        let mut last = session.progress_percent();
        while session.advance() {
            let percent = session.progress_percent();
            assert!(percent >= last);
            last = percent;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn completion_flips_exactly_once_on_the_final_advance() {
        let recipe = recipe_with_durations(&[10, 8, 7], 25);
        let mut session = ExecutionSession::new(&recipe);

        for _ in 0..recipe.steps.len() - 1 {
            assert!(session.advance());
            assert!(!session.is_completed());
        }
        assert!(session.advance());
        assert!(session.is_completed());
    }

    #[test]
    fn advance_past_the_end_has_no_effect() {
        let recipe = recipe_with_durations(&[4], 4);
        let mut session = ExecutionSession::new(&recipe);
        assert!(session.advance());
        assert!(!session.advance());
        assert_eq!(session.current_step_index(), 1);
        assert!(session.is_completed());
    }

    #[test]
    fn overshoot_is_not_clamped() {
        // Declared total smaller than the summed step durations
        let recipe = recipe_with_durations(&[10, 10, 10], 20);
        let mut session = ExecutionSession::new(&recipe);
        session.advance();
        session.advance();
        assert!(!session.is_completed());
        assert_eq!(session.progress_percent(), 100.0);

        let recipe = recipe_with_durations(&[15, 15, 10], 20);
        let mut session = ExecutionSession::new(&recipe);
        session.advance();
        session.advance();
        assert!(session.progress_percent() > 100.0);
    }

    #[test]
    fn zero_declared_total_reports_zero_until_completion() {
        let recipe = recipe_with_durations(&[5, 5], 0);
        let mut session = ExecutionSession::new(&recipe);
        session.advance();
        assert_eq!(session.progress_percent(), 0.0);
        session.advance();
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn empty_recipe_is_completed_from_the_start() {
        let recipe = recipe_with_durations(&[], 10);
        let mut session = ExecutionSession::new(&recipe);
        assert!(session.is_completed());
        assert_eq!(session.progress_percent(), 100.0);
        assert!(!session.advance());
        assert!(session.current_step().is_none());
    }

    #[test]
    fn current_and_upcoming_step_track_the_index() {
        let recipe = recipe_with_durations(&[10, 8, 7], 25);
        let mut session = ExecutionSession::new(&recipe);
        assert_eq!(session.current_step().unwrap().title, "Βήμα 1");
        assert_eq!(session.upcoming_step().unwrap().title, "Βήμα 2");

        session.advance();
        session.advance();
        assert_eq!(session.current_step().unwrap().title, "Βήμα 3");
        assert!(session.upcoming_step().is_none());
    }
}
