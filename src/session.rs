use crate::error::InputError;
use crate::feedback::Feedback;
use crate::generator::IntervalGenerator;
use crate::interval::Interval;
use crate::membership::MembershipQuery;
use crate::neighborhood::Neighborhood;
use crate::validator::{check, AnswerSubmission, Verdict};
use log::warn;

/// Running score for one practice session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub correct: u32,
    pub incorrect: u32,
}

impl SessionStats {
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }

    pub fn percentage(&self) -> u32 {
        crate::util::percentage(self.correct, self.total())
    }
}

/// Result of a membership check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipResult {
    pub query: MembershipQuery,
    pub belongs: bool,
}

impl MembershipResult {
    pub fn feedback(&self) -> Feedback {
        self.query.feedback(self.belongs)
    }
}

/// Owns the current question and the stats. Every method is a command the
/// front end invokes in response to one user action.
#[derive(Debug)]
pub struct Session {
    generator: IntervalGenerator,
    current: Interval,
    stats: SessionStats,
}

impl Session {
    pub fn new() -> Self {
        Self::with_generator(IntervalGenerator::new())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_generator(IntervalGenerator::seeded(seed))
    }

    pub fn with_generator(mut generator: IntervalGenerator) -> Self {
        let current = generator.generate();
        Self {
            generator,
            current,
            stats: SessionStats::default(),
        }
    }

    pub fn current(&self) -> &Interval {
        &self.current
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Replace the current question with a fresh one
    pub fn new_question(&mut self) -> &Interval {
        self.current = self.generator.generate();
        &self.current
    }

    /// Grade an answer to the current question and count it
    pub fn submit_answer(&mut self, submission: &AnswerSubmission) -> Result<Verdict, InputError> {
        let verdict = check(&self.current, submission).inspect_err(|e| warn!("{e}"))?;
        self.stats.record(verdict.is_correct());
        Ok(verdict)
    }

    /// Build a neighborhood from form text. Does not affect the stats.
    pub fn create_neighborhood(
        &self,
        center: &str,
        radius: &str,
        reduced: bool,
    ) -> Result<Neighborhood, InputError> {
        Neighborhood::parse(center, radius, reduced).inspect_err(|e| warn!("{e}"))
    }

    /// Answer a membership question. A number inside the interval counts as
    /// a correct answer, one outside as an incorrect one.
    pub fn check_membership(
        &mut self,
        number: &str,
        left: &str,
        right: &str,
        left_inclusive: bool,
        right_inclusive: bool,
    ) -> Result<MembershipResult, InputError> {
        let query = MembershipQuery::parse(number, left, right, left_inclusive, right_inclusive)
            .inspect_err(|e| warn!("{e}"))?;
        let belongs = query.evaluate();
        self.stats.record(belongs);
        Ok(MembershipResult { query, belongs })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
