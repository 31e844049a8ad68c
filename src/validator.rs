use crate::error::InputError;
use crate::feedback::Feedback;
use crate::interval::{Interval, TypeTag};
use log::info;

/// What the user entered: a shape tag from the selector and free notation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSubmission {
    pub type_tag: Option<TypeTag>,
    pub notation: String,
}

impl AnswerSubmission {
    pub fn new<S: Into<String>>(type_tag: Option<TypeTag>, notation: S) -> Self {
        Self {
            type_tag,
            notation: notation.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BothCorrect,
    TypeCorrectNotationWrong,
    Incorrect,
}

/// Outcome of a checked answer together with the expected answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub outcome: Outcome,
    pub correct_type: TypeTag,
    pub correct_notation: String,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        self.outcome == Outcome::BothCorrect
    }

    pub fn feedback(&self) -> Feedback {
        match self.outcome {
            Outcome::BothCorrect => Feedback::correct("¡Correcto! Excelente trabajo."),
            Outcome::TypeCorrectNotationWrong => Feedback::incorrect(format!(
                "Has identificado bien el tipo de intervalo, pero la notación es incorrecta. La correcta era {}.",
                self.correct_notation
            )),
            Outcome::Incorrect => Feedback::incorrect("Has identificado mal el tipo de intervalo.")
                .with_line(format!("Tipo correcto: {}", self.correct_type.label()))
                .with_line(format!("Notación correcta: {}", self.correct_notation)),
        }
    }
}

/// The tag a correct answer selects for this interval
pub fn canonical_type(interval: &Interval) -> TypeTag {
    interval.type_tag()
}

/// Grade a submission.
///
/// The notation is compared after trimming the outer whitespace only: inner
/// spacing, `inf` for `∞` or `2.0` for `2` are all wrong answers.
pub fn check(interval: &Interval, submission: &AnswerSubmission) -> Result<Verdict, InputError> {
    let notation = submission.notation.trim();
    let selected = match submission.type_tag {
        Some(tag) if !notation.is_empty() => tag,
        _ => return Err(InputError::IncompleteInput),
    };

    let correct_type = canonical_type(interval);
    let correct_notation = interval.notation();
    let type_ok = selected == correct_type;
    let notation_ok = notation == correct_notation;

    let outcome = match (type_ok, notation_ok) {
        (true, true) => Outcome::BothCorrect,
        (true, false) => Outcome::TypeCorrectNotationWrong,
        (false, _) => Outcome::Incorrect,
    };
    info!("answer {selected} {notation:?} for {correct_notation}: {outcome:?}");

    Ok(Verdict {
        outcome,
        correct_type,
        correct_notation,
    })
}
