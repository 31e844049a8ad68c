use crate::error::{parse_number, InputError, NumericField};
use crate::feedback::Feedback;
use crate::util::format_number;

/// Whether `number` lies between `left` and `right`, each bound included or
/// excluded on its own. `right > left` is not checked.
pub fn is_member(
    number: f64,
    left: f64,
    right: f64,
    left_inclusive: bool,
    right_inclusive: bool,
) -> bool {
    let fails_left = if left_inclusive {
        number < left
    } else {
        number <= left
    };
    let fails_right = if right_inclusive {
        number > right
    } else {
        number >= right
    };

    !fails_left && !fails_right
}

/// A membership question as entered in the form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipQuery {
    pub number: f64,
    pub left: f64,
    pub right: f64,
    pub left_inclusive: bool,
    pub right_inclusive: bool,
}

impl MembershipQuery {
    pub fn parse(
        number: &str,
        left: &str,
        right: &str,
        left_inclusive: bool,
        right_inclusive: bool,
    ) -> Result<Self, InputError> {
        Ok(Self {
            number: parse_number(number, NumericField::Number)?,
            left: parse_number(left, NumericField::Left)?,
            right: parse_number(right, NumericField::Right)?,
            left_inclusive,
            right_inclusive,
        })
    }

    pub fn evaluate(&self) -> bool {
        is_member(
            self.number,
            self.left,
            self.right,
            self.left_inclusive,
            self.right_inclusive,
        )
    }

    pub fn feedback(&self, belongs: bool) -> Feedback {
        let n = format_number(self.number);
        if belongs {
            Feedback::correct(format!("{n} pertenece al intervalo."))
        } else {
            Feedback::incorrect(format!("{n} no pertenece al intervalo."))
        }
    }
}
