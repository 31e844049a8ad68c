use entornos::{feedback::Feedback, neighborhood::Neighborhood, text_field::TextField, TypeTag};

/// Characters the answer fields accept from the keyboard. Letters are
/// left out so they stay free for commands.
pub fn is_field_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | ',' | '[' | ']' | '(' | ')' | '∞')
}

/// Focus order of a form's fields
pub trait FormField: Copy + PartialEq + Sized + 'static {
    const ORDER: &'static [Self];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Self::ORDER[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalField {
    Type,
    #[default]
    Notation,
}

impl FormField for IntervalField {
    const ORDER: &'static [Self] = &[IntervalField::Type, IntervalField::Notation];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborhoodField {
    #[default]
    Center,
    Radius,
    Kind,
}

impl FormField for NeighborhoodField {
    const ORDER: &'static [Self] = &[
        NeighborhoodField::Center,
        NeighborhoodField::Radius,
        NeighborhoodField::Kind,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MembershipField {
    #[default]
    Number,
    Left,
    LeftInclusive,
    Right,
    RightInclusive,
}

impl FormField for MembershipField {
    const ORDER: &'static [Self] = &[
        MembershipField::Number,
        MembershipField::Left,
        MembershipField::LeftInclusive,
        MembershipField::Right,
        MembershipField::RightInclusive,
    ];
}

/// Answer form for the current interval question
#[derive(Debug, Clone, Default)]
pub struct IntervalForm {
    pub selected: Option<TypeTag>,
    pub notation: TextField,
    pub focus: IntervalField,
    pub result: Option<Feedback>,
    /// Set once an answer to the current question has been graded
    pub revealed: bool,
}

impl IntervalForm {
    /// Walk the type selector: nothing, then every tag in order, then
    /// back to nothing.
    pub fn cycle_type(&mut self, forward: bool) {
        let choices = TypeTag::ALL.len() + 1;
        let current = match self.selected {
            None => 0,
            Some(tag) => TypeTag::ALL.iter().position(|t| *t == tag).map_or(0, |i| i + 1),
        };
        let next = if forward {
            (current + 1) % choices
        } else {
            (current + choices - 1) % choices
        };
        self.selected = next.checked_sub(1).map(|i| TypeTag::ALL[i]);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct NeighborhoodForm {
    pub center: TextField,
    pub radius: TextField,
    pub reduced: bool,
    pub focus: NeighborhoodField,
    /// Last neighborhood built; survives failed submissions
    pub figure: Option<Neighborhood>,
    pub result: Option<Feedback>,
}

#[derive(Debug, Clone)]
pub struct MembershipForm {
    pub number: TextField,
    pub left: TextField,
    pub right: TextField,
    pub left_inclusive: bool,
    pub right_inclusive: bool,
    pub focus: MembershipField,
    pub result: Option<Feedback>,
}

impl Default for MembershipForm {
    fn default() -> Self {
        Self {
            number: TextField::new(),
            left: TextField::new(),
            right: TextField::new(),
            left_inclusive: true,
            right_inclusive: true,
            focus: MembershipField::default(),
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps_both_ways() {
        assert_eq!(MembershipField::Number.step(false), MembershipField::RightInclusive);
        assert_eq!(MembershipField::RightInclusive.step(true), MembershipField::Number);
        assert_eq!(IntervalField::Notation.step(true), IntervalField::Type);
        assert_eq!(NeighborhoodField::Center.step(true), NeighborhoodField::Radius);
    }

    #[test]
    fn test_type_selector_cycles_through_empty_choice() {
        let mut form = IntervalForm::default();
        form.cycle_type(true);
        assert_eq!(form.selected, Some(TypeTag::ALL[0]));

        form.cycle_type(false);
        assert_eq!(form.selected, None);
        form.cycle_type(false);
        assert_eq!(form.selected, Some(TypeTag::ALL[7]));

        for _ in 0..TypeTag::ALL.len() + 1 {
            form.cycle_type(true);
        }
        assert_eq!(form.selected, Some(TypeTag::ALL[7]));
    }

    #[test]
    fn test_field_chars() {
        for c in "0123456789.-+,[]()∞".chars() {
            assert!(is_field_char(c), "{c}");
        }
        for c in "aeimnt x".chars() {
            assert!(!is_field_char(c), "{c}");
        }
    }

    #[test]
    fn test_membership_defaults_include_bounds() {
        let form = MembershipForm::default();
        assert!(form.left_inclusive && form.right_inclusive);
        assert_eq!(form.focus, MembershipField::Number);
    }
}
