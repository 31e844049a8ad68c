use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The six interval shapes the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum IntervalKind {
    Closed,
    Open,
    SemiLeft,
    SemiRight,
    InfRight,
    InfLeft,
}

impl IntervalKind {
    pub const ALL: [IntervalKind; 6] = [
        IntervalKind::Closed,
        IntervalKind::Open,
        IntervalKind::SemiLeft,
        IntervalKind::SemiRight,
        IntervalKind::InfRight,
        IntervalKind::InfLeft,
    ];

    pub fn is_finite(&self) -> bool {
        !matches!(self, IntervalKind::InfRight | IntervalKind::InfLeft)
    }
}

/// An interval with integer bounds.
///
/// Each variant carries only the bounds it actually has: the unbounded
/// shapes never hold the missing side, and the closure of the finite shapes
/// is fixed by the variant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// `[a,b]`
    Closed { left: i32, right: i32 },
    /// `(a,b)`
    Open { left: i32, right: i32 },
    /// `[a,b)`
    SemiLeft { left: i32, right: i32 },
    /// `(a,b]`
    SemiRight { left: i32, right: i32 },
    /// `[a,+∞)` or `(a,+∞)`
    InfRight { left: i32, left_closed: bool },
    /// `(-∞,b]` or `(-∞,b)`
    InfLeft { right: i32, right_closed: bool },
}

impl Interval {
    pub fn kind(&self) -> IntervalKind {
        match self {
            Interval::Closed { .. } => IntervalKind::Closed,
            Interval::Open { .. } => IntervalKind::Open,
            Interval::SemiLeft { .. } => IntervalKind::SemiLeft,
            Interval::SemiRight { .. } => IntervalKind::SemiRight,
            Interval::InfRight { .. } => IntervalKind::InfRight,
            Interval::InfLeft { .. } => IntervalKind::InfLeft,
        }
    }

    /// Left bound, `None` when the interval extends to -∞
    pub fn left(&self) -> Option<i32> {
        match *self {
            Interval::Closed { left, .. }
            | Interval::Open { left, .. }
            | Interval::SemiLeft { left, .. }
            | Interval::SemiRight { left, .. }
            | Interval::InfRight { left, .. } => Some(left),
            Interval::InfLeft { .. } => None,
        }
    }

    /// Right bound, `None` when the interval extends to +∞
    pub fn right(&self) -> Option<i32> {
        match *self {
            Interval::Closed { right, .. }
            | Interval::Open { right, .. }
            | Interval::SemiLeft { right, .. }
            | Interval::SemiRight { right, .. }
            | Interval::InfLeft { right, .. } => Some(right),
            Interval::InfRight { .. } => None,
        }
    }

    pub fn left_closed(&self) -> bool {
        match *self {
            Interval::Closed { .. } | Interval::SemiLeft { .. } => true,
            Interval::Open { .. } | Interval::SemiRight { .. } | Interval::InfLeft { .. } => false,
            Interval::InfRight { left_closed, .. } => left_closed,
        }
    }

    pub fn right_closed(&self) -> bool {
        match *self {
            Interval::Closed { .. } | Interval::SemiRight { .. } => true,
            Interval::Open { .. } | Interval::SemiLeft { .. } | Interval::InfRight { .. } => false,
            Interval::InfLeft { right_closed, .. } => right_closed,
        }
    }

    /// The shape tag a correct answer must select
    pub fn type_tag(&self) -> TypeTag {
        match *self {
            Interval::Closed { .. } => TypeTag::Closed,
            Interval::Open { .. } => TypeTag::Open,
            Interval::SemiLeft { .. } => TypeTag::SemiLeft,
            Interval::SemiRight { .. } => TypeTag::SemiRight,
            Interval::InfRight { left_closed, .. } => {
                if left_closed {
                    TypeTag::ClosedToInfinity
                } else {
                    TypeTag::OpenToInfinity
                }
            }
            Interval::InfLeft { right_closed, .. } => {
                if right_closed {
                    TypeTag::ClosedFromInfinity
                } else {
                    TypeTag::OpenFromInfinity
                }
            }
        }
    }

    /// Canonical bracket notation, e.g. `[2,5)` or `(-∞,4]`.
    /// There are no spaces and infinity is always written `+∞` / `-∞`.
    pub fn notation(&self) -> String {
        let open = if self.left_closed() { '[' } else { '(' };
        let close = if self.right_closed() { ']' } else { ')' };
        let left = self
            .left()
            .map_or_else(|| String::from("-∞"), |a| a.to_string());
        let right = self
            .right()
            .map_or_else(|| String::from("+∞"), |b| b.to_string());

        format!("{open}{left},{right}{close}")
    }

    pub fn description(&self) -> String {
        match *self {
            Interval::Closed { left, right } => format!("Intervalo cerrado de {left} a {right}"),
            Interval::Open { left, right } => format!("Intervalo abierto de {left} a {right}"),
            Interval::SemiLeft { left, right } => {
                format!("Intervalo semiabierto de {left} (incluido) a {right}")
            }
            Interval::SemiRight { left, right } => {
                format!("Intervalo semiabierto de {left} a {right} (incluido)")
            }
            Interval::InfRight { left, left_closed } => {
                if left_closed {
                    format!("Números ≥ {left}")
                } else {
                    format!("Números > {left}")
                }
            }
            Interval::InfLeft { right, right_closed } => {
                if right_closed {
                    format!("Números ≤ {right}")
                } else {
                    format!("Números < {right}")
                }
            }
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

/// One of the eight shape tags offered by the answer selector.
/// The tag ignores the numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Closed,
    Open,
    SemiLeft,
    SemiRight,
    ClosedToInfinity,
    OpenToInfinity,
    ClosedFromInfinity,
    OpenFromInfinity,
}

impl TypeTag {
    /// Selector order
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Closed,
        TypeTag::Open,
        TypeTag::SemiLeft,
        TypeTag::SemiRight,
        TypeTag::ClosedToInfinity,
        TypeTag::OpenToInfinity,
        TypeTag::ClosedFromInfinity,
        TypeTag::OpenFromInfinity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Closed => "[a,b]",
            TypeTag::Open => "(a,b)",
            TypeTag::SemiLeft => "[a,b)",
            TypeTag::SemiRight => "(a,b]",
            TypeTag::ClosedToInfinity => "[a,inf)",
            TypeTag::OpenToInfinity => "(a,inf)",
            TypeTag::ClosedFromInfinity => "(-inf,b]",
            TypeTag::OpenFromInfinity => "(-inf,b)",
        }
    }

    /// Human label used in feedback, e.g. `Cerrado [a,b]`
    pub fn label(&self) -> &'static str {
        match self {
            TypeTag::Closed => "Cerrado [a,b]",
            TypeTag::Open => "Abierto (a,b)",
            TypeTag::SemiLeft => "Semiabierto [a,b)",
            TypeTag::SemiRight => "Semiabierto (a,b]",
            TypeTag::ClosedToInfinity => "Cerrado al infinito [a,+∞)",
            TypeTag::OpenToInfinity => "Abierto al infinito (a,+∞)",
            TypeTag::ClosedFromInfinity => "Del infinito cerrado (-∞,b]",
            TypeTag::OpenFromInfinity => "Del infinito abierto (-∞,b)",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interval type tag '{0}'")]
pub struct ParseTypeTagError(pub String);

impl FromStr for TypeTag {
    type Err = ParseTypeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .iter()
            .find(|tag| tag.as_str() == s)
            .copied()
            .ok_or_else(|| ParseTypeTagError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_notation() {
        assert_eq!(Interval::Closed { left: 2, right: 5 }.notation(), "[2,5]");
        assert_eq!(Interval::Open { left: -3, right: 1 }.notation(), "(-3,1)");
        assert_eq!(Interval::SemiLeft { left: 0, right: 4 }.notation(), "[0,4)");
        assert_eq!(Interval::SemiRight { left: 6, right: 11 }.notation(), "(6,11]");
    }

    #[test]
    fn test_unbounded_notation() {
        let closed = Interval::InfRight {
            left: 3,
            left_closed: true,
        };
        let open = Interval::InfRight {
            left: 3,
            left_closed: false,
        };
        assert_eq!(closed.notation(), "[3,+∞)");
        assert_eq!(open.notation(), "(3,+∞)");

        let closed = Interval::InfLeft {
            right: -2,
            right_closed: true,
        };
        let open = Interval::InfLeft {
            right: -2,
            right_closed: false,
        };
        assert_eq!(closed.notation(), "(-∞,-2]");
        assert_eq!(open.notation(), "(-∞,-2)");
    }

    #[test]
    fn test_bounds_by_variant() {
        let i = Interval::InfRight {
            left: 1,
            left_closed: true,
        };
        assert_eq!(i.left(), Some(1));
        assert_eq!(i.right(), None);
        assert!(!i.right_closed());

        let i = Interval::InfLeft {
            right: 4,
            right_closed: false,
        };
        assert_eq!(i.left(), None);
        assert_eq!(i.right(), Some(4));
        assert!(!i.left_closed());
    }

    #[test]
    fn test_kind_to_tag() {
        assert_eq!(Interval::Closed { left: 0, right: 1 }.type_tag(), TypeTag::Closed);
        assert_eq!(Interval::Open { left: 0, right: 1 }.type_tag(), TypeTag::Open);
        assert_eq!(Interval::SemiLeft { left: 0, right: 1 }.type_tag(), TypeTag::SemiLeft);
        assert_eq!(Interval::SemiRight { left: 0, right: 1 }.type_tag(), TypeTag::SemiRight);
        assert_eq!(
            Interval::InfRight { left: 0, left_closed: false }.type_tag(),
            TypeTag::OpenToInfinity
        );
        assert_eq!(
            Interval::InfLeft { right: 0, right_closed: true }.type_tag(),
            TypeTag::ClosedFromInfinity
        );
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            Interval::SemiLeft { left: 1, right: 3 }.description(),
            "Intervalo semiabierto de 1 (incluido) a 3"
        );
        assert_eq!(
            Interval::InfRight { left: 2, left_closed: true }.description(),
            "Números ≥ 2"
        );
        assert_eq!(
            Interval::InfLeft { right: 2, right_closed: false }.description(),
            "Números < 2"
        );
    }

    #[test]
    fn test_type_tag_parse() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.as_str().parse::<TypeTag>(), Ok(tag));
        }
        assert!("[a,+∞)".parse::<TypeTag>().is_err());
        assert!("".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_type_tag_labels() {
        assert_eq!(TypeTag::Closed.label(), "Cerrado [a,b]");
        assert_eq!(TypeTag::OpenFromInfinity.label(), "Del infinito abierto (-∞,b)");
        assert_eq!(TypeTag::ClosedToInfinity.to_string(), "[a,inf)");
    }

    #[test]
    fn test_kind_is_finite() {
        let finite = IntervalKind::ALL.iter().filter(|k| k.is_finite()).count();
        assert_eq!(finite, 4);
    }
}
