use crate::error::{parse_number, InputError, NumericField};
use crate::feedback::Feedback;
use crate::util::format_number;

/// The open interval `(center - radius, center + radius)`, optionally with
/// the center removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    pub center: f64,
    pub radius: f64,
    pub reduced: bool,
}

impl Neighborhood {
    /// Build from form text. The radius must be strictly positive.
    pub fn parse(center: &str, radius: &str, reduced: bool) -> Result<Self, InputError> {
        let center = parse_number(center, NumericField::Center)?;
        let radius = parse_number(radius, NumericField::Radius)?;
        if radius <= 0.0 {
            return Err(InputError::InvalidNumericInput {
                field: NumericField::Radius,
            });
        }

        Ok(Self {
            center,
            radius,
            reduced,
        })
    }

    pub fn left(&self) -> f64 {
        self.center - self.radius
    }

    pub fn right(&self) -> f64 {
        self.center + self.radius
    }

    pub fn kind_label(&self) -> &'static str {
        if self.reduced {
            "reducido"
        } else {
            "simétrico"
        }
    }

    /// `E(3, 2) = (1, 5)`, or `E(3, 2) = (1, 5) \ {3}` when reduced
    pub fn notation(&self) -> String {
        let c = format_number(self.center);
        let base = format!(
            "E({c}, {}) = ({}, {})",
            format_number(self.radius),
            format_number(self.left()),
            format_number(self.right()),
        );

        if self.reduced {
            format!("{base} \\ {{{c}}}")
        } else {
            base
        }
    }

    pub fn feedback(&self) -> Feedback {
        Feedback::correct(format!(
            "Entorno {} generado: {}",
            self.kind_label(),
            self.notation()
        ))
    }
}
