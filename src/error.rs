use thiserror::Error;

/// Form fields that take a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum NumericField {
    #[strum(serialize = "número")]
    Number,
    #[strum(serialize = "extremo izquierdo")]
    Left,
    #[strum(serialize = "extremo derecho")]
    Right,
    #[strum(serialize = "centro")]
    Center,
    #[strum(serialize = "radio")]
    Radius,
}

impl NumericField {
    /// Prompt shown to the user when this field is rejected
    pub fn hint(&self) -> &'static str {
        match self {
            NumericField::Number | NumericField::Left | NumericField::Right => {
                "Completa todos los campos numéricos."
            }
            NumericField::Center | NumericField::Radius => {
                "Introduce valores válidos para centro y radio."
            }
        }
    }
}

/// Everything that can go wrong is a user input problem; nothing here is
/// fatal and none of it touches the running stats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Por favor, completa ambos campos")]
    IncompleteInput,

    #[error("{}", .field.hint())]
    InvalidNumericInput { field: NumericField },
}

/// Parse a number typed into a form field. Blank, unparsable and
/// non-finite values are all rejected.
pub fn parse_number(raw: &str, field: NumericField) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumericInput { field }),
    }
}
