use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Correct,
    Incorrect,
}

/// Result text shown under a practice panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub tone: Tone,
    pub lines: Vec<String>,
}

impl Feedback {
    pub fn correct<S: Into<String>>(line: S) -> Self {
        Self {
            tone: Tone::Correct,
            lines: vec![line.into()],
        }
    }

    pub fn incorrect<S: Into<String>>(line: S) -> Self {
        Self {
            tone: Tone::Incorrect,
            lines: vec![line.into()],
        }
    }

    pub fn with_line<S: Into<String>>(mut self, line: S) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl From<&InputError> for Feedback {
    fn from(err: &InputError) -> Self {
        Feedback::incorrect(err.to_string())
    }
}
