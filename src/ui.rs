pub mod number_line;
pub mod screen;

use entornos::{
    feedback::{Feedback, Tone},
    text_field::TextField,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{ui::screen::current_screen, App, AppState};

const HORIZONTAL_MARGIN: u16 = 1;

const THEORY_HELP: &str = "←/→ página · p práctica · Esc salir";
const PRACTICE_HELP: &str =
    "Tab campo · ↑/↓ opción · Enter comprobar · n nueva pregunta · t teoría · Esc salir";

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// Labelled text field. The cursor is shown as a reversed cell and the
/// selection with a grey background.
pub fn field_line(label: &str, field: &TextField, focused: bool) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(format!("{label}: "), label_style(focused))];

    let selection = field.selection();
    let cursor = field.cursor();
    let value = field.value();
    for (idx, c) in value.chars().enumerate() {
        let mut style = Style::default();
        if selection.is_some_and(|(start, end)| idx >= start && idx < end) {
            style = style.bg(Color::DarkGray);
        }
        if focused && idx == cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(c.to_string(), style));
    }
    if focused && cursor >= value.chars().count() {
        spans.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }

    Paragraph::new(Line::from(spans))
}

/// Labelled choice that cycles with the arrow keys
pub fn selector_line(label: &str, value: &str, focused: bool) -> Paragraph<'static> {
    let value_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    Paragraph::new(Line::from(vec![
        Span::styled(format!("{label}: "), label_style(focused)),
        Span::styled(format!("< {value} >"), value_style),
    ]))
}

pub fn feedback_paragraph(feedback: Option<&Feedback>) -> Paragraph<'static> {
    let Some(feedback) = feedback else {
        return Paragraph::new("");
    };
    let color = match feedback.tone {
        Tone::Correct => Color::Green,
        Tone::Incorrect => Color::Red,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let lines = feedback
        .lines
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), style)))
        .collect::<Vec<_>>();

    Paragraph::new(lines).wrap(Wrap { trim: true })
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let [header, body, stats, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .horizontal_margin(HORIZONTAL_MARGIN)
        .areas(area);

        let tab = |name: &'static str, state: AppState| {
            if self.state == state {
                Span::styled(name, bold_style.fg(Color::Cyan))
            } else {
                Span::styled(name, dim_style)
            }
        };
        Paragraph::new(Line::from(vec![
            Span::styled("Entornos  ", bold_style),
            tab("Teoría", AppState::Theory),
            Span::raw(" | "),
            tab("Práctica", AppState::Practice),
        ]))
        .render(header, buf);

        current_screen(&self.state).render(self, body, buf);

        let stats_line = self.session.stats();
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Correctas: {}", stats_line.correct),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   "),
            Span::styled(
                format!("Incorrectas: {}", stats_line.incorrect),
                Style::default().fg(Color::Red),
            ),
            Span::raw("   "),
            Span::styled(format!("Acierto: {}%", stats_line.percentage()), bold_style),
        ]))
        .render(stats, buf);

        let help_text = match self.state {
            AppState::Theory => THEORY_HELP,
            AppState::Practice => PRACTICE_HELP,
        };
        Paragraph::new(Span::styled(help_text, italic_style)).render(help, buf);
    }
}
