use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    forms::{IntervalField, MembershipField, NeighborhoodField},
    ui::{feedback_paragraph, field_line, number_line::NumberLine, selector_line},
    App, AppState, Panel,
};
use entornos::text_field::KEYBOARD_SYMBOLS;
use itertools::Itertools;

/// A UI Screen boundary: draws the body of the window for one app state
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Theory pages, one at a time
pub struct TheoryScreen;

impl Screen for TheoryScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let Some(page) = app.theory.get(app.theory_page) else {
            Paragraph::new("No hay teoría disponible.")
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                page.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for paragraph in &page.paragraphs {
            lines.push(Line::from(paragraph.clone()));
            lines.push(Line::default());
        }

        let title = format!(" Teoría {}/{} ", app.theory_page + 1, app.theory.len());
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}

/// Interval, neighborhood and membership exercises
pub struct PracticeScreen;

impl PracticeScreen {
    fn render_tabs(app: &App, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for panel in Panel::ALL {
            let style = if panel == app.panel {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(format!(" {} ({}) ", panel, panel.hotkey()), style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_interval(app: &App, area: Rect, buf: &mut Buffer) {
        let form = &app.interval_form;
        let [prompt, description, canvas, selector, notation, keyboard, result] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .areas(area);

        Paragraph::new("Identifica este intervalo: elige su tipo y escribe su notación.")
            .render(prompt, buf);
        // only after the current question has been graded
        if form.revealed {
            Paragraph::new(Span::styled(
                app.session.current().description(),
                Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
            ))
            .render(description, buf);
        }
        NumberLine::new(app.figure(), app.config.canvas_width, app.config.canvas_height)
            .block(Block::default().borders(Borders::ALL))
            .render(canvas, buf);
        selector_line(
            "Tipo",
            form.selected.map_or("Selecciona el tipo", |t| t.label()),
            form.focus == IntervalField::Type,
        )
        .render(selector, buf);
        field_line(
            "Notación",
            &form.notation,
            form.focus == IntervalField::Notation,
        )
        .render(notation, buf);

        let keys = KEYBOARD_SYMBOLS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("F{} {c}", i + 1))
            .join("  ");
        Paragraph::new(Span::styled(
            keys,
            Style::default().add_modifier(Modifier::DIM),
        ))
        .render(keyboard, buf);

        feedback_paragraph(form.result.as_ref()).render(result, buf);
    }

    fn render_neighborhood(app: &App, area: Rect, buf: &mut Buffer) {
        let form = &app.neighborhood_form;
        let [center, radius, kind, canvas, result] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .areas(area);

        field_line(
            "Centro",
            &form.center,
            form.focus == NeighborhoodField::Center,
        )
        .render(center, buf);
        field_line(
            "Radio",
            &form.radius,
            form.focus == NeighborhoodField::Radius,
        )
        .render(radius, buf);
        selector_line(
            "Tipo",
            if form.reduced { "Reducido" } else { "Simétrico" },
            form.focus == NeighborhoodField::Kind,
        )
        .render(kind, buf);
        NumberLine::new(app.figure(), app.config.canvas_width, app.config.canvas_height)
            .block(Block::default().borders(Borders::ALL))
            .render(canvas, buf);
        feedback_paragraph(form.result.as_ref()).render(result, buf);
    }

    fn render_membership(app: &App, area: Rect, buf: &mut Buffer) {
        let form = &app.membership_form;
        let yes_no = |b: bool| if b { "Sí" } else { "No" };
        let [number, left, left_inclusive, right, right_inclusive, _, result] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .areas(area);

        field_line("Número", &form.number, form.focus == MembershipField::Number)
            .render(number, buf);
        field_line("Extremo izquierdo", &form.left, form.focus == MembershipField::Left)
            .render(left, buf);
        selector_line(
            "Incluye izquierdo",
            yes_no(form.left_inclusive),
            form.focus == MembershipField::LeftInclusive,
        )
        .render(left_inclusive, buf);
        field_line("Extremo derecho", &form.right, form.focus == MembershipField::Right)
            .render(right, buf);
        selector_line(
            "Incluye derecho",
            yes_no(form.right_inclusive),
            form.focus == MembershipField::RightInclusive,
        )
        .render(right_inclusive, buf);
        feedback_paragraph(form.result.as_ref()).render(result, buf);
    }
}

impl Screen for PracticeScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let [tabs, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        Self::render_tabs(app, tabs, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.panel));
        let inner = block.inner(body);
        block.render(body, buf);

        let body = inner;
        match app.panel {
            Panel::Interval => Self::render_interval(app, body, buf),
            Panel::Neighborhood => Self::render_neighborhood(app, body, buf),
            Panel::Membership => Self::render_membership(app, body, buf),
        }
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Theory => Box::new(TheoryScreen),
        AppState::Practice => Box::new(PracticeScreen),
    }
}
