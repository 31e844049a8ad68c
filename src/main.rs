pub mod forms;
pub mod ui;

use crate::forms::{
    FormField, IntervalField, IntervalForm, MembershipField, MembershipForm, NeighborhoodField,
    NeighborhoodForm,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use entornos::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore, StartScreen},
    feedback::Feedback,
    render::Figure,
    runtime::{AppEvent, CrosstermEventSource, EventSource, Runner},
    text_field::{TextField, KEYBOARD_SYMBOLS},
    theory::{self, TheoryPage},
    validator::AnswerSubmission,
    Session,
};
use log::{debug, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::OpenOptions,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

const TICK_RATE_MS: u64 = 250;

/// practice interval notation and neighborhoods on a number line
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Practice interval notation, neighborhoods and set membership. Questions are drawn on a number line and answers are checked against the exact notation."
)]
pub struct Cli {
    /// seed the question generator for a reproducible session
    #[clap(long)]
    seed: Option<u64>,

    /// screen shown at start-up
    #[clap(short = 's', long, value_enum)]
    screen: Option<StartScreen>,

    /// config file to read instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// store the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Stored config with command line overrides applied
    fn effective_config(&self, stored: Config) -> Config {
        Config {
            start_screen: self.screen.unwrap_or(stored.start_screen),
            ..stored
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Theory,
    Practice,
}

impl From<StartScreen> for AppState {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Theory => AppState::Theory,
            StartScreen::Practice => AppState::Practice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Panel {
    #[strum(serialize = "Intervalo")]
    Interval,
    #[strum(serialize = "Entorno")]
    Neighborhood,
    #[strum(serialize = "Pertenencia")]
    Membership,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Interval, Panel::Neighborhood, Panel::Membership];

    /// Key that opens the panel
    pub fn hotkey(&self) -> char {
        match self {
            Panel::Interval => 'i',
            Panel::Neighborhood => 'e',
            Panel::Membership => 'm',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Panel> {
        Panel::ALL.into_iter().find(|p| p.hotkey() == c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub config: Config,
    pub state: AppState,
    pub panel: Panel,
    pub theory: Vec<TheoryPage>,
    pub theory_page: usize,
    pub interval_form: IntervalForm,
    pub neighborhood_form: NeighborhoodForm,
    pub membership_form: MembershipForm,
}

impl App {
    pub fn new(session: Session, config: Config) -> Self {
        let theory = theory::pages().unwrap_or_else(|e| {
            log::error!("bundled theory pages are unreadable: {e}");
            Vec::new()
        });

        Self {
            session,
            state: config.start_screen.into(),
            config,
            panel: Panel::Interval,
            theory,
            theory_page: 0,
            interval_form: IntervalForm::default(),
            neighborhood_form: NeighborhoodForm::default(),
            membership_form: MembershipForm::default(),
        }
    }

    pub fn from_cli(cli: &Cli, config: Config) -> Self {
        let session = match cli.seed {
            Some(seed) => Session::seeded(seed),
            None => Session::new(),
        };
        Self::new(session, config)
    }

    /// Figure currently on the number line of the active panel
    pub fn figure(&self) -> Option<Figure> {
        match self.panel {
            Panel::Interval => Some(Figure::Interval(*self.session.current())),
            Panel::Neighborhood => self.neighborhood_form.figure.map(Figure::Neighborhood),
            Panel::Membership => None,
        }
    }

    pub fn new_question(&mut self) {
        let interval = self.session.new_question();
        debug!("new question {interval}");
        self.interval_form.reset();
    }

    pub fn submit(&mut self) {
        match self.panel {
            Panel::Interval => {
                let form = &mut self.interval_form;
                let submission = AnswerSubmission::new(form.selected, form.notation.value());
                form.result = Some(match self.session.submit_answer(&submission) {
                    Ok(verdict) => {
                        form.revealed = true;
                        verdict.feedback()
                    }
                    Err(e) => Feedback::from(&e),
                });
            }
            Panel::Neighborhood => {
                let form = &mut self.neighborhood_form;
                match self.session.create_neighborhood(
                    &form.center.value(),
                    &form.radius.value(),
                    form.reduced,
                ) {
                    Ok(n) => {
                        info!("neighborhood {}", n.notation());
                        form.result = Some(n.feedback());
                        form.figure = Some(n);
                    }
                    Err(e) => form.result = Some(Feedback::from(&e)),
                }
            }
            Panel::Membership => {
                let form = &mut self.membership_form;
                form.result = Some(
                    match self.session.check_membership(
                        &form.number.value(),
                        &form.left.value(),
                        &form.right.value(),
                        form.left_inclusive,
                        form.right_inclusive,
                    ) {
                        Ok(result) => result.feedback(),
                        Err(e) => Feedback::from(&e),
                    },
                );
            }
        }
    }

    /// Text field that has focus in the active panel, if any
    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.panel {
            Panel::Interval => match self.interval_form.focus {
                IntervalField::Notation => Some(&mut self.interval_form.notation),
                IntervalField::Type => None,
            },
            Panel::Neighborhood => match self.neighborhood_form.focus {
                NeighborhoodField::Center => Some(&mut self.neighborhood_form.center),
                NeighborhoodField::Radius => Some(&mut self.neighborhood_form.radius),
                NeighborhoodField::Kind => None,
            },
            Panel::Membership => match self.membership_form.focus {
                MembershipField::Number => Some(&mut self.membership_form.number),
                MembershipField::Left => Some(&mut self.membership_form.left),
                MembershipField::Right => Some(&mut self.membership_form.right),
                MembershipField::LeftInclusive | MembershipField::RightInclusive => None,
            },
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        match self.panel {
            Panel::Interval => self.interval_form.focus = self.interval_form.focus.step(forward),
            Panel::Neighborhood => {
                self.neighborhood_form.focus = self.neighborhood_form.focus.step(forward)
            }
            Panel::Membership => {
                self.membership_form.focus = self.membership_form.focus.step(forward)
            }
        }
    }

    /// Up/Down/Space on a selector field. Returns false when the focused
    /// field is not a selector.
    fn change_choice(&mut self, forward: bool) -> bool {
        match self.panel {
            Panel::Interval if self.interval_form.focus == IntervalField::Type => {
                self.interval_form.cycle_type(forward);
                true
            }
            Panel::Neighborhood if self.neighborhood_form.focus == NeighborhoodField::Kind => {
                self.neighborhood_form.reduced = !self.neighborhood_form.reduced;
                true
            }
            Panel::Membership => match self.membership_form.focus {
                MembershipField::LeftInclusive => {
                    self.membership_form.left_inclusive = !self.membership_form.left_inclusive;
                    true
                }
                MembershipField::RightInclusive => {
                    self.membership_form.right_inclusive = !self.membership_form.right_inclusive;
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Symbol keyboard: always types into the notation field
    fn press_symbol(&mut self, index: usize) {
        if let Some(&symbol) = KEYBOARD_SYMBOLS.get(index) {
            self.panel = Panel::Interval;
            self.interval_form.focus = IntervalField::Notation;
            self.interval_form.notation.insert_symbol(symbol);
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.state != AppState::Practice {
            return;
        }
        let line = text.lines().next().unwrap_or_default();
        if let Some(field) = self.focused_field() {
            field.insert_str(line);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
            return Flow::Quit;
        }

        match self.state {
            AppState::Theory => match key.code {
                KeyCode::Char('q') => return Flow::Quit,
                KeyCode::Char('p') | KeyCode::Tab | KeyCode::Enter => {
                    self.state = AppState::Practice
                }
                KeyCode::Right | KeyCode::PageDown | KeyCode::Char(' ') => {
                    if self.theory_page + 1 < self.theory.len() {
                        self.theory_page += 1;
                    }
                }
                KeyCode::Left | KeyCode::PageUp => {
                    self.theory_page = self.theory_page.saturating_sub(1);
                }
                _ => {}
            },
            AppState::Practice => match key.code {
                KeyCode::F(n @ 1..=8) => self.press_symbol(usize::from(n - 1)),
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => self.cycle_focus(true),
                KeyCode::BackTab => self.cycle_focus(false),
                KeyCode::Up => {
                    self.change_choice(false);
                }
                KeyCode::Down => {
                    self.change_choice(true);
                }
                KeyCode::Char('a') if ctrl => {
                    if let Some(field) = self.focused_field() {
                        field.select_all();
                    }
                }
                KeyCode::Char('t') => self.state = AppState::Theory,
                KeyCode::Char('n') => {
                    self.panel = Panel::Interval;
                    self.new_question();
                }
                KeyCode::Char(c @ ('i' | 'e' | 'm')) => {
                    if let Some(panel) = Panel::from_hotkey(c) {
                        self.panel = panel;
                    }
                }
                KeyCode::Char(' ') => {
                    if !self.change_choice(true) {
                        if let Some(field) = self.focused_field() {
                            field.write(' ');
                        }
                    }
                }
                KeyCode::Char(c) if forms::is_field_char(c) => {
                    if let Some(field) = self.focused_field() {
                        field.write(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(field) = self.focused_field() {
                        field.backspace();
                    }
                }
                KeyCode::Delete => {
                    if let Some(field) = self.focused_field() {
                        field.delete();
                    }
                }
                KeyCode::Left => {
                    if let Some(field) = self.focused_field() {
                        field.move_left(shift);
                    }
                }
                KeyCode::Right => {
                    if let Some(field) = self.focused_field() {
                        field.move_right(shift);
                    }
                }
                KeyCode::Home => {
                    if let Some(field) = self.focused_field() {
                        field.home(shift);
                    }
                }
                KeyCode::End => {
                    if let Some(field) = self.focused_field() {
                        field.end(shift);
                    }
                }
                _ => {}
            },
        }

        Flow::Continue
    }
}

/// Send log output to a file so it does not scribble over the TUI
fn init_logging() {
    let Some(path) = AppDirs::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging();

    let store = cli.config_store();
    let config = cli.effective_config(store.load());
    if cli.save_config {
        store.save(&config)?;
        info!("saved config to {}", store.path().display());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::from_cli(&cli, config);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    let stats = app.session.stats();
    info!(
        "session finished: {} correct, {} incorrect",
        stats.correct, stats.incorrect
    );
    result
}

fn start_tui<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            AppEvent::Key(key) => {
                if app.handle_key(key) == Flow::Quit {
                    break;
                }
            }
            AppEvent::Paste(text) => app.handle_paste(&text),
            AppEvent::Resize => {}
            // nothing animates; ticks only keep the loop responsive
            AppEvent::Tick => continue,
        }
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}
