//! Home screen: main menu and the new-game setup dialog.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::board::center_rect;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::{DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, validate_names};

/// Menu options on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeOption {
    NewGame,
    Credits,
    Exit,
}

impl HomeOption {
    fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New Game",
            Self::Credits => "Credits",
            Self::Exit => "Exit",
        }
    }

    fn all() -> &'static [HomeOption] {
        &[Self::NewGame, Self::Credits, Self::Exit]
    }
}

/// Name entry dialog shown after choosing "New Game".
#[derive(Debug, Clone, Default, Getters)]
pub struct SetupDialog {
    names: [String; 2],
    focus: usize,
    error: Option<String>,
}

impl SetupDialog {
    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenTransition> {
        match key.code {
            KeyCode::Char(c) => {
                self.names[self.focus].push(c);
                None
            }
            KeyCode::Backspace => {
                self.names[self.focus].pop();
                None
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = 1 - self.focus;
                None
            }
            KeyCode::Enter => match validate_names(&self.names[0], &self.names[1]) {
                Ok((player1, player2)) => {
                    info!(%player1, %player2, "Starting new game");
                    Some(ScreenTransition::GoToGame { player1, player2 })
                }
                Err(e) => {
                    debug!(error = %e, "Setup rejected");
                    self.error = Some(e.to_string());
                    None
                }
            },
            _ => None,
        }
    }
}

/// State for the home screen.
#[derive(Debug, Getters)]
pub struct HomeScreen {
    list_state: ListState,
    setup: Option<SetupDialog>,
}

impl HomeScreen {
    /// Creates the home screen with the first option selected.
    #[instrument]
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            list_state: state,
            setup: None,
        }
    }

    fn select_previous(&mut self) {
        let count = HomeOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = HomeOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> HomeOption {
        let options = HomeOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }

    fn render_setup(&self, frame: &mut Frame, setup: &SetupDialog) {
        let area = center_rect(frame.area(), 50, 14);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title("Start a New Game"),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(area);

        let placeholders = [DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME];
        let icons = ['X', 'O'];
        for i in 0..2 {
            let style = if setup.focus == i {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let title = format!("{} {}", icons[i], placeholders[i]);
            let input = Paragraph::new(setup.names[i].as_str())
                .style(style)
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(input, chunks[i]);
        }

        let error = Paragraph::new(setup.error.as_deref().unwrap_or(""))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[2]);

        let help = Paragraph::new("Tab: Switch | Enter: Start! | Esc: Cancel")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for HomeScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = HomeOption::all()
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        if let Some(setup) = &self.setup {
            self.render_setup(frame, setup);
        }
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if let Some(setup) = &mut self.setup {
            if key.code == KeyCode::Esc {
                debug!("Setup cancelled");
                self.setup = None;
                return ScreenTransition::Stay;
            }
            return setup.handle_key(key).unwrap_or(ScreenTransition::Stay);
        }

        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Home option selected");
                match option {
                    HomeOption::NewGame => {
                        self.setup = Some(SetupDialog::default());
                        ScreenTransition::Stay
                    }
                    HomeOption::Credits => ScreenTransition::GoToCredits,
                    HomeOption::Exit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
