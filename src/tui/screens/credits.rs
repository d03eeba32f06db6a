//! Credits screen: names fetched in the background.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

use crate::CreditsClient;
use crate::tui::screen::{Screen, ScreenTransition};

/// State for the credits screen.
///
/// Shows "Loading Credits..." until the list arrives. A failed fetch is
/// logged and leaves the screen loading; there is no retry.
#[derive(Debug, Getters)]
pub struct CreditsScreen {
    credits: Option<Vec<String>>,
    #[getter(skip)]
    receiver: mpsc::UnboundedReceiver<Vec<String>>,
}

impl CreditsScreen {
    /// Creates the screen and starts fetching on the current tokio runtime.
    ///
    /// Outside a runtime nothing is fetched and the screen stays loading.
    #[instrument(skip(client))]
    pub fn new(client: CreditsClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let Ok(handle) = Handle::try_current() else {
            warn!("No tokio runtime, credits will not load");
            return Self::from_channel(rx);
        };

        handle.spawn(async move {
            match client.fetch().await {
                Ok(credits) => {
                    info!(count = credits.len(), "Credits loaded");
                    // The screen may already be gone.
                    let _ = tx.send(credits);
                }
                Err(e) => warn!(error = %e, "Failed to fetch credits"),
            }
        });

        Self::from_channel(rx)
    }

    /// Creates the screen fed by an existing channel.
    pub fn from_channel(receiver: mpsc::UnboundedReceiver<Vec<String>>) -> Self {
        Self {
            credits: None,
            receiver,
        }
    }
}

impl Screen for CreditsScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(area);

        let heading = Paragraph::new("Credit")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(heading, chunks[0]);

        let lines: Vec<Line> = match &self.credits {
            None => vec![Line::from("Loading Credits...")],
            Some(credits) => credits.iter().map(|c| Line::from(c.as_str())).collect(),
        };
        let list = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(list, chunks[1]);

        let help = Paragraph::new("Esc/Enter: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('b') => {
                ScreenTransition::GoToHome
            }
            KeyCode::Char('q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    fn update(&mut self) {
        if let Ok(credits) = self.receiver.try_recv() {
            self.credits = Some(credits);
        }
    }
}
