//! Application controller: the state machine driving the screens.

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{CreditsScreen, GameScreen, HomeScreen};
use crate::{AppConfig, CreditsClient, Roster};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Home(HomeScreen),
    Game(GameScreen),
    Credits(CreditsScreen),
}

impl ActiveScreen {
    fn screen(&self) -> &dyn Screen {
        match self {
            Self::Home(s) => s,
            Self::Game(s) => s,
            Self::Credits(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Home(s) => s,
            Self::Game(s) => s,
            Self::Credits(s) => s,
        }
    }
}

/// Controller that drives the screen state machine.
///
/// Call [`AppController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct AppController {
    config: AppConfig,
}

impl AppController {
    /// Creates a new controller.
    #[instrument]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Starts on the home screen, or straight in a game when `roster` is given.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        roster: Option<Roster>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        let mut screen = match roster {
            Some(roster) => ActiveScreen::Game(GameScreen::new(roster)),
            None => ActiveScreen::Home(HomeScreen::new()),
        };

        loop {
            screen.screen_mut().update();
            terminal.draw(|f| screen.screen().render(f))?;

            // Poll with a short timeout so background updates get drawn.
            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let transition = screen.screen_mut().handle_key(key);
            screen = match self.apply_transition(transition, screen) {
                Some(next) => next,
                None => {
                    info!("Quitting");
                    return Ok(());
                }
            };
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        if transition != ScreenTransition::Stay {
            debug!(transition = ?transition, "Applying screen transition");
        }
        match transition {
            ScreenTransition::Stay => Some(current),
            ScreenTransition::GoToHome => Some(ActiveScreen::Home(HomeScreen::new())),
            ScreenTransition::GoToGame { player1, player2 } => Some(ActiveScreen::Game(
                GameScreen::new(Roster::new(&player1, &player2)),
            )),
            ScreenTransition::GoToCredits => {
                let client = CreditsClient::new(self.config.credits_url().clone());
                Some(ActiveScreen::Credits(CreditsScreen::new(client)))
            }
            ScreenTransition::Quit => None,
        }
    }
}
