use crate::config::{AppConfig, PlayersConfig};
use crate::error::GameError;
use crate::game::{GameOutcome, Move, Presenter, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, warn};
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Title,
    Playing,
}

pub struct App {
    session: Session,
    players: PlayersConfig,
    screen: Screen,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, GameError> {
        let session = Session::new(config.board.height, config.board.width)?;
        Ok(App {
            selected_column: config.board.width / 2,
            session,
            players: config.players,
            screen: Screen::Title,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Title => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char(' ') => self.start_game(),
                _ => {}
            },
            Screen::Playing => {
                // Clear message on any key press
                self.message = None;

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.should_quit = true;
                    }
                    KeyCode::Left => {
                        self.selected_column = self.selected_column.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        if self.selected_column + 1 < self.session.state().width() {
                            self.selected_column += 1;
                        }
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        self.drop_piece();
                    }
                    KeyCode::Char('n') | KeyCode::Char('r') => {
                        self.start_game();
                        self.message = Some("New game started!".to_string());
                    }
                    _ => {}
                }
            }
        }
    }

    /// Throw away whatever game is running and start a fresh one
    fn start_game(&mut self) {
        self.session.restart();
        self.selected_column = self.session.state().width() / 2;
        self.screen = Screen::Playing;
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        // Input is detached once the game has ended
        if self.session.is_terminal() {
            self.message = Some("Game over! Press 'n' to play again.".to_string());
            return;
        }

        match self.session.column_selected(self.selected_column) {
            Ok(result) => result.notify(self),
            Err(err) => {
                warn!("rejected drop in column {}: {err}", self.selected_column);
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Title => super::game_view::render_title(frame),
            Screen::Playing => {
                let view = super::game_view::GameView {
                    session: &self.session,
                    players: &self.players,
                    selected_column: self.selected_column,
                    message: self.message.as_deref(),
                };
                super::game_view::render(frame, &view);
            }
        }
    }
}

impl Presenter for App {
    fn move_ignored(&mut self) {
        self.message = Some("Column is full!".to_string());
    }

    fn piece_dropped(&mut self, mv: &Move) {
        debug!(
            "{} dropped into column {}",
            self.players.name_of(mv.player),
            mv.column + 1
        );
    }

    fn game_ended(&mut self, outcome: GameOutcome) {
        let announcement = match outcome {
            GameOutcome::Win(player) => format!("{} won!", self.players.name_of(player)),
            GameOutcome::Draw => "Tie!".to_string(),
        };
        self.message = Some(format!("{announcement}  Press 'n' to play again."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, SessionStatus};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn playing_app() -> App {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn test_title_screen_starts_game() {
        let mut app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.screen, Screen::Title);

        // Space on the title screen means "Play Game", not a drop
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.state().piece_count(), 0);
        assert_eq!(app.selected_column, 3);
    }

    #[test]
    fn test_column_selection_is_clamped() {
        let mut app = playing_app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_win_detaches_input() {
        let mut app = playing_app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Left); // column 0
        }
        for _ in 0..3 {
            press(&mut app, KeyCode::Enter); // Player 1 in column 0
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Enter); // Player 2 in column 1
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.status(), SessionStatus::Won(Player::One));
        assert_eq!(
            app.message.as_deref(),
            Some("Player 1 won!  Press 'n' to play again.")
        );

        let pieces = app.session.state().piece_count();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.state().piece_count(), pieces);
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'n' to play again.")
        );

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.status(), SessionStatus::InProgress);
        assert_eq!(app.session.state().piece_count(), 0);
    }

    #[test]
    fn test_full_column_message() {
        let mut config = AppConfig::default();
        config.board.height = 1;
        config.board.width = 4;
        let mut app = App::new(config).unwrap();
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert_eq!(app.session.state().piece_count(), 1);
    }

    #[test]
    fn test_selection_follows_session_width() {
        let mut config = AppConfig::default();
        config.board.width = 4;
        let mut app = App::new(config).unwrap();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_column, 2);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 3);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.selected_column, 2);
        assert_eq!(app.session.state().width(), 4);
    }

    #[test]
    fn test_quit() {
        let mut app = playing_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
