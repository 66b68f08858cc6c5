use crate::config::AppConfig;
use crate::error::BoardError;
use crate::game::{Game, MoveOutcome, RejectReason};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    game: Game,
    selected_column: usize,
    start_column: usize,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        let start_column = config.start_column();
        Ok(App {
            game: Game::from_dimensions(config.board)?,
            selected_column: start_column,
            start_column,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
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
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
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
                if self.selected_column + 1 < self.game.dimensions().width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Direct column pick, 1-based like the on-screen labels
                let col = c as usize - '1' as usize;
                if col < self.game.dimensions().width {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.message = match self.game.drop_piece(self.selected_column) {
            MoveOutcome::Placed { .. } => None,
            MoveOutcome::Won { player, .. } => Some(format!("{} wins!", player.name())),
            MoveOutcome::Draw => Some("It's a draw!".to_string()),
            MoveOutcome::Rejected { reason } => Some(match reason {
                RejectReason::ColumnFull => "Column is full!".to_string(),
                RejectReason::ColumnOutOfRange => "Invalid column!".to_string(),
                RejectReason::GameAlreadyOver => "Game over! Press 'r' to restart.".to_string(),
            }),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameStatus, Player};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::new(&AppConfig::default()).unwrap();
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.game.current_player(), Player::One);
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = App::new(&AppConfig::default()).unwrap();
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
    fn test_enter_drops_into_selected_column() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.occupant_at(0, 2), Ok(Cell::One));
        assert_eq!(app.game.current_player(), Player::Two);
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }

    #[test]
    fn test_win_message_and_restart() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        for key in ['1', '7', '2', '7', '3', '7', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game.status(), GameStatus::Won(Player::One));
        assert_eq!(app.message.as_deref(), Some("Player 1 wins!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game.status(), GameStatus::InProgress);
        assert_eq!(app.game.board().filled_cells(), 0);
        assert_eq!(app.selected_column, 3);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_pieces_and_status() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Enter);

        let text = screen(&app, 60, 24);
        assert!(text.contains("Connect Four"));
        assert!(text.contains("Current Player: Player 2"));
        assert!(text.contains("\u{25cf}"));
    }

    #[test]
    fn test_render_custom_board_size() {
        let mut config = AppConfig::default();
        config.board.width = 9;
        config.board.height = 4;
        let app = App::new(&config).unwrap();
        assert_eq!(app.selected_column, 4);

        let text = screen(&app, 60, 24);
        assert!(text.contains(" 9 "));
    }
}
