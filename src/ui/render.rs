use std::io::{self, stdout, Stdout};

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use log::warn;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Terminal;

use super::{DisplaySink, FrameText};
use crate::{MIN_PANE_WIDTH, PLAY_H, PLAY_W};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Full-screen raw-mode terminal. Dropping it puts the terminal back.
pub struct TerminalDisplay {
    terminal: Term,
}

impl TerminalDisplay {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(Self { terminal })
    }
}

impl DisplaySink for TerminalDisplay {
    fn present(&mut self, frame: &FrameText) -> io::Result<()> {
        self.terminal.draw(|f| draw_frame(f, frame))?;
        Ok(())
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!("failed to leave raw mode: {err}");
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = self.terminal.show_cursor() {
            warn!("failed to show cursor: {err}");
        }
    }
}

/// Best-effort teardown for paths that never reach `Drop`, such as a panic hook.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen, Show);
}

pub fn draw_frame(frame: &mut Frame, text: &FrameText) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("BLOCKFALL"));
        frame.render_widget(msg, area);
        return;
    }

    let cabinet = Block::default()
        .title("BLOCKFALL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(PLAY_H as u16),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(col_rect);

    let score = Paragraph::new(format!("Score: {}", text.score)).alignment(Alignment::Left);
    frame.render_widget(score, stack[1]);
    draw_well(frame, text, stack[2]);
    let controls = Paragraph::new(vec![Line::raw("a/d/s move  w rotate"), Line::raw("q quit")])
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(controls, stack[3]);
}

fn draw_well(frame: &mut Frame, text: &FrameText, rect: Rect) {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    // Border: ceiling, sides, heavy floor.
    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = '│';
        grid[y][PLAY_W - 1] = '│';
    }
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = '═';
    }

    for (y, line) in text.lines().iter().enumerate() {
        let gy = 1 + y;
        if gy >= PLAY_H - 1 {
            break;
        }
        for (x, ch) in line.chars().enumerate() {
            let gx = 1 + x;
            if gx < PLAY_W - 1 {
                grid[gy][gx] = ch;
            }
        }
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::CellView;
    use crate::{BOARD_H, BOARD_W, HIDDEN_ROWS};
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_score_and_cells() {
        let mut rows = vec![vec![CellView::Empty; BOARD_W]; BOARD_H - HIDDEN_ROWS];
        rows[18][0] = CellView::Locked;
        rows[0][4] = CellView::Active;
        let text = FrameText { rows, score: 7 };

        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal.draw(|f| draw_frame(f, &text)).unwrap();
        let screen = buffer_text(&terminal);

        assert!(screen.contains("Score: 7"));
        assert!(screen.contains("│. . . . @ . . . . . │"));
        assert!(screen.contains("│# . . . . . . . . . │"));
    }

    #[test]
    fn narrow_pane_asks_for_resize() {
        let text = FrameText { rows: Vec::new(), score: 0 };
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(|f| draw_frame(f, &text)).unwrap();
        let screen = buffer_text(&terminal);
        assert!(screen.contains("BLOCKFALL"));
        assert!(!screen.contains("Score"));
    }
}
