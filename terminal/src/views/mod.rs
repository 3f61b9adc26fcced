pub mod overlay;

use common::GameStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything drawn in one frame, already reduced to characters
pub struct Screen<'a> {
    pub status: GameStatus,
    pub score: u32,
    pub length: usize,
    pub fps: u32,
    pub arena_lines: &'a [String],
}

pub fn draw(frame: &mut Frame, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score card
            Constraint::Min(3),    // Arena
        ])
        .split(frame.area());

    if screen.status != GameStatus::StartScreen {
        frame.render_widget(score_card(screen), chunks[0]);
    }

    let arena_area = arena_rect(screen.arena_lines, chunks[1]);
    let arena = Paragraph::new(screen.arena_lines.iter().map(|l| styled_line(l)).collect::<Vec<_>>())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(arena, arena_area);

    match screen.status {
        GameStatus::StartScreen => overlay::start_screen(frame, chunks[1]),
        GameStatus::Paused => overlay::paused(frame, chunks[1]),
        GameStatus::GameOver => overlay::game_over(frame, chunks[1], screen.score, screen.length),
        GameStatus::Playing => {}
    }
}

fn score_card(screen: &Screen) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::Gray)),
        Span::styled(
            screen.score.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Length: ", Style::default().fg(Color::Gray)),
        Span::raw(screen.length.to_string()),
        Span::raw("   "),
        Span::styled(format!("{} fps", screen.fps), Style::default().fg(Color::DarkGray)),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Snake "))
}

/// Centre the bordered arena inside `area`, clipped if the terminal is too small.
fn arena_rect(lines: &[String], area: Rect) -> Rect {
    let content_width = lines.first().map(|l| l.chars().count()).unwrap_or(0) as u16;
    let width = content_width.saturating_add(2).min(area.width);
    let height = (lines.len() as u16).saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn char_style(ch: char) -> Style {
    match ch {
        '█' | '▌' | '▐' | '▓' => Style::default().fg(Color::Green),
        '░' | 'X' => Style::default().fg(Color::DarkGray),
        '(' | ')' | '●' => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        '*' | '+' | '.' => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    }
}

/// Group runs of equally styled characters into spans
fn styled_line(line: &str) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for ch in line.chars() {
        let style = char_style(ch);
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }

    Line::from(spans)
}
