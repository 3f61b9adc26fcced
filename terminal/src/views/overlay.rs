use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rectangle of at most `width` x `height` centred in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn popup(frame: &mut Frame, area: Rect, title: &str, color: Color, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16 + 2;
    let width = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0).max(title.len() as u16) + 4;
    let rect = centered_rect(width, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Line::from(format!(" {} ", title)).style(Style::default().fg(color).add_modifier(Modifier::BOLD)));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center).block(block), rect);
}

pub fn start_screen(frame: &mut Frame, area: Rect) {
    popup(
        frame,
        area,
        "SNAKE",
        Color::Green,
        vec![
            Line::from("Press any key to start"),
            Line::from(""),
            Line::from("Arrows: move"),
            Line::from("Space: pause"),
            Line::from("Ctrl+C: quit"),
        ],
    );
}

pub fn paused(frame: &mut Frame, area: Rect) {
    popup(
        frame,
        area,
        "PAUSED",
        Color::Yellow,
        vec![Line::from("Space: resume"), Line::from("Esc: quit")],
    );
}

pub fn game_over(frame: &mut Frame, area: Rect, score: u32, length: usize) {
    popup(
        frame,
        area,
        "GAME OVER",
        Color::Red,
        vec![
            Line::from(format!("Score: {}", score)),
            Line::from(format!("Length: {}", length)),
            Line::from(""),
            Line::from("R: restart"),
            Line::from("Esc: quit"),
        ],
    );
}
