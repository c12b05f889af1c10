use super::centered_rect;
use crate::app::{App, MenuItem};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub const HOW_TO_PLAY: [&str; 5] = [
    "1. Choose PLAY to get started!",
    "2. Head to the SHOP to purchase a stand.",
    "3. Start working by pressing W!",
    "4. Use your money to buy more stands and invest in better ones.",
    "5. Become a Millionaire.",
];

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let sections = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .split(area);

    let title = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            "IDLE BUSINESS",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Tap your way from a lemonade stand to a fortune."),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, sections[0]);

    let option = |label: &'static str, item: MenuItem| {
        if app.menu_item == item {
            Line::from(Span::styled(
                format!("▶ {label} ◀"),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(label)
        }
    };
    let options = Paragraph::new(vec![
        option("PLAY", MenuItem::Play),
        Line::default(),
        option("HOW TO PLAY", MenuItem::HowToPlay),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(options, sections[1]);

    if app.help_open {
        render_help(frame);
    }
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(70, 50, frame.size());
    frame.render_widget(Clear, area);
    let mut lines: Vec<Line> = HOW_TO_PLAY.iter().map(|step| Line::from(*step)).collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press Enter or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));
    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("How to Play").borders(Borders::ALL));
    frame.render_widget(dialog, area);
}
