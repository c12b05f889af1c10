use crate::app::{App, Screen};
use crate::sim::game::Game;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub mod menu_view;
pub mod shop_view;
pub mod stands_view;
pub mod status_view;

pub fn render(frame: &mut Frame, app: &App, game: &Game) {
    match app.screen() {
        Screen::MainMenu => menu_view::render(frame, app),
        Screen::Play => render_play(frame, app, game),
    }
}

fn render_play(frame: &mut Frame, app: &App, game: &Game) {
    let size = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    render_header(frame, layout[0], game);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    stands_view::render(frame, columns[0], game);
    status_view::render(frame, columns[1], game);

    render_footer(frame, layout[2]);

    if app.shop_open {
        shop_view::render(frame, app, game);
    }
}

/// Dollar amount with two decimals, e.g. `$1234.50`.
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

fn render_header(frame: &mut Frame, area: Rect, game: &Game) {
    let player = game.player();
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Idle Business",
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  •  "),
            Span::styled(player.name.clone(), Style::default().fg(Color::Cyan)),
            Span::raw("  •  Balance: "),
            Span::styled(
                format_currency(player.balance),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![Span::raw(
            "Work to earn money, then buy stands to earn more per shift.",
        )]),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let instructions = Paragraph::new(Line::from(vec![
        Span::raw("Hotkeys: "),
        Span::styled("[W/Space]", Style::default().fg(Color::Yellow)),
        Span::raw(" work  •  "),
        Span::styled("[S]", Style::default().fg(Color::Yellow)),
        Span::raw(" shop  •  "),
        Span::styled("[H/Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" home  •  "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(instructions, area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    vertical[1]
}
