use super::format_currency;
use crate::sim::game::Game;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, game: &Game) {
    let sections = Layout::vertical([Constraint::Length(7), Constraint::Min(3)]).split(area);

    let stats_block = Block::default().title("Profile").borders(Borders::ALL);
    let stats_area = stats_block.inner(sections[0]);
    frame.render_widget(stats_block, sections[0]);

    let player = game.player();
    let stats_lines = vec![
        Line::from(vec![
            Span::styled("Name", Style::default().fg(Color::Cyan)),
            Span::raw(format!(": {}", player.name)),
            Span::raw("    Tier: "),
            Span::raw(format!("{}", player.tier)),
        ]),
        Line::from(vec![
            Span::styled("Balance", Style::default().fg(Color::Yellow)),
            Span::raw(format!(": {}", format_currency(player.balance))),
        ]),
        Line::from(vec![
            Span::raw("Each shift earns: "),
            Span::styled(
                format_currency(player.income_per_work()),
                Style::default().fg(Color::LightGreen),
            ),
        ]),
        Line::from(vec![
            Span::raw("Stands owned: "),
            Span::raw(format!("{}", player.owned.len())),
        ]),
    ];

    let paragraph = Paragraph::new(stats_lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, stats_area);

    let log_block = Block::default().title("Event Log").borders(Borders::ALL);
    let log_area = log_block.inner(sections[1]);
    frame.render_widget(log_block, sections[1]);

    let mut items: Vec<ListItem> = game
        .messages()
        .map(|msg| ListItem::new(msg.clone()))
        .collect();
    if items.is_empty() {
        items.push(ListItem::new("Nothing yet. Press W to start working."));
    }
    frame.render_widget(List::new(items), log_area);
}
