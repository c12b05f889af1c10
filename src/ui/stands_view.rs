use super::format_currency;
use crate::sim::game::Game;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, game: &Game) {
    let player = game.player();
    let items: Vec<ListItem> = game
        .catalog()
        .iter()
        .map(|stand| {
            let owned = player.owned_count_by_name(stand.name());
            let name_style = if owned > 0 {
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::UNDERLINED)
            };
            let header = Line::from(Span::styled(stand.kind().short_name(), name_style));
            let detail = Line::from(Span::styled(
                format!("Owned x{owned} | {} ea", format_currency(stand.income())),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(vec![header, detail, Line::default()])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Owned Business Stands")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}
