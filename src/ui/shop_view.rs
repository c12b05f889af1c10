use super::{centered_rect, format_currency};
use crate::app::App;
use crate::sim::game::Game;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

pub fn render(frame: &mut Frame, app: &App, game: &Game) {
    let area = centered_rect(60, 70, frame.size());
    frame.render_widget(Clear, area);
    let block = Block::default().title("SHOP").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(inner);

    let balance = Paragraph::new(Line::from(vec![
        Span::raw("Balance: "),
        Span::styled(
            format_currency(game.balance()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(balance, layout[0]);

    let player = game.player();
    let mut items: Vec<ListItem> = Vec::new();
    for stand in game.catalog() {
        let affordable = player.can_afford(stand);
        let name_style = Style::default()
            .fg(if affordable {
                Color::Yellow
            } else {
                Color::DarkGray
            })
            .add_modifier(Modifier::BOLD);
        let title = Line::from(Span::styled(
            format!("{} - {}", stand.name(), format_currency(stand.cost())),
            name_style,
        ));
        let detail = Line::from(format!(
            "Owned x{} | Income: {}/ea",
            player.owned_count(stand.kind()),
            format_currency(stand.income())
        ));
        items.push(ListItem::new(vec![title, detail]));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Stands"))
        .highlight_symbol("▶ ")
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White));
    let mut state = ListState::default();
    if !game.catalog().is_empty() {
        let selection = app.selected_shop_item.min(game.catalog().len() - 1);
        state.select(Some(selection));
    }
    frame.render_stateful_widget(list, layout[1], &mut state);

    let footer = Paragraph::new(Line::from("Enter to buy  •  1/2/3 quick buy  •  Esc/S to close"))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, layout[2]);
}
