mod app;
mod config;
mod sim;
mod ui;

use anyhow::{Context, Result};
use app::{App, MenuItem, Screen};
use config::{GameConfig, load_config};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sim::catalog::{Stand, StandKind};
use sim::game::{EconomyEvent, Game};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const INPUT_POLL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    init_logging(&config)?;
    info!(player = %config.player_name, balance = config.initial_balance, "starting game");

    let mut game = Game::new(&config);
    game.add_message(format!("Welcome, {}.", config.player_name));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut game).await;
    restore_terminal(&mut terminal)?;

    info!(balance = game.balance(), stands = game.player().owned.len(), "game closed");
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, game: &mut Game) -> Result<()> {
    let mut app = App::new();

    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    task::spawn_blocking(move || forward_input(&input_tx, poll_terminal_event));

    let tick_rate = Duration::from_millis(250);
    let mut dirty = true;
    let mut should_quit = false;

    loop {
        if dirty {
            terminal.draw(|f| ui::render(f, &app, game))?;
            dirty = false;
        }
        if should_quit {
            break;
        }

        tokio::select! {
            Some(event) = input_rx.recv() => {
                if handle_event(event, &mut app, game)? {
                    should_quit = true;
                }
                dirty = true;
            }
            _ = tokio::time::sleep(tick_rate) => {}
        }

        for event in game.drain_events() {
            log_event(&event);
            dirty = true;
        }
    }

    Ok(())
}

/// Forwards input until the receiver is dropped or the source fails.
fn forward_input<F>(input_tx: &mpsc::UnboundedSender<Event>, mut next_event: F)
where
    F: FnMut() -> io::Result<Option<Event>>,
{
    while !input_tx.is_closed() {
        match next_event() {
            Ok(Some(event)) => {
                if input_tx.send(event).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(_) => break,
        }
    }
}

fn poll_terminal_event() -> io::Result<Option<Event>> {
    if event::poll(INPUT_POLL)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn log_event(event: &EconomyEvent) {
    match event {
        EconomyEvent::Worked { earned, balance } => {
            debug!(earned, balance, "balance credited");
        }
        EconomyEvent::Purchased(receipt) => {
            debug!(
                stand = receipt.kind.display_name(),
                owned = receipt.owned_after,
                balance = receipt.balance_after,
                "inventory grew"
            );
        }
        EconomyEvent::PurchaseRejected {
            kind,
            cost,
            balance,
        } => {
            debug!(stand = kind.display_name(), cost, balance, "balance unchanged");
        }
    }
}

fn handle_event(event: Event, app: &mut App, game: &mut Game) -> Result<bool> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, app, game),
        Event::Resize(_, _) => Ok(false),
        _ => Ok(false),
    }
}

fn handle_key_event(key: KeyEvent, app: &mut App, game: &mut Game) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.screen() {
        Screen::MainMenu => handle_menu_key(key, app),
        Screen::Play if app.shop_open => handle_shop_key(key, app, game),
        Screen::Play => handle_play_key(key, app, game),
    }
}

fn handle_menu_key(key: KeyEvent, app: &mut App) -> Result<bool> {
    if app.help_open {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.toggle_help();
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),
        KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') | KeyCode::Char('k') => {
            app.next_menu_item();
            Ok(false)
        }
        KeyCode::Enter => {
            match app.menu_item {
                MenuItem::Play => {
                    debug!("entering play screen");
                    app.start_playing();
                }
                MenuItem::HowToPlay => app.toggle_help(),
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn handle_play_key(key: KeyEvent, app: &mut App, game: &mut Game) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
            game.work();
            Ok(false)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_shop();
            Ok(false)
        }
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Esc => {
            debug!("returning to main menu");
            app.return_to_menu();
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn handle_shop_key(key: KeyEvent, app: &mut App, game: &mut Game) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_shop();
            Ok(false)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            app.select_previous_shop_item();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            app.select_next_shop_item(game.catalog().len());
            Ok(false)
        }
        KeyCode::Enter => {
            let Some(kind) = game
                .catalog()
                .get(app.selected_shop_item)
                .map(Stand::kind)
            else {
                return Ok(false);
            };
            if let Err(err) = game.purchase(kind) {
                game.add_message(format!("Purchase failed: {err}"));
            }
            Ok(false)
        }
        KeyCode::Char('1') => shop_shortcut(game, StandKind::Lemonade),
        KeyCode::Char('2') => shop_shortcut(game, StandKind::Newspaper),
        KeyCode::Char('3') => shop_shortcut(game, StandKind::HotDog),
        _ => Ok(false),
    }
}

fn shop_shortcut(game: &mut Game, kind: StandKind) -> Result<bool> {
    if let Err(err) = game.purchase(kind) {
        game.add_message(format!("Purchase failed: {err}"));
    }
    Ok(false)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
