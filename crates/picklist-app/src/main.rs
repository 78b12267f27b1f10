mod app;
mod app_log;
mod cli;
mod command;
mod event;
mod keybindings;

use std::io;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use picklist_config::{check_collisions, validate_keybindings, AppConfig};

use crate::app::App;
use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = AppConfig::init_default()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    app_log::init();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    report_config_problems(&config);

    let mut app = App::new(&config, cli.item_source(io::stdin())?)?;

    install_panic_hook(app.mouse_enabled());

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    if app.mouse_enabled() {
        execute!(io::stdout(), EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    restore_terminal(app.mouse_enabled())?;
    terminal.show_cursor()?;

    result
}

fn report_config_problems(config: &AppConfig) {
    for (name, key, reason) in validate_keybindings(&config.keybindings) {
        tracing::warn!("Keybinding {name} = \"{key}\": {reason}");
    }
    for (key, first, second) in check_collisions(&config.keybindings) {
        tracing::warn!("Key \"{key}\" bound to both {first} and {second}");
    }
    for (field, value, reason) in picklist_tui::theme::invalid_colors(&config.theme) {
        tracing::warn!("Theme {field} = \"{value}\": {reason}");
    }
}

fn restore_terminal(mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(io::stdout(), DisableMouseCapture)?;
    }
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn install_panic_hook(mouse: bool) {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(mouse);
        original_hook(panic_info);
    }));
}
