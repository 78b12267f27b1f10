use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};

use picklist_config::AppConfig;
use picklist_core::ItemSource;
use picklist_tui::layout::{render_root, RootView};
use picklist_tui::theme::Theme;
use picklist_tui::widgets::selectable_list::SelectableList;

use crate::app_log;
use crate::command::Command;
use crate::event::{AppEvent, EventHandler};
use crate::keybindings::KeybindingDispatcher;

pub struct App {
    pub running: bool,
    pub tick_rate: Duration,
    mouse: bool,
    title: String,
    source: ItemSource,
    list: SelectableList,
    theme: Theme,
    dispatcher: KeybindingDispatcher,
}

impl App {
    /// Loads the initial items; a source that fails to load is an error
    /// here, before the terminal is taken over.
    pub fn new(config: &AppConfig, source: ItemSource) -> anyhow::Result<Self> {
        let items = source.load()?;
        tracing::info!("Showing {} ({} rows)", source.describe(), items.as_ref().map_or(0, |i| i.len()));

        Ok(Self {
            running: true,
            tick_rate: Duration::from_millis(config.tick_rate_ms()),
            mouse: config.general.mouse,
            title: config.general.title.clone(),
            source,
            list: SelectableList::new(items),
            theme: Theme::from_config(&config.theme),
            dispatcher: KeybindingDispatcher::from_config(&config.keybindings),
        })
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse
    }

    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> anyhow::Result<()> {
        let mut events = EventHandler::new(self.tick_rate);

        while self.running {
            terminal.draw(|frame| self.draw(frame))?;
            let event = events.next().await?;
            self.handle_event(event);
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let message = app_log::latest_line();
        let view = RootView {
            title: &self.title,
            hints: self.dispatcher.hints(),
            message: message.as_deref(),
            theme: &self.theme,
        };
        render_root(frame, &mut self.list, &view);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }
        if let Some(cmd) = self.dispatcher.dispatch(key) {
            self.execute(cmd);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.mouse {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.list.handle_click(mouse.column, mouse.row) {
                    self.log_selection(index);
                }
            }
            MouseEventKind::ScrollUp => self.list.focus_previous(),
            MouseEventKind::ScrollDown => self.list.focus_next(),
            _ => {}
        }
    }

    fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.running = false,
            Command::Reload => self.reload(),
            Command::CursorUp => self.list.focus_previous(),
            Command::CursorDown => self.list.focus_next(),
            Command::Activate => {
                if let Some(index) = self.list.activate_focused() {
                    self.log_selection(index);
                }
            }
        }
    }

    /// Re-reads the source. The fresh sequence always clears the selection;
    /// on failure the current items stay.
    fn reload(&mut self) {
        match self.source.load() {
            Ok(items) => {
                let count = items.as_ref().map_or(0, |i| i.len());
                if self.list.set_items(items) {
                    tracing::info!("Reloaded {count} items, selection cleared");
                }
            }
            Err(e) => tracing::warn!("Reload failed: {e}"),
        }
    }

    fn log_selection(&self, index: usize) {
        if let Some(item) = self.list.items().get(index) {
            tracing::info!("Selected row {index}: {}", item.text);
        }
    }
}

#[cfg(test)]
mod tests;
