use ratatui::prelude::*;

use crate::theme::Theme;
use crate::widgets::selectable_list::SelectableList;
use crate::widgets::status_bar::StatusBarWidget;

pub struct RootView<'a> {
    pub title: &'a str,
    pub hints: &'a [(String, String)],
    pub message: Option<&'a str>,
    pub theme: &'a Theme,
}

/// List on top, one-line status bar below.
pub fn render_root(frame: &mut Frame, list: &mut SelectableList, view: &RootView<'_>) {
    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    list.render(list_area, frame.buffer_mut(), view.theme, view.title);

    let selected = list.selection().selected_item().map(|item| item.text.as_str());
    StatusBarWidget { hints: view.hints, selected, message: view.message, theme: view.theme }
        .render(status_area, frame.buffer_mut());
}
