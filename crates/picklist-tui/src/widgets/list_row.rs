use ratatui::prelude::*;

use crate::theme::Theme;

/// One clickable line of a [`SelectableList`](super::selectable_list::SelectableList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRow<'a> {
    pub index: usize,
    pub is_selected: bool,
    pub text: &'a str,
}

impl<'a> ListRow<'a> {
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let style = theme.row(self.is_selected);
        let line = Rect { height: 1, ..area };
        buf.set_style(line, style);
        buf.set_stringn(line.x, line.y, self.text, line.width as usize, style);
    }

    /// Reports a click on this row to `on_select` with the row's index.
    pub fn click(&self, on_select: &mut dyn FnMut(usize)) {
        on_select(self.index);
    }
}
