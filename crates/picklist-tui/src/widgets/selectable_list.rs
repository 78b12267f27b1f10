use picklist_core::{Item, Items, Selection};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::list_row::ListRow;
use crate::theme::Theme;

const GUTTER: u16 = 2;
const FOCUS_MARKER: &str = "▶";

/// A list of rows where at most one row is selected.
///
/// Selection changes only through row clicks, either from the mouse
/// ([`handle_click`](Self::handle_click)) or from the keyboard on the focused
/// row ([`activate_focused`](Self::activate_focused)). Handing the list a
/// different item sequence clears the selection.
#[derive(Debug, Default)]
pub struct SelectableList {
    selection: Selection,
    focused: usize,
    offset: usize,
    hit_areas: Vec<(usize, Rect)>,
    cache: Vec<CachedRow>,
    rows_rendered: usize,
}

/// Cells of a row from the previous frame, reused while its props and area
/// stay the same.
#[derive(Debug)]
struct CachedRow {
    index: usize,
    is_selected: bool,
    text: String,
    cells: Buffer,
}

impl CachedRow {
    fn matches(&self, row: &ListRow<'_>, area: Rect) -> bool {
        self.index == row.index
            && self.is_selected == row.is_selected
            && self.text == row.text
            && self.cells.area == area
    }
}

impl SelectableList {
    pub fn new(items: Items) -> Self {
        Self { selection: Selection::new(items), ..Self::default() }
    }

    /// Replaces the items. Returns `true` when the selection was reset,
    /// i.e. when `items` is a different sequence than the current one.
    pub fn set_items(&mut self, items: Items) -> bool {
        let reset = self.selection.set_items(items);
        if reset {
            self.focused = 0;
            self.offset = 0;
            self.hit_areas.clear();
            self.cache.clear();
        }
        reset
    }

    pub fn items(&self) -> &[Item] {
        self.selection.items()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn focused(&self) -> Option<usize> {
        (!self.selection.is_empty()).then_some(self.focused)
    }

    /// Number of rows drawn from scratch in the last frame; cached rows are
    /// not counted.
    pub fn rows_rendered(&self) -> usize {
        self.rows_rendered
    }

    /// Click handler shared by every row.
    fn on_select(&mut self, index: usize) {
        self.selection.select(index);
        self.focused = index;
    }

    fn row(&self, index: usize) -> Option<ListRow<'_>> {
        let item = self.selection.items().get(index)?;
        Some(ListRow { index, is_selected: self.selection.is_selected(index), text: &item.text })
    }

    fn click_row(&mut self, index: usize) -> Option<usize> {
        let mut clicked = None;
        self.row(index)?.click(&mut |i| clicked = Some(i));
        let index = clicked?;
        self.on_select(index);
        Some(index)
    }

    /// Routes a click at terminal cell (`column`, `row`) to the row drawn
    /// there in the last frame. Returns the clicked index.
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        let index = self.hit_areas.iter().find(|(_, area)| area.contains(position)).map(|(i, _)| *i)?;
        self.click_row(index)
    }

    /// Clicks the focused row.
    pub fn activate_focused(&mut self) -> Option<usize> {
        let index = self.focused()?;
        self.click_row(index)
    }

    pub fn focus_next(&mut self) {
        let len = self.selection.len();
        if len == 0 {
            return;
        }
        self.focused = (self.focused + 1) % len;
    }

    pub fn focus_previous(&mut self) {
        let len = self.selection.len();
        if len == 0 {
            return;
        }
        self.focused = if self.focused == 0 { len - 1 } else { self.focused - 1 };
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, title: &str) {
        let len = self.selection.len();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title(format!(" {title} "))
            .title_style(Style::default().fg(theme.accent).bold())
            .title_bottom(Line::from(format!(" {len} ")).right_aligned().style(theme.text_dim));

        let inner = block.inner(area);
        block.render(area, buf);

        self.hit_areas.clear();
        self.rows_rendered = 0;

        if len == 0 {
            self.cache.clear();
            Paragraph::new("No items").style(theme.text_dim).render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        if visible == 0 || inner.width <= GUTTER {
            self.cache.clear();
            return;
        }

        self.focused = self.focused.min(len - 1);
        if self.focused < self.offset {
            self.offset = self.focused;
        } else if self.focused >= self.offset + visible {
            self.offset = self.focused + 1 - visible;
        }
        self.offset = self.offset.min(len.saturating_sub(visible));

        let mut previous = std::mem::take(&mut self.cache);
        let end = (self.offset + visible).min(len);

        for (slot, index) in (self.offset..end).enumerate() {
            let y = inner.y + slot as u16;
            let line = Rect { y, height: 1, ..inner };
            let row_area = Rect { x: inner.x + GUTTER, width: inner.width - GUTTER, ..line };

            if index == self.focused {
                buf.set_string(line.x, y, FOCUS_MARKER, Style::default().fg(theme.accent));
            }

            let item = &self.selection.items()[index];
            let row = ListRow { index, is_selected: self.selection.is_selected(index), text: &item.text };

            let cached = match previous.iter().position(|c| c.matches(&row, row_area)) {
                Some(pos) => previous.swap_remove(pos),
                None => {
                    let mut cells = Buffer::empty(row_area);
                    row.render(row_area, &mut cells, theme);
                    self.rows_rendered += 1;
                    CachedRow { index, is_selected: row.is_selected, text: item.text.clone(), cells }
                }
            };
            for pos in row_area.positions() {
                buf[pos] = cached.cells[pos].clone();
            }
            self.cache.push(cached);
            self.hit_areas.push((index, line));
        }
    }
}
