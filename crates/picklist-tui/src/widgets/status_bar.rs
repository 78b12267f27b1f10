use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub struct StatusBarWidget<'a> {
    /// `(key, description)` pairs, shown left to right.
    pub hints: &'a [(String, String)],
    pub selected: Option<&'a str>,
    pub message: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let t = self.theme;
        let status_bg = t.status_bar.bg.unwrap_or(Color::Reset);
        let status_fg = t.status_bar.fg.unwrap_or(Color::Reset);
        let sep = t.border.bg(status_bg);
        let key_style = Style::default().fg(t.accent).bg(status_bg);
        let desc_style = Style::default().fg(status_fg).bg(status_bg);
        let mut spans = Vec::new();

        let selected = self.selected.unwrap_or("none");
        spans.push(Span::styled(" Selected: ", desc_style.add_modifier(Modifier::DIM)));
        spans.push(Span::styled(selected.to_string(), desc_style.add_modifier(Modifier::BOLD)));

        for (key, desc) in self.hints {
            spans.push(Span::styled(" │ ", sep));
            spans.push(Span::styled(key.clone(), key_style));
            spans.push(Span::styled(format!(" {desc}"), desc_style));
        }

        if let Some(msg) = self.message {
            spans.push(Span::styled(" │ ", sep));
            spans.push(Span::styled(msg.to_string(), t.text_dim.bg(status_bg)));
        }

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(status_bg));
        bar.render(area, buf);
    }
}
