use crate::ui::theme::{BEER_GOLD, GLOBAL_BORDER, MUTED_TEXT, PRIMARY_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title bar. `status` is shown dimmed after the title when present.
    pub fn widget(&self, status: Option<&str>) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled("🍺 ", Style::default().fg(BEER_GOLD)),
            Span::styled(
                "Beer Tracker",
                Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(status) = status {
            spans.push(Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)));
            spans.push(Span::styled(status.to_string(), Style::default().fg(MUTED_TEXT)));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
