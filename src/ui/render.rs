use crate::ui::app::App;
use crate::ui::header::Header;
use crate::ui::layout::tracker_layout;
use crate::ui::theme::{BACKGROUND, BEER_GOLD, GLOBAL_BORDER, MUTED_TEXT};
use crate::ui::tracker::{render_body, render_reset_dialog};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const MAIN_HINTS: &[(&str, &str)] = &[
    ("Space", "Beer"),
    ("R", "Reset"),
    ("J", "Joke"),
    ("Q", "Quit"),
];

const DIALOG_HINTS: &[(&str, &str)] = &[
    ("←/→", "Choose"),
    ("Enter", "Select"),
    ("Y", "OK"),
    ("N/Esc", "Cancel"),
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let layout = tracker_layout(area);
    frame.render_widget(Header::new().widget(app.status_text()), layout.header);
    render_body(frame, &layout, app.tracker(), app.now(), app.animation_tick());

    let dialog_open = app.tracker().reset_dialog.is_visible();
    let footer = Paragraph::new(footer_line(dialog_open, layout.footer.width)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(footer, layout.footer);

    render_reset_dialog(frame, area, &app.tracker().reset_dialog);
}

/// Hotkeys for whatever currently has input, version pinned to the right.
fn footer_line(dialog_open: bool, width: u16) -> Line<'static> {
    let hints = if dialog_open { DIALOG_HINTS } else { MAIN_HINTS };
    let key_style = Style::default().fg(BEER_GOLD);
    let text_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(": {}", action), text_style));
    }

    let version = format!("v{} ", VERSION);
    // Borders take two columns.
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (width.saturating_sub(2) as usize)
        .saturating_sub(used)
        .saturating_sub(version.chars().count());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(version, text_style));
    Line::from(spans)
}
