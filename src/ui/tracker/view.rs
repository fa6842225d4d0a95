//! Rendering for the tracker body and the reset prompt.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::{dialog_layout, TrackerLayout};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BACKGROUND, BEER_GOLD, JOKE_GREEN, MUTED_TEXT, PANEL_BACKGROUND,
    POPUP_BORDER, PRIMARY_TEXT, RESET_ORANGE,
};

use super::state::{ConfirmChoice, ResetDialogState, TrackerState};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw the count, elapsed time, buttons and joke panel.
pub fn render_body(
    frame: &mut Frame,
    layout: &TrackerLayout,
    state: &TrackerState,
    now: DateTime<Utc>,
    animation_tick: u8,
) {
    let count_text = if state.is_ready() {
        state.count.to_string()
    } else {
        "…".to_string()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            count_text,
            Style::default().fg(BEER_GOLD).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        layout.count,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("Beers consumed", Style::default().fg(PRIMARY_TEXT)))
            .alignment(Alignment::Center),
        layout.label,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Time elapsed: {}", state.elapsed_text(now)),
            Style::default().fg(MUTED_TEXT),
        ))
        .alignment(Alignment::Center),
        layout.elapsed,
    );

    frame.render_widget(button("🍺 Beer", BEER_GOLD), layout.beer_button);
    frame.render_widget(button("Reset", RESET_ORANGE), layout.reset_button);

    let joke_label = if state.is_fetching_joke() {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        format!("{} Get Joke", spinner)
    } else {
        "Get Joke".to_string()
    };
    frame.render_widget(button(&joke_label, JOKE_GREEN), layout.joke_button);

    if state.has_joke() {
        let panel = Paragraph::new(state.joke.clone())
            .style(Style::default().fg(PRIMARY_TEXT).bg(PANEL_BACKGROUND))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(PANEL_BACKGROUND)),
            );
        frame.render_widget(panel, layout.joke_panel);
    }
}

fn button(label: &str, color: ratatui::style::Color) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(BACKGROUND).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(color))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color).bg(color)),
    )
}

/// Draw the reset confirmation on top of `area` when it is open.
pub fn render_reset_dialog(frame: &mut Frame, area: Rect, dialog: &ResetDialogState) {
    let ResetDialogState::Visible { selected } = *dialog else {
        return;
    };

    let layout = dialog_layout(area);
    frame.render_widget(Clear, layout.area);

    let block = Block::default()
        .title(" Reset Confirmation ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(block, layout.area);

    frame.render_widget(
        Paragraph::new("Are you sure you want to reset your beer count?")
            .style(Style::default().fg(PRIMARY_TEXT))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        layout.message,
    );

    frame.render_widget(choice(ConfirmChoice::Cancel, selected), layout.cancel);
    frame.render_widget(choice(ConfirmChoice::Ok, selected), layout.ok);
}

fn choice(which: ConfirmChoice, selected: ConfirmChoice) -> Paragraph<'static> {
    let style = if which == selected {
        Style::default()
            .fg(PRIMARY_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(PRIMARY_TEXT)
    };
    Paragraph::new(Span::styled(format!(" {} ", which.label()), style)).alignment(Alignment::Center)
}
