use crate::ui::app::App;
use crate::ui::layout::{hit_test, HitTarget};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    if app.tracker().reset_dialog.is_visible() {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                app.toggle_reset_choice();
            }
            KeyCode::Enter | KeyCode::Char(' ') => app.answer_selected_reset(),
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'y') => app.confirm_reset(),
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'n') => app.cancel_reset(),
            KeyCode::Esc => app.cancel_reset(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.add_beer(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'b') => app.add_beer(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'r') => app.request_reset(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'j') => app.request_joke(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') => app.request_quit(),
        KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

/// Left clicks act as taps on whatever button is under the pointer.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };

    let area = Rect::new(0, 0, cols, rows);
    let dialog_open = app.tracker().reset_dialog.is_visible();
    match hit_test(area, dialog_open, mouse.column, mouse.row) {
        Some(HitTarget::Beer) => app.add_beer(),
        Some(HitTarget::Reset) => app.request_reset(),
        Some(HitTarget::Joke) => app.request_joke(),
        Some(HitTarget::DialogCancel) => app.cancel_reset(),
        Some(HitTarget::DialogOk) => app.confirm_reset(),
        None => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
