use ratatui::layout::{Constraint, Direction, Flex, Layout, Position, Rect};

const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;
const JOKE_PANEL_HEIGHT: u16 = 5;
const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 8;
const CHOICE_WIDTH: u16 = 10;

/// Clickable areas of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Beer,
    Reset,
    Joke,
    DialogCancel,
    DialogOk,
}

/// Every region the tracker screen draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerLayout {
    pub header: Rect,
    pub footer: Rect,
    pub count: Rect,
    pub label: Rect,
    pub elapsed: Rect,
    pub beer_button: Rect,
    pub reset_button: Rect,
    pub joke_button: Rect,
    pub joke_panel: Rect,
}

/// The reset confirmation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub area: Rect,
    pub message: Rect,
    pub cancel: Rect,
    pub ok: Rect,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn tracker_layout(area: Rect) -> TrackerLayout {
    let (header, body, footer) = layout_regions(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .constraints([
            Constraint::Length(1), // count
            Constraint::Length(1), // label
            Constraint::Length(1),
            Constraint::Length(1), // elapsed
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT), // beer button
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT), // reset / joke
            Constraint::Length(1),
            Constraint::Length(JOKE_PANEL_HEIGHT),
        ])
        .split(body);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(4),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(rows[7]);

    TrackerLayout {
        header,
        footer,
        count: rows[0],
        label: rows[1],
        elapsed: rows[3],
        beer_button: centered_rect_by_size(rows[5], BUTTON_WIDTH, BUTTON_HEIGHT),
        reset_button: buttons[0],
        joke_button: buttons[2],
        joke_panel: centered_rect_by_size(rows[9], BUTTON_WIDTH * 3, JOKE_PANEL_HEIGHT),
    }
}

pub fn dialog_layout(area: Rect) -> DialogLayout {
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    let inner = Rect {
        x: dialog.x.saturating_add(1),
        y: dialog.y.saturating_add(1),
        width: dialog.width.saturating_sub(2),
        height: dialog.height.saturating_sub(2),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2), // message
            Constraint::Length(1),
            Constraint::Length(1), // choices
            Constraint::Min(0),
        ])
        .split(inner);

    let choices = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([
            Constraint::Length(CHOICE_WIDTH),
            Constraint::Length(6),
            Constraint::Length(CHOICE_WIDTH),
        ])
        .split(rows[3]);

    DialogLayout {
        area: dialog,
        message: rows[1],
        cancel: choices[0],
        ok: choices[2],
    }
}

/// Map a click to whatever is under it.
///
/// While the dialog is open only its two choices are live.
pub fn hit_test(area: Rect, dialog_open: bool, column: u16, row: u16) -> Option<HitTarget> {
    let position = Position::new(column, row);

    if dialog_open {
        let dialog = dialog_layout(area);
        return if dialog.cancel.contains(position) {
            Some(HitTarget::DialogCancel)
        } else if dialog.ok.contains(position) {
            Some(HitTarget::DialogOk)
        } else {
            None
        };
    }

    let layout = tracker_layout(area);
    if layout.beer_button.contains(position) {
        Some(HitTarget::Beer)
    } else if layout.reset_button.contains(position) {
        Some(HitTarget::Reset)
    } else if layout.joke_button.contains(position) {
        Some(HitTarget::Joke)
    } else {
        None
    }
}

/// Create a rect of the given size centered in `area`, clipped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 30)
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(screen());
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 24);
        assert_eq!(footer.y, 27);
    }

    #[test]
    fn buttons_do_not_overlap() {
        let layout = tracker_layout(screen());
        assert!(!layout.beer_button.intersects(layout.reset_button));
        assert!(!layout.reset_button.intersects(layout.joke_button));
        assert!(layout.reset_button.x < layout.joke_button.x);
    }

    #[test]
    fn clicks_hit_buttons() {
        let layout = tracker_layout(screen());
        let (x, y) = center(layout.beer_button);
        assert_eq!(hit_test(screen(), false, x, y), Some(HitTarget::Beer));
        let (x, y) = center(layout.joke_button);
        assert_eq!(hit_test(screen(), false, x, y), Some(HitTarget::Joke));
        assert_eq!(hit_test(screen(), false, 0, 0), None);
    }

    #[test]
    fn dialog_captures_clicks() {
        let layout = tracker_layout(screen());
        let (x, y) = center(layout.beer_button);
        assert_eq!(hit_test(screen(), true, x, y), None);

        let dialog = dialog_layout(screen());
        let (x, y) = center(dialog.ok);
        assert_eq!(hit_test(screen(), true, x, y), Some(HitTarget::DialogOk));
        let (x, y) = center(dialog.cancel);
        assert_eq!(hit_test(screen(), true, x, y), Some(HitTarget::DialogCancel));
    }

    #[test]
    fn centered_rect_clips_to_area() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 10, 4), 20, 8);
        assert_eq!(rect, Rect::new(0, 0, 10, 4));
    }
}
