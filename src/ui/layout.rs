use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3.min(area.height)),
            Constraint::Min(0),
            Constraint::Length(3.min(area.height.saturating_sub(3))),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}
