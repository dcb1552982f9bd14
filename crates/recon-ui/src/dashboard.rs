//! Main dashboard screen: header, upload cards, action panel and tile grid.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use recon_core::tiles::Tile;
use recon_runtime::session::{ReconSession, Slot};

use crate::components::action_panel::ActionPanel;
use crate::components::header::Header;
use crate::components::tile_card::TileCard;
use crate::components::upload_card::UploadCard;
use crate::themes::Theme;

/// Tiles per grid row.
pub const TILE_COLUMNS: usize = 4;

const TILE_HEIGHT: u16 = 4;

pub const KEY_HINTS: &str =
    "y YMS · d Dock Dash · r Reconcile · c Copy · ←↑↓→/Tab Select · Enter Details · q Quit";

/// Everything the dashboard needs besides the session.
pub struct DashboardView<'a> {
    pub version: &'a str,
    pub selected: Tile,
    /// Transient one-line message shown above the key hints.
    pub notice: Option<&'a str>,
    pub theme: &'a Theme,
}

pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    session: &ReconSession,
    view: &DashboardView<'_>,
) {
    let rows = Tile::ALL.len().div_ceil(TILE_COLUMNS) as u16;
    let [header_area, cards_area, panel_area, tiles_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Min(rows * TILE_HEIGHT),
        Constraint::Length(2),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Header::new(view.version, view.theme).to_lines()),
        header_area,
    );

    let [yms_area, dock_area] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(cards_area);
    for (slot, card_area) in [(Slot::Yms, yms_area), (Slot::DockDash, dock_area)] {
        let card = UploadCard::new(slot, session.slot(slot), view.theme);
        frame.render_widget(
            Paragraph::new(card.to_lines())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(card.border_style())
                        .title(card.title()),
                ),
            card_area,
        );
    }

    let panel = ActionPanel::new(session.status(), view.theme);
    frame.render_widget(
        Paragraph::new(panel.to_line()).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(view.theme.separator),
        ),
        panel_area,
    );

    render_tile_grid(frame, tiles_area, session, view);

    let mut footer = Vec::with_capacity(2);
    footer.push(match view.notice {
        Some(notice) => Line::from(Span::styled(notice.to_string(), view.theme.warning)),
        None => Line::from(""),
    });
    footer.push(Line::from(Span::styled(KEY_HINTS, view.theme.dim)));
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn render_tile_grid(frame: &mut Frame, area: Rect, session: &ReconSession, view: &DashboardView<'_>) {
    let report = session.last_outcome().map(|o| &o.report);
    let row_count = Tile::ALL.len().div_ceil(TILE_COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); row_count]).split(area);
    let column_constraints = vec![Constraint::Ratio(1, TILE_COLUMNS as u32); TILE_COLUMNS];

    for (row, tiles) in Tile::ALL.chunks(TILE_COLUMNS).enumerate() {
        let cells = Layout::horizontal(column_constraints.clone()).split(row_areas[row]);
        for (tile, cell) in tiles.iter().zip(cells.iter()) {
            let card = TileCard::new(*tile, report, *tile == view.selected, view.theme);
            frame.render_widget(
                Paragraph::new(card.to_lines()).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(card.border_style()),
                ),
                *cell,
            );
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
