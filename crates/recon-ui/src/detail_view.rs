//! ISA/VRID detail table for a selected tile.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per trailer,
//! or a notice when the tile has nothing to list.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use recon_core::models::RecordRef;
use recon_core::tiles::Tile;
use recon_runtime::session::DetailLookup;

use crate::themes::Theme;

pub const NO_RECORDS: &str = "No records found for this category.";

/// Number of table rows that fit in `area` below the border and header.
pub fn visible_rows(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(3))
}

/// Render the detail view for `tile`, starting at row `offset`.
pub fn render_detail_view(
    frame: &mut Frame,
    area: Rect,
    tile: Tile,
    lookup: DetailLookup<'_>,
    offset: usize,
    theme: &Theme,
) {
    frame.render_widget(Clear, area);
    match lookup {
        DetailLookup::Records(records) => {
            render_records(frame, area, tile, records, offset, theme)
        }
        DetailLookup::NoRecords => render_no_records(frame, area, tile, theme),
    }
}

fn render_records(
    frame: &mut Frame,
    area: Rect,
    tile: Tile,
    records: &[RecordRef],
    offset: usize,
    theme: &Theme,
) {
    let header_cells = ["#", "ISA", "VRID"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let offset = offset.min(records.len().saturating_sub(1));
    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows(area))
        .map(|(i, record)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(record.isa.clone()),
                Cell::from(record.vrid.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(45),
        Constraint::Percentage(45),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(format!(" {} ", tile.detail_title(records.len())))
                .title_bottom(" ↑↓ scroll · Esc close "),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Notice shown when a tile has no records behind it.
pub fn render_no_records(frame: &mut Frame, area: Rect, tile: Tile, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(NO_RECORDS, theme.warning)),
        Line::from(""),
        Line::from(Span::styled("Press Esc to return", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(format!(" {} ", tile.label())),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn make_records(n: usize) -> Vec<RecordRef> {
        (0..n)
            .map(|i| RecordRef::new(format!("ISA{i}"), format!("VRID{i}")))
            .collect()
    }

    #[test]
    fn test_render_records_shows_title_and_rows() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let theme = Theme::dark();
        let records = make_records(2);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_detail_view(
                    frame,
                    area,
                    Tile::Excluded,
                    DetailLookup::Records(&records),
                    0,
                    &theme,
                );
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("EXCLUDED DETAILS (2 Trailers)"), "{text}");
        assert!(text.contains("ISA0"));
        assert!(text.contains("VRID1"));
    }

    #[test]
    fn test_render_records_offset_skips_rows() {
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        let theme = Theme::dark();
        let records = make_records(30);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_detail_view(
                    frame,
                    area,
                    Tile::DropFloor,
                    DetailLookup::Records(&records),
                    20,
                    &theme,
                );
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("VRID20"), "{text}");
        assert!(!text.contains("VRID19 "), "{text}");
    }

    #[test]
    fn test_render_no_records_notice() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let theme = Theme::light();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_detail_view(
                    frame,
                    area,
                    Tile::TotalParcels,
                    DetailLookup::NoRecords,
                    0,
                    &theme,
                );
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains(NO_RECORDS));
        assert!(text.contains("Total Parcels"));
    }

    #[test]
    fn test_visible_rows() {
        assert_eq!(visible_rows(Rect::new(0, 0, 10, 10)), 7);
        assert_eq!(visible_rows(Rect::new(0, 0, 10, 2)), 0);
    }
}
