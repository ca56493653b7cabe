//! List screen: title, search box, ticker rows and key hints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::i18n::Labels;
use crate::list_view::ListView;
use crate::theme;

const NAME_WIDTH: usize = 24;

pub fn render(f: &mut Frame, area: Rect, view: &ListView, labels: &Labels) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_search(f, chunks[0], view, labels);
    render_rows(f, chunks[1], view, labels);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(labels.list_hints, theme::muted()))),
        chunks[2],
    );
}

fn render_search(f: &mut Frame, area: Rect, view: &ListView, labels: &Labels) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(true))
        .title(Span::styled(format!(" {} ", labels.app_title), theme::accent_bold()));

    let line = if view.query().is_empty() {
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(labels.search_placeholder, theme::muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(view.query(), theme::text()),
            Span::styled("_", theme::accent()),
        ])
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_rows(f: &mut Frame, area: Rect, view: &ListView, labels: &Labels) {
    let rows = view.rows();

    if rows.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(labels.no_results, theme::muted())),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        return;
    }

    // Keep the cursor inside the visible window
    let height = usize::from(area.height).max(1);
    let start = (view.cursor() + 1).saturating_sub(height);
    let end = (start + height).min(rows.len());

    let lines: Vec<Line> = rows[start..end]
        .iter()
        .enumerate()
        .map(|(offset, ticker)| {
            let is_cursor = start + offset == view.cursor();
            let (code_style, name_style, sector_style) = if is_cursor {
                (theme::selected(), theme::selected(), theme::selected())
            } else {
                (theme::accent_bold(), theme::text(), theme::muted())
            };

            Line::from(vec![
                Span::styled(format!(" {:<6} ", ticker.code), code_style),
                Span::styled(format!("{:<NAME_WIDTH$} ", ticker.display_name), name_style),
                Span::styled(format!("[{}]", ticker.sector), sector_style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TURKISH;
    use crate::test_helpers::type_text;
    use crate::ui::buffer_text;
    use bist_stock::TickerCatalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(view: &ListView, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, height)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), view, &TURKISH))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_header_and_rows() {
        let view = ListView::new(TickerCatalog::bist100());
        let text = draw(&view, 40);

        assert!(text.contains("BIST 100 Analiz"));
        assert!(text.contains("Sembol veya şirket ara..."));
        assert!(text.contains("THYAO"));
        assert!(text.contains("Türk Hava Yolları"));
        assert!(text.contains("[Ulaştırma]"));
    }

    #[test]
    fn test_filtered_rows() {
        let mut view = ListView::new(TickerCatalog::bist100());
        type_text(&mut view, "GAR");
        let text = draw(&view, 20);

        assert!(text.contains("GARAN"));
        assert!(!text.contains("THYAO"));
        assert!(!text.contains("Sembol veya şirket ara..."));
    }

    #[test]
    fn test_empty_state() {
        let mut view = ListView::new(TickerCatalog::bist100());
        type_text(&mut view, "zzz");
        let text = draw(&view, 20);

        assert!(text.contains("Hisse bulunamadı."));
    }

    #[test]
    fn test_window_follows_cursor() {
        let mut view = ListView::new(TickerCatalog::bist100());
        for _ in 0..29 {
            view.move_down();
        }
        let text = draw(&view, 10);

        assert!(text.contains("KONTR"));
        assert!(!text.contains("THYAO"));
    }
}
