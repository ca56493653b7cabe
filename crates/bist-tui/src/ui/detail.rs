//! Detail screen: loading placeholder, analysis report or error.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use bist_stock::{AnalysisResult, Direction};

use crate::detail_view::{DetailState, DetailView};
use crate::i18n::Labels;
use crate::theme;
use crate::ui::{centered_rect, chart};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const COLUMN_WIDTH: usize = 24;

/// One prediction, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionCard {
    pub horizon_label: &'static str,
    pub icon: &'static str,
    pub direction: Direction,
    pub percentage: String,
    pub reasoning: String,
}

/// One card per prediction, in the order the analysis lists them
pub fn prediction_cards(result: &AnalysisResult, labels: &Labels) -> Vec<PredictionCard> {
    result
        .predictions
        .iter()
        .map(|prediction| PredictionCard {
            horizon_label: labels.horizon_label(prediction.horizon),
            icon: theme::trend_icon(prediction.direction),
            direction: prediction.direction,
            percentage: prediction.percentage_change.clone(),
            reasoning: prediction.reasoning.clone(),
        })
        .collect()
}

pub fn render(f: &mut Frame, area: Rect, view: &DetailView) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_header(f, chunks[0], view);

    match view.state() {
        DetailState::Loading => render_loading(f, chunks[1], view),
        DetailState::Ready(outcome) => render_report(f, chunks[1], view, outcome.result()),
        DetailState::Failed(message) => render_failed(f, chunks[1], view.labels(), message),
    }
}

fn render_header(f: &mut Frame, area: Rect, view: &DetailView) {
    let ticker = view.ticker();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(true));

    let line = Line::from(vec![
        Span::styled("← ", theme::muted()),
        Span::styled(ticker.code.as_str(), theme::accent_bold()),
        Span::raw("  "),
        Span::styled(ticker.display_name.as_str(), theme::heading()),
        Span::raw("   "),
        Span::styled(view.labels().detail_hints, theme::muted()),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_loading(f: &mut Frame, area: Rect, view: &DetailView) {
    let labels = view.labels();
    let spinner = SPINNER[view.frame() % SPINNER.len()];
    let rect = centered_rect(70, 12, area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(5)])
        .split(rect);

    let lines = vec![
        Line::from(Span::styled(spinner, theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            labels.loading_title(&view.ticker().display_name),
            theme::heading(),
        )),
        Line::from(""),
        Line::from(Span::styled(labels.loading_text, theme::muted())),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let tip = Paragraph::new(Span::styled(labels.loading_tip, theme::warning()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::warning()),
        );
    f.render_widget(tip, chunks[1]);
}

fn render_failed(f: &mut Frame, area: Rect, labels: &Labels, message: &str) {
    let rect = centered_rect(70, 7, area);
    let message = if message.is_empty() { labels.generic_error } else { message };

    let lines = vec![
        Line::from(Span::styled("⚠", theme::negative())),
        Line::from(""),
        Line::from(Span::styled(message, theme::negative().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ Enter ] {}", labels.go_back),
            theme::accent_bold(),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn render_report(f: &mut Frame, area: Rect, view: &DetailView, result: &AnalysisResult) {
    let labels = view.labels();
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_price_card(f, chunks[0], view, result);

    f.render_widget(
        Paragraph::new(report_lines(result, labels))
            .wrap(Wrap { trim: false })
            .scroll((view.scroll(), 0)),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            labels.last_updated(&result.retrieved_at),
            theme::muted(),
        ))
        .alignment(Alignment::Right),
        chunks[2],
    );
}

fn render_price_card(f: &mut Frame, area: Rect, view: &DetailView, result: &AnalysisResult) {
    let labels = view.labels();
    let columns = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let price = vec![
        Line::from(Span::styled(labels.current_price, theme::muted())),
        Line::from(Span::styled(
            result.fundamentals.price.as_str(),
            theme::heading(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            labels.exchange_badge(&view.ticker().code),
            theme::accent().add_modifier(Modifier::REVERSED),
        )),
    ];
    f.render_widget(
        Paragraph::new(price).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(false)),
        ),
        columns[0],
    );

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false))
        .title(Span::styled(format!(" {} ", labels.intraday_outlook), theme::muted()));
    let inner = chart_block.inner(columns[1]);
    f.render_widget(chart_block, columns[1]);
    chart::render(f, inner);
}

/// Scrollable body of the report
fn report_lines<'a>(result: &'a AnalysisResult, labels: &'a Labels) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let fundamentals = &result.fundamentals;

    lines.push(Line::from(vec![
        Span::styled(format!("{:<COLUMN_WIDTH$}", labels.pe_ratio), theme::muted()),
        Span::styled(format!("{:<COLUMN_WIDTH$}", labels.market_cap), theme::muted()),
        Span::styled(labels.volume, theme::muted()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<COLUMN_WIDTH$}", fundamentals.pe_ratio), theme::heading()),
        Span::styled(format!("{:<COLUMN_WIDTH$}", fundamentals.market_cap), theme::heading()),
        Span::styled(fundamentals.volume.as_str(), theme::heading()),
    ]));

    lines.push(Line::from(""));
    lines.push(section(labels.ai_summary));
    lines.push(Line::from(Span::styled(result.summary.as_str(), theme::text_secondary())));

    lines.push(Line::from(""));
    lines.push(section(labels.predictions));
    for card in prediction_cards(result, labels) {
        let style = theme::trend(card.direction);
        lines.push(Line::from(vec![
            Span::styled(format!("{} {}", card.icon, card.horizon_label), style.add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(card.percentage, style),
        ]));
        lines.push(Line::from(Span::styled(format!("  {}", card.reasoning), theme::muted())));
    }

    lines.push(Line::from(""));
    lines.push(section(labels.technicals));
    for technical in &result.technicals {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", technical.name), theme::heading()),
            Span::styled(
                format!("{:<COLUMN_WIDTH$}", labels.indicator_value(&technical.value)),
                theme::muted(),
            ),
            Span::styled(
                format!("[{}]", labels.signal_label(technical.signal)),
                theme::signal(technical.signal),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(labels.disclaimer, theme::warning())));

    lines
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(title, theme::accent_bold()))
}
