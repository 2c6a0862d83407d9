use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::campaign::Campaign;
use crate::ui::app::App;
use crate::ui::format::{bar_fill, funded_text, pledged_amount};
use crate::ui::pager::{page_controls, PageControl};
use crate::ui::table::RenderState;
use crate::ui::theme::{
    ACCENT, ACTIVE_PAGE, BAR_TRACK, DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Width of the in-cell funding bar, in terminal cells.
const BAR_WIDTH: usize = 20;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(title_widget(), header);

    match app.table().render_state() {
        RenderState::Loading => draw_loading(frame, body, app.tick_count()),
        RenderState::Error(reason) => draw_notice(frame, body, reason, STATUS_ERROR),
        RenderState::NoData => {
            draw_notice(frame, body, "No projects available to display.", HEADER_TEXT)
        }
        RenderState::Table {
            rows,
            current_page,
            total_pages,
        } => draw_table(frame, body, rows, current_page, total_pages),
    }

    frame.render_widget(footer_widget(footer), footer);
}

fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(2);
    let footer_height = 1.min(area.height.saturating_sub(header_height));
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

fn title_widget() -> Paragraph<'static> {
    let title = Span::styled(
        "Kickstarter Projects",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    );
    Paragraph::new(Line::from(title))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn footer_widget(area: Rect) -> Paragraph<'static> {
    let hints = " ←/→: Page │ 1-5: Jump │ q: Quit";
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count.
    let padding = (area.width as usize)
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    Paragraph::new(Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]))
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect, tick: usize) {
    let glyph = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(glyph, Style::default().fg(ACCENT)),
        Span::styled(" Loading projects…", Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        middle_band(area),
    );
}

fn draw_notice(frame: &mut Frame<'_>, area: Rect, text: &str, color: ratatui::style::Color) {
    let line = Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        middle_band(area),
    );
}

fn middle_band(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    }
}

fn draw_table(
    frame: &mut Frame<'_>,
    area: Rect,
    rows: &[Campaign],
    current_page: usize,
    total_pages: usize,
) {
    let controls = page_controls(current_page, total_pages);
    let pagination_height: u16 = if controls.is_empty() { 0 } else { 2 };
    let table_area = Rect {
        height: area.height.saturating_sub(pagination_height),
        ..area
    };

    let header = Row::new(["S.No.", "Percentage Funded", "Amount Pledged"]).style(
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    );
    let widths = [
        Constraint::Length(7),
        Constraint::Min(BAR_WIDTH as u16 + 10),
        Constraint::Length(16),
    ];
    let table = Table::new(rows.iter().map(campaign_row), widths)
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(table, table_area);

    if !controls.is_empty() && area.height > pagination_height {
        let pagination_area = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(pagination_line(&controls)).alignment(Alignment::Center),
            pagination_area,
        );
    }
}

fn campaign_row(campaign: &Campaign) -> Row<'static> {
    let fill = bar_fill(campaign.percentage_funded, BAR_WIDTH);
    let bar = Line::from(vec![
        Span::styled("█".repeat(fill), Style::default().fg(ACCENT)),
        Span::styled("░".repeat(BAR_WIDTH - fill), Style::default().fg(BAR_TRACK)),
        Span::raw(" "),
        Span::styled(
            funded_text(campaign.percentage_funded),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);

    Row::new(vec![
        Cell::from(campaign.serial_no.to_string()),
        Cell::from(bar),
        Cell::from(pledged_amount(campaign.amount_pledged)),
    ])
    .style(Style::default().fg(HEADER_TEXT))
}

fn pagination_line(controls: &[PageControl]) -> Line<'static> {
    let mut spans = Vec::new();
    for control in controls {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(match control {
            PageControl::Previous { enabled } => nav_span("‹ Prev", *enabled),
            PageControl::Next { enabled } => nav_span("Next ›", *enabled),
            PageControl::Ellipsis => Span::styled("…", Style::default().fg(DISABLED_TEXT)),
            PageControl::Number { page, active } => {
                let text = format!(" {} ", page);
                if *active {
                    Span::styled(
                        text,
                        Style::default()
                            .fg(HEADER_TEXT)
                            .bg(ACTIVE_PAGE)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(text, Style::default().fg(HEADER_TEXT))
                }
            }
        });
    }
    Line::from(spans)
}

fn nav_span(label: &'static str, enabled: bool) -> Span<'static> {
    let color = if enabled { HEADER_TEXT } else { DISABLED_TEXT };
    Span::styled(label, Style::default().fg(color))
}
