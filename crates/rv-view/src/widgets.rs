//! Terminal widgets.
//!
//! Painting only: the chart widget projects an already-built
//! [`ChartScene`] onto a ratatui canvas, flipping from the scene's
//! top-left origin to the canvas's bottom-left origin. No layout is
//! computed here.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line as TextLine,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
        Block, Borders, Cell, Paragraph, Row, Table,
    },
    Frame,
};

use rv_types::{DataOrigin, RiskDataSet};

use crate::app::App;
use crate::chart::{self, ChartScene};
use crate::display::metric_rows;

const BAR_COLOR: Color = Color::LightBlue;
const AXIS_COLOR: Color = Color::Gray;
const LABEL_COLOR: Color = Color::Gray;

// Rough width of one terminal cell in logical canvas units, used to
// center labels. Exact centering is not needed at terminal resolution.
const CHAR_WIDTH: f64 = 8.0;

/// Render the whole dashboard.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.size());

    let title = Paragraph::new("Portfolio Risk Overview")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match &app.data {
        None => draw_loading(frame, chunks[2]),
        Some(data) => {
            if data.origin == DataOrigin::Fallback {
                let notice = Paragraph::new("API unavailable, showing sample data")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center);
                frame.render_widget(notice, chunks[1]);
            }

            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(data.len() as u16 + 3),
                    Constraint::Min(10),
                ])
                .split(chunks[2]);

            draw_display(frame, body[0], data);
            draw_chart(frame, body[1], &app.chart);
        }
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading risk data...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(loading, area);
}

/// The textual metric list: one table row per metric, full dataset.
fn draw_display(frame: &mut Frame, area: Rect, data: &RiskDataSet) {
    let header = Row::new(
        ["Metric", "Value"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow))),
    );

    let rows = metric_rows(&data.metrics)
        .into_iter()
        .map(|row| Row::new(vec![Cell::from(row.label), Cell::from(row.value)]));

    let widths = [Constraint::Length(24), Constraint::Length(12)];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Risk Metrics ").borders(Borders::ALL));

    frame.render_widget(table, area);
}

/// The bar chart. An empty scene renders only the frame, which clears any
/// previously painted chart.
fn draw_chart(frame: &mut Frame, area: Rect, scene: &ChartScene) {
    let block = Block::default().title(" Risk Chart ").borders(Borders::ALL);

    if scene.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, chart::CANVAS_WIDTH])
        .y_bounds([0.0, chart::CANVAS_HEIGHT])
        .paint(|ctx| paint_scene(ctx, scene));

    frame.render_widget(canvas, area);
}

/// Scene y grows downward from the plot's top edge; canvas y grows upward
/// from the bottom of the logical canvas.
fn flip_y(scene_y: f64) -> f64 {
    chart::CANVAS_HEIGHT - chart::MARGINS.top - scene_y
}

fn paint_scene(ctx: &mut Context, scene: &ChartScene) {
    let left = chart::MARGINS.left;
    let baseline = flip_y(chart::PLOT_HEIGHT);

    // Axis lines.
    ctx.draw(&CanvasLine {
        x1: left,
        y1: baseline,
        x2: left + chart::PLOT_WIDTH,
        y2: baseline,
        color: AXIS_COLOR,
    });
    ctx.draw(&CanvasLine {
        x1: left,
        y1: baseline,
        x2: left,
        y2: flip_y(0.0),
        color: AXIS_COLOR,
    });

    for bar in &scene.bars {
        ctx.draw(&Rectangle {
            x: left + bar.x,
            y: flip_y(bar.y + bar.height),
            width: bar.width,
            height: bar.height,
            color: BAR_COLOR,
        });
    }

    for tick in &scene.x_ticks {
        let x = left + tick.position - tick.label.len() as f64 * CHAR_WIDTH / 2.0;
        ctx.print(
            x.max(0.0),
            baseline - 12.0,
            TextLine::styled(tick.label.clone(), Style::default().fg(LABEL_COLOR)),
        );
    }

    for tick in &scene.y_ticks {
        ctx.print(
            6.0,
            flip_y(tick.position),
            TextLine::styled(tick.label.clone(), Style::default().fg(LABEL_COLOR)),
        );
    }

    let x_title_x = left + chart::PLOT_WIDTH / 2.0 - scene.x_title.len() as f64 * CHAR_WIDTH / 2.0;
    ctx.print(
        x_title_x.max(0.0),
        6.0,
        TextLine::styled(scene.x_title.clone(), Style::default().fg(LABEL_COLOR)),
    );
    ctx.print(
        2.0,
        chart::CANVAS_HEIGHT - 6.0,
        TextLine::styled(scene.y_title.clone(), Style::default().fg(LABEL_COLOR)),
    );
}
