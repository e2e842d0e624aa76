use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

const POSE_PANEL_WIDTH: u16 = 24;

const HINTS: &str = " [1-9] hold pose  [0/Space] release  [Enter] commit  [⌫] undo  [x] clear  \
                     [c] reset input  [r] reset transcript  [e] export  [s] speech  [o] overlay  \
                     [q] quit ";

pub fn draw(frame: &mut Frame, app: &App) {
    let [header_area, body_area, overlay_area, notice_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [transcript_area, pose_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(POSE_PANEL_WIDTH)])
            .areas(body_area);

    render_header(frame, app, header_area);
    render_transcript(frame, app, transcript_area);
    render_poses(frame, app, pose_area);
    render_overlay(frame, app, overlay_area);
    render_notice(frame, app, notice_area);
    render_hints(frame, hint_area);
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        " signline | pose: {} | speech {} | overlay {} ",
        app.held_label().unwrap_or("none"),
        on_off(app.speech_enabled()),
        on_off(app.overlay_enabled()),
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let frame_data = app.frame();
    let mut lines: Vec<Line> = frame_data
        .transcript
        .iter()
        .map(|entry| Line::raw(entry.text.clone()))
        .collect();

    if !frame_data.buffer.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{}▏", frame_data.buffer.join(" ")),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the newest lines visible.
    let visible = area.height.saturating_sub(1) as usize;
    let skip = lines.len().saturating_sub(visible);

    let title = Span::styled(" transcript ", Style::default().fg(Color::DarkGray));
    let visible_lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    frame.render_widget(
        Paragraph::new(visible_lines)
            .block(Block::default().title(title))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_poses(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" poses ", Style::default().fg(Color::DarkGray)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = app
        .vocabulary()
        .iter()
        .enumerate()
        .take(9)
        .map(|(i, label)| {
            let style = if app.held_index() == Some(i) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(label.clone(), style),
            ])
        })
        .collect();

    lines.push(Line::from(vec![
        Span::styled("0 ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "no hand",
            if app.held_index().is_none() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(app.overlay.clone())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block),
        area,
    );
}

fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.notice.as_deref().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(format!(" {text}")).style(Style::default().fg(Color::Yellow)),
        area,
    );
}

fn render_hints(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
        area,
    );
}
