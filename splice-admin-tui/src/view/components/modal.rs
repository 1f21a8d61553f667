//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::event::DefaultKeymap;
use crate::model::{App, DiscardFocus, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDiscard { focus, .. } => render_confirm_discard(frame, *focus),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内边距后的区域
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染丢弃修改确认弹窗
fn render_confirm_discard(frame: &mut Frame, focus: DiscardFocus) {
    let c = colors();
    let area = centered_rect(46, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Unsaved Changes ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.surface));

    frame.render_widget(block, area);

    let cancel_style = if focus == DiscardFocus::Cancel {
        Style::default().fg(c.selected_fg).bg(c.highlight)
    } else {
        Style::default().fg(c.fg)
    };

    let discard_style = if focus == DiscardFocus::Discard {
        Style::default().fg(c.selected_fg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "  This form has unsaved changes.",
            Style::default().fg(c.fg),
        ),
        Line::styled(
            "  Leave and discard them?",
            Style::default().fg(c.warning),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Stay ", cancel_style),
            Span::raw("    "),
            Span::styled(" Discard ", discard_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let entries = DefaultKeymap::HELP_ENTRIES;
    let height = u16::try_from(entries.len()).unwrap_or(u16::MAX).saturating_add(11);
    let c = colors();
    let area = centered_rect(55, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.surface));

    frame.render_widget(block, area);

    let heading = Style::default().fg(c.highlight).add_modifier(Modifier::BOLD);
    let key_line = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Style::default().fg(c.warning)),
            Span::styled(desc.to_string(), Style::default().fg(c.fg)),
        ])
    };

    let mut lines = vec![Line::styled("Shortcuts", heading), Line::from("")];
    lines.extend(entries.iter().map(|b| key_line(b.label, b.description)));
    lines.push(Line::from(""));
    lines.push(Line::styled("Form", heading));
    lines.push(Line::from(""));
    lines.push(key_line("Tab/↑↓", "Next / previous field"));
    lines.push(key_line("←→", "Change option, move in categories"));
    lines.push(key_line("Space", "Toggle"));
    lines.push(key_line("Enter", "Submit"));

    frame.render_widget(Paragraph::new(lines), inner(area));
}
