//! 首页视图：输入要打开的路由

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::text::tail;
use crate::view::theme::{colors, Styles};

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 首页布局：欢迎信息 + 输入框 + 示例
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 欢迎区域
            Constraint::Length(3), // 输入框
            Constraint::Length(2), // 错误
            Constraint::Min(1),    // 示例
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to Splice Admin",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Type a route and press Enter",
            Style::default().fg(c.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    // 边框 2 列 + 前导空格 + 光标
    let input_width = usize::from(layout[1].width).saturating_sub(4);
    let input = Paragraph::new(format!(" {}▎", tail(&app.home.input, input_width))).block(
        Block::default()
            .title(" Route ")
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(input, layout[1]);

    if let Some(error) = &app.home.error {
        frame.render_widget(
            Paragraph::new(format!(" {error}")).style(Styles::error()),
            layout[2],
        );
    }

    let examples = [
        ("/campaigns/{id}/adgroups/new", "New ad group in a campaign"),
        ("/adgroups/{id}", "Ad group details"),
        ("/adgroups/{id}/edit", "Edit an ad group"),
    ];
    let lines: Vec<Line> = examples
        .iter()
        .map(|(path, desc)| {
            Line::from(vec![
                Span::styled(format!("  {path:<32}"), Style::default().fg(c.fg)),
                Span::styled(*desc, Styles::label()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Routes ")
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        ),
        layout[3],
    );
}
