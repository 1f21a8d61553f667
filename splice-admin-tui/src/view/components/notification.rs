//! 顶部提示横幅

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use splice_admin_core::types::Severity;

use crate::model::App;
use crate::view::theme::colors;

/// 渲染成功/错误提示（没有提示时区域高度为 0）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(notification) = &app.notification else {
        return;
    };

    let c = colors();
    let (icon, bg) = match notification.severity {
        Severity::Success => ("✓", c.success),
        Severity::Error => ("✗", c.error),
    };

    let banner = Paragraph::new(format!(" {icon} {}", notification.text)).style(
        Style::default()
            .bg(bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(banner, area);
}
