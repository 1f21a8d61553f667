//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use splice_admin_core::Route;

use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 提示横幅 + 主内容区 + 状态栏
    let banner_height = u16::from(app.notification.is_some());
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // 标题栏
            Constraint::Length(banner_height), // 提示横幅
            Constraint::Min(1),                // 主内容区
            Constraint::Length(1),             // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::notification::render(app, frame, main_layout[1]);
    render_page_content(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let text = format!(" Splice Admin v{}  {}", env!("CARGO_PKG_VERSION"), app.route());
    let title = Paragraph::new(text).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前路由渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let route = app.route();

    let title = if app.dirty && route.form_mode().is_some() {
        format!(" {} * ", route.title())
    } else {
        format!(" {} ", route.title())
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match route {
        Route::Home => pages::home::render(app, frame, inner_area),
        Route::NewAdgroup { .. } | Route::EditAdgroup { .. } => {
            pages::adgroup_form::render(app, frame, inner_area);
        }
        Route::AdgroupDetail { .. } => pages::adgroup_detail::render(app, frame, inner_area),
    }
}
