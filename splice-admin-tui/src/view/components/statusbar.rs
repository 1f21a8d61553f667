//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use splice_admin_core::Route;

use crate::model::App;
use crate::view::theme::Styles;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    // 保存中显示 spinner
    if app.saving {
        let frame_index = app.tick % SPINNER.len();
        spans.push(Span::styled(
            format!(" {} Saving... ", SPINNER[frame_index]),
            Style::default().fg(Color::Yellow),
        ));
    } else if app.reference.loading {
        spans.push(Span::styled(
            " Loading options... ",
            Style::default().fg(Color::Yellow),
        ));
    }

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 || !spans.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前路由生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    match app.route() {
        Route::Home => {
            hints.push(("Enter", "Open route"));
        }
        Route::AdgroupDetail { .. } => {
            hints.push(("e", "Edit"));
            hints.push(("n", "New"));
            hints.push(("Esc", "Back"));
        }
        Route::NewAdgroup { .. } | Route::EditAdgroup { .. } => {
            hints.push(("Tab/↑↓", "Field"));
            hints.push(("←→", "Option"));
            hints.push(("Space", "Toggle"));
            hints.push(("Enter", "Submit"));
            hints.push(("Esc", "Back"));
        }
    }

    hints.push(("Alt+h", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}
