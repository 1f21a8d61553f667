//! Ad group 表单页
//!
//! 每个字段占一块：标签行、值行、可选的错误行。
//! 字段按 `form.scroll` 起始显示；焦点落在视口下方时视图自行下移。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use splice_admin_core::form::FieldId;
use splice_admin_core::types::FormMode;

use crate::model::{AdgroupFormState, App};
use crate::view::components::text::tail;
use crate::view::theme::{colors, Styles};

/// 渲染表单页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form = &app.form;
    let Some(mode) = form.mode else {
        return;
    };

    if form.loading {
        frame.render_widget(Paragraph::new(" Loading ad group...").style(Styles::label()), area);
        return;
    }
    if let Some(error) = &form.load_error {
        let lines = vec![
            Line::from(""),
            Line::styled(format!(" {error}"), Styles::error()),
            Line::from(""),
            Line::styled(" Esc to go back", Styles::label()),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 字段
            Constraint::Length(2), // 提交按钮
        ])
        .split(area);

    render_fields(app, frame, layout[0]);
    render_submit(app, mode, frame, layout[1]);
}

/// 渲染可见字段（从滚动位置开始）
fn render_fields(app: &App, frame: &mut Frame, area: Rect) {
    let form = &app.form;
    let fields = form.visible_fields();
    let blocks: Vec<Vec<Line>> = fields
        .iter()
        .map(|f| field_block(app, *f, usize::from(area.width)))
        .collect();

    let start = first_visible(form, &fields, &blocks, area.height as usize);
    let mut lines = Vec::new();
    for block in blocks.into_iter().skip(start) {
        lines.extend(block);
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// 起始字段：不小于 `form.scroll`，且保证焦点字段完整可见
fn first_visible(
    form: &AdgroupFormState,
    fields: &[FieldId],
    blocks: &[Vec<Line>],
    height: usize,
) -> usize {
    let mut start = form.scroll.min(fields.len().saturating_sub(1));
    let Some(focus) = fields.iter().position(|f| *f == form.focus) else {
        return start;
    };
    if focus < start {
        return focus;
    }
    let used = |from: usize| -> usize { blocks[from..=focus].iter().map(Vec::len).sum() };
    while start < focus && used(start) > height {
        start += 1;
    }
    start
}

/// 一个字段的显示行
fn field_block(app: &App, field: FieldId, width: usize) -> Vec<Line<'static>> {
    let form = &app.form;
    let c = colors();
    let focused = form.focus == field;
    let editable = form.is_editable(field);

    let marker = if focused { "▶ " } else { "  " };
    let mut label = vec![
        Span::styled(marker, Style::default().fg(c.highlight)),
        Span::styled(
            field.label().to_string(),
            if focused {
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
            } else {
                Styles::label()
            },
        ),
    ];
    if !editable {
        label.push(Span::styled(" (locked)", Styles::label()));
    }

    let value_style = if focused {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };

    let mut lines = vec![Line::from(label)];
    lines.extend(value_lines(app, field, focused, value_style, width));

    if let Some(error) = form.errors.get(field) {
        lines.push(Line::styled(format!("    {error}"), Styles::error()));
    }
    lines.push(Line::from(""));
    lines
}

/// 字段值
fn value_lines(
    app: &App,
    field: FieldId,
    focused: bool,
    style: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let form = &app.form;
    let draft = &form.draft;
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    let line = |text: String| vec![Line::from(vec![Span::raw("    "), Span::styled(text, style)])];

    match field {
        FieldId::Name
        | FieldId::FrequencyCapDaily
        | FieldId::FrequencyCapTotal
        | FieldId::Explanation => {
            let text = draft.text(field).unwrap_or_default();
            let cursor = if focused { "▎" } else { "" };
            // 缩进 4 列 + 光标
            line(format!("{}{cursor}", tail(text, width.saturating_sub(5))))
        }
        FieldId::Type => line(format!("{} {}", check(!draft.kind.is_targeted()), draft.kind)),
        FieldId::Channel => line(selector(
            app,
            draft.channel_id.map(|id| app.reference.channel_label(id)),
            focused && form.is_editable(field),
        )),
        FieldId::Locale => line(selector(
            app,
            draft.locale.clone(),
            focused && form.is_editable(field),
        )),
        FieldId::Categories => category_lines(app, focused),
        FieldId::CheckInadjacency => line(check(draft.check_inadjacency).to_string()),
        FieldId::Paused => line(check(draft.paused).to_string()),
    }
}

/// 单选器：未加载参考数据时显示 loading
fn selector(app: &App, value: Option<String>, active: bool) -> String {
    let text = match value {
        Some(v) => v,
        None if app.reference.loading => "loading...".to_string(),
        None => "(none)".to_string(),
    };
    if active {
        format!("◀ {text} ▶")
    } else {
        text
    }
}

/// 分类多选：每个选项一个勾选框，光标所在项高亮
fn category_lines(app: &App, focused: bool) -> Vec<Line<'static>> {
    let form = &app.form;
    let options = form.category_options(app.reference.categories());
    if options.is_empty() {
        let text = if app.reference.loading { "loading..." } else { "(no categories)" };
        return vec![Line::styled(format!("    {text}"), Styles::label())];
    }

    let c = colors();
    options
        .into_iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if form.draft.categories.contains(&option) { "[x]" } else { "[ ]" };
            let style = if focused && i == form.category_cursor {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{mark} {option}"), style),
            ])
        })
        .collect()
}

/// 提交按钮
fn render_submit(app: &App, mode: FormMode, frame: &mut Frame, area: Rect) {
    let c = colors();
    let button = if app.saving {
        Span::styled(" Saving... ", Style::default().fg(c.muted))
    } else {
        Span::styled(
            format!(" {} ", mode.action_label()),
            Style::default()
                .bg(c.highlight)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
    };
    let line = Line::from(vec![
        Span::raw("  "),
        button,
        Span::styled("  Enter / Alt+s", Styles::label()),
    ]);
    frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
}
