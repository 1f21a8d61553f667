//! Ad group 详情页

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use splice_admin_core::types::Adgroup;

use crate::model::App;
use crate::view::components::text::pad_right;
use crate::view::theme::{colors, Styles};

/// 渲染详情页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let detail = &app.detail;

    if detail.loading {
        frame.render_widget(Paragraph::new(" Loading...").style(Styles::label()), area);
        return;
    }
    if let Some(error) = &detail.error {
        let lines = vec![
            Line::from(""),
            Line::styled(format!(" {error}"), Styles::error()),
            Line::from(""),
            Line::styled(" Alt+r to retry", Styles::label()),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }
    let Some(adgroup) = &detail.adgroup else {
        return;
    };

    frame.render_widget(
        Paragraph::new(lines(app, adgroup)).wrap(Wrap { trim: false }),
        area,
    );
}

fn lines(app: &App, adgroup: &Adgroup) -> Vec<Line<'static>> {
    let c = colors();
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {}", pad_right(label, 22)), Styles::label()),
            Span::styled(value, Style::default().fg(c.fg)),
        ])
    };
    let or_dash = |v: Option<u32>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
    let yes_no = |b: bool| (if b { "yes" } else { "no" }).to_string();

    let mut lines = vec![
        Line::styled(
            format!(" {}", adgroup.name),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        row("Id", adgroup.id.to_string()),
        row("Campaign", adgroup.campaign_id.to_string()),
        row("Type", adgroup.kind.to_string()),
        row("Channel", app.reference.channel_label(adgroup.channel_id)),
        row("Locale", adgroup.locale.clone()),
    ];

    if adgroup.kind.is_targeted() {
        let categories = if adgroup.categories.is_empty() {
            "-".to_string()
        } else {
            adgroup.categories.iter().cloned().collect::<Vec<_>>().join(", ")
        };
        lines.push(row("Categories", categories));
        lines.push(row("Daily frequency cap", or_dash(adgroup.frequency_cap_daily)));
        lines.push(row("Total frequency cap", or_dash(adgroup.frequency_cap_total)));
    }

    lines.push(row("Check inadjacency", yes_no(adgroup.check_inadjacency)));
    lines.push(row("Paused", yes_no(adgroup.paused)));
    lines.push(row(
        "Explanation",
        adgroup.explanation.clone().unwrap_or_else(|| "-".to_string()),
    ));
    if let Some(created_at) = adgroup.created_at {
        let local = created_at.with_timezone(&chrono::Local);
        lines.push(row("Created", local.format("%Y-%m-%d %H:%M").to_string()));
    }

    lines
}
