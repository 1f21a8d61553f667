//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 设置当前主题（启动时按配置调用一次）
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// 弹窗底色
    pub surface: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            surface: Color::Rgb(24, 27, 33),
            fg: Color::Rgb(220, 223, 228),
            border: Color::Rgb(70, 76, 88),
            border_focused: Color::Rgb(86, 182, 194),
            highlight: Color::Rgb(86, 182, 194),
            selected_bg: Color::Rgb(44, 62, 80),
            selected_fg: Color::Rgb(16, 18, 22),
            success: Color::Rgb(152, 195, 121),
            warning: Color::Rgb(229, 192, 123),
            error: Color::Rgb(224, 108, 117),
            muted: Color::Rgb(127, 132, 142),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            surface: Color::Rgb(245, 246, 248),
            fg: Color::Rgb(40, 44, 52),
            border: Color::Rgb(196, 200, 208),
            border_focused: Color::Rgb(1, 132, 188),
            highlight: Color::Rgb(1, 132, 188),
            selected_bg: Color::Rgb(214, 234, 248),
            selected_fg: Color::Rgb(255, 255, 255),
            success: Color::Rgb(80, 161, 79),
            warning: Color::Rgb(193, 132, 1),
            error: Color::Rgb(202, 18, 67),
            muted: Color::Rgb(120, 124, 132),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 普通边框样式
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// 焦点边框样式
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 字段标签
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }

    /// 错误文本
    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }
}
