//! 快捷键配置
//!
//! 表单页面要接收普通字符输入，所以全局快捷键都带 Alt/Ctrl 修饰键

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
    /// 帮助弹窗中显示的按键名
    pub label: &'static str,
    /// 帮助弹窗中显示的说明
    pub description: &'static str,
}

impl KeyBinding {
    pub const fn new(
        modifiers: KeyModifiers,
        code: KeyCode,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            modifiers,
            code,
            label,
            description,
        }
    }

    pub const fn key(code: KeyCode, label: &'static str, description: &'static str) -> Self {
        Self::new(KeyModifiers::NONE, code, label, description)
    }

    pub const fn alt(code: KeyCode, label: &'static str, description: &'static str) -> Self {
        Self::new(KeyModifiers::ALT, code, label, description)
    }

    pub const fn ctrl(code: KeyCode, label: &'static str, description: &'static str) -> Self {
        Self::new(KeyModifiers::CONTROL, code, label, description)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'), "Alt+q", "Quit");
    pub const FORCE_QUIT: KeyBinding =
        KeyBinding::ctrl(KeyCode::Char('c'), "Ctrl+c", "Quit without asking");
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'), "Alt+h", "Help");
    pub const REFRESH: KeyBinding =
        KeyBinding::alt(KeyCode::Char('r'), "Alt+r", "Reload options / record");
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc, "Esc", "Back");

    // 详情页
    pub const EDIT: KeyBinding = KeyBinding::key(KeyCode::Char('e'), "e", "Edit ad group");
    pub const NEW: KeyBinding =
        KeyBinding::key(KeyCode::Char('n'), "n", "New ad group in this campaign");

    // 表单
    pub const SUBMIT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'), "Alt+s", "Submit");

    /// 帮助弹窗中列出的快捷键
    pub const HELP_ENTRIES: &'static [KeyBinding] = &[
        Self::QUIT,
        Self::FORCE_QUIT,
        Self::HELP,
        Self::REFRESH,
        Self::BACK,
        Self::EDIT,
        Self::NEW,
        Self::SUBMIT,
    ];
}
