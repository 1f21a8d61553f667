//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use splice_admin_core::Route;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, HomeMessage, ModalMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::ForceQuit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // 根据当前页面处理按键
    match app.route() {
        Route::Home => handle_home_keys(key),
        Route::AdgroupDetail { id } => handle_detail_keys(key, id, app),
        Route::NewAdgroup { .. } | Route::EditAdgroup { .. } => handle_form_keys(key, app),
    }
}

/// 处理首页（路由输入框）的按键
fn handle_home_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Home(HomeMessage::Confirm),
        KeyCode::Backspace => AppMessage::Home(HomeMessage::Backspace),
        KeyCode::Char(ch) if is_plain(&key) => AppMessage::Home(HomeMessage::Input(ch)),
        _ => AppMessage::Noop,
    }
}

/// 处理详情页的按键
fn handle_detail_keys(key: KeyEvent, id: i64, app: &App) -> AppMessage {
    if DefaultKeymap::EDIT.matches(&key) {
        return AppMessage::Navigate(Route::EditAdgroup { id });
    }
    if DefaultKeymap::NEW.matches(&key) {
        // 需要已加载的记录才知道所属 campaign
        return match &app.detail.adgroup {
            Some(adgroup) => AppMessage::Navigate(Route::NewAdgroup {
                campaign_id: adgroup.campaign_id,
            }),
            None => AppMessage::Noop,
        };
    }
    AppMessage::Noop
}

/// 处理表单页的按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    let msg = match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => FormMessage::NextField,
        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => FormMessage::PrevField,
        // ← →: 选择器切换选项
        KeyCode::Left => FormMessage::PrevOption,
        KeyCode::Right => FormMessage::NextOption,
        KeyCode::Enter => FormMessage::Submit,
        KeyCode::Backspace => FormMessage::Backspace,
        // 空格：文本字段中是输入，其余字段是切换
        KeyCode::Char(' ') if is_plain(&key) => {
            if app.form.focus.is_text() {
                FormMessage::Input(' ')
            } else {
                FormMessage::Toggle
            }
        }
        KeyCode::Char(ch) if is_plain(&key) => FormMessage::Input(ch),
        _ => return AppMessage::Noop,
    };
    AppMessage::Form(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 没有修饰键（Shift 用于输入大写字母，也算普通输入）
fn is_plain(key: &KeyEvent) -> bool {
    key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use splice_admin_core::form::FieldId;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(ch: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::ALT))
    }

    fn form_app() -> App {
        let mut app = App::new(Route::NewAdgroup { campaign_id: 1 });
        app.form.reconcile(splice_admin_core::types::FormMode::Create { campaign_id: 1 });
        app
    }

    #[test]
    fn plain_q_is_text_on_form() {
        let app = form_app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Form(FormMessage::Input('q'))
        ));
        assert!(matches!(handle_event(alt('q'), &app), AppMessage::Quit));
    }

    #[test]
    fn space_toggles_non_text_fields() {
        let mut app = form_app();
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Form(FormMessage::Input(' '))
        ));

        app.form.focus = FieldId::CheckInadjacency;
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Form(FormMessage::Toggle)
        ));
    }

    #[test]
    fn shifted_letters_are_input() {
        let app = form_app();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert!(matches!(
            handle_event(event, &app),
            AppMessage::Form(FormMessage::Input('S'))
        ));
    }

    #[test]
    fn modal_captures_keys() {
        let mut app = form_app();
        app.modal.show_help();
        assert!(matches!(
            handle_event(press(KeyCode::Char('x')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::ForceQuit));
    }

    #[test]
    fn detail_page_shortcuts() {
        let app = App::new(Route::adgroup(4));
        assert!(matches!(
            handle_event(press(KeyCode::Char('e')), &app),
            AppMessage::Navigate(Route::EditAdgroup { id: 4 })
        ));
        // 记录未加载时无法新建
        assert!(matches!(
            handle_event(press(KeyCode::Char('n')), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
