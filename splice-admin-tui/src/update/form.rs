//! 表单更新逻辑：编辑、提交、提交结果

use splice_admin_core::form::{FieldChange, FieldId};
use splice_admin_core::types::{FormMode, Notification, SavedEntity};
use splice_admin_core::{CoreError, Route};

use super::navigation;
use crate::backend::Command;
use crate::message::FormMessage;
use crate::model::App;

/// 校验失败时的提示
const CORRECT_FIELDS: &str = "Please correct the highlighted fields";

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Vec<Command> {
    // 只在当前页面就是已绑定的表单且数据就绪时响应
    let Some(mode) = app.route().form_mode() else {
        return Vec::new();
    };
    if app.form.mode != Some(mode) || app.form.loading || app.form.load_error.is_some() {
        return Vec::new();
    }
    // 保存中只允许移动焦点，草稿保持提交时的内容
    if app.saving && !matches!(msg, FormMessage::NextField | FormMessage::PrevField) {
        return Vec::new();
    }

    match msg {
        FormMessage::NextField => app.form.focus_next(),
        FormMessage::PrevField => app.form.focus_prev(),
        FormMessage::Input(c) => edit_text(app, |text| text.push(c)),
        FormMessage::Backspace => edit_text(app, |text| {
            text.pop();
        }),
        FormMessage::PrevOption => select_option(app, -1),
        FormMessage::NextOption => select_option(app, 1),
        FormMessage::Toggle => toggle(app),
        FormMessage::Submit => return submit(app, mode),
    }
    Vec::new()
}

/// 修改焦点所在的文本字段
fn edit_text(app: &mut App, edit: impl FnOnce(&mut String)) {
    let field = app.form.focus;
    let Some(current) = app.form.draft.text(field) else {
        return;
    };
    let mut text = current.to_string();
    edit(&mut text);
    if let Some(change) = FieldChange::text(field, text) {
        apply(app, change);
    }
}

/// ←/→：循环选择器，或移动分类光标
fn select_option(app: &mut App, delta: isize) {
    match app.form.focus {
        FieldId::Channel => {
            if let Some(id) = app.form.cycle_channel(app.reference.channels(), delta) {
                apply(app, FieldChange::Channel(Some(id)));
            }
        }
        FieldId::Locale => {
            if let Some(locale) = app.form.cycle_locale(app.reference.locales(), delta) {
                apply(app, FieldChange::Locale(Some(locale)));
            }
        }
        FieldId::Categories => {
            let count = app.form.category_options(app.reference.categories()).len();
            app.form.move_category_cursor(delta, count);
        }
        FieldId::Type => apply(app, FieldChange::ToggleType),
        _ => {}
    }
}

/// Space：切换布尔值、类型或光标下的分类
fn toggle(app: &mut App) {
    let change = match app.form.focus {
        FieldId::Type => FieldChange::ToggleType,
        FieldId::CheckInadjacency => FieldChange::ToggleCheckInadjacency,
        FieldId::Paused => FieldChange::TogglePaused,
        FieldId::Categories => {
            let options = app.form.category_options(app.reference.categories());
            match options.into_iter().nth(app.form.category_cursor) {
                Some(category) => FieldChange::ToggleCategory(category),
                None => return,
            }
        }
        _ => return,
    };
    apply(app, change);
}

/// 应用一次编辑；草稿真正变化时发出 changed 信号
fn apply(app: &mut App, change: FieldChange) {
    // 隐藏或锁定的字段不接受编辑
    if !app.form.focusable_fields().contains(&change.field()) {
        return;
    }
    if app.form.draft.apply(change) && app.mark_dirty() {
        log::debug!("Form on {} changed", app.route());
    }
}

/// 提交：校验通过时返回一个 Submit 命令
fn submit(app: &mut App, mode: FormMode) -> Vec<Command> {
    match app.form.draft.to_payload(mode) {
        Ok(payload) => {
            app.form.errors = Default::default();
            app.saving = true;
            vec![Command::Submit { mode, payload }]
        }
        Err(CoreError::Validation(errors)) => {
            let first = errors.first_field();
            log::debug!("Submit blocked: {errors}");
            app.form.errors = errors;
            notify_error(app, CORRECT_FIELDS);
            app.form.scroll_to_top(first);
            Vec::new()
        }
        Err(e) => {
            notify_error(app, e.to_string());
            Vec::new()
        }
    }
}

/// 提交完成
pub fn finished(
    app: &mut App,
    mode: FormMode,
    result: Result<SavedEntity, CoreError>,
) -> Vec<Command> {
    app.saving = false;
    // 保存期间用户可能已放弃这张表单
    let bound = app.form.bindings.identity() == Some(mode);

    match result {
        Ok(saved) => {
            app.notify(Notification::success(mode.success_message()));
            if !bound {
                log::debug!("Ad group {} saved after its form was left", saved.id);
                return Vec::new();
            }
            app.dirty = false;
            app.form.detach();

            let route = Route::adgroup(saved.id);
            app.history.push(route);
            navigation::enter(app, route)
        }
        Err(e) => {
            notify_error(app, e.to_string());
            // 提示在页面顶部，滚回去让用户看到
            if bound {
                app.form.scroll_to_top(None);
            }
            Vec::new()
        }
    }
}

/// 错误提示立即标记为已显示：下一个操作（如修正字段）就会清除它
fn notify_error(app: &mut App, text: impl Into<String>) {
    let mut notification = Notification::error(text);
    notification.mark_shown();
    app.notify(notification);
}
