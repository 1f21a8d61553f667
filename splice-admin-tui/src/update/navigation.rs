//! 路由更新逻辑

use splice_admin_core::types::FormMode;
use splice_admin_core::Route;

use crate::backend::Command;
use crate::model::{App, PendingAction};

/// 请求离开当前页面
///
/// 当前表单有未保存的修改时先弹出确认框，否则立即执行。
pub fn request(app: &mut App, action: PendingAction) -> Vec<Command> {
    match action {
        PendingAction::Navigate(route) if route == app.route() => return Vec::new(),
        PendingAction::Back if !app.history.can_go_back() => return Vec::new(),
        _ => {}
    }

    if app.has_unsaved_form() {
        app.modal.show_confirm_discard(action);
        return Vec::new();
    }

    perform(app, action)
}

/// 执行离开操作（不再检查未保存修改）
pub fn perform(app: &mut App, action: PendingAction) -> Vec<Command> {
    match action {
        PendingAction::Navigate(route) => {
            app.history.push(route);
            enter(app, route)
        }
        PendingAction::Back => match app.history.pop() {
            Some(route) => enter(app, route),
            None => Vec::new(),
        },
        PendingAction::Quit => {
            app.should_quit = true;
            Vec::new()
        }
    }
}

/// 丢弃表单中的修改
pub fn discard_changes(app: &mut App) {
    log::debug!("Discarding unsaved changes on {}", app.route());
    app.dirty = false;
    app.form.detach();
}

/// 进入路由：绑定表单或加载数据
pub fn enter(app: &mut App, route: Route) -> Vec<Command> {
    log::debug!("Entering {route}");

    match route {
        Route::Home => {
            app.home.error = None;
            Vec::new()
        }
        Route::NewAdgroup { campaign_id } => {
            app.form.reconcile(FormMode::Create { campaign_id });
            Vec::new()
        }
        Route::EditAdgroup { id } => {
            if app.form.reconcile(FormMode::Edit { id }) {
                vec![Command::LoadAdgroup(id)]
            } else {
                Vec::new()
            }
        }
        Route::AdgroupDetail { id } => {
            app.detail.begin_load(id);
            vec![Command::LoadAdgroup(id)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Modal;

    #[test]
    fn entering_edit_route_loads_once() {
        let mut app = App::default();
        let cmds = request(&mut app, PendingAction::Navigate(Route::EditAdgroup { id: 4 }));
        assert_eq!(cmds, vec![Command::LoadAdgroup(4)]);
        assert!(app.form.loading);

        // 返回再进入：绑定未变，不重复加载
        request(&mut app, PendingAction::Back);
        let cmds = request(&mut app, PendingAction::Navigate(Route::EditAdgroup { id: 4 }));
        assert!(cmds.is_empty());
    }

    #[test]
    fn entering_detail_route_always_loads() {
        let mut app = App::default();
        let cmds = request(&mut app, PendingAction::Navigate(Route::adgroup(8)));
        assert_eq!(cmds, vec![Command::LoadAdgroup(8)]);
        assert!(app.detail.awaits(8));
    }

    #[test]
    fn leaving_dirty_form_asks_first() {
        let mut app = App::default();
        request(&mut app, PendingAction::Navigate(Route::NewAdgroup { campaign_id: 1 }));
        app.mark_dirty();

        let cmds = request(&mut app, PendingAction::Back);
        assert!(cmds.is_empty());
        assert_eq!(app.route(), Route::NewAdgroup { campaign_id: 1 });
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmDiscard {
                pending: PendingAction::Back,
                ..
            })
        ));
    }

    #[test]
    fn leaving_clean_form_is_immediate() {
        let mut app = App::default();
        request(&mut app, PendingAction::Navigate(Route::NewAdgroup { campaign_id: 1 }));
        request(&mut app, PendingAction::Back);
        assert_eq!(app.route(), Route::Home);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn back_on_first_page_does_nothing() {
        let mut app = App::default();
        assert!(request(&mut app, PendingAction::Back).is_empty());
        assert_eq!(app.route(), Route::Home);
    }

    #[test]
    fn quit_with_unsaved_changes_asks_first() {
        let mut app = App::new(Route::NewAdgroup { campaign_id: 2 });
        enter(&mut app, Route::NewAdgroup { campaign_id: 2 });
        app.mark_dirty();

        request(&mut app, PendingAction::Quit);
        assert!(!app.should_quit);
        assert!(app.modal.is_open());
    }
}
