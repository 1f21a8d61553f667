//! 首页更新逻辑

use std::str::FromStr;

use splice_admin_core::Route;

use super::navigation;
use crate::backend::Command;
use crate::message::HomeMessage;
use crate::model::{App, PendingAction};

/// 处理首页消息
pub fn update(app: &mut App, msg: HomeMessage) -> Vec<Command> {
    match msg {
        HomeMessage::Input(c) => {
            app.home.input.push(c);
            app.home.error = None;
            Vec::new()
        }
        HomeMessage::Backspace => {
            app.home.input.pop();
            app.home.error = None;
            Vec::new()
        }
        HomeMessage::Confirm => match Route::from_str(app.home.input.trim()) {
            Ok(route) => {
                app.home.input.clear();
                navigation::request(app, PendingAction::Navigate(route))
            }
            Err(e) => {
                app.home.error = Some(e.to_string());
                Vec::new()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_route(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, HomeMessage::Input(c));
        }
    }

    #[test]
    fn confirm_opens_typed_route() {
        let mut app = App::default();
        type_route(&mut app, "/adgroups/12/edit");
        let cmds = update(&mut app, HomeMessage::Confirm);

        assert_eq!(app.route(), Route::EditAdgroup { id: 12 });
        assert_eq!(cmds, vec![Command::LoadAdgroup(12)]);
        assert!(app.home.input.is_empty());
    }

    #[test]
    fn unknown_route_shows_error() {
        let mut app = App::default();
        type_route(&mut app, "/nowhere");
        let cmds = update(&mut app, HomeMessage::Confirm);

        assert!(cmds.is_empty());
        assert_eq!(app.route(), Route::Home);
        assert!(app.home.error.is_some());

        update(&mut app, HomeMessage::Backspace);
        assert!(app.home.error.is_none());
    }
}
