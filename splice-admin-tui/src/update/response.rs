//! 后台请求结果处理

use splice_admin_core::types::Notification;

use super::form;
use crate::backend::Command;
use crate::message::ResponseMessage;
use crate::model::App;

/// 处理后台返回的结果
pub fn update(app: &mut App, msg: ResponseMessage) -> Vec<Command> {
    match msg {
        ResponseMessage::ReferenceDataLoaded(result) => {
            app.reference.loading = false;
            match result {
                Ok(data) => {
                    app.reference.data = Some(data);
                    app.reference.error = None;
                }
                Err(e) => {
                    let text = format!("Failed to load form options: {e}");
                    app.reference.error = Some(e.to_string());
                    app.notify(Notification::error(text));
                }
            }
            Vec::new()
        }

        ResponseMessage::AdgroupLoaded { id, result } => {
            // 页面已经切走时丢弃过期的结果
            let for_detail = app.detail.awaits(id);
            let for_form = app.form.awaits(id);
            if !for_detail && !for_form {
                log::debug!("Dropping stale response for ad group {id}");
                return Vec::new();
            }

            match result {
                Ok(adgroup) => {
                    if for_form {
                        app.form.fill(&adgroup);
                    }
                    if for_detail {
                        app.detail.loaded(adgroup);
                    }
                }
                Err(e) => {
                    let message = e.to_string();
                    if for_form {
                        app.form.loading = false;
                        app.form.load_error = Some(message.clone());
                        // 加载失败后允许重新进入时再次加载
                        app.form.detach();
                    }
                    if for_detail {
                        app.detail.failed(message.clone());
                    }
                    app.notify(Notification::error(message));
                }
            }
            Vec::new()
        }

        ResponseMessage::SubmitFinished { mode, result } => form::finished(app, mode, result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::AppMessage;
    use crate::update::update as update_app;
    use splice_admin_core::types::{ApiError, ReferenceData};
    use splice_admin_core::{CoreError, Route};

    fn not_found(id: i64) -> CoreError {
        CoreError::Api(ApiError::NotFound {
            entity: "adgroup".into(),
            id: id.to_string(),
        })
    }

    #[test]
    fn reference_failure_notifies() {
        let mut app = App::default();
        app.reference.loading = true;
        update(
            &mut app,
            ResponseMessage::ReferenceDataLoaded(Err(CoreError::Api(ApiError::Timeout {
                endpoint: "GET /channels".into(),
                detail: "slow".into(),
            }))),
        );
        assert!(!app.reference.loading);
        assert!(app.reference.error.is_some());
        assert!(app.notification.as_ref().is_some_and(|n| n.is_error()));
    }

    #[test]
    fn reference_data_is_stored() {
        let mut app = App::default();
        update(&mut app, ResponseMessage::ReferenceDataLoaded(Ok(ReferenceData::default())));
        assert!(app.reference.data.is_some());
        assert!(app.notification.is_none());
    }

    #[test]
    fn stale_adgroup_is_ignored() {
        let mut app = App::default();
        update_app(&mut app, AppMessage::Navigate(Route::adgroup(1)));
        update_app(&mut app, AppMessage::Navigate(Route::adgroup(2)));

        update(
            &mut app,
            ResponseMessage::AdgroupLoaded {
                id: 1,
                result: Err(not_found(1)),
            },
        );
        assert!(app.detail.awaits(2));
        assert!(app.notification.is_none());
    }

    #[test]
    fn missing_adgroup_fails_edit_form() {
        let mut app = App::default();
        update_app(&mut app, AppMessage::Navigate(Route::EditAdgroup { id: 5 }));
        update(
            &mut app,
            ResponseMessage::AdgroupLoaded {
                id: 5,
                result: Err(not_found(5)),
            },
        );
        assert!(!app.form.loading);
        assert!(app.form.load_error.is_some());
        assert!(app.notification.is_some());
    }
}
