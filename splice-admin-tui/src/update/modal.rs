//! 弹窗更新逻辑

use super::navigation;
use crate::backend::Command;
use crate::message::ModalMessage;
use crate::model::{App, DiscardFocus, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Vec<Command> {
    let Some(modal) = app.modal.active.as_mut() else {
        return Vec::new();
    };

    match (modal, msg) {
        (_, ModalMessage::Close) => {
            app.modal.close();
            Vec::new()
        }

        (Modal::ConfirmDiscard { focus, .. }, ModalMessage::ToggleFocus) => {
            *focus = focus.toggle();
            Vec::new()
        }

        (Modal::ConfirmDiscard { pending, focus }, ModalMessage::Confirm) => {
            let pending = *pending;
            let focus = *focus;
            app.modal.close();
            if focus == DiscardFocus::Discard {
                navigation::discard_changes(app);
                navigation::perform(app, pending)
            } else {
                Vec::new()
            }
        }

        (Modal::Help, ModalMessage::Confirm) => {
            app.modal.close();
            Vec::new()
        }

        (Modal::Help, ModalMessage::ToggleFocus) => Vec::new(),
    }
}
