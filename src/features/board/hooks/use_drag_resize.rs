use leptos::prelude::*;
use crate::features::board::services::{DragSession, DragSubscription};
use crate::models::CardSize;

#[derive(Clone, Copy)]
pub struct DragResizeHook {
    pub resizing: ReadSignal<bool>,
    /// Mouse-down handler for the resize handle
    pub start: Callback<web_sys::MouseEvent>,
}

/// Tracks a drag on a card's handle and reports the grown size on every move.
///
/// Document listeners exist only between mouse-down and mouse-up. They are
/// also released if the card is torn down mid-drag.
pub fn use_drag_resize(
    width: Signal<i32>,
    height: Signal<i32>,
    on_resize: Callback<CardSize>,
) -> DragResizeHook {
    let session = StoredValue::new_local(DragSession::<DragSubscription>::default());
    let (resizing, set_resizing) = signal(false);

    let release = move || {
        session.try_update_value(|s| s.release());
        set_resizing.set(false);
    };

    let start = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();

        let on_move = move |ev: &web_sys::MouseEvent| {
            let current = CardSize::new(width.get_untracked(), height.get_untracked());
            let resized = session
                .try_update_value(|s| s.resize_to(ev.client_x(), ev.client_y(), current))
                .flatten();
            if let Some(size) = resized {
                on_resize.run(size);
            }
        };

        match DragSubscription::attach(on_move, move |_| release()) {
            Ok(sub) => {
                session.update_value(|s| s.press(ev.client_x(), ev.client_y(), sub));
                set_resizing.set(true);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to start resize: {}", e).into());
                release();
            }
        }
    });

    on_cleanup(move || {
        if session.try_update_value(|s| s.release()).unwrap_or(false) {
            web_sys::console::log_1(&"Resize ended by card teardown".into());
        }
    });

    DragResizeHook {
        resizing,
        start,
    }
}
