use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use crate::error::BoardError;

/// The document move/up listener pair that lives exactly as long as one drag.
/// Dropping it removes both listeners.
pub struct DragSubscription {
    _on_move: EventListener,
    _on_up: EventListener,
}

impl DragSubscription {
    pub fn attach<M, U>(on_move: M, on_up: U) -> Result<Self, BoardError>
    where
        M: FnMut(&web_sys::MouseEvent) + 'static,
        U: FnMut(&web_sys::MouseEvent) + 'static,
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BoardError::DocumentUnavailable)?;

        Ok(Self {
            _on_move: mouse_listener(&document, "mousemove", on_move),
            _on_up: mouse_listener(&document, "mouseup", on_up),
        })
    }
}

fn mouse_listener<F>(document: &web_sys::Document, event: &'static str, mut handler: F) -> EventListener
where
    F: FnMut(&web_sys::MouseEvent) + 'static,
{
    EventListener::new(document, event, move |ev: &web_sys::Event| {
        if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
            handler(ev);
        }
    })
}
