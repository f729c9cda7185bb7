//! Keyboard focus containment for open dialogs.
//!
//! While a dialog is open, Tab traversal wraps inside its surface and Escape
//! closes it. The element focused before the dialog opened is recorded and
//! focus returns to it on release, provided it is still in the document.
//!
//! Release handles live in a module-level registry keyed by dialog id and are
//! owned exclusively by `ModalStackService`: every close path goes through
//! `release`, and releasing an unknown id is a no-op.

use leptos::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

// One trap per open dialog. thread_local is fine: wasm runs single-threaded,
// and the traps hold JS listeners that must stay on this thread anyway.
thread_local! {
    static TRAPS: RefCell<HashMap<u64, FocusTrap>> = RefCell::new(HashMap::new());
}

/// Everything Tab can land on inside a dialog.
const FOCUSABLE_SELECTOR: &str =
    "a[href], button, textarea, input, select, [tabindex]:not([tabindex=\"-1\"])";

/// Where focus must jump when Tab is pressed, given the index of the active
/// element inside the focusable set. `None` means the browser's default
/// traversal already stays inside the dialog.
pub fn focus_wrap(active: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match active {
        Some(0) if shift => Some(len - 1),
        Some(i) if !shift && i == len - 1 => Some(0),
        // Focus outside the focusable set (e.g. on the surface itself):
        // push it back to an edge so traversal cannot escape the dialog.
        None if shift => Some(len - 1),
        None => Some(0),
        _ => None,
    }
}

fn focusable_elements(surface: &Element) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = surface.query_selector_all(FOCUSABLE_SELECTOR) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

fn active_element() -> Option<Element> {
    web_sys::window()?.document()?.active_element()
}

struct FocusTrap {
    surface: HtmlElement,
    listener: Closure<dyn FnMut(KeyboardEvent)>,
    restore_to: Option<HtmlElement>,
}

impl FocusTrap {
    fn new(surface: &HtmlElement, on_close: Callback<()>) -> Self {
        // Record the element to restore before moving focus into the dialog.
        let restore_to = active_element().and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let focusable = focusable_elements(surface);
        if let Some(first) = focusable.first() {
            let _ = first.focus();
        }

        let listener = Closure::wrap(Box::new({
            let surface: Element = surface.clone().into();
            move |event: KeyboardEvent| match event.key().as_str() {
                "Escape" => on_close.run(()),
                "Tab" => {
                    // Recomputed per keystroke: dialog content may change while open.
                    let focusable = focusable_elements(&surface);
                    let active_idx = active_element().and_then(|active| {
                        focusable.iter().position(|el| {
                            let el: &Element = el.as_ref();
                            *el == active
                        })
                    });
                    if let Some(target) = focus_wrap(active_idx, focusable.len(), event.shift_key())
                    {
                        event.prevent_default();
                        let _ = focusable[target].focus();
                    }
                }
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);

        let _ = surface
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());

        Self {
            surface: surface.clone(),
            listener,
            restore_to,
        }
    }
}

impl Drop for FocusTrap {
    fn drop(&mut self) {
        let _ = self
            .surface
            .remove_event_listener_with_callback("keydown", self.listener.as_ref().unchecked_ref());
        if let Some(el) = self.restore_to.take() {
            if el.is_connected() {
                let _ = el.focus();
            }
        }
    }
}

/// Install the trap for a dialog surface. Re-installing for the same id
/// re-captures the element focused at that moment.
pub fn install(dialog_id: u64, surface: &HtmlElement, on_close: Callback<()>) {
    // Drop any previous trap first so its restore target is not overwritten.
    release(dialog_id);
    let trap = FocusTrap::new(surface, on_close);
    TRAPS.with(|traps| {
        traps.borrow_mut().insert(dialog_id, trap);
    });
}

/// Release the trap for a dialog: removes its key listener and restores
/// focus. No-op for an id with no installed trap.
pub fn release(dialog_id: u64) {
    TRAPS.with(|traps| {
        traps.borrow_mut().remove(&dialog_id);
    });
}

/// Release every installed trap (used when the whole stack is cleared).
pub fn release_all() {
    TRAPS.with(|traps| {
        traps.borrow_mut().clear();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_on_last_wraps_forward() {
        assert_eq!(focus_wrap(Some(2), 3, false), Some(0));
    }

    #[test]
    fn test_shift_tab_on_first_wraps_backward() {
        assert_eq!(focus_wrap(Some(0), 3, true), Some(2));
    }

    #[test]
    fn test_middle_positions_use_default_traversal() {
        assert_eq!(focus_wrap(Some(1), 3, false), None);
        assert_eq!(focus_wrap(Some(1), 3, true), None);
        assert_eq!(focus_wrap(Some(2), 3, true), None);
    }

    #[test]
    fn test_single_element_wraps_onto_itself() {
        assert_eq!(focus_wrap(Some(0), 1, false), Some(0));
        assert_eq!(focus_wrap(Some(0), 1, true), Some(0));
    }

    #[test]
    fn test_no_focusable_elements_is_a_no_op() {
        assert_eq!(focus_wrap(None, 0, false), None);
        assert_eq!(focus_wrap(None, 0, true), None);
    }

    #[test]
    fn test_focus_outside_set_is_pushed_back_inside() {
        assert_eq!(focus_wrap(None, 3, false), Some(0));
        assert_eq!(focus_wrap(None, 3, true), Some(2));
    }

    #[test]
    fn test_release_of_unknown_dialog_is_a_noop() {
        // closing an already-closed dialog must not fail
        release(42);
        release(42);
        release_all();
    }
}
