use leptos::{component, view, IntoView, ChildrenFn, Callback, Callable, Signal, SignalGet, Show, Portal, store_value, on_cleanup, create_effect};
use leptos::web_sys::KeyboardEvent;
use wasm_bindgen::JsCast;
use std::rc::Rc;
use std::cell::RefCell;
use crate::components::modal_overlay::ModalOverlay;
use crate::constants::{CLOSE_BUTTON_CLASS, DISMISS_KEY, PANEL_CLASS};
use crate::mount_target::MountTarget;

type KeyListenerClosure = wasm_bindgen::closure::Closure<dyn Fn(KeyboardEvent)>;
type ListenerCleanup = Rc<RefCell<Option<KeyListenerClosure>>>;

fn add_key_listener(listener_cleanup: &ListenerCleanup, callback: impl Fn(KeyboardEvent) + 'static) {
    let Some(document) = leptos::web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(callback) as Box<dyn Fn(KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    *listener_cleanup.borrow_mut() = Some(closure);
}

fn remove_key_listener(listener_cleanup: &ListenerCleanup) {
    let Some(closure) = listener_cleanup.borrow_mut().take() else { return };
    let Some(document) = leptos::web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let _ = document.remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
}

/// Dismissible dialog rendered into `mount` instead of in place.
///
/// Nothing is mounted while `is_open` is false. Dismissal (close button,
/// backdrop click, `Escape`) only calls `on_close`; the owner decides
/// whether the modal actually closes.
#[component]
#[must_use]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    mount: MountTarget,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    let mount = store_value(mount);

    let listener_cleanup: ListenerCleanup = Rc::new(RefCell::new(None));

    create_effect({
        let listener_cleanup = listener_cleanup.clone();
        move |_| {
            remove_key_listener(&listener_cleanup);

            if is_open.get() {
                add_key_listener(&listener_cleanup, move |ev| {
                    if ev.key() == DISMISS_KEY {
                        on_close.call(());
                    }
                });
            }
        }
    });

    on_cleanup(move || remove_key_listener(&listener_cleanup));

    view! {
        <Show when=move || is_open.get()>
            <Portal mount=mount.with_value(|mount| mount.element().clone())>
                <ModalOverlay on_backdrop_click=on_close>
                    <div class=PANEL_CLASS role="dialog" aria-modal="true">
                        <button
                            class=CLOSE_BUTTON_CLASS
                            title="Close"
                            on:click=move |_| on_close.call(())
                        >
                            "×"
                        </button>
                        {children.with_value(|children| children())}
                    </div>
                </ModalOverlay>
            </Portal>
        </Show>
    }
}
