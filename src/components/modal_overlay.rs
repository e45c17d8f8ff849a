use leptos::{component, view, IntoView, Children, Callback, Callable, create_node_ref, html, store_value, NodeRef};
use leptos::web_sys::{EventTarget, MouseEvent};
use crate::constants::OVERLAY_CLASS;

fn targets_overlay(overlay_ref: NodeRef<html::Div>, ev: &MouseEvent) -> bool {
    let Some(overlay) = overlay_ref.get_untracked() else { return false };
    let Some(target) = ev.target() else { return false };
    let overlay: &EventTarget = &overlay;
    *overlay == target
}

/// Full-screen backdrop behind the modal panel.
///
/// `on_backdrop_click` fires only for clicks that land on the backdrop
/// itself, not for clicks that bubble up from the children. A press that
/// starts inside the panel and is released over the backdrop (e.g. a text
/// selection drag) does not count either.
#[component]
#[must_use]
pub fn ModalOverlay(
    #[prop(into)] on_backdrop_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let overlay_ref = create_node_ref::<html::Div>();
    // None when no mousedown preceded the click (keyboard or scripted clicks)
    let pressed_on_overlay = store_value(None::<bool>);

    let handle_mouse_down = move |ev: MouseEvent| {
        pressed_on_overlay.set_value(Some(targets_overlay(overlay_ref, &ev)));
    };

    let handle_click = move |ev: MouseEvent| {
        let started_on_overlay = pressed_on_overlay.get_value().unwrap_or(true);
        pressed_on_overlay.set_value(None);
        if started_on_overlay && targets_overlay(overlay_ref, &ev) {
            on_backdrop_click.call(());
        }
    };

    view! {
        <div
            class=OVERLAY_CLASS
            node_ref=overlay_ref
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            {children()}
        </div>
    }
}
