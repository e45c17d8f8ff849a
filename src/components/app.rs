use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Title};
use crate::components::modal::Modal;
use crate::constants::{MODAL_BODY, MODAL_HEADING, OPEN_BUTTON_LABEL, PAGE_TITLE, TRIGGER_CLASS};
use crate::modal_state::ModalControls;
use crate::mount_target::MountTarget;

#[component]
pub fn App(mount_target: MountTarget) -> impl IntoView {
    provide_meta_context();

    let controls = ModalControls::new();

    view! {
        <Title text=PAGE_TITLE/>

        <div class="app">
            <h1>{PAGE_TITLE}</h1>
            <button class=TRIGGER_CLASS on:click=move |_| controls.open()>
                {OPEN_BUTTON_LABEL}
            </button>
            <Modal
                is_open=controls.is_open()
                on_close=move |()| controls.close()
                mount=mount_target
            >
                <h2>{MODAL_HEADING}</h2>
                <p>{MODAL_BODY}</p>
            </Modal>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::constants::{CLOSE_BUTTON_CLASS, DISMISS_KEY, OVERLAY_CLASS, PANEL_CLASS};
    use leptos::web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct Fixture {
        host: HtmlElement,
        modal_root: Element,
    }

    impl Fixture {
        /// Mounts the app into a fresh host with a separate modal root, both
        /// attached directly to the body.
        fn mount() -> Self {
            let document = leptos::document();
            let body = document.body().unwrap();

            let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
            let modal_root = document.create_element("div").unwrap();
            body.append_child(&host).unwrap();
            body.append_child(&modal_root).unwrap();

            let mount_target = MountTarget::from_element(modal_root.clone());
            leptos::mount_to(host.clone(), move || view! { <App mount_target=mount_target/> });

            Self { host, modal_root }
        }

        fn click(&self, root: &Element, selector: &str) {
            let element: HtmlElement = root
                .query_selector(selector)
                .unwrap()
                .unwrap_or_else(|| panic!("no element matches {selector}"))
                .unchecked_into();
            element.click();
        }

        fn open(&self) {
            self.click(&self.host, &format!(".{TRIGGER_CLASS}"));
        }

        fn heading_count(&self, root: &Element) -> u32 {
            root.query_selector_all("h2").unwrap().length()
        }

        fn modal_html(&self) -> String {
            self.modal_root.inner_html()
        }

        fn is_showing(&self) -> bool {
            self.modal_root.text_content().unwrap_or_default().contains(MODAL_HEADING)
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            self.host.remove();
            self.modal_root.remove();
        }
    }

    fn press_key(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        leptos::document().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_initially_closed() {
        let fixture = Fixture::mount();
        assert!(!fixture.is_showing());
        assert_eq!(fixture.heading_count(&fixture.modal_root), 0);
        assert!(!fixture.host.inner_html().contains(MODAL_HEADING));
    }

    #[wasm_bindgen_test]
    fn test_open_mounts_content_outside_container() {
        let fixture = Fixture::mount();
        fixture.open();

        assert!(fixture.is_showing());
        assert!(fixture.modal_html().contains(MODAL_BODY));
        assert!(!fixture.host.inner_html().contains(MODAL_HEADING));
    }

    #[wasm_bindgen_test]
    fn test_close_button_dismisses() {
        let fixture = Fixture::mount();
        fixture.open();

        fixture.click(&fixture.modal_root, &format!(".{CLOSE_BUTTON_CLASS}"));
        assert!(!fixture.is_showing());
        assert_eq!(fixture.heading_count(&fixture.modal_root), 0);
    }

    #[wasm_bindgen_test]
    fn test_backdrop_click_dismisses() {
        let fixture = Fixture::mount();
        fixture.open();

        fixture.click(&fixture.modal_root, &format!(".{OVERLAY_CLASS}"));
        assert!(!fixture.is_showing());
    }

    #[wasm_bindgen_test]
    fn test_click_inside_panel_keeps_modal_open() {
        let fixture = Fixture::mount();
        fixture.open();

        fixture.click(&fixture.modal_root, &format!(".{PANEL_CLASS} p"));
        assert!(fixture.is_showing());
    }

    #[wasm_bindgen_test]
    fn test_escape_dismisses() {
        let fixture = Fixture::mount();
        fixture.open();

        press_key("Enter");
        assert!(fixture.is_showing());

        press_key(DISMISS_KEY);
        assert!(!fixture.is_showing());
    }

    #[wasm_bindgen_test]
    fn test_double_open_mounts_once() {
        let fixture = Fixture::mount();
        fixture.open();
        fixture.open();

        assert_eq!(fixture.heading_count(&fixture.modal_root), 1);
    }

    #[wasm_bindgen_test]
    fn test_reopen_renders_identical_content() {
        let fixture = Fixture::mount();
        fixture.open();
        let first = fixture.modal_html();

        fixture.click(&fixture.modal_root, &format!(".{CLOSE_BUTTON_CLASS}"));
        assert!(!fixture.is_showing());

        fixture.open();
        assert_eq!(fixture.modal_html(), first);
    }
}
