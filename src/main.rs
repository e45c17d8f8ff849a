#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::suspicious)]
use leptos::view;
use portal_modal::{constants::MODAL_ROOT_ID, App, MountTarget};

fn main() {
    console_error_panic_hook::set_once();

    let mount_target = match MountTarget::by_id(MODAL_ROOT_ID) {
        Ok(target) => target,
        Err(err) => {
            leptos::logging::error!("Not mounting app: {err}");
            return;
        }
    };

    leptos::mount_to_body(move || view! { <App mount_target=mount_target/> });
}
