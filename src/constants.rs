/// Id of the element in `index.html` that receives portal content
pub const MODAL_ROOT_ID: &str = "modal-root";

/// Page heading rendered by the container
pub const PAGE_TITLE: &str = "Leptos Modal with Portal";

/// Label of the button that opens the modal
pub const OPEN_BUTTON_LABEL: &str = "Open Modal";

pub const MODAL_HEADING: &str = "Hello from the Modal!";
pub const MODAL_BODY: &str = "This Modal is rendered outside the main parent component!";

// Class names shared between the markup and the browser tests
pub const TRIGGER_CLASS: &str = "modal-trigger";
pub const OVERLAY_CLASS: &str = "modal-overlay";
pub const PANEL_CLASS: &str = "modal-content";
pub const CLOSE_BUTTON_CLASS: &str = "close-button";

/// Keyboard key that dismisses an open modal
pub const DISMISS_KEY: &str = "Escape";
