pub mod components;
pub mod constants;
pub mod logging;
pub mod modal_state;
pub mod mount_target;

pub use components::app::App;
pub use components::modal::Modal;
pub use modal_state::{Activation, ModalControls};
pub use mount_target::{MountTarget, MountTargetError};
