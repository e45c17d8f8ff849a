use leptos::{create_signal, ReadSignal, Signal, SignalGetUntracked, SignalSet, WriteSignal};
use crate::logging::log;

/// A single user request to show or hide the modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Open,
    Close,
}

impl Activation {
    /// Value of the open flag after this activation is applied
    #[must_use]
    pub const fn target(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Owner handle for the modal's open flag.
///
/// Only the component that creates it writes the flag; everything below it
/// gets the read-only [`ModalControls::is_open`] signal plus a close callback.
#[derive(Clone, Copy)]
pub struct ModalControls {
    is_open: ReadSignal<bool>,
    set_is_open: WriteSignal<bool>,
}

impl ModalControls {
    /// Creates the flag in the current reactive owner, initially closed.
    #[must_use]
    pub fn new() -> Self {
        let (is_open, set_is_open) = create_signal(false);
        Self { is_open, set_is_open }
    }

    #[must_use]
    pub fn is_open(&self) -> Signal<bool> {
        self.is_open.into()
    }

    pub fn open(&self) {
        self.activate(Activation::Open);
    }

    pub fn close(&self) {
        self.activate(Activation::Close);
    }

    /// Applies one activation, returning whether the flag changed.
    ///
    /// Repeating the current state is a no-op so subscribers are not
    /// notified twice for the same value.
    pub fn activate(&self, activation: Activation) -> bool {
        let target = activation.target();
        if self.is_open.get_untracked() == target {
            return false;
        }
        log!("Modal {activation:?}");
        self.set_is_open.set(target);
        true
    }
}

impl Default for ModalControls {
    fn default() -> Self {
        Self::new()
    }
}
