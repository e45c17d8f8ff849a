use leptos::web_sys;
use thiserror::Error;
use crate::logging::log;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountTargetError {
    #[error("no global window is available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{id}` exists in the document")]
    MissingElement { id: String },
}

/// Handle to the place where detached (portal) content is mounted.
///
/// Resolved once at startup and passed down explicitly, so components never
/// look the target up on their own and tests can hand in any element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountTarget {
    element: web_sys::Element,
}

fn document() -> Result<web_sys::Document, MountTargetError> {
    let window = web_sys::window().ok_or(MountTargetError::NoWindow)?;
    window.document().ok_or(MountTargetError::NoDocument)
}

impl MountTarget {
    #[must_use]
    pub fn from_element(element: web_sys::Element) -> Self {
        Self { element }
    }

    /// Looks up the element with the given id in the current document.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` when no such element exists, or the
    /// window/document variants when running outside a browser page.
    pub fn by_id(id: &str) -> Result<Self, MountTargetError> {
        let element = document()?
            .get_element_by_id(id)
            .ok_or_else(|| MountTargetError::MissingElement { id: id.to_string() })?;
        log!("Resolved modal mount target #{id}");
        Ok(Self { element })
    }

    #[must_use]
    pub fn element(&self) -> &web_sys::Element {
        &self.element
    }
}
