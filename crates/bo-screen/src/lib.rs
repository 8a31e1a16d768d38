//! # Roles Administration Screen
//!
//! State machine behind the role administration table and its modal
//! form. The screen owns the role list, the modal mode, and the
//! role-name draft; every CRUD action runs against [`bo_client`] and
//! terminates in a notification, never a propagated error.

pub mod screen;

pub use screen::{ModalMode, RolesScreen};
