//! Roles screen state machine

use std::sync::Arc;

use bo_client::{Error, Role, RolesClient};
use bo_common::notify::NotificationSink;
use tracing::{debug, error};

/// Modal form mode.
///
/// Exactly one mode is active at a time and the screen owns it; the
/// modal chrome renders whatever mode it is handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    /// No modal shown
    Closed,
    /// Read-only view of an existing role
    Viewing(Role),
    /// Editable form over an existing role
    Editing(Role),
    /// Empty form for a new role
    Creating,
}

impl ModalMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalMode::Closed)
    }

    /// Whether the name field rejects input
    pub fn is_read_only(&self) -> bool {
        matches!(self, ModalMode::Viewing(_))
    }
}

/// Role administration screen
///
/// The list is replaced wholesale on every successful fetch and
/// refreshed after every successful mutation, so it always reflects
/// the server's role set as of the last round trip. Refresh is only
/// ever triggered from those explicit points, never from the list
/// changing.
pub struct RolesScreen {
    client: RolesClient,
    notifier: Arc<dyn NotificationSink>,
    roles: Vec<Role>,
    modal: ModalMode,
    draft: String,
}

impl RolesScreen {
    pub fn new(client: RolesClient, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            client,
            notifier,
            roles: Vec::new(),
            modal: ModalMode::Closed,
            draft: String::new(),
        }
    }

    /// Roles as of the last successful fetch, in server order
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn modal(&self) -> &ModalMode {
        &self.modal
    }

    /// Current content of the role-name field
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Fetch the role list and replace local state.
    ///
    /// On failure the previous list is kept and an error notice is
    /// emitted: the server message for application-level rejections, a
    /// generic message otherwise.
    pub async fn refresh(&mut self) {
        match self.client.list_roles().await {
            Ok(roles) => {
                debug!(count = roles.len(), "role list refreshed");
                self.roles = roles;
            }
            Err(err) => {
                error!(error = %err, "error fetching roles");
                self.notify_failure(&err, "Error fetching roles");
            }
        }
    }

    /// Open the modal in read-only mode over the given row.
    ///
    /// No-op when the id is not in the local list.
    pub fn open_view(&mut self, id: i64) {
        if let Some(role) = self.find(id) {
            self.draft = role.name.clone();
            self.modal = ModalMode::Viewing(role);
        }
    }

    /// Open the modal in edit mode over the given row
    pub fn open_edit(&mut self, id: i64) {
        if let Some(role) = self.find(id) {
            self.draft = role.name.clone();
            self.modal = ModalMode::Editing(role);
        }
    }

    /// Open the modal with an empty form for a new role
    pub fn open_create(&mut self) {
        self.draft.clear();
        self.modal = ModalMode::Creating;
    }

    /// Update the role-name draft. Ignored while the form is read-only
    /// or closed.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if matches!(self.modal, ModalMode::Editing(_) | ModalMode::Creating) {
            self.draft = text.into();
        }
    }

    /// Submit the modal form.
    ///
    /// In create mode this saves a new role, in edit mode it renames
    /// the selected one. Success closes the modal and refreshes the
    /// list; failure leaves the modal open so the input survives.
    pub async fn submit(&mut self) {
        let draft = self.draft.trim().to_string();
        match self.modal.clone() {
            ModalMode::Creating => {
                if draft.is_empty() {
                    self.notifier.error("Role name is required");
                    return;
                }
                match self.client.add_role(&draft).await {
                    Ok(created) => {
                        debug!(role_name = %created.role_name, "role saved");
                        self.notifier.success("Role saved successfully");
                        self.close();
                        self.refresh().await;
                    }
                    Err(err) => {
                        error!(error = %err, "error saving role");
                        self.notify_failure(&err, "Error saving role");
                    }
                }
            }
            ModalMode::Editing(role) => {
                if draft.is_empty() {
                    self.notifier.error("Role name is required");
                    return;
                }
                match self.client.update_role(role.id, &draft).await {
                    Ok(()) => {
                        self.notifier.success("Role updated successfully");
                        self.close();
                        self.refresh().await;
                    }
                    Err(err) => {
                        error!(error = %err, role_id = role.id, "error updating role");
                        self.notify_failure(&err, "Error updating role");
                    }
                }
            }
            ModalMode::Viewing(_) | ModalMode::Closed => {}
        }
    }

    /// Delete the given row.
    ///
    /// The modal closes regardless of outcome; the list is refreshed
    /// only after a confirmed delete.
    pub async fn delete(&mut self, id: i64) {
        let Some(role) = self.find(id) else {
            self.close();
            return;
        };

        match self.client.delete_role(role.id, &role.name).await {
            Ok(()) => {
                self.notifier.success("Role Deleted Successfully");
                self.close();
                self.refresh().await;
            }
            Err(err) => {
                error!(error = %err, role_id = role.id, "error deleting role");
                self.notify_failure(&err, "Error deleting role");
                self.close();
            }
        }
    }

    /// Close the modal and clear the draft
    pub fn close(&mut self) {
        self.modal = ModalMode::Closed;
        self.draft.clear();
    }

    fn find(&self, id: i64) -> Option<Role> {
        self.roles.iter().find(|role| role.id == id).cloned()
    }

    fn notify_failure(&self, err: &Error, fallback: &str) {
        match err.user_message() {
            Some(message) => self.notifier.error(message),
            None => self.notifier.error(fallback),
        }
    }
}
