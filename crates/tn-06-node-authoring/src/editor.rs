//! Node Editor
//!
//! Drives the add/edit node page: holds the form, submits it, reports the
//! outcome as a notice and returns the author to the dashboard.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use shared_types::{NodeListing, Notice, Notifier, UserIdentity};
use tn_04_route_guard::{Navigator, Route};
use tn_05_marketplace::ListingSource;
use tracing::{debug, error, info};

use crate::domain::{AuthoringError, NodeForm, NodePreview, SubmitMode};
use crate::ports::outbound::NodeSubmitter;

#[derive(Debug, Default)]
struct EditorState {
    form: NodeForm,
    existing: Option<NodeListing>,
    loading: bool,
    show_preview: bool,
}

/// Clears the loading flag when a submission ends.
struct LoadingGuard<'a> {
    state: &'a Mutex<EditorState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().loading = false;
    }
}

/// The add/edit node page.
pub struct NodeEditor {
    source: Arc<dyn ListingSource>,
    submitter: Arc<dyn NodeSubmitter>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    author: UserIdentity,
    state: Mutex<EditorState>,
}

impl NodeEditor {
    /// Editor with a blank form. New nodes are attributed to `author`.
    pub fn new(
        source: Arc<dyn ListingSource>,
        submitter: Arc<dyn NodeSubmitter>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        author: UserIdentity,
    ) -> Self {
        Self {
            source,
            submitter,
            navigator,
            notifier,
            author,
            state: Mutex::new(EditorState::default()),
        }
    }

    /// Switch to edit mode and load listing `id` into the form.
    pub async fn load_for_edit(&self, id: &str) -> Result<(), AuthoringError> {
        let listing = self.source.get(id).await?;
        debug!("[tn-06] Editing node {}", listing.id);
        let mut state = self.state.lock();
        state.form = NodeForm::from_listing(&listing);
        state.existing = Some(listing);
        Ok(())
    }

    /// Whether an existing node is being edited.
    pub fn is_editing(&self) -> bool {
        self.state.lock().existing.is_some()
    }

    /// Snapshot of the form.
    pub fn form(&self) -> NodeForm {
        self.state.lock().form.clone()
    }

    /// Apply an edit to the form.
    pub fn edit<R>(&self, f: impl FnOnce(&mut NodeForm) -> R) -> R {
        f(&mut self.state.lock().form)
    }

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Show or hide the preview card.
    pub fn toggle_preview(&self) -> bool {
        let mut state = self.state.lock();
        state.show_preview = !state.show_preview;
        state.show_preview
    }

    /// Whether the preview card is shown.
    pub fn show_preview(&self) -> bool {
        self.state.lock().show_preview
    }

    /// Preview card contents.
    pub fn preview(&self) -> NodePreview {
        self.state.lock().form.preview()
    }

    /// Validate and submit the form.
    ///
    /// Every outcome is reported as a notice. On success the editor
    /// navigates to the dashboard and returns the stored listing.
    pub async fn submit(&self, mode: SubmitMode) -> Result<NodeListing, AuthoringError> {
        let (form, existing) = {
            let mut state = self.state.lock();
            if state.loading {
                return Err(AuthoringError::Busy);
            }
            state.loading = true;
            (state.form.clone(), state.existing.clone())
        };
        let _guard = LoadingGuard { state: &self.state };

        if let Err(e) = form.validate() {
            debug!("[tn-06] {}", e);
            self.notifier.notify(Notice::destructive(
                "Validation Error",
                "Please fill in all required fields.",
            ));
            return Err(e);
        }

        let listing = form.to_listing(existing.as_ref(), &self.author, mode, Utc::now());
        if let Err(e) = self.submitter.submit(listing.clone()).await {
            error!("[tn-06] Failed to submit node {}: {}", listing.id, e);
            self.notifier.notify(Notice::destructive(
                "Error",
                "Something went wrong. Please try again.",
            ));
            return Err(e);
        }

        info!("[tn-06] Node {} submitted as {:?}", listing.id, mode);
        self.notifier.notify(match mode {
            SubmitMode::Publish => Notice::success(
                "Node Published",
                "Your node has been published successfully!",
            ),
            SubmitMode::Draft => {
                Notice::success("Draft Saved", "Your node has been saved as a draft.")
            }
        });
        self.state.lock().existing = Some(listing.clone());
        self.navigator.navigate(&Route::Dashboard);
        Ok(listing)
    }
}
