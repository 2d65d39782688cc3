//! Base trait for UI state in MVI architecture.

use crate::ui::status::LoadStatus;

/// UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// Every aggregated state carries one shared [`LoadStatus`].
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {
    fn status(&self) -> &LoadStatus;

    fn is_loading(&self) -> bool {
        self.status().is_loading
    }

    fn error(&self) -> Option<&str> {
        self.status().error.as_deref()
    }
}
