//! Base trait for UI state.

/// Marker trait for state owned by the UI thread.
///
/// `Default` lets dispatch move state out of its slot with `mem::take`;
/// `PartialEq` lets tests and the view compare states directly.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
