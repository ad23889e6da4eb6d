//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are operator gestures (clicking a port, pressing Connect) or
/// system events (a switch command finished). They may cross threads on
/// their way to the UI loop.
pub trait Intent: Send + 'static {}
