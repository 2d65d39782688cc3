//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Results delivered by a subscription or one-shot read
/// - Outcomes of user actions that fold into state
/// - Local edits (search text, category selection)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
