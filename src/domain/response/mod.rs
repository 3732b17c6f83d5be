//! Reply composition around the ranked products

mod composer;
mod fallback;
mod reminder;

pub use composer::{BackendNotice, ComposedResponse, ResponseComposer, ResponseSource};
pub use fallback::FallbackTemplates;
pub use reminder::{ensure_reminder, has_reminder, CONSULTATION_REMINDER, REMINDER_MARKER};
