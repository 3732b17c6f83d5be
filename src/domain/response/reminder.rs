//! Consultation reminder carried by every reply

/// Phrase whose presence (case-insensitive) counts as an existing reminder
pub const REMINDER_MARKER: &str = "consult with a healthcare professional";

/// Reminder sentence appended when a reply lacks one
pub const CONSULTATION_REMINDER: &str =
    "Remember to consult with a healthcare professional before starting any new medication.";

pub fn has_reminder(text: &str) -> bool {
    text.to_lowercase().contains(REMINDER_MARKER)
}

/// Append the reminder unless `text` already carries an equivalent one
pub fn ensure_reminder(text: impl Into<String>) -> String {
    let mut text = text.into();

    if has_reminder(&text) {
        return text;
    }

    let trimmed_len = text.trim_end().len();
    text.truncate(trimmed_len);
    if !text.is_empty() {
        text.push_str("\n\n");
    }
    text.push('*');
    text.push_str(CONSULTATION_REMINDER);
    text.push('*');
    text
}
