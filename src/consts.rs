/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Notes file used when neither CLI nor config names one
pub(crate) const DEFAULT_NOTES_FILE: &str = "user_schedule.json";

/// Joins date and time into a note key: "2025-01-15_09:00"
pub(crate) const NOTE_KEY_SEPARATOR: char = '_';

/// Post-increment turn count at which replies switch to the closing message
pub(crate) const TURN_LIMIT: u32 = 10;

pub(crate) const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Input that ends the interactive session (case-insensitive)
pub(crate) const QUIT_COMMAND: &str = "q";
