use log::Level;

/// Upload size shown next to the attachment field. Only used as a hint.
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

pub const TEAM_NAME: &str = "Code Nation";

pub const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1498050108023-c5249f4df085?ixlib=rb-4.0.3&auto=format&fit=crop&w=1350&q=80";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
