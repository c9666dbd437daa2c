use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;

use crate::error::FormError;
use crate::hire_us::fields::FieldId;
use crate::hire_us::form_state::{FileHandle, FormState, FormStore};
use crate::hire_us::validator::{self, ValidationResult};
use crate::scroll::{PageScroll, ScrollLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(ValidationResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Rejected,
    Accepted,
}

/// What the page needs to draw the banner and the thank-you overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub show_success: bool,
    pub show_error_banner: bool,
    pub pending_missing: ValidationResult,
}

enum State {
    Idle,
    Rejected,
    // Holding the lock here ties the unlock to leaving this state.
    Accepted { _lock: ScrollLock },
}

/// Local record of an accepted submission. Nothing is sent anywhere.
#[derive(Serialize)]
struct SubmissionRecord<'a> {
    submitted_at: DateTime<Utc>,
    form: &'a FormState,
}

pub struct SubmissionController {
    store: FormStore,
    state: State,
    pending_missing: ValidationResult,
    page: Rc<dyn PageScroll>,
}

impl SubmissionController {
    pub fn new(page: Rc<dyn PageScroll>) -> Self {
        Self {
            store: FormStore::new(),
            state: State::Idle,
            pending_missing: Vec::new(),
            page,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Rejected => Phase::Rejected,
            State::Accepted { .. } => Phase::Accepted,
        }
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            show_success: self.phase() == Phase::Accepted,
            show_error_banner: self.phase() == Phase::Rejected && !self.pending_missing.is_empty(),
            pending_missing: self.pending_missing.clone(),
        }
    }

    pub fn snapshot(&self) -> FormState {
        self.store.snapshot()
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.store.set_field(name, value)?;
        self.recheck();
        Ok(())
    }

    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.store.set_value(field, value);
        self.recheck();
    }

    pub fn set_files(&mut self, files: Vec<FileHandle>) {
        debug!("{} file(s) selected", files.len());
        self.store.set_files(files);
        self.recheck();
    }

    pub fn submit(&mut self) -> SubmissionOutcome {
        if let State::Accepted { .. } = self.state {
            debug!("Submit ignored, form already accepted");
            return SubmissionOutcome::Accepted;
        }

        let missing = validator::validate(self.store.state());
        if !missing.is_empty() {
            info!("Submission rejected, {} required field(s) blank", missing.len());
            self.pending_missing = missing.clone();
            self.state = State::Rejected;
            return SubmissionOutcome::Rejected(missing);
        }

        self.log_submission();
        self.pending_missing.clear();
        self.state = State::Accepted {
            _lock: ScrollLock::acquire(self.page.clone()),
        };
        SubmissionOutcome::Accepted
    }

    /// Hide the banner. The pending list and the form values stay as they are.
    pub fn dismiss_error(&mut self) {
        if let State::Rejected = self.state {
            debug!("Error banner dismissed");
            self.state = State::Idle;
        }
    }

    /// Leave the thank-you overlay. Ends the session: scrolling is unlocked
    /// and the form starts over. Returns false when nothing was accepted.
    pub fn go_back(&mut self) -> bool {
        if let State::Accepted { .. } = self.state {
            self.state = State::Idle;
            self.store.reset();
            true
        } else {
            false
        }
    }

    fn recheck(&mut self) {
        if self.pending_missing.is_empty() {
            return;
        }
        self.pending_missing = validator::still_missing(self.store.state(), &self.pending_missing);
        if self.pending_missing.is_empty() {
            debug!("All previously missing fields filled, clearing error banner");
            if let State::Rejected = self.state {
                self.state = State::Idle;
            }
        }
    }

    fn log_submission(&self) {
        let record = SubmissionRecord {
            submitted_at: Utc::now(),
            form: self.store.state(),
        };
        match serde_json::to_string(&record) {
            Ok(json) => info!("Form Data: {}", json),
            Err(e) => warn!("Could not serialize form data: {}", e),
        }
    }
}
