//! Attendance Session Tracker.
//!
//! Keeps the user's attendance history, picks out today's record, decides
//! which of the four actions are currently allowed and patches local state
//! with whatever the server answers. Failures never drop data: the previous
//! history stays in place and a single banner message describes the error.

use crate::api::AttendanceApi;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::action::{ActionPermissions, AttendanceAction};
use crate::models::attendance_record::AttendanceRecord;
use crate::models::state::AttendanceState;
use chrono::NaiveDate;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, warn};

pub const LOAD_FAILURE: &str = "Failed to fetch attendance records";

/// Shared view of the "request in flight" flag.
///
/// Only one action runs at a time (`perform` takes `&mut self`); this handle
/// lets code outside the tracker see when it is running.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Rc<Cell<bool>>);

impl BusyFlag {
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    fn raise(&self) -> BusyGuard<'_> {
        self.0.set(true);
        BusyGuard(self)
    }
}

/// Lowers the flag on drop, unwinding included.
struct BusyGuard<'f>(&'f BusyFlag);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        (self.0).0.set(false);
    }
}

pub struct AttendanceTracker<'a, A: AttendanceApi + ?Sized> {
    api: &'a A,
    session: &'a Session,
    today: NaiveDate,
    records: Vec<AttendanceRecord>,
    busy: BusyFlag,
    banner: Option<String>,
}

impl<'a, A: AttendanceApi + ?Sized> AttendanceTracker<'a, A> {
    pub fn new(api: &'a A, session: &'a Session, today: NaiveDate) -> Self {
        Self {
            api,
            session,
            today,
            records: Vec::new(),
            busy: BusyFlag::default(),
            banner: None,
        }
    }

    /// Refresh the whole history from the server.
    pub fn load(&mut self) -> AppResult<()> {
        let result = self
            .session
            .token()
            .and_then(|token| self.api.list_attendance(token));

        match result {
            Ok(records) => {
                debug!(count = records.len(), "attendance history loaded");
                self.records = records;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "attendance history not loaded");
                self.banner = Some(e.user_message(LOAD_FAILURE));
                Err(e)
            }
        }
    }

    /// Run one attendance action and fold the server's answer into local
    /// state. The busy flag is raised for the whole round trip and lowered
    /// afterwards whatever the outcome.
    pub fn perform(&mut self, action: AttendanceAction) -> AppResult<&AttendanceRecord> {
        self.banner = None;

        if let Some(reason) = action.refusal(self.today_record()) {
            let err = AppError::ActionNotPermitted {
                action: action.label(),
                reason,
            };
            self.banner = Some(err.to_string());
            return Err(err);
        }

        let result = {
            let _guard = self.busy.raise();
            self.dispatch(action)
        };

        match result {
            Ok(record) => {
                if action.stamp(&record).is_none() {
                    warn!(action = action.label(), "server answer carries no timestamp for the action");
                }
                info!(action = action.label(), date = %record.date, "attendance updated");
                Ok(self.patch(record))
            }
            Err(e) => {
                warn!(action = action.label(), error = %e, "attendance action failed");
                self.banner = Some(e.user_message(action.failure_message()));
                Err(e)
            }
        }
    }

    fn dispatch(&self, action: AttendanceAction) -> AppResult<AttendanceRecord> {
        let token = self.session.token()?;
        self.api.record_action(token, action)
    }

    /// Replace-by-date: the fresh record goes first, any older copy of the
    /// same day is dropped.
    fn patch(&mut self, record: AttendanceRecord) -> &AttendanceRecord {
        self.records.retain(|r| r.date != record.date);
        self.records.insert(0, record);
        &self.records[0]
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn today_record(&self) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.is_for(self.today))
    }

    pub fn state(&self) -> AttendanceState {
        AttendanceState::of(self.today_record())
    }

    pub fn permissions(&self) -> ActionPermissions {
        ActionPermissions::for_record(self.today_record())
    }

    pub fn today_total_hours(&self) -> String {
        self.today_record()
            .map(AttendanceRecord::total_hours)
            .unwrap_or_else(|| "00:00".to_string())
    }

    pub fn history(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    /// Handle for watching the in-flight flag from outside the tracker.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.banner = None;
    }
}
