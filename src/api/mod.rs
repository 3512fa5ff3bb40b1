//! Remote HR API seams.
//!
//! The tracker and the CLI only talk to these traits; `http::HttpClient` is
//! the reqwest-backed implementation, tests plug in in-memory fakes.

pub mod http;

use crate::errors::AppResult;
use crate::models::action::AttendanceAction;
use crate::models::attendance_record::AttendanceRecord;
use crate::models::employee::{LeaveRecord, PayrollRecord, PerformanceRecord, Profile};
use crate::models::notification::Notification;
use crate::models::project::{Project, Task, TaskStatus};

pub trait AttendanceApi {
    /// `GET /attendance`: every record of the authenticated user.
    fn list_attendance(&self, token: &str) -> AppResult<Vec<AttendanceRecord>>;

    /// `POST /attendance/{checkin|breakin|breakout|checkout}`.
    /// Returns today's record with the server-assigned timestamp.
    fn record_action(&self, token: &str, action: AttendanceAction) -> AppResult<AttendanceRecord>;
}

pub trait AuthApi {
    /// Exchange credentials for a bearer token.
    fn login(&self, email: &str, password: &str) -> AppResult<String>;
}

pub trait NotificationApi {
    fn list_notifications(&self, token: &str, user_id: Option<&str>)
    -> AppResult<Vec<Notification>>;

    fn mark_notification_read(&self, token: &str, id: &str) -> AppResult<()>;

    fn delete_notification(&self, token: &str, user_id: Option<&str>, id: &str) -> AppResult<()>;
}

pub trait ProjectApi {
    /// `GET /projects`: the projects the user is assigned to.
    fn list_projects(&self, token: &str) -> AppResult<Vec<Project>>;

    /// `GET /projects/{id}/tasks`.
    fn project_tasks(&self, token: &str, project_id: &str) -> AppResult<Vec<Task>>;

    /// `PATCH /tasks/{id}/status` with `{ "status": ... }`.
    fn set_task_status(&self, token: &str, task_id: &str, status: TaskStatus) -> AppResult<()>;
}

/// Read-only employee dashboard data.
pub trait EmployeeApi {
    fn profile(&self, token: &str) -> AppResult<Profile>;
    fn performance(&self, token: &str) -> AppResult<Vec<PerformanceRecord>>;
    fn leaves(&self, token: &str) -> AppResult<Vec<LeaveRecord>>;
    fn payrolls(&self, token: &str) -> AppResult<Vec<PayrollRecord>>;
}
