use crate::api::{AttendanceApi, AuthApi, EmployeeApi, NotificationApi, ProjectApi};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::action::AttendanceAction;
use crate::models::attendance_record::AttendanceRecord;
use crate::models::employee::{LeaveRecord, PayrollRecord, PerformanceRecord, Profile};
use crate::models::notification::{Notification, NotificationList};
use crate::models::project::{Project, ProjectsPayload, Task, TaskList, TaskStatus};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

const USER_ID_HEADER: &str = "x-user-id";

pub const PROFILE_PATH: &str = "/profile";
pub const PERFORMANCE_PATH: &str = "/performance";
pub const LEAVES_PATH: &str = "/leaves";
pub const PAYROLLS_PATH: &str = "/payrolls";

/// Blocking client for the HR backend. One request at a time, no retries.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_prefix: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: &str, api_prefix: &str) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("rattendance/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let prefix = api_prefix.trim().trim_end_matches('/');
        let api_prefix = if prefix.is_empty() || prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{prefix}")
        };

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_prefix,
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(&cfg.base_url, &cfg.api_prefix)
    }

    /// URL under the employee prefix, e.g. `/employee/attendance`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_prefix, path)
    }

    /// URL directly under the server root.
    pub fn root_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET` a list under the employee prefix. A `null` body is an empty list.
    fn get_list<T: DeserializeOwned>(&self, token: &str, path: &str, what: &str) -> AppResult<Vec<T>> {
        let resp = self.send(self.client.get(self.api_url(path)).bearer_auth(token), what)?;
        let items: Option<Vec<T>> = resp.json()?;
        Ok(items.unwrap_or_default())
    }

    fn send(&self, request: RequestBuilder, what: &str) -> AppResult<Response> {
        debug!(request = what, "sending request");
        let resp = request.send().map_err(|e| {
            warn!(request = what, error = %e, "request did not complete");
            AppError::Http(e)
        })?;
        check_status(resp, what)
    }
}

/// Turn any non-2xx response into an `AppError`, keeping the server's
/// `message` field when the body carries one.
fn check_status(resp: Response, what: &str) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().to_string();
    let body = resp.text().unwrap_or_default();
    let message = remote_message(&body);
    warn!(request = what, %url, status = status.as_u16(), message = ?message, "remote call failed");

    if status == StatusCode::UNAUTHORIZED {
        return Err(AppError::Unauthorized(message.unwrap_or_else(|| {
            format!("Invalid or expired token for {url}. Please log in again.")
        })));
    }

    Err(AppError::Remote {
        status: status.as_u16(),
        message,
    })
}

/// Extract `message` from a JSON error payload.
pub fn remote_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

impl AttendanceApi for HttpClient {
    fn list_attendance(&self, token: &str) -> AppResult<Vec<AttendanceRecord>> {
        // The server answers `null` when the user has no history yet.
        self.get_list(token, "/attendance", "list attendance")
    }

    fn record_action(&self, token: &str, action: AttendanceAction) -> AppResult<AttendanceRecord> {
        let url = self.api_url(&format!("/attendance/{}", action.endpoint()));
        let resp = self.send(
            self.client.post(url).bearer_auth(token).json(&json!({})),
            action.label(),
        )?;
        Ok(resp.json()?)
    }
}

impl AuthApi for HttpClient {
    fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let resp = self.send(
            self.client
                .post(self.api_url("/login"))
                .json(&json!({ "email": email, "password": password })),
            "login",
        )?;

        let body: LoginResponse = resp.json()?;
        body.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Other("login response carried no token".into()))
    }
}

impl NotificationApi for HttpClient {
    fn list_notifications(
        &self,
        token: &str,
        user_id: Option<&str>,
    ) -> AppResult<Vec<Notification>> {
        let resp = self.send(
            self.client
                .get(self.api_url("/notifications"))
                .bearer_auth(token)
                .header(USER_ID_HEADER, user_id.unwrap_or_default()),
            "list notifications",
        )?;

        let list: NotificationList = resp.json()?;
        if list.status != "success" {
            debug!(status = %list.status, "notification list not successful, ignoring payload");
            return Ok(Vec::new());
        }
        Ok(list.data)
    }

    fn mark_notification_read(&self, token: &str, id: &str) -> AppResult<()> {
        self.send(
            self.client
                .patch(self.root_url(&format!("/notifications/{id}/read")))
                .bearer_auth(token),
            "mark notification read",
        )?;
        Ok(())
    }

    fn delete_notification(&self, token: &str, user_id: Option<&str>, id: &str) -> AppResult<()> {
        self.send(
            self.client
                .delete(self.root_url(&format!("/notifications/{id}")))
                .bearer_auth(token)
                .header(USER_ID_HEADER, user_id.unwrap_or_default()),
            "delete notification",
        )?;
        Ok(())
    }
}

impl ProjectApi for HttpClient {
    fn list_projects(&self, token: &str) -> AppResult<Vec<Project>> {
        let resp = self.send(
            self.client.get(self.api_url("/projects")).bearer_auth(token),
            "list projects",
        )?;
        let payload: Option<ProjectsPayload> = resp.json()?;
        Ok(payload.map(ProjectsPayload::into_projects).unwrap_or_default())
    }

    fn project_tasks(&self, token: &str, project_id: &str) -> AppResult<Vec<Task>> {
        let resp = self.send(
            self.client
                .get(self.api_url(&format!("/projects/{project_id}/tasks")))
                .bearer_auth(token),
            "list project tasks",
        )?;
        let list: Option<TaskList> = resp.json()?;
        Ok(list.and_then(|l| l.tasks).unwrap_or_default())
    }

    fn set_task_status(&self, token: &str, task_id: &str, status: TaskStatus) -> AppResult<()> {
        self.send(
            self.client
                .patch(self.api_url(&format!("/tasks/{task_id}/status")))
                .bearer_auth(token)
                .json(&json!({ "status": status })),
            "update task status",
        )?;
        Ok(())
    }
}

impl EmployeeApi for HttpClient {
    fn profile(&self, token: &str) -> AppResult<Profile> {
        let resp = self.send(
            self.client.get(self.api_url(PROFILE_PATH)).bearer_auth(token),
            "profile",
        )?;
        let profile: Option<Profile> = resp.json()?;
        Ok(profile.unwrap_or_default())
    }

    fn performance(&self, token: &str) -> AppResult<Vec<PerformanceRecord>> {
        self.get_list(token, PERFORMANCE_PATH, "performance")
    }

    fn leaves(&self, token: &str) -> AppResult<Vec<LeaveRecord>> {
        self.get_list(token, LEAVES_PATH, "leaves")
    }

    fn payrolls(&self, token: &str) -> AppResult<Vec<PayrollRecord>> {
        self.get_list(token, PAYROLLS_PATH, "payrolls")
    }
}
