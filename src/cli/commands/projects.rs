use crate::api::ProjectApi;
use crate::api::http::HttpClient;
use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::projects::{filter_projects, project_deadline};
use crate::errors::{AppError, AppResult};
use crate::models::project::{Project, Task};
use crate::ui::messages;
use crate::utils::colors::colorize_optional;
use crate::utils::date::format_server_date;
use crate::utils::table::{Column, Table};
use crate::utils::time::EMPTY_FIELD;
use chrono::Utc;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::Projects {
        status,
        tasks,
        set_status,
        to,
    } = cmd
    else {
        return Ok(());
    };

    let project_id = tasks.as_deref().map(valid_id).transpose()?;
    let token = ctx.session.token()?;
    let client = ctx.client()?;

    if let (Some(task_id), Some(new_status)) = (set_status, to) {
        client
            .set_task_status(token, task_id, *new_status)
            .map_err(|e| ctx.fail(e, "Failed to update task status"))?;
        messages::success(format!("Task {} is now {}", task_id, new_status.label()));
        ctx.record_activity("task", task_id, new_status.label());
    }

    if let Some(id) = project_id {
        return print_tasks(ctx, &client, token, id);
    }
    if set_status.is_some() {
        return Ok(());
    }

    let projects = client
        .list_projects(token)
        .map_err(|e| ctx.fail(e, "Failed to fetch projects"))?;
    let shown = filter_projects(&projects, status.as_deref());

    messages::header(format!("Projects ({})", shown.len()));
    if shown.is_empty() {
        println!("No projects found.");
        return Ok(());
    }
    print!("{}", render_projects(&shown));
    Ok(())
}

fn valid_id(raw: &str) -> AppResult<&str> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(AppError::Banner("Invalid project ID".to_string()));
    }
    Ok(id)
}

fn print_tasks(ctx: &Context, client: &HttpClient, token: &str, project_id: &str) -> AppResult<()> {
    let tasks = client
        .project_tasks(token, project_id)
        .map_err(|e| ctx.fail(e, "Failed to fetch tasks"))?;

    messages::header(format!("Tasks of project {}", project_id));
    if tasks.is_empty() {
        println!("No tasks found for this project.");
        return Ok(());
    }
    print!("{}", render_tasks(&tasks));
    Ok(())
}

pub fn render_projects(projects: &[&Project]) -> String {
    let now = Utc::now();
    let mut table = Table::new(vec![
        Column::new("Id"),
        Column::new("Name"),
        Column::new("Status"),
        Column::new("Progress"),
        Column::new("Deadline"),
        Column::new("Remaining"),
    ]);

    for p in projects {
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            p.status.clone().unwrap_or_else(|| EMPTY_FIELD.to_string()),
            format!("{:.0}%", p.progress.unwrap_or(0.0)),
            format_server_date(p.deadline.as_deref()),
            colorize_optional(&project_deadline(p, now).unwrap_or_else(|| EMPTY_FIELD.to_string())),
        ]);
    }
    table.render()
}

pub fn render_tasks(tasks: &[Task]) -> String {
    let mut table = Table::new(vec![
        Column::new("Id"),
        Column::new("Description"),
        Column::new("Status"),
        Column::new("Created"),
    ]);

    for t in tasks {
        table.add_row(vec![
            t.id.clone(),
            t.description.clone(),
            t.status.clone().unwrap_or_else(|| EMPTY_FIELD.to_string()),
            format_server_date(t.created_at.as_deref()),
        ]);
    }
    table.render()
}
