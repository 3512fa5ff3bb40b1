use crate::api::EmployeeApi;
use crate::api::http::{HttpClient, LEAVES_PATH, PAYROLLS_PATH, PERFORMANCE_PATH, PROFILE_PATH};
use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::performance::{display_value, format_amount, payroll_totals, summarize};
use crate::errors::AppResult;
use crate::models::employee::{LeaveRecord, PayrollRecord, PerformanceRecord};
use crate::ui::messages;
use crate::utils::date::format_server_date;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::time::EMPTY_FIELD;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::Performance { leaves, payroll } = cmd else {
        return Ok(());
    };

    let token = ctx.session.token()?;
    let client = ctx.client()?;

    let profile = fetched(ctx, &client, PROFILE_PATH, client.profile(token))?;
    let records = fetched(ctx, &client, PERFORMANCE_PATH, client.performance(token))?;

    let title = match profile.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!("{}'s Performance", name),
        _ => "Performance".to_string(),
    };
    messages::header(title);

    let summary = summarize(&records);
    println!("Reviews         : {}", summary.records);
    println!("Average score   : {}", bold(&format!("{}%", summary.average_performance)));
    println!("Tasks completed : {}", summary.tasks_completed);

    if records.is_empty() {
        println!("No performance records found.");
    } else {
        print!("{}", render_performance(&records));
    }

    if *leaves {
        let list = fetched(ctx, &client, LEAVES_PATH, client.leaves(token))?;
        messages::header("Leave requests");
        if list.is_empty() {
            println!("No leave requests found.");
        } else {
            print!("{}", render_leaves(&list));
        }
    }

    if *payroll {
        let list = fetched(ctx, &client, PAYROLLS_PATH, client.payrolls(token))?;
        messages::header("Payroll");
        if list.is_empty() {
            println!("No payroll records found.");
        } else {
            print!("{}", render_payrolls(&list));
        }
    }

    Ok(())
}

/// Name the endpoint that failed; a rejected token also ends the session.
fn fetched<T>(ctx: &Context, client: &HttpClient, path: &str, result: AppResult<T>) -> AppResult<T> {
    result.map_err(|e| {
        let url = client.api_url(path);
        let text = if e.is_unauthorized() {
            format!("Unauthorized: Invalid or expired token for {url}. Please log in again.")
        } else {
            format!("Failed to load data from {url}: {}", e.user_message("Unknown error"))
        };
        ctx.report(e, Some(text.as_str()))
    })
}

fn or_empty(value: Option<&str>, empty: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => empty.to_string(),
    }
}

pub fn render_performance(records: &[PerformanceRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("Date"),
        Column::new("Score"),
        Column::new("Tasks"),
        Column::new("Achievements"),
    ]);
    for r in records {
        table.add_row(vec![
            format_server_date(r.created_at.as_deref()),
            r.performance
                .map(|p| format!("{}%", p))
                .unwrap_or_else(|| EMPTY_FIELD.to_string()),
            r.tasks_completed.unwrap_or(0.0).to_string(),
            or_empty(r.achievements.as_deref(), "None"),
        ]);
    }
    table.render()
}

pub fn render_leaves(leaves: &[LeaveRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("Type"),
        Column::new("From"),
        Column::new("To"),
        Column::new("Reason"),
        Column::new("Status"),
    ]);
    for l in leaves {
        table.add_row(vec![
            or_empty(l.kind.as_deref(), EMPTY_FIELD),
            format_server_date(l.from.as_deref()),
            format_server_date(l.to.as_deref()),
            or_empty(l.reason.as_deref(), "No reason provided"),
            or_empty(l.status.as_deref(), EMPTY_FIELD),
        ]);
    }
    table.render()
}

pub fn render_payrolls(payrolls: &[PayrollRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("Month"),
        Column::new("Basic"),
        Column::new("Allowances"),
        Column::new("Deductions"),
        Column::new("Net"),
    ]);
    for p in payrolls {
        let totals = payroll_totals(p);
        table.add_row(vec![
            display_value(&p.month),
            format_amount(totals.basic_salary),
            format_amount(totals.allowances),
            format_amount(totals.deductions),
            format_amount(totals.net_salary),
        ]);
    }
    table.render()
}
