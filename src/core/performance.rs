//! Performance summary and payroll arithmetic for the employee dashboard.

use crate::models::employee::{PayrollRecord, PerformanceRecord};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceSummary {
    pub records: usize,
    /// Mean score, rounded half up. Zero without records.
    pub average_performance: i64,
    pub tasks_completed: f64,
}

/// Missing scores and task counts count as zero but the record still
/// counts towards the average.
pub fn summarize(records: &[PerformanceRecord]) -> PerformanceSummary {
    let total: f64 = records.iter().map(|r| r.performance.unwrap_or(0.0)).sum();
    let average_performance = if records.is_empty() {
        0
    } else {
        round_half_up(total / records.len() as f64)
    };

    PerformanceSummary {
        records: records.len(),
        average_performance,
        tasks_completed: records.iter().map(|r| r.tasks_completed.unwrap_or(0.0)).sum(),
    }
}

pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Numeric value of a scalar amount: numbers as is, numeric strings parsed,
/// booleans as 0/1. Anything else is zero.
pub fn amount(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// An allowance or deduction: a single amount or an object of named parts.
pub fn amount_total(value: &Value) -> f64 {
    match value {
        Value::Object(parts) => parts.values().map(amount).sum(),
        Value::Array(parts) => parts.iter().map(amount).sum(),
        other => amount(other),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayrollTotals {
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_salary: f64,
}

pub fn payroll_totals(p: &PayrollRecord) -> PayrollTotals {
    PayrollTotals {
        basic_salary: amount(&p.basic_salary),
        allowances: amount_total(&p.allowances),
        deductions: amount_total(&p.deductions),
        net_salary: amount(&p.net_salary),
    }
}

/// `1234567.5` → `1,234,567.50`; whole amounts carry no decimals.
pub fn format_amount(x: f64) -> String {
    let cents = (x.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if x < 0.0 && cents > 0 { "-" } else { "" };
    if frac == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac:02}")
    }
}

/// Text for a loosely typed field such as the payroll month.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => crate::utils::time::EMPTY_FIELD.to_string(),
        Value::String(s) if s.trim().is_empty() => crate::utils::time::EMPTY_FIELD.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
