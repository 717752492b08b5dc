//! Result Rendering
//!
//! Pure functions from flow outcomes to HTML fragments. Nothing here touches
//! the DOM; components inject the returned markup into their output area.
//! Every server-supplied string is escaped before it is embedded.

use crate::flows::FlowOutcome;
use crate::models::{CategoryResponse, OrderedMap, StaleResponse, Task, UpdateResponse};
use crate::store::Flow;

/// Shown when a `success:false` body carries no message
const FALLBACK_SERVER_ERROR: &str = "The server reported an error.";

/// Map a task status to its badge class (case-insensitive, unknown = no class)
pub fn status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "completed" => "status-completed",
        "in progress" => "status-in-progress",
        "pending" => "status-pending",
        "blocked" => "status-blocked",
        _ => "",
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ========================
// Notices
// ========================

/// "Working on it" content shown while a flow's request is in flight
pub fn placeholder(flow: Flow) -> String {
    let text = match flow {
        Flow::Update => "Processing your update...",
        Flow::Overdue => "Checking for overdue tasks...",
        Flow::Category => "Fetching tasks...",
    };
    format!("<p>{}</p>", text)
}

pub fn error_notice(message: &str) -> String {
    format!(r#"<div class="alert alert-danger">{}</div>"#, escape_html(message))
}

pub fn success_notice(message: &str) -> String {
    format!(r#"<div class="alert alert-success">{}</div>"#, escape_html(message))
}

pub fn info_notice(message: &str) -> String {
    format!(r#"<div class="alert alert-info">{}</div>"#, escape_html(message))
}

/// Application-reported failure: the server's message, verbatim
pub fn server_error(message: Option<&str>) -> String {
    error_notice(message.unwrap_or(FALLBACK_SERVER_ERROR))
}

/// Fixed retry-later notice for transport failures; carries no transport detail
pub fn transport_error(flow: Flow) -> String {
    let what = match flow {
        Flow::Update => "Could not process your update.",
        Flow::Overdue => "Could not fetch overdue tasks.",
        Flow::Category => "Could not fetch tasks.",
    };
    format!(
        r#"<div class="alert alert-danger"><strong>Error:</strong> {} Please try again later.</div>"#,
        what
    )
}

// ========================
// Tasks
// ========================

pub fn status_badge(status: &str) -> String {
    let class = status_class(status);
    let class_attr = if class.is_empty() {
        "task-status".to_string()
    } else {
        format!("task-status {}", class)
    };
    format!(r#"<span class="{}">{}</span>"#, class_attr, escape_html(status))
}

fn task_item(task: &Task, footer: Option<String>) -> String {
    let mut html = format!(
        r#"<li class="task-item">{} {}"#,
        escape_html(&task.task),
        status_badge(&task.status)
    );
    if let Some(footer) = footer {
        html.push_str(&format!(r#"<br><small class="text-muted">{}</small>"#, footer));
    }
    html.push_str("</li>");
    html
}

fn task_date(task: &Task) -> String {
    escape_html(task.date.as_deref().unwrap_or("No date"))
}

fn employee_sections(groups: &OrderedMap<Vec<Task>>, footer: impl Fn(&Task) -> String) -> String {
    let mut html = String::new();
    for (employee, tasks) in groups.iter() {
        html.push_str(r#"<div class="employee-section">"#);
        html.push_str(&format!(r#"<div class="employee-name">👤 {}</div>"#, escape_html(employee)));
        html.push_str(r#"<ul class="task-list">"#);
        for task in tasks {
            html.push_str(&task_item(task, Some(footer(task))));
        }
        html.push_str("</ul></div>");
    }
    html
}

// ========================
// Update Submission
// ========================

/// Successful update: extracted tasks, coaching, then debug logs
pub fn update_result(response: &UpdateResponse) -> String {
    let mut html = String::from(r#"<div class="mb-4">"#);

    if let Some(tasks) = response.tasks.as_ref().filter(|t| !t.is_empty()) {
        html.push_str("<h5>Extracted Tasks:</h5>");
        html.push_str(r#"<ul class="task-list">"#);
        for task in tasks {
            html.push_str(&task_item(task, None));
        }
        html.push_str("</ul>");
        html.push_str(&format!(
            r#"<div class="alert alert-success">✅ {} task(s) synced.</div>"#,
            tasks.len()
        ));
    }

    if let Some(coaching) = response.coaching.as_deref().filter(|c| !c.is_empty()) {
        html.push_str(r#"<div class="insights-section">"#);
        html.push_str("<h5>Assessment of Your Recent Work:</h5>");
        html.push_str(&format!("<p>{}</p>", escape_html(coaching)));
        html.push_str("</div>");
    }

    if let Some(logs) = response.logs.as_ref().filter(|l| !l.is_empty()) {
        let lines: Vec<String> = logs.iter().map(|line| escape_html(line)).collect();
        html.push_str(r#"<details class="mt-3">"#);
        html.push_str("<summary>Technical Details (click to expand)</summary>");
        html.push_str(&format!(r#"<div class="tech-details">{}</div>"#, lines.join("<br>")));
        html.push_str("</details>");
    }

    html.push_str("</div>");
    html
}

pub fn update_outcome(outcome: &FlowOutcome<UpdateResponse>) -> Option<String> {
    match outcome {
        FlowOutcome::Ok(resp) if resp.success => Some(update_result(resp)),
        FlowOutcome::Ok(resp) => Some(server_error(resp.message.as_deref())),
        FlowOutcome::NetworkError(_) => Some(transport_error(Flow::Update)),
        FlowOutcome::ValidationError(_) | FlowOutcome::Superseded => None,
    }
}

// ========================
// Overdue Tasks
// ========================

pub fn stale_tasks(groups: &OrderedMap<Vec<Task>>) -> String {
    let mut html = String::from("<h5>Overdue Tasks:</h5>");
    html.push_str(&employee_sections(groups, |task| {
        let age = task
            .days_old
            .as_ref()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string());
        format!("Since {} ({} days)", task_date(task), age)
    }));
    html
}

pub fn overdue_outcome(outcome: &FlowOutcome<StaleResponse>) -> Option<String> {
    match outcome {
        FlowOutcome::Ok(resp) if !resp.success => Some(server_error(resp.message.as_deref())),
        FlowOutcome::Ok(resp) if resp.has_stale => Some(match resp.tasks_by_employee.as_ref() {
            Some(groups) => stale_tasks(groups),
            None => stale_tasks(&OrderedMap::default()),
        }),
        FlowOutcome::Ok(resp) => Some(success_notice(resp.message.as_deref().unwrap_or_default())),
        FlowOutcome::NetworkError(_) => Some(transport_error(Flow::Overdue)),
        FlowOutcome::ValidationError(_) | FlowOutcome::Superseded => None,
    }
}

// ========================
// Category Tasks
// ========================

pub fn category_tasks(category: &str, response: &CategoryResponse) -> String {
    let category = escape_html(category);
    let mut html = format!("<h5>Tasks for \"{}\":</h5>", category);

    if let Some(groups) = response.tasks_by_employee.as_ref() {
        html.push_str(&employee_sections(groups, |task| format!("Date: {}", task_date(task))));
    }

    if let Some(summary) = response.status_summary.as_ref() {
        html.push_str(r#"<div class="mt-3">"#);
        html.push_str(&format!("<h6>📊 Project \"{}\" Task Status Summary:</h6>", category));
        html.push_str("<ul>");
        for (status, count) in summary.iter() {
            html.push_str(&format!("<li>{}: {} task(s)</li>", escape_html(status), count));
        }
        html.push_str("</ul></div>");
    }

    if let Some(insight) = response.insight.as_deref().filter(|i| !i.is_empty()) {
        html.push_str(r#"<div class="insights-section mt-3">"#);
        html.push_str("<h6>🧠 Project Insight:</h6>");
        html.push_str(&format!("<p>{}</p>", escape_html(insight)));
        html.push_str("</div>");
    }

    html
}

pub fn category_outcome(category: &str, outcome: &FlowOutcome<CategoryResponse>) -> Option<String> {
    match outcome {
        FlowOutcome::Ok(resp) if !resp.success => Some(server_error(resp.message.as_deref())),
        FlowOutcome::Ok(resp) if resp.has_tasks => Some(category_tasks(category, resp)),
        FlowOutcome::Ok(resp) => Some(info_notice(resp.message.as_deref().unwrap_or_default())),
        FlowOutcome::NetworkError(_) => Some(transport_error(Flow::Category)),
        FlowOutcome::ValidationError(_) | FlowOutcome::Superseded => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    fn task(text: &str, status: &str) -> Task {
        Task {
            task: text.to_string(),
            status: status.to_string(),
            date: Some("2024-03-01".to_string()),
            days_old: Some(4.into()),
        }
    }

    #[test]
    fn test_status_class_is_case_insensitive() {
        assert_eq!(status_class("Completed"), "status-completed");
        assert_eq!(status_class("IN PROGRESS"), "status-in-progress");
        assert_eq!(status_class("pending"), "status-pending");
        assert_eq!(status_class("Blocked"), "status-blocked");
        assert_eq!(status_class("Unknown"), "");
        assert_eq!(status_class(""), "");
    }

    #[test]
    fn test_status_badge_without_class() {
        assert_eq!(status_badge("Waiting"), r#"<span class="task-status">Waiting</span>"#);
        assert_eq!(
            status_badge("Pending"),
            r#"<span class="task-status status-pending">Pending</span>"#
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> isn't"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; isn&#39;t"
        );
    }

    #[test]
    fn test_update_result_one_item_per_task() {
        let resp = UpdateResponse {
            success: true,
            tasks: Some(vec![task("Write tests", "In Progress"), task("Ship", "Blocked")]),
            ..Default::default()
        };
        let html = update_result(&resp);
        assert_eq!(html.matches(r#"<li class="task-item">"#).count(), 2);
        assert!(html.contains("Write tests"));
        assert!(html.contains(r#"task-status status-in-progress"#));
        assert!(html.contains(r#"task-status status-blocked"#));
        assert!(html.contains("✅ 2 task(s) synced."));
        assert!(!html.contains("insights-section"));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn test_update_result_logs_joined() {
        let resp = UpdateResponse {
            success: true,
            tasks: Some(vec![]),
            logs: Some(vec!["⏳ step one".to_string(), "✅ <done>".to_string()]),
            ..Default::default()
        };
        let html = update_result(&resp);
        assert!(!html.contains("task-list"));
        assert!(html.contains("Technical Details (click to expand)"));
        assert!(html.contains("⏳ step one<br>✅ &lt;done&gt;"));
    }

    #[test]
    fn test_update_failure_renders_only_message() {
        let outcome = FlowOutcome::Ok(UpdateResponse {
            success: false,
            message: Some("No tasks could be extracted".to_string()),
            tasks: Some(vec![task("ignored", "Pending")]),
            ..Default::default()
        });
        let html = update_outcome(&outcome).unwrap();
        assert_eq!(html, r#"<div class="alert alert-danger">No tasks could be extracted</div>"#);
        assert!(!html.contains("task-list"));
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let outcome = FlowOutcome::Ok(StaleResponse::default());
        assert_eq!(
            overdue_outcome(&outcome).unwrap(),
            error_notice(FALLBACK_SERVER_ERROR)
        );
    }

    #[test]
    fn test_transport_error_hides_detail() {
        let outcome: FlowOutcome<UpdateResponse> =
            FlowOutcome::NetworkError(ApiError::Network("ECONNRESET 10.0.0.7".to_string()));
        let html = update_outcome(&outcome).unwrap();
        assert!(html.contains("Could not process your update. Please try again later."));
        assert!(!html.contains("ECONNRESET"));
    }

    #[test]
    fn test_validation_and_superseded_render_nothing() {
        let validation: FlowOutcome<CategoryResponse> =
            FlowOutcome::ValidationError("Please select a category".to_string());
        assert!(category_outcome("Ops", &validation).is_none());
        let superseded: FlowOutcome<StaleResponse> = FlowOutcome::Superseded;
        assert!(overdue_outcome(&superseded).is_none());
    }

    #[test]
    fn test_stale_tasks_grouped_with_age() {
        let groups: OrderedMap<Vec<Task>> = vec![
            ("Zoe".to_string(), vec![task("Audit", "Pending")]),
            ("Adam".to_string(), vec![Task { date: None, days_old: None, ..task("Deploy", "Blocked") }]),
        ]
        .into_iter()
        .collect();
        let html = stale_tasks(&groups);
        assert!(html.starts_with("<h5>Overdue Tasks:</h5>"));
        assert_eq!(html.matches(r#"class="employee-section""#).count(), 2);
        assert!(html.find("Zoe").unwrap() < html.find("Adam").unwrap());
        assert!(html.contains("Since 2024-03-01 (4 days)"));
        assert!(html.contains("Since No date (? days)"));
    }

    #[test]
    fn test_overdue_success_without_results_uses_message() {
        let outcome = FlowOutcome::Ok(StaleResponse {
            success: true,
            has_stale: false,
            message: Some("No overdue tasks".to_string()),
            tasks_by_employee: None,
        });
        let html = overdue_outcome(&outcome).unwrap();
        assert_eq!(html, r#"<div class="alert alert-success">No overdue tasks</div>"#);
        assert!(!html.contains("employee-section"));
    }

    #[test]
    fn test_overdue_flag_without_groups_keeps_heading() {
        let outcome = FlowOutcome::Ok(StaleResponse {
            success: true,
            has_stale: true,
            message: None,
            tasks_by_employee: None,
        });
        let html = overdue_outcome(&outcome).unwrap();
        assert_eq!(html, "<h5>Overdue Tasks:</h5>");
        assert!(!html.contains("alert-success"));
    }

    #[test]
    fn test_category_tasks_sections_in_order() {
        let resp = CategoryResponse {
            success: true,
            has_tasks: true,
            message: None,
            tasks_by_employee: Some(
                vec![("Ana".to_string(), vec![task("Draft plan", "pending")])].into_iter().collect(),
            ),
            status_summary: Some(
                vec![("Pending".to_string(), 1.into()), ("Blocked".to_string(), 2.into())]
                    .into_iter()
                    .collect(),
            ),
            insight: Some("Unblock the API work first".to_string()),
        };
        let html = category_tasks("R&D", &resp);
        assert!(html.starts_with("<h5>Tasks for \"R&amp;D\":</h5>"));
        assert!(html.contains("Date: 2024-03-01"));
        assert!(!html.contains("days)"));
        assert!(html.contains("<li>Pending: 1 task(s)</li><li>Blocked: 2 task(s)</li>"));
        let tasks_at = html.find("employee-section").unwrap();
        let summary_at = html.find("Task Status Summary").unwrap();
        let insight_at = html.find("Unblock the API work first").unwrap();
        assert!(tasks_at < summary_at && summary_at < insight_at);
    }

    #[test]
    fn test_category_without_summary_or_insight() {
        let resp = CategoryResponse {
            success: true,
            has_tasks: true,
            tasks_by_employee: Some(OrderedMap::default()),
            ..Default::default()
        };
        let html = category_tasks("Ops", &resp);
        assert!(!html.contains("Task Status Summary"));
        assert!(!html.contains("insights-section"));
    }

    #[test]
    fn test_category_empty_is_informational() {
        let outcome = FlowOutcome::Ok(CategoryResponse {
            success: true,
            has_tasks: false,
            message: Some("No open tasks in project 'Ops'".to_string()),
            ..Default::default()
        });
        assert_eq!(
            category_outcome("Ops", &outcome).unwrap(),
            r#"<div class="alert alert-info">No open tasks in project &#39;Ops&#39;</div>"#
        );
    }
}
