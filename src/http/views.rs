//! HTML rendering for the listing, matrix, and edit pages.

use crate::matrix::{Quadrant, QuadrantCounts, ALL_QUADRANTS};
use crate::models::task::{Task, DUE_DATE_FORMAT};

use super::handlers::{listing_uri, ListQuery, ViewMode};

/// Escape text for safe interpolation into HTML bodies and attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} — eisenplan</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; max-width: 60rem; margin: 2rem auto; }}\n\
         .done {{ text-decoration: line-through; color: #888; }}\n\
         .quadrant {{ border: 1px solid #ccc; border-radius: 4px; padding: 0.5rem 1rem; margin-bottom: 1rem; }}\n\
         .badge {{ font-size: 0.8em; border: 1px solid #999; border-radius: 3px; padding: 0 0.3em; }}\n\
         .actions a {{ margin-left: 0.5em; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

fn hidden_context_fields(query: ListQuery) -> String {
    let mut fields = String::new();
    if let Some(urgent) = query.urgent {
        fields.push_str(&format!(
            "<input type=\"hidden\" name=\"urgent\" value=\"{urgent}\">\n"
        ));
    }
    if let Some(important) = query.important {
        fields.push_str(&format!(
            "<input type=\"hidden\" name=\"important\" value=\"{important}\">\n"
        ));
    }
    fields.push_str(&format!(
        "<input type=\"hidden\" name=\"view_mode\" value=\"{}\">\n",
        query.view_mode.as_str()
    ));
    fields
}

fn add_form(query: ListQuery) -> String {
    format!(
        "<form method=\"post\" action=\"/add\">\n\
         <input type=\"text\" name=\"content\" placeholder=\"New task\" required>\n\
         <label><input type=\"checkbox\" name=\"is_urgent\"> urgent</label>\n\
         <label><input type=\"checkbox\" name=\"is_important\"> important</label>\n\
         <input type=\"date\" name=\"due_date\">\n\
         {context}<button type=\"submit\">Add</button>\n</form>\n",
        context = hidden_context_fields(query),
    )
}

fn filter_link(label: &str, target: ListQuery, current: ListQuery) -> String {
    if target == current {
        format!("<strong>{}</strong>", escape(label))
    } else {
        format!(
            "<a href=\"{}\">{}</a>",
            escape(&listing_uri(target)),
            escape(label)
        )
    }
}

fn filter_bar(query: ListQuery) -> String {
    let filters = [
        ("All", None, None),
        ("Urgent", Some(true), None),
        ("Not urgent", Some(false), None),
        ("Important", None, Some(true)),
        ("Not important", None, Some(false)),
    ];
    let links: Vec<String> = filters
        .iter()
        .map(|&(label, urgent, important)| {
            filter_link(
                label,
                ListQuery {
                    urgent,
                    important,
                    view_mode: query.view_mode,
                },
                query,
            )
        })
        .collect();

    let other_mode = match query.view_mode {
        ViewMode::List => ("Matrix view", ViewMode::Matrix),
        ViewMode::Matrix => ("List view", ViewMode::List),
    };
    let mode_link = filter_link(
        other_mode.0,
        ListQuery {
            view_mode: other_mode.1,
            ..query
        },
        query,
    );

    format!(
        "<p>Filter: {} | {mode_link}</p>\n",
        links.join(" &middot; ")
    )
}

fn task_row(task: &Task, show_quadrant: bool) -> String {
    let class = if task.completed { " class=\"done\"" } else { "" };
    let due = task.due_date.map_or(String::new(), |date| {
        format!(" <small>due {}</small>", date.format(DUE_DATE_FORMAT))
    });
    let badge = if show_quadrant {
        format!(" <span class=\"badge\">{}</span>", task.quadrant().label())
    } else {
        String::new()
    };
    format!(
        "<li{class}>{content}{due}{badge}\
         <span class=\"actions\">\
         <a href=\"/complete/{id}\">{toggle}</a>\
         <a href=\"/edit/{id}\">edit</a>\
         <a href=\"/delete/{id}\">delete</a>\
         </span></li>\n",
        content = escape(&task.content),
        id = task.id,
        toggle = if task.completed { "reopen" } else { "done" },
    )
}

/// Render the flat list page.
#[must_use]
pub fn list_page(tasks: &[Task], query: ListQuery) -> String {
    let mut body = filter_bar(query);
    body.push_str(&add_form(query));
    if tasks.is_empty() {
        body.push_str("<p>No tasks.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for task in tasks {
            body.push_str(&task_row(task, true));
        }
        body.push_str("</ul>\n");
    }
    page_shell("Tasks", &body)
}

/// Render the matrix page: one section per quadrant with its count.
#[must_use]
pub fn matrix_page(tasks: &[Task], counts: QuadrantCounts, query: ListQuery) -> String {
    let mut body = filter_bar(query);
    body.push_str(&add_form(query));
    for quadrant in ALL_QUADRANTS {
        body.push_str(&quadrant_section(quadrant, tasks, counts.get(quadrant)));
    }
    page_shell("Eisenhower matrix", &body)
}

fn quadrant_section(quadrant: Quadrant, tasks: &[Task], count: usize) -> String {
    let mut section = format!(
        "<div class=\"quadrant\" id=\"{id}\">\n\
         <h2>{label} <small>({count})</small></h2>\n\
         <p><em>{description}</em></p>\n",
        id = quadrant.as_slug(),
        label = quadrant.label(),
        description = quadrant.description(),
    );
    let members: Vec<&Task> = tasks.iter().filter(|t| t.quadrant() == quadrant).collect();
    if members.is_empty() {
        section.push_str("<p>Empty.</p>\n");
    } else {
        section.push_str("<ul>\n");
        for task in members {
            section.push_str(&task_row(task, false));
        }
        section.push_str("</ul>\n");
    }
    section.push_str("</div>\n");
    section
}

/// Render the edit form pre-populated with an existing task.
#[must_use]
pub fn edit_page(task: &Task) -> String {
    let urgent_checked = if task.is_urgent { " checked" } else { "" };
    let important_checked = if task.is_important { " checked" } else { "" };
    let due_value = task
        .due_date
        .map_or(String::new(), |date| date.format(DUE_DATE_FORMAT).to_string());
    let body = format!(
        "<form method=\"post\" action=\"/update/{id}\">\n\
         <input type=\"text\" name=\"content\" value=\"{content}\" required>\n\
         <label><input type=\"checkbox\" name=\"is_urgent\"{urgent_checked}> urgent</label>\n\
         <label><input type=\"checkbox\" name=\"is_important\"{important_checked}> important</label>\n\
         <input type=\"date\" name=\"due_date\" value=\"{due_value}\">\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/\">Back to tasks</a></p>\n",
        id = task.id,
        content = escape(&task.content),
    );
    page_shell("Edit task", &body)
}
