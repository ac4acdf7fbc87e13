//! HTML rendering for the task list page.
//!
//! The page shell is embedded at compile time with `include_str!`; the
//! task list fragment is built with `format!` and substituted into the
//! shell. All user-supplied text passes through [`html_escape`].

use crate::types::Task;

/// The page shell with the add-task form and a list placeholder.
const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Marker in the page shell replaced by the rendered task list.
const TASK_LIST_MARKER: &str = "<!-- TASK_LIST -->";

/// Render the full list page for the given tasks.
pub fn render_index(tasks: &[Task]) -> String {
    PAGE_TEMPLATE.replace(TASK_LIST_MARKER, &render_task_list(tasks))
}

/// Render the task list fragment.
fn render_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return r#"<div class="empty-state">No tasks yet. Add something to do above.</div>"#
            .to_string();
    }

    let mut html = String::from(r#"<div class="todo-list">"#);

    for task in tasks {
        let item_class = if task.completed {
            "todo-item completed-task"
        } else {
            "todo-item"
        };
        let (toggle_class, toggle_label, toggle_title) = if task.completed {
            ("btn btn-toggle undo", "Undo", "Mark as pending")
        } else {
            ("btn btn-toggle", "Done", "Mark as complete")
        };

        html.push_str(&format!(
            r#"<div class="{item_class}">
                <span class="task-text">{text}</span>
                <div class="actions">
                    <a href="/?action=toggle&amp;id={id}" class="{toggle_class}" title="{toggle_title}">{toggle_label}</a>
                    <a href="/?action=delete&amp;id={id}" class="btn btn-delete" title="Delete task"
                       onclick="return confirm('Are you sure you want to delete this task?');">Delete</a>
                </div>
            </div>"#,
            item_class = item_class,
            text = html_escape(&task.description),
            id = task.id,
            toggle_class = toggle_class,
            toggle_title = toggle_title,
            toggle_label = toggle_label,
        ));
    }

    html.push_str("</div>");
    html
}

/// Escape a string for safe inclusion in HTML.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
