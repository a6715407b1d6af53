//! View Renderer
//!
//! Turns backend entities into HTML fragments for the page. Every
//! user-supplied string goes through `escape_html`; the only raw
//! interpolations are server-assigned numeric ids.

use chrono::{DateTime, Local, Utc};

use crate::shared::{AuthStatus, Student};

/// Placeholder row shown when the student table is empty
pub const EMPTY_STATE_ROW: &str = "<tr><td colspan=\"7\" class=\"empty-state\">No students found. Click \"Add Student\" to create one.</td></tr>";

/// Escape the five HTML metacharacters
pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the enrollment date in the viewer's local calendar
fn format_enrollment_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%x").to_string()
}

/// One table row per student
pub fn student_row(student: &Student) -> String {
    let phone = match student.display_phone() {
        Some(phone) => escape_html(phone),
        None => "-".to_string(),
    };
    format!(
        "<tr>\
            <td>{id}</td>\
            <td>{name}</td>\
            <td>{email}</td>\
            <td><span class=\"course-badge\">{course}</span></td>\
            <td>{phone}</td>\
            <td>{date}</td>\
            <td>\
                <div class=\"action-buttons\">\
                    <button class=\"btn-edit\" data-student-id=\"{id}\">Edit</button>\
                    <button class=\"btn-delete\" data-student-id=\"{id}\">Delete</button>\
                </div>\
            </td>\
        </tr>",
        id = student.id,
        name = escape_html(&student.name),
        email = escape_html(&student.email),
        course = escape_html(&student.course),
        phone = phone,
        date = format_enrollment_date(student.enrollment_date),
    )
}

/// Table body for the student list; a single placeholder row when empty
pub fn student_rows(students: &[Student]) -> String {
    if students.is_empty() {
        return EMPTY_STATE_ROW.to_string();
    }
    students.iter().map(student_row).collect()
}

/// User-display fragment: display name plus an admin badge for admins
pub fn user_info_html(status: &AuthStatus) -> String {
    let badge = if status.is_admin() {
        "<span class=\"user-role\">Admin</span>"
    } else {
        ""
    };
    format!(
        "<div class=\"user-info\"><span class=\"user-name\">{}</span>{}</div>",
        escape_html(status.display_name()),
        badge
    )
}
