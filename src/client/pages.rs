//! Page Handlers
//!
//! One async function per user action: validate locally, call the
//! backend, then notify or redirect. Every transport failure ends in a
//! visible notice (or a redirect), never in a silent error.

use std::time::Duration;

use chrono::Utc;
use tracing::error;

use crate::client::notify::Notice;
use crate::client::page::{PageContext, Route};
use crate::client::render;
use crate::client::session;
use crate::client::validate;
use crate::shared::{ApiError, Credentials, Registration, StudentDraft, StudentUpdate};

/// Delay before leaving the login page after a successful login
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// Delay before redirecting after other successful operations
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

fn field(ctx: &PageContext, id: &str) -> String {
    ctx.surface().field_value(id).unwrap_or_default()
}

/// Submit the login form
pub async fn submit_login(ctx: &PageContext) {
    let credentials = Credentials {
        username: field(ctx, "username"),
        password: field(ctx, "password"),
    };
    if let Err(e) = validate::validate_login(&credentials) {
        ctx.notify(Notice::error(e.to_string()));
        return;
    }

    match ctx.api.login(&credentials).await {
        Ok(outcome) if outcome.success => {
            ctx.notify(Notice::success("Login successful! Redirecting..."));
            ctx.redirect_after(LOGIN_REDIRECT_DELAY, Route::Dashboard);
        }
        Ok(outcome) => ctx.notify(Notice::error(outcome.error_or("Login failed"))),
        Err(e) => {
            error!("Login error: {e}");
            ctx.notify(Notice::error("Login failed. Please try again."));
        }
    }
}

/// Submit the registration form
pub async fn submit_registration(ctx: &PageContext) {
    let form = Registration {
        full_name: field(ctx, "fullName"),
        username: field(ctx, "username"),
        email: field(ctx, "email"),
        password: field(ctx, "password"),
        confirm_password: field(ctx, "confirmPassword"),
    };
    if let Err(e) = validate::validate_registration(&form) {
        ctx.notify(Notice::error(e.to_string()));
        return;
    }

    match ctx.api.register(&form).await {
        Ok(outcome) if outcome.success => {
            ctx.notify(Notice::success("Registration successful! Redirecting to login..."));
            ctx.redirect_after(REDIRECT_DELAY, Route::Login);
        }
        Ok(outcome) => ctx.notify(Notice::error(outcome.error_or("Registration failed"))),
        Err(e) => {
            error!("Registration error: {e}");
            ctx.notify(Notice::error("Registration failed. Please try again."));
        }
    }
}

/// End the session. The redirect to login is the only guaranteed outcome;
/// it happens whatever the server answers, including on transport failure.
pub async fn logout(ctx: &PageContext) {
    if let Err(e) = ctx.api.logout().await {
        error!("Logout error: {e}");
    }
    ctx.redirect(Route::Login);
}

/// Load and render the student list
pub async fn load_students(ctx: &PageContext) {
    if !session::check_auth(ctx).await {
        return;
    }

    match ctx.api.list_students().await {
        Ok(students) => {
            ctx.surface()
                .set_fragment("studentsTableBody", &render::student_rows(&students));
        }
        Err(ApiError::Unauthorized) => ctx.redirect(Route::Login),
        Err(e) => {
            error!("Error loading students: {e}");
            ctx.notify(Notice::error("Error loading students"));
        }
    }
}

/// Submit the add-student form
pub async fn submit_new_student(ctx: &PageContext) {
    if !session::check_auth(ctx).await {
        return;
    }

    let name = field(ctx, "name");
    let email = field(ctx, "email");
    let course = field(ctx, "course");
    if let Err(e) = validate::validate_student_fields(&name, &email, &course) {
        ctx.notify(Notice::error(e.to_string()));
        return;
    }

    let draft = StudentDraft {
        name,
        email,
        course,
        phone: field(ctx, "phone"),
        address: field(ctx, "address"),
        enrollment_date: Utc::now(),
    };
    match ctx.api.create_student(&draft).await {
        Ok(outcome) if outcome.success => {
            ctx.notify(Notice::success("Student added successfully!"));
            ctx.redirect_after(REDIRECT_DELAY, Route::StudentList);
        }
        Ok(outcome) => ctx.notify(Notice::error(outcome.error_or("Error adding student"))),
        Err(e) => {
            error!("Error adding student: {e}");
            ctx.notify(Notice::error("Error adding student"));
        }
    }
}

/// Jump to the update page for one student
pub fn edit_student(ctx: &PageContext, id: i64) {
    ctx.redirect(Route::UpdateStudent(id));
}

/// Populate the update form from the record named in the `id` query
/// parameter. A missing or non-numeric id sends the visitor back to the
/// list page.
pub async fn load_student_for_update(ctx: &PageContext) {
    if !session::check_auth(ctx).await {
        return;
    }

    let id = match ctx.query_param("id").and_then(|v| v.parse::<i64>().ok()) {
        Some(id) => id,
        None => {
            ctx.redirect(Route::StudentList);
            return;
        }
    };

    match ctx.api.student(id).await {
        Ok(student) => {
            let surface = ctx.surface();
            surface.set_field_value("studentId", &student.id.to_string());
            surface.set_field_value("name", &student.name);
            surface.set_field_value("email", &student.email);
            surface.set_field_value("course", &student.course);
            surface.set_field_value("phone", student.phone.as_deref().unwrap_or(""));
            surface.set_field_value("address", student.address.as_deref().unwrap_or(""));
        }
        Err(ApiError::Unauthorized) => ctx.redirect(Route::Login),
        Err(ApiError::Forbidden) => {
            ctx.notify(Notice::error("You don't have permission to edit this student"));
            ctx.redirect_after(REDIRECT_DELAY, Route::StudentList);
        }
        Err(e) => {
            error!("Error loading student: {e}");
            ctx.notify(Notice::error("Error loading student data"));
        }
    }
}

/// Submit the update-student form
pub async fn submit_student_update(ctx: &PageContext) {
    if !session::check_auth(ctx).await {
        return;
    }

    let id = match field(ctx, "studentId").parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            // The hidden id field was never populated; the form cannot be
            // submitted meaningfully.
            ctx.redirect(Route::StudentList);
            return;
        }
    };

    let name = field(ctx, "name");
    let email = field(ctx, "email");
    let course = field(ctx, "course");
    if let Err(e) = validate::validate_student_fields(&name, &email, &course) {
        ctx.notify(Notice::error(e.to_string()));
        return;
    }

    let update = StudentUpdate {
        id,
        name,
        email,
        course,
        phone: field(ctx, "phone"),
        address: field(ctx, "address"),
        enrollment_date: Utc::now(),
    };
    match ctx.api.update_student(&update).await {
        Ok(outcome) if outcome.success => {
            ctx.notify(Notice::success("Student updated successfully!"));
            ctx.redirect_after(REDIRECT_DELAY, Route::StudentList);
        }
        Ok(outcome) => ctx.notify(Notice::error(outcome.error_or("Error updating student"))),
        Err(e) => {
            error!("Error updating student: {e}");
            ctx.notify(Notice::error("Error updating student"));
        }
    }
}

/// Delete one student, gated by a confirmation prompt. On success the
/// list is refreshed in place; a declined prompt issues no request.
pub async fn delete_student(ctx: &PageContext, id: i64) {
    if !session::check_auth(ctx).await {
        return;
    }

    if !ctx
        .surface()
        .confirm("Are you sure you want to delete this student?")
    {
        return;
    }

    match ctx.api.delete_student(id).await {
        Ok(outcome) if outcome.success => {
            ctx.notify(Notice::success("Student deleted successfully!"));
            load_students(ctx).await;
        }
        Ok(outcome) => ctx.notify(Notice::error(outcome.error_or("Error deleting student"))),
        Err(e) => {
            error!("Error deleting student: {e}");
            ctx.notify(Notice::error("Error deleting student"));
        }
    }
}

/// Dashboard widget: total number of students. Best effort; failures are
/// only logged.
pub async fn load_dashboard_stats(ctx: &PageContext) {
    match ctx.api.list_students().await {
        Ok(students) => {
            ctx.surface()
                .set_text("totalStudents", &students.len().to_string());
        }
        Err(e) => error!("Error loading stats: {e}"),
    }
}

/// Page-load entry point: run the guard and the loader matching the
/// current path. Login and registration pages load nothing.
pub async fn dispatch(ctx: &PageContext) {
    let path = ctx.current_path();
    if session::is_auth_page(&path) {
        return;
    }

    if !session::check_auth(ctx).await {
        return;
    }

    if path.contains("view-students.html") {
        load_students(ctx).await;
    } else if path.contains("update-student.html") {
        load_student_for_update(ctx).await;
    } else if path.contains("index.html") || path == ctx.config.page_path("") {
        load_dashboard_stats(ctx).await;
    }
}
