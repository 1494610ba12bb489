//! HTML view rendering.
//!
//! # Design
//! Templates are compiled into the binary with `include_str!` and
//! registered once in a lazy `Tera` registry; handlers pass domain values
//! and get back ready-to-send `Html`. The 404 and 500 pages carry no
//! variables, so they are plain static includes.

use axum::response::Html;
use once_cell::sync::Lazy;
use tera::{Context, Tera};
use todo_core::Todo;

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();

    tera.add_raw_template("index.html", include_str!("../templates/index.html"))
        .expect("failed to register index.html template");

    tera.add_raw_template("todo.html", include_str!("../templates/todo.html"))
        .expect("failed to register todo.html template");

    tera
});

/// Fixed page for unmatched routes and missing rows.
pub const NOT_FOUND_PAGE: &str = include_str!("../templates/404.html");

/// Fixed page for internal failures.
pub const ERROR_PAGE: &str = include_str!("../templates/500.html");

/// The list view shown at `/`.
pub fn index(todos: &[Todo]) -> Result<Html<String>, tera::Error> {
    let mut context = Context::new();
    context.insert("title", "Todos");
    context.insert("todos", todos);
    TEMPLATES.render("index.html", &context).map(Html)
}

/// The detail view for a single todo.
pub fn detail(todo: &Todo) -> Result<Html<String>, tera::Error> {
    let mut context = Context::new();
    context.insert("todo", todo);
    TEMPLATES.render("todo.html", &context).map(Html)
}
