use askama::Template;
use rocket::form::Context;
use rocket::http::uncased::AsUncased;
use rocket::response::content::RawHtml;

use crate::error::Result;
use crate::forms::{FieldErrors, DATE_FORMAT};
use crate::models::Todo;

pub fn render<T: Template>(page: &T) -> Result<RawHtml<String>> {
    Ok(RawHtml(page.render()?))
}

#[derive(Template)]
#[template(path = "todo_list.html")]
pub struct TodoListPage<'a> {
    pub site_title: &'a str,
    pub todos: Vec<Todo>,
}

#[derive(Template)]
#[template(path = "todo_form.html")]
pub struct TodoFormPage<'a> {
    pub site_title: &'a str,
    pub heading: &'static str,
    pub action: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub show_resolved: bool,
    pub resolved: bool,
    pub errors: FieldErrors,
}

impl<'a> TodoFormPage<'a> {
    pub fn create(site_title: &'a str) -> Self {
        TodoFormPage {
            site_title,
            heading: "New todo",
            action: "/create".to_string(),
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            show_resolved: false,
            resolved: false,
            errors: FieldErrors::default(),
        }
    }

    pub fn update(site_title: &'a str, todo: &Todo) -> Self {
        TodoFormPage {
            site_title,
            heading: "Edit todo",
            action: format!("/{}/update", todo.id),
            title: todo.title.clone(),
            description: todo.description.clone(),
            due_date: todo
                .due_date
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            show_resolved: true,
            resolved: todo.resolved,
            errors: FieldErrors::default(),
        }
    }

    /// Refills the form from a rejected submission.
    pub fn resubmit(mut self, context: &Context<'_>) -> Self {
        let value = |name: &str| context.field_value(name).unwrap_or_default().to_string();

        self.title = value("title");
        self.description = value("description");
        self.due_date = value("due_date");
        if self.show_resolved {
            self.resolved = context.field_value("resolved").map_or(false, checked);
        }
        self.errors = FieldErrors::from_context(context);
        self
    }
}

/// Mirrors Rocket's `bool` form parsing: an empty value counts as checked.
fn checked(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let value = value.as_uncased();
    value == "on" || value == "yes" || value == "true"
}

#[derive(Template)]
#[template(path = "todo_confirm_delete.html")]
pub struct ConfirmDeletePage<'a> {
    pub site_title: &'a str,
    pub todo: Todo,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage<'a> {
    pub site_title: &'a str,
    pub path: String,
}
