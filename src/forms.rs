use chrono::NaiveDate;
use rocket::form::{self, Context, FromFormField, ValueField};

use crate::models::{TodoDraft, TITLE_MAX_LEN};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A `<input type="date">` value. Empty means no due date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DueDate(pub Option<NaiveDate>);

#[rocket::async_trait]
impl<'v> FromFormField<'v> for DueDate {
    fn from_value(field: ValueField<'v>) -> form::Result<'v, Self> {
        let raw = field.value.trim();
        if raw.is_empty() {
            return Ok(DueDate(None));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(|date| DueDate(Some(date)))
            .map_err(|_| form::Error::validation("Enter a valid date.").into())
    }

    fn default() -> Option<Self> {
        Some(DueDate(None))
    }
}

fn valid_title<'v>(value: &str) -> form::Result<'v, ()> {
    let value = value.trim();
    if value.is_empty() {
        Err(form::Error::validation("This field is required."))?;
    }
    if value.chars().count() > TITLE_MAX_LEN {
        Err(form::Error::validation(format!(
            "Ensure this value has at most {} characters.",
            TITLE_MAX_LEN
        )))?;
    }
    Ok(())
}

fn draft(title: &str, description: Option<&str>, due_date: DueDate) -> TodoDraft {
    TodoDraft::new(title)
        .description(description.unwrap_or_default())
        .due_date(due_date.0)
}

/// The create form. A submitted `resolved` field is not part of it.
#[derive(Debug, FromForm)]
pub struct NewTodoForm {
    #[field(validate = valid_title())]
    pub title: String,
    pub description: Option<String>,
    pub due_date: DueDate,
}

impl NewTodoForm {
    pub fn draft(&self) -> TodoDraft {
        draft(&self.title, self.description.as_deref(), self.due_date)
    }
}

#[derive(Debug, FromForm)]
pub struct TodoForm {
    #[field(validate = valid_title())]
    pub title: String,
    pub description: Option<String>,
    pub due_date: DueDate,
    pub resolved: bool,
}

impl TodoForm {
    pub fn draft(&self) -> TodoDraft {
        draft(&self.title, self.description.as_deref(), self.due_date)
    }
}

/// Messages for each field of a rejected submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Vec<String>,
    pub description: Vec<String>,
    pub due_date: Vec<String>,
    pub resolved: Vec<String>,
}

impl FieldErrors {
    pub fn from_context(context: &Context<'_>) -> Self {
        let messages = |name: &str| -> Vec<String> {
            context.field_errors(name).map(message).collect()
        };

        FieldErrors {
            title: messages("title"),
            description: messages("description"),
            due_date: messages("due_date"),
            resolved: messages("resolved"),
        }
    }
}

fn message(error: &form::Error<'_>) -> String {
    match &error.kind {
        form::error::ErrorKind::Missing => "This field is required.".to_string(),
        form::error::ErrorKind::Validation(msg) => msg.to_string(),
        other => other.to_string(),
    }
}
