use chrono::{NaiveDateTime, Utc};
use diesel::dsl::not;
use diesel::prelude::*;

use crate::models::{NewTodo, Todo, TodoChanges, TodoDraft};
use crate::schema::todos;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn list(conn: &mut SqliteConnection) -> QueryResult<Vec<Todo>> {
    todos::table
        .order((todos::created_at.desc(), todos::id.desc()))
        .select(Todo::as_select())
        .load(conn)
}

pub fn find(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Todo>> {
    todos::table
        .find(id)
        .select(Todo::as_select())
        .first(conn)
        .optional()
}

pub fn insert(conn: &mut SqliteConnection, draft: &TodoDraft) -> QueryResult<Todo> {
    let stamp = now();
    let new_todo = NewTodo {
        title: &draft.title,
        description: &draft.description,
        due_date: draft.due_date,
        resolved: false,
        created_at: stamp,
        updated_at: stamp,
    };

    diesel::insert_into(todos::table)
        .values(&new_todo)
        .returning(Todo::as_returning())
        .get_result(conn)
}

/// Returns `false` when no todo has the given id.
pub fn update(
    conn: &mut SqliteConnection,
    id: i32,
    draft: &TodoDraft,
    resolved: bool,
) -> QueryResult<bool> {
    let changes = TodoChanges {
        title: &draft.title,
        description: &draft.description,
        due_date: draft.due_date,
        resolved,
        updated_at: now(),
    };

    diesel::update(todos::table.find(id))
        .set(&changes)
        .execute(conn)
        .map(|rows| rows == 1)
}

pub fn delete(conn: &mut SqliteConnection, id: i32) -> QueryResult<bool> {
    diesel::delete(todos::table.find(id))
        .execute(conn)
        .map(|rows| rows == 1)
}

pub fn toggle_resolved(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Todo>> {
    conn.transaction(|c| {
        let rows = diesel::update(todos::table.find(id))
            .set((
                todos::resolved.eq(not(todos::resolved)),
                todos::updated_at.eq(now()),
            ))
            .execute(c)?;

        if rows == 0 {
            return Ok(None);
        }
        find(c, id)
    })
}
