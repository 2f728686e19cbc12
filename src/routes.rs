use log::{error, info};
use rocket::form::{Contextual, Form};
use rocket::response::{content::RawHtml, Redirect};
use rocket::serde::json::Json;
use rocket::{Request, State};

use crate::db::Db;
use crate::error::Result;
use crate::forms::{NewTodoForm, TodoForm};
use crate::models::Todo;
use crate::store;
use crate::templates::{render, ConfirmDeletePage, NotFoundPage, TodoFormPage, TodoListPage};
use crate::AppConfig;

/// Outcome of a form POST: back to the list, or the form again with errors.
#[derive(Responder)]
pub enum Submission {
    Redirect(Redirect),
    Page(RawHtml<String>),
}

fn to_list() -> Redirect {
    Redirect::found(uri!(list))
}

#[get("/")]
pub async fn list(db: Db, config: &State<AppConfig>) -> Result<RawHtml<String>> {
    let todos = db.run(store::list).await?;

    render(&TodoListPage {
        site_title: &config.site_title,
        todos,
    })
}

#[get("/create")]
pub fn create_form(config: &State<AppConfig>) -> Result<RawHtml<String>> {
    render(&TodoFormPage::create(&config.site_title))
}

#[post("/create", data = "<form>")]
pub async fn create(
    db: Db,
    config: &State<AppConfig>,
    form: Form<Contextual<'_, NewTodoForm>>,
) -> Result<Submission> {
    let form = form.into_inner();
    let Some(submitted) = form.value else {
        let page = TodoFormPage::create(&config.site_title).resubmit(&form.context);
        return render(&page).map(Submission::Page);
    };

    let draft = submitted.draft();
    let todo = db.run(move |c| store::insert(c, &draft)).await?;
    info!("created todo {}", todo.id);

    Ok(Submission::Redirect(to_list()))
}

#[get("/<id>/update")]
pub async fn update_form(
    db: Db,
    config: &State<AppConfig>,
    id: i32,
) -> Result<Option<RawHtml<String>>> {
    let Some(todo) = db.run(move |c| store::find(c, id)).await? else {
        return Ok(None);
    };

    render(&TodoFormPage::update(&config.site_title, &todo)).map(Some)
}

#[post("/<id>/update", data = "<form>")]
pub async fn update(
    db: Db,
    config: &State<AppConfig>,
    id: i32,
    form: Form<Contextual<'_, TodoForm>>,
) -> Result<Option<Submission>> {
    let Some(todo) = db.run(move |c| store::find(c, id)).await? else {
        return Ok(None);
    };

    let form = form.into_inner();
    let Some(submitted) = form.value else {
        let page = TodoFormPage::update(&config.site_title, &todo).resubmit(&form.context);
        return render(&page).map(|html| Some(Submission::Page(html)));
    };

    let draft = submitted.draft();
    let resolved = submitted.resolved;
    if !db.run(move |c| store::update(c, id, &draft, resolved)).await? {
        return Ok(None);
    }
    info!("updated todo {}", id);

    Ok(Some(Submission::Redirect(to_list())))
}

#[get("/<id>/delete")]
pub async fn confirm_delete(
    db: Db,
    config: &State<AppConfig>,
    id: i32,
) -> Result<Option<RawHtml<String>>> {
    let Some(todo) = db.run(move |c| store::find(c, id)).await? else {
        return Ok(None);
    };

    render(&ConfirmDeletePage {
        site_title: &config.site_title,
        todo,
    })
    .map(Some)
}

#[post("/<id>/delete")]
pub async fn delete(db: Db, id: i32) -> Result<Option<Redirect>> {
    if !db.run(move |c| store::delete(c, id)).await? {
        return Ok(None);
    }
    info!("deleted todo {}", id);

    Ok(Some(to_list()))
}

#[get("/<id>/toggle")]
pub async fn toggle(db: Db, id: i32) -> Result<Option<Redirect>> {
    let Some(todo) = db.run(move |c| store::toggle_resolved(c, id)).await? else {
        return Ok(None);
    };
    info!("todo {} resolved = {}", todo.id, todo.resolved);

    Ok(Some(to_list()))
}

#[get("/todos")]
pub async fn api_list(db: Db) -> Result<Json<Vec<Todo>>> {
    Ok(Json(db.run(store::list).await?))
}

#[get("/todos/<id>")]
pub async fn api_get(db: Db, id: i32) -> Result<Option<Json<Todo>>> {
    Ok(db.run(move |c| store::find(c, id)).await?.map(Json))
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> RawHtml<String> {
    let site_title = req
        .rocket()
        .state::<AppConfig>()
        .map(|config| config.site_title.as_str())
        .unwrap_or(crate::DEFAULT_SITE_TITLE);

    let page = NotFoundPage {
        site_title,
        path: req.uri().path().to_string(),
    };

    match render(&page) {
        Ok(html) => html,
        Err(e) => {
            error!("failed to render 404 page: {}", e);
            RawHtml("<h1>Not found</h1>".to_string())
        }
    }
}
