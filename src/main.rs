#[macro_use] extern crate rocket;

mod db;
mod error;
mod forms;
mod models;
mod routes;
mod schema;
mod store;
mod templates;


use rocket::{fairing::AdHoc, figment::Figment, Build, Rocket};
use serde::Deserialize;

pub const DEFAULT_SITE_TITLE: &str = "Todos";

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_site_title")]
    pub site_title: String,
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

pub fn app(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(db::stage())
        .attach(AdHoc::config::<AppConfig>())
        .mount(
            "/",
            routes![
                routes::list,
                routes::create_form,
                routes::create,
                routes::update_form,
                routes::update,
                routes::confirm_delete,
                routes::delete,
                routes::toggle,
            ],
        )
        .mount("/api", routes![routes::api_list, routes::api_get])
        .register("/", catchers![routes::not_found])
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    // ROCKET_* variables from .env take part in configuration
    dotenvy::dotenv().ok();

    let _rocket = app(rocket::Config::figment()).launch().await?;

    Ok(())
}
