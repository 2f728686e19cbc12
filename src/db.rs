use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{error, info};
use rocket::{fairing::AdHoc, Build, Rocket};
use rocket_sync_db_pools::database;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[database("todos")]
pub struct Db(diesel::SqliteConnection);

async fn run_migrations(rocket: Rocket<Build>) -> rocket::fairing::Result {
    let Some(db) = Db::get_one(&rocket).await else {
        error!("no `todos` database connection available for migrations");
        return Err(rocket);
    };

    let applied = db
        .run(|c| {
            c.run_pending_migrations(MIGRATIONS)
                .map(|versions| versions.len())
                .map_err(|e| e.to_string())
        })
        .await;

    match applied {
        Ok(0) => Ok(rocket),
        Ok(n) => {
            info!("applied {} pending migration(s)", n);
            Ok(rocket)
        }
        Err(e) => {
            error!("failed to run database migrations: {}", e);
            Err(rocket)
        }
    }
}

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("Diesel SQLite Stage", |rocket| async {
        rocket
            .attach(Db::fairing())
            .attach(AdHoc::try_on_ignite("Diesel Migrations", run_migrations))
    })
}
