pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod models;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::reservations::commit_reservation,
        handlers::reviews::reviewable_items,
        handlers::config::test_connection,
    ),
    components(schemas(
        handlers::reservations::CommitReservationRequest,
        handlers::reviews::ReviewableOrder,
        handlers::reviews::ReviewableReservation,
        handlers::config::TestConnectionRequest,
    ))
)]
struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(Logger::default())
            .service(
                web::resource("/").route(web::get().to(handlers::config::bootstrap_redirect)),
            )
            .service(
                web::resource("/reservations/commit")
                    .route(web::post().to(handlers::reservations::commit_reservation))
                    .default_service(web::route().to(handlers::post_required)),
            )
            .service(
                web::resource("/customers/{id}/reviewable")
                    .route(web::get().to(handlers::reviews::reviewable_items))
                    .default_service(web::route().to(handlers::get_required)),
            )
            .service(
                web::resource("/config/test-connection")
                    .route(web::post().to(handlers::config::test_connection))
                    .default_service(web::route().to(handlers::post_required)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
