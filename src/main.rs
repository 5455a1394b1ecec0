use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use vanguard::auth;
use vanguard::auth::rate_limit::RateLimiter;
use vanguard::config::AppConfig;
use vanguard::handlers;
use vanguard::models::catalog::Catalog;
use vanguard::ocr::VisionClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {e}");
            return Err(std::io::Error::other(e));
        }
    };

    // Static content table, built once and shared by reference
    let catalog = Catalog::load();

    let vision = VisionClient::new(reqwest::Client::new(), config.vision_api_key.clone());
    let limiter = RateLimiter::new();

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(vision.clone()))
            .app_data(web::Data::new(limiter.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes: the gate itself
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            // Gated routes
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_gate))
                    .route("/", web::get().to(handlers::page_handlers::home))
                    .route("/logout", web::post().to(handlers::auth_handlers::logout))
                    .route("/about", web::get().to(handlers::page_handlers::about))
                    .route("/vision", web::get().to(handlers::page_handlers::vision))
                    .route("/programs", web::get().to(handlers::page_handlers::programs))
                    // Documentation browser
                    .route(
                        "/documentation",
                        web::get().to(handlers::documentation_handlers::index),
                    )
                    .route(
                        "/documentation/{module_id}",
                        web::get().to(handlers::documentation_handlers::module_detail),
                    )
                    // Candidate / feedback selection flows
                    .route(
                        "/candidates",
                        web::get().to(handlers::candidate_handlers::list),
                    )
                    .route(
                        "/candidate/{candidate_id}/class-type",
                        web::get().to(handlers::candidate_handlers::class_type),
                    )
                    .route(
                        "/candidate/{candidate_id}/feedback/{module_id}/{session_type}",
                        web::get().to(handlers::candidate_handlers::feedback),
                    )
                    // OCR utility
                    .route("/tools/ocr", web::get().to(handlers::ocr_handlers::page))
                    .route("/tools/ocr", web::post().to(handlers::ocr_handlers::extract)),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
