use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use gallery_service::handlers;
use gallery_service::openapi::ApiDoc;
use gallery_service::providers::OpenAiImageClient;
use gallery_service::services::CloudinaryClient;
use gallery_service::{db, error, metrics, AppState, Config};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn health_summary(state: web::Data<AppState>) -> HttpResponse {
    match db::ping(&state.db).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "gallery-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("MongoDB ping failed: {}", e),
            "service": "gallery-service"
        })),
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> actix_web::Result<HttpResponse> {
    let body = serde_json::to_string(&*doc).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Support container healthchecks via CLI subcommand: `healthcheck-http` or legacy `healthcheck`
    {
        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "healthcheck" || cmd == "healthcheck-http" {
                let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
                let url = format!("http://127.0.0.1:{}/api/v1/health", port);
                match reqwest::Client::new().get(&url).send().await {
                    Ok(resp) if resp.status().is_success() => return Ok(()),
                    Ok(resp) => {
                        eprintln!("healthcheck HTTP status: {}", resp.status());
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"));
                    }
                    Err(e) => {
                        eprintln!("healthcheck HTTP error: {}", e);
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"));
                    }
                }
            }
        }
    }

    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting gallery-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app_env);

    // Initialize MongoDB and verify it is reachable before serving traffic
    let database = match db::connect(&config).await {
        Ok(database) => database,
        Err(e) => {
            tracing::error!("MongoDB client creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create MongoDB client: {}", e);
            std::process::exit(1);
        }
    };

    match db::ping(&database).await {
        Ok(()) => {
            tracing::info!("✅ MongoDB connection validated");
        }
        Err(e) => {
            tracing::error!("❌ FATAL: MongoDB ping failed - {}", e);
            tracing::error!("   Fix: Ensure MongoDB is running and reachable via MONGODB_URL");
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("MongoDB initialization failed: {}", e),
            ));
        }
    }

    // Initialize upstream clients
    let generation = Arc::new(
        OpenAiImageClient::from_config(&config)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );
    let storage = Arc::new(
        CloudinaryClient::from_config(&config)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );

    if !generation.is_configured() {
        tracing::warn!("OPENAI_API_KEY not set; image generation requests will be rejected");
    }
    if !storage.is_configured() {
        tracing::warn!("Cloudinary credentials not set; post creation requests will be rejected");
    }

    let state = web::Data::new(AppState {
        db: database,
        generation,
        storage,
    });

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        // Build CORS configuration
        let cors_builder = Cors::default();
        let mut cors = cors_builder;
        for origin in config.cors_allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(web::Data::new(openapi_doc.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api/v1/openapi.json", openapi_doc.clone()),
            )
            .route("/api/v1/openapi.json", web::get().to(openapi_json))
            .app_data(state.clone())
            .app_data(
                web::JsonConfig::default()
                    .limit(config.max_json_payload_bytes)
                    .error_handler(error::json_error_handler),
            )
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .route("/", web::get().to(handlers::index_greeting))
            // Health check endpoints
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/post").service(
                            web::resource("")
                                .route(web::get().to(handlers::list_posts))
                                .route(web::post().to(handlers::create_post)),
                        ),
                    )
                    .service(
                        web::scope("/dalle").service(
                            web::resource("")
                                .route(web::get().to(handlers::generation_greeting))
                                .route(web::post().to(handlers::generate_image)),
                        ),
                    ),
            )
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(&bind_address)?
    .workers(4)
    .run();

    tracing::info!("HTTP server is running");
    server.await
}
