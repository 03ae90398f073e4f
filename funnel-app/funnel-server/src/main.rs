use axum::{http::HeaderValue, middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use tracing::{error, info};

use funnel_api::{api_router, middleware::page_guard, state::AppState};
use funnel_core::gateways::{
    DocumentStore, EmailGateway, IdentityGateway, MarkerStore, UploadGateway,
};
use funnel_core::routing::RouteTable;
use funnel_core::services::{
    BusinessDirectory, BusinessService, FeedbackService, RatingService, SessionService,
};
use funnel_infrastructure::{
    CloudinaryUploader, EmailJsMailer, FileMarkerStore, FirebaseIdentity, FirestoreStore,
};
use funnel_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    funnel_shared::telemetry::init_telemetry();

    info!("Funnel server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // One HTTP client shared by every adapter
    let client = reqwest::Client::new();
    let store: Arc<dyn DocumentStore> =
        Arc::new(FirestoreStore::new(client.clone(), &config.firebase));
    let identity: Arc<dyn IdentityGateway> =
        Arc::new(FirebaseIdentity::new(client.clone(), &config.firebase));
    let mailer: Arc<dyn EmailGateway> = Arc::new(EmailJsMailer::new(client.clone(), &config.emailjs));
    let uploader: Arc<dyn UploadGateway> =
        Arc::new(CloudinaryUploader::new(client, &config.cloudinary));
    let marker: Arc<dyn MarkerStore> = Arc::new(FileMarkerStore::new(&config.session.marker_path));

    // Session state listens to the identity provider for the whole process
    let session = SessionService::new(identity, marker);
    session.init();

    let directory = Arc::new(BusinessDirectory::new());
    let state = AppState {
        business_service: Arc::new(BusinessService::new(
            store.clone(),
            uploader,
            directory,
        )),
        rating_service: Arc::new(RatingService::new(store.clone())),
        feedback_service: Arc::new(FeedbackService::new(store, mailer)),
        session,
        route_table: Arc::new(RouteTable::app_routes()),
        config: config.clone(),
    };

    // Page routes: static assets plus the single-page app, behind the
    // navigation guard
    let pages = Router::new()
        .nest_service("/assets", ServeDir::new("static/assets"))
        .fallback_service(ServeDir::new("static").fallback(ServeFile::new("static/index.html")))
        .layer(middleware::from_fn_with_state(state.clone(), page_guard));

    // Build router
    let app = api_router(state)
        .merge(pages)
        .layer(
            CorsLayer::new()
                .allow_origin("http://localhost:5173".parse::<HeaderValue>()?)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
