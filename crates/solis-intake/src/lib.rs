//! Solis Intake - Inquiry intake boundary for the Solis marketing site
//!
//! The server side of the contact form: re-validates every submission
//! independently of the client, accepts valid inquiries into a durable
//! sink for downstream processing (CRM, notification mail), and answers
//! with the submission-result envelope the form client folds into its
//! state.

pub mod handlers;
pub mod schema;
pub mod service;
pub mod sink;

use axum::{routing::get, routing::post, Extension, Router};
use std::net::SocketAddr;
use std::sync::Arc;

pub use service::IntakeService;
pub use sink::{AcceptReceipt, AcceptedInquiry, InMemoryInquirySink, InquirySink, SinkError};

/// Application state shared across handlers
pub struct AppState {
    /// Intake service
    pub intake: IntakeService,
}

impl AppState {
    /// Create new application state with the in-memory sink.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(InMemoryInquirySink::new()))
    }

    /// Create application state over a specific sink.
    pub fn with_sink(sink: Arc<dyn InquirySink>) -> Self {
        Self {
            intake: IntakeService::new(sink),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the API router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Contact form submissions
        .route("/contact-submissions", post(handlers::submit_inquiry))
        // Add state
        .layer(Extension(state))
}

/// Start the intake server
pub async fn serve(addr: SocketAddr) -> Result<(), std::io::Error> {
    let state = Arc::new(AppState::new());
    let app = build_router(state);

    tracing::info!("Solis intake listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
