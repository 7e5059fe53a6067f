use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::{shell, App};
use crate::content::{site, ContentError};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("couldn't read leptos configuration: {0}")]
    Config(String),
    #[error("site content is invalid: {0}")]
    Content(#[from] ContentError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Installs the server's tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_site=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

pub async fn serve() -> Result<(), ServeError> {
    // Fail fast on bad content rather than on the first request
    let content = site()?;
    tracing::info!(
        projects = content.projects.len(),
        testimonials = content.testimonials.len(),
        "loaded site content"
    );

    let conf = get_configuration(None).map_err(|e| ServeError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
