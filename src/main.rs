/// Log filter used when `RUST_LOG` is not set.
#[cfg(feature = "ssr")]
const DEFAULT_LOG_FILTER: &str = "info";

/// Level for the per-request span and response event. Must pass
/// `DEFAULT_LOG_FILTER` so requests show up in the default log.
#[cfg(feature = "ssr")]
const REQUEST_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use editor_portfolio::{app::*, content::SITE};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower::ServiceBuilder;
    use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None).expect("Should be able to read Leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // bad content should stop the server here rather than on the first request
    tracing::info!(
        projects = SITE.registry.len(),
        skills = SITE.skills.len(),
        "site content loaded"
    );
    if SITE.registry.is_empty() {
        tracing::warn!("no projects in site content, the work grid will be empty");
    }

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(REQUEST_LOG_LEVEL))
                    .on_response(DefaultOnResponse::new().level(REQUEST_LOG_LEVEL)),
            ),
        )
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shutdown");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use tracing_subscriber::{filter::LevelFilter, EnvFilter};

    use super::*;

    #[test]
    fn test_request_logs_pass_default_filter() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        let max = filter.max_level_hint().expect("filter has a level");
        assert!(LevelFilter::from_level(REQUEST_LOG_LEVEL) <= max);
    }
}
