use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::console_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use event_desk::api::EventApi;
use event_desk::config::AppConfig;
use event_desk::error::AppError;
use event_desk::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let api = Arc::new(EventApi::new(&config.event_api)?);

    let app = console_router(api)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        remote_api = %config.event_api.base_url,
        "event desk console ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
