use crate::cli::ServeArgs;
use crate::infra::{AppState, DisabledTranscriber, InMemorySchemeCatalog};
use crate::routes::with_scheme_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use govconnect::config::{AppConfig, CatalogSource};
use govconnect::error::AppError;
use govconnect::telemetry;
use govconnect::workflows::schemes::SchemeScreeningService;
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
    if let Some(path) = args.catalog_csv.take() {
        config.catalog.source = CatalogSource::CsvFile(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(InMemorySchemeCatalog::from_source(&config.catalog.source)?);
    let transcriber = Arc::new(DisabledTranscriber);
    let screening_service = Arc::new(SchemeScreeningService::new(catalog, transcriber));

    let app = with_scheme_routes(screening_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "scheme screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
