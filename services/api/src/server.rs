use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use venture_ready::assessment::AssessmentService;
use venture_ready::config::AppConfig;
use venture_ready::error::AppError;
use venture_ready::investor::InvestorClassifier;
use venture_ready::telemetry;

use crate::cli::ServeArgs;
use crate::infra::{
    build_generator, AppState, InMemoryAssessmentRepository, InMemoryClassificationCache,
    InMemoryProfileRepository, InMemoryScoreNotifier,
};
use crate::routes::with_platform_routes;

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

    let generator = build_generator(config.generation.as_ref())?;

    let assessments = Arc::new(AssessmentService::new(
        Arc::new(InMemoryAssessmentRepository::default()),
        Arc::new(InMemoryProfileRepository::default()),
        Arc::new(InMemoryScoreNotifier::default()),
        generator.clone(),
    ));
    let classifier = Arc::new(InvestorClassifier::new(
        Arc::new(InMemoryClassificationCache::default()),
        generator,
    ));

    let app = with_platform_routes(assessments, classifier)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "investment readiness service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
