use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use regional_dashboard::config::Config;
use regional_dashboard::middleware::json_error_handler;
use regional_dashboard::registry::{MySqlRegistryRepository, RegistrationService, ReportDefinition};
use regional_dashboard::reports::{MySqlReportRepository, ReportService};
use regional_dashboard::{health, reports};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("regional_dashboard={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Regional Dashboard report service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized for {} ({} connections)",
        config.database.target(),
        config.database.pool_size
    );

    if config.report.register_on_startup {
        let report_script = config.report.load_script()?;
        let registration = RegistrationService::new(
            Arc::new(MySqlRegistryRepository::new(db_pool.clone())),
            ReportDefinition::regional_dashboard(report_script),
        );
        registration.after_migrate().await;
    }

    let report_service = web::Data::new(ReportService::new(
        Arc::new(MySqlReportRepository::new(db_pool.clone())),
        config.report.categories(),
    ));
    let pool_data = web::Data::new(db_pool);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let allowed_origin = config.server.allowed_origin.clone();
    let server = HttpServer::new(move || {
        let cors = match &allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET"])
                .max_age(3600),
            None => Cors::default(),
        };

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(pool_data.clone())
            .app_data(report_service.clone())
            .app_data(web::QueryConfig::default().error_handler(json_error_handler))
            .configure(health::configure)
            .configure(reports::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
