use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    /// A connection can be acquired and answers `SELECT 1`
    pub database: bool,
    /// The host's sales tables are present
    pub host_schema: bool,
}

/// GET /health - Liveness probe
/// Does not check dependencies
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe
/// Checks that the host database is reachable and carries the report's tables
pub async fn readiness_check(pool: web::Data<MySqlPool>) -> impl Responder {
    let mut checks = ReadinessChecks {
        database: false,
        host_schema: false,
    };

    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => checks.database = true,
        Err(e) => tracing::error!("Database readiness check failed: {}", e),
    }

    if checks.database {
        match sqlx::query("SELECT 1 FROM `tabSales Person` LIMIT 1")
            .fetch_optional(pool.get_ref())
            .await
        {
            Ok(_) => checks.host_schema = true,
            Err(e) => tracing::error!("Host schema readiness check failed: {}", e),
        }
    }

    let ready = checks.database && checks.host_schema;
    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
