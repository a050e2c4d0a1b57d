use axum::Json;

/// Liveness probe reporting the running version.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "devguide",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok_and_version() {
        let body = health().await.0;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "devguide");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
