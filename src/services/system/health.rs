use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};

pub async fn handle_health(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let now = chrono::Utc::now();
    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| now.signed_duration_since(start.start_datetime).num_seconds());

    Ok(HttpResponse::Ok().json(ApiResponse::success(HealthResponse {
        status: "ready".to_string(),
        time: now,
        uptime_seconds,
    })))
}
