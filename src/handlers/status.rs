use actix_web::{web, HttpResponse, Result};

use crate::models::ApiResponse;
use crate::services::status_service::StatusService;

/// 市场状态快照，每次请求即时重算
pub async fn get_status(service: web::Data<StatusService>) -> Result<HttpResponse> {
    let snapshot = service.snapshot();
    Ok(HttpResponse::Ok().json(ApiResponse::success(snapshot)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(get_status));
}
