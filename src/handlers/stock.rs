use actix_web::{web, HttpResponse, Result};

use crate::models::{ApiResponse, StockQuery, StockView};
use crate::services::stock_service::{LookupError, StockDirectory};

/// 将查询结果映射为 HTTP 响应
///
/// 空输入是 400，未收录是 404 并附上已收录代码提示；
/// 两者都是预期分支，不按系统错误处理
fn lookup_response(directory: &StockDirectory, raw_input: &str) -> HttpResponse {
    match directory.lookup(raw_input) {
        Ok(view) => HttpResponse::Ok().json(ApiResponse::success(view)),
        Err(e @ LookupError::EmptyInput) => {
            HttpResponse::BadRequest().json(ApiResponse::<StockView>::error(e.to_string()))
        }
        Err(LookupError::NotFound(symbol)) => {
            let supported = directory.supported_symbols().join(", ");
            HttpResponse::NotFound().json(ApiResponse::<StockView>::error(format!(
                "未收录的股票代码: {}，可尝试: {}",
                symbol, supported
            )))
        }
    }
}

pub async fn get_stock(
    directory: web::Data<StockDirectory>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let symbol = path.into_inner();
    Ok(lookup_response(&directory, &symbol))
}

pub async fn search_stock(
    directory: web::Data<StockDirectory>,
    query: web::Query<StockQuery>,
) -> Result<HttpResponse> {
    let symbol = query.symbol.clone().unwrap_or_default();
    Ok(lookup_response(&directory, &symbol))
}

pub async fn list_stocks(directory: web::Data<StockDirectory>) -> Result<HttpResponse> {
    let stocks = directory.list();
    Ok(HttpResponse::Ok().json(ApiResponse::success(stocks)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stocks")
            .route("", web::get().to(list_stocks))
            .route("/search", web::get().to(search_stock))
            .route("/{symbol}", web::get().to(get_stock)),
    );
}
