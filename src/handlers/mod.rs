pub mod health;
pub mod status;
pub mod stock;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::config)
            .configure(status::config)
            .configure(stock::config),
    );
}
