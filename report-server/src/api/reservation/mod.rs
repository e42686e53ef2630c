//! Reservation API 模块 (客户预订报表)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/reservation/report | GET | 客户预订报表 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::get_customer_report;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservation", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/report", get(handler::get_customer_report))
}
