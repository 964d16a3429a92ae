use crate::handlers::health::api_ping;
use crate::handlers::trades::{
    api_create_trade, api_delete_trade, api_list_trades, api_update_trade,
};
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ping", web::get().to(api_ping)).service(
        web::scope("/api")
            .service(api_list_trades)
            .service(api_create_trade)
            .service(api_update_trade)
            .service(api_delete_trade),
    );
}
