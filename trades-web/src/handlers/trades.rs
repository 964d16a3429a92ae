use super::rows_or_error;
use crate::helpers::respond_json;
use crate::models::{TradeIn, TradeOut};
use crate::{ApiError, Result, Store};
use actix_web::web::{self, Json};
use actix_web::{delete, get, post, put};
use serde_derive::*;
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct ListParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TradePath {
    pub trade_id: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DeleteResponse {
    pub status: String,
}

#[get("/trades")]
pub async fn api_list_trades(
    store: web::Data<Store>,
    web::Query(req): web::Query<ListParam>,
) -> Result<Json<Vec<TradeOut>>> {
    let resp = web::block(move || list_trades(&store, req)).await?;
    respond_json(resp)
}

#[post("/trades")]
pub async fn api_create_trade(
    store: web::Data<Store>,
    trade: Json<TradeIn>,
) -> Result<Json<TradeOut>> {
    let trade = trade.into_inner().clean();
    let resp = web::block(move || create_trade(&store, trade)).await?;
    respond_json(resp)
}

#[put("/trades/{trade_id}")]
pub async fn api_update_trade(
    store: web::Data<Store>,
    path: web::Path<TradePath>,
    trade: Json<TradeIn>,
) -> Result<Json<TradeOut>> {
    let trade_id = path.into_inner().trade_id;
    let trade = trade.into_inner().clean();
    let resp = web::block(move || update_trade(&store, trade_id, trade)).await?;
    respond_json(resp)
}

#[delete("/trades/{trade_id}")]
pub async fn api_delete_trade(
    store: web::Data<Store>,
    path: web::Path<TradePath>,
) -> Result<Json<DeleteResponse>> {
    let trade_id = path.into_inner().trade_id;
    let resp = web::block(move || delete_trade(&store, trade_id)).await?;
    respond_json(resp)
}

// read all records, restricted to one trade code when given
pub fn list_trades(store: &Store, req: ListParam) -> Result<Vec<TradeOut>> {
    let mut query = store.client.table(&store.table).select("*");
    if let Some(ref code) = req.trade_code {
        query = query.eq("trade_code", code);
    }
    let resp = query.execute()?;
    let rows = rows_or_error(resp, "Database returned no data.")?;
    let trades = rows
        .into_iter()
        .map(serde_json::from_value::<TradeOut>)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(trades)
}

// insert the normalized payload and merge in the assigned id
pub fn create_trade(store: &Store, trade: TradeIn) -> Result<TradeOut> {
    let row = serde_json::to_value(&trade)?;
    let resp = store.client.table(&store.table).insert(row).execute()?;
    let rows = rows_or_error(resp, "Failed to insert trade.")?;
    let id = rows
        .first()
        .and_then(|r| r.get("id"))
        .and_then(Value::as_i64)
        .ok_or_else(|| ApiError::InternalServerError("Failed to insert trade.".into()))?;
    Ok(TradeOut { id, trade })
}

// full-field replace keyed by id, fields absent from the payload are
// not preserved
pub fn update_trade(store: &Store, trade_id: i64, trade: TradeIn) -> Result<TradeOut> {
    let row = serde_json::to_value(&trade)?;
    let resp = store
        .client
        .table(&store.table)
        .update(row)
        .eq("id", trade_id)
        .execute()?;
    rows_or_error(resp, "Failed to update trade.")?;
    Ok(TradeOut {
        id: trade_id,
        trade,
    })
}

// hard delete keyed by id
pub fn delete_trade(store: &Store, trade_id: i64) -> Result<DeleteResponse> {
    let resp = store
        .client
        .table(&store.table)
        .delete()
        .eq("id", trade_id)
        .execute()?;
    rows_or_error(resp, "Failed to delete trade.")?;
    Ok(DeleteResponse {
        status: "deleted".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_response_json() {
        let resp = DeleteResponse {
            status: "deleted".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(r#"{"status":"deleted"}"#, json);
    }

    #[test]
    fn test_list_param_optional() {
        let p: ListParam = serde_json::from_str("{}").unwrap();
        assert!(p.trade_code.is_none());
        let p: ListParam = serde_json::from_str(r#"{"trade_code":"AAPL"}"#).unwrap();
        assert_eq!(Some("AAPL".to_owned()), p.trade_code);
    }
}
