use crate::Result;
use actix_web::web::Json;
use serde::Serialize;

pub fn respond_json<T>(data: T) -> Result<Json<T>>
where
    T: Serialize,
{
    Ok(Json(data))
}
