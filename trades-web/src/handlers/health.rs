use crate::helpers::respond_json;
use crate::Result;
use actix_web::web::Json;
use serde_derive::*;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PingResponse {
    pub status: String,
}

pub async fn api_ping() -> Result<Json<PingResponse>> {
    respond_json(PingResponse {
        status: "ok".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_json() {
        let resp = PingResponse {
            status: "ok".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(r#"{"status":"ok"}"#, json);
    }
}
