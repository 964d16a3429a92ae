use mockito::{mock, Matcher};
use sbrest::SbClient;
use serde_json::json;

fn client() -> SbClient {
    SbClient::new(&mockito::server_url(), "secret-key").unwrap()
}

#[test]
fn test_select_all() {
    let m = mock("GET", "/rest/v1/select_all")
        .match_query(Matcher::UrlEncoded("select".into(), "*".into()))
        .match_header("apikey", "secret-key")
        .match_header("authorization", "Bearer secret-key")
        .with_status(200)
        .with_body(r#"[{"id":1,"trade_code":"AAPL"},{"id":2,"trade_code":"MSFT"}]"#)
        .create();

    let resp = client().table("select_all").select("*").execute().unwrap();
    m.assert();
    let rows = resp.data.unwrap();
    assert_eq!(2, rows.len());
    assert_eq!(json!("AAPL"), rows[0]["trade_code"]);
}

#[test]
fn test_select_with_eq_and_order() {
    let m = mock("GET", "/rest/v1/select_filtered")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("select".into(), "*".into()),
            Matcher::UrlEncoded("trade_code".into(), "eq.AAPL".into()),
            Matcher::UrlEncoded("order".into(), "date.asc".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create();

    let resp = client()
        .table("select_filtered")
        .select("*")
        .eq("trade_code", "AAPL")
        .order("date")
        .execute()
        .unwrap();
    m.assert();
    assert_eq!(Some(vec![]), resp.data);
}

#[test]
fn test_insert_returns_representation() {
    let m = mock("POST", "/rest/v1/insert_row")
        .match_header("prefer", "return=representation")
        .match_body(Matcher::Json(json!({"trade_code":"AAPL","volume":100})))
        .with_status(201)
        .with_body(r#"[{"id":7,"trade_code":"AAPL","volume":100}]"#)
        .create();

    let resp = client()
        .table("insert_row")
        .insert(json!({"trade_code":"AAPL","volume":100}))
        .execute()
        .unwrap();
    m.assert();
    let rows = resp.data.unwrap();
    assert_eq!(json!(7), rows[0]["id"]);
}

#[test]
fn test_update_keyed_by_id() {
    let m = mock("PATCH", "/rest/v1/update_row")
        .match_query(Matcher::UrlEncoded("id".into(), "eq.7".into()))
        .match_body(Matcher::Json(json!({"trade_code":"MSFT"})))
        .with_status(200)
        .with_body(r#"[{"id":7,"trade_code":"MSFT"}]"#)
        .create();

    let resp = client()
        .table("update_row")
        .update(json!({"trade_code":"MSFT"}))
        .eq("id", 7)
        .execute()
        .unwrap();
    m.assert();
    assert_eq!(1, resp.data.unwrap().len());
}

#[test]
fn test_delete_keyed_by_id() {
    let m = mock("DELETE", "/rest/v1/delete_row")
        .match_query(Matcher::UrlEncoded("id".into(), "eq.3".into()))
        .with_status(200)
        .with_body(r#"[{"id":3}]"#)
        .create();

    let resp = client().table("delete_row").delete().eq("id", 3).execute().unwrap();
    m.assert();
    assert_eq!(1, resp.data.unwrap().len());
}

#[test]
fn test_error_status_yields_no_data() {
    let _m = mock("GET", "/rest/v1/server_error")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("oops")
        .create();

    let resp = client().table("server_error").select("*").execute().unwrap();
    assert!(resp.data.is_none());
}

#[test]
fn test_missing_operation_is_client_error() {
    let err = client().table("noop").execute().unwrap_err();
    match err {
        sbrest::Error::Client(msg) => assert!(msg.contains("no table operation")),
        other => panic!("unexpected error: {:?}", other),
    }
}
