//! One-shot diagnostic query against the trade store.
//!
//! Reads the connection parameters from the environment, selects all
//! rows of the stock_trade table ordered by date and prints the
//! runtime shape of the result. Manual verification only, not part of
//! the request path.

use dotenv::dotenv;
use sbrest::SbClient;
use std::env;

fn main() {
    env_logger::init();
    dotenv().ok();

    let url = env::var("SUPABASE_URL").expect("SUPABASE_URL should not be empty");
    let key = env::var("SUPABASE_KEY").expect("SUPABASE_KEY should not be empty");

    let client = SbClient::new(&url, &key).expect("failed to construct store client");
    let resp = client
        .table("stock_trade")
        .select("*")
        .order("date")
        .execute()
        .expect("query failed");

    match resp.data {
        Some(rows) => println!("Some(Vec<Value>), {} rows", rows.len()),
        None => println!("None"),
    }
}
