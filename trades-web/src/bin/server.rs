use dotenv::dotenv;
use std::env;
use structopt::StructOpt;
use trades_web::{server, Result, StoreConfig};

#[actix_rt::main]
async fn main() -> Result<()> {
    env::set_var("RUST_LOG", "actix_web=debug,actix_server=info");
    env_logger::init();

    let opt = ServerOpt::from_args();
    dotenv().ok();

    let url = if let Some(url) = opt.store_url {
        url
    } else {
        env::var("SUPABASE_URL").expect("SUPABASE_URL should not be empty")
    };
    let key = if let Some(key) = opt.store_key {
        key
    } else {
        env::var("SUPABASE_KEY").expect("SUPABASE_KEY should not be empty")
    };
    let table = if let Some(table) = opt.table {
        table
    } else {
        env::var("TABLE_NAME").expect("TABLE_NAME should not be empty")
    };
    server(opt.port, StoreConfig { url, key, table }).await?;
    Ok(())
}

#[derive(Debug, StructOpt)]
#[structopt(name = "trades-web", about = "command to run trades web server")]
pub struct ServerOpt {
    #[structopt(
        short,
        long,
        help = "specify server port to listen, by default 8080",
        default_value = "8080"
    )]
    port: u32,
    #[structopt(short = "s", long, help = "specify supabase project url to use")]
    store_url: Option<String>,
    #[structopt(short = "k", long, help = "specify supabase service key to use")]
    store_key: Option<String>,
    #[structopt(short = "t", long, help = "specify table to operate on")]
    table: Option<String>,
}
