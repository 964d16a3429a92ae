use crate::error::Error;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde_json::Value;

/// Client of a Supabase-hosted PostgREST endpoint.
///
/// Holds the project url and the service key, and builds one
/// authenticated request per executed table query. Cheap to clone,
/// intended to be constructed once at process start.
#[derive(Debug, Clone)]
pub struct SbClient {
    base_url: String,
    key: String,
    http: HttpClient,
}

impl SbClient {
    pub fn new(url: &str, key: &str) -> Result<Self, Error> {
        if url.is_empty() {
            return Err(Error::Client("empty store url".into()));
        }
        let http = HttpClient::builder().build()?;
        Ok(SbClient {
            base_url: url.trim_end_matches('/').to_owned(),
            key: key.to_owned(),
            http,
        })
    }

    /// start a query against the given table
    pub fn table(&self, name: &str) -> TableQuery {
        TableQuery {
            client: self,
            table: name.to_owned(),
            op: None,
            filters: Vec::new(),
            order: None,
        }
    }
}

/// one of the four table operations
#[derive(Debug)]
enum Op {
    Select(String),
    Insert(Value),
    Update(Value),
    Delete,
}

/// Response of an executed query.
///
/// `data` carries the affected rows on success and is `None` whenever
/// the endpoint answers with a non-2xx status. Transport failures are
/// reported through `Error` instead.
#[derive(Debug)]
pub struct SbResponse {
    pub data: Option<Vec<Value>>,
}

/// Builder of a single table query.
///
/// Exactly one of `select`/`insert`/`update`/`delete` must be set
/// before `execute`; `eq` and `order` may be chained on top.
#[derive(Debug)]
pub struct TableQuery<'a> {
    client: &'a SbClient,
    table: String,
    op: Option<Op>,
    filters: Vec<(String, String)>,
    order: Option<String>,
}

impl<'a> TableQuery<'a> {
    pub fn select(mut self, columns: &str) -> Self {
        self.op = Some(Op::Select(columns.to_owned()));
        self
    }

    pub fn insert(mut self, row: Value) -> Self {
        self.op = Some(Op::Insert(row));
        self
    }

    pub fn update(mut self, row: Value) -> Self {
        self.op = Some(Op::Update(row));
        self
    }

    pub fn delete(mut self) -> Self {
        self.op = Some(Op::Delete);
        self
    }

    /// equality filter on a column
    pub fn eq<T: ToString>(mut self, column: &str, value: T) -> Self {
        self.filters
            .push((column.to_owned(), format!("eq.{}", value.to_string())));
        self
    }

    /// ascending order on a column
    pub fn order(mut self, column: &str) -> Self {
        self.order = Some(format!("{}.asc", column));
        self
    }

    /// Issue the request and consume the builder.
    pub fn execute(self) -> Result<SbResponse, Error> {
        let TableQuery {
            client,
            table,
            op,
            filters,
            order,
        } = self;
        let op = op.ok_or_else(|| Error::Client("no table operation specified".into()))?;
        let url = format!("{}/rest/v1/{}", client.base_url, table);
        let mut req = match op {
            Op::Select(columns) => client.http.get(&url).query(&[("select", columns.as_str())]),
            Op::Insert(row) => client.http.post(&url).json(&row),
            Op::Update(row) => client.http.patch(&url).json(&row),
            Op::Delete => client.http.delete(&url),
        };
        req = req
            .header("apikey", &client.key)
            .header(AUTHORIZATION, format!("Bearer {}", client.key));
        for (column, constraint) in &filters {
            req = req.query(&[(column.as_str(), constraint.as_str())]);
        }
        if let Some(ref order) = order {
            req = req.query(&[("order", order.as_str())]);
        }
        // ask PostgREST to echo the affected rows
        req = req.header("Prefer", HeaderValue::from_static("return=representation"));
        let response = req.send()?;
        if !response.status().is_success() {
            return Ok(SbResponse { data: None });
        }
        let rows: Vec<Value> = response.json()?;
        Ok(SbResponse { data: Some(rows) })
    }
}
