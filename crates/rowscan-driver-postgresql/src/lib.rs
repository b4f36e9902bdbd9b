mod value;

use postgres::{tls::MakeTlsConnect, types::ToSql, Socket};
use rowscan_core::{bail, cursor, Column, Error, Result, Rows, ScanTarget};
use tokio_postgres::{Client, Config, Row};
use url::Url;

/// A cursor over rows fetched from PostgreSQL.
///
/// Starts before the first row; call [`Rows::next`] before scanning.
#[derive(Debug)]
pub struct PgRows {
    rows: Vec<Row>,

    /// Index of the current row, `None` until the first call to `next`
    current: Option<usize>,
}

impl PgRows {
    pub fn new(rows: Vec<Row>) -> PgRows {
        PgRows {
            rows,
            current: None,
        }
    }

    /// Runs `sql` and returns a cursor over its rows.
    pub async fn query(
        client: &Client,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<PgRows> {
        let rows = client
            .query(sql, params)
            .await
            .map_err(Error::driver_operation_failed)?;

        Ok(PgRows::new(rows))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Row>> for PgRows {
    fn from(rows: Vec<Row>) -> PgRows {
        PgRows::new(rows)
    }
}

impl Rows for PgRows {
    fn columns(&self) -> Vec<Column<'_>> {
        self.rows.first().map(columns).unwrap_or_default()
    }

    fn next(&mut self) -> Result<bool> {
        let next = self.current.map_or(0, |current| current + 1);
        self.current = Some(next.min(self.rows.len()));
        Ok(next < self.rows.len())
    }

    fn scan(&mut self, targets: &mut [&mut dyn ScanTarget]) -> Result<()> {
        let Some(current) = self.current else {
            bail!("scan called before `next`");
        };

        let Some(row) = self.rows.get(current) else {
            bail!("scan called after the last row");
        };

        scan(row, targets)
    }
}

/// A single row, as returned by `query_one` or `query_opt`.
///
/// Scanning a missing row fails with a record-not-found error.
#[derive(Debug)]
pub struct PgRow {
    row: Option<Row>,
}

impl PgRow {
    pub fn new(row: Option<Row>) -> PgRow {
        PgRow { row }
    }

    /// Runs `sql`, expecting at most one row.
    pub async fn query(
        client: &Client,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<PgRow> {
        let row = client
            .query_opt(sql, params)
            .await
            .map_err(Error::driver_operation_failed)?;

        Ok(PgRow::new(row))
    }
}

impl From<Row> for PgRow {
    fn from(row: Row) -> PgRow {
        PgRow::new(Some(row))
    }
}

impl From<Option<Row>> for PgRow {
    fn from(row: Option<Row>) -> PgRow {
        PgRow::new(row)
    }
}

impl cursor::Row for PgRow {
    fn columns(&self) -> Vec<Column<'_>> {
        self.row.as_ref().map(columns).unwrap_or_default()
    }

    fn scan(self, targets: &mut [&mut dyn ScanTarget]) -> Result<()> {
        match self.row {
            Some(row) => scan(&row, targets),
            None => Err(Error::record_not_found("query returned no rows")),
        }
    }
}

fn columns(row: &Row) -> Vec<Column<'_>> {
    Column::from_names(row.columns().iter().map(|column| column.name()))
}

fn scan(row: &Row, targets: &mut [&mut dyn ScanTarget]) -> Result<()> {
    if targets.len() != row.len() {
        bail!(
            "expected {} scan targets, got {}",
            row.len(),
            targets.len()
        );
    }

    for (index, target) in targets.iter_mut().enumerate() {
        target.scan_value(value::decode(row, index)?)?;
    }

    Ok(())
}

/// Connects to a PostgreSQL database using a connection string.
///
/// The connection task is spawned onto the current tokio runtime.
pub async fn connect(url: &str) -> Result<Client> {
    let url = Url::parse(url).map_err(Error::driver_operation_failed)?;

    if url.scheme() != "postgresql" {
        bail!(
            "connection URL does not have a `postgresql` scheme; url={}",
            url
        );
    }

    let Some(host) = url.host_str() else {
        bail!("missing host in connection URL; url={}", url);
    };

    if url.path().trim_start_matches('/').is_empty() {
        bail!(
            "no database specified - missing path in connection URL; url={}",
            url
        );
    }

    let mut config = Config::new();
    config.host(host);
    config.dbname(url.path().trim_start_matches('/'));

    if let Some(port) = url.port() {
        config.port(port);
    }

    if !url.username().is_empty() {
        config.user(url.username());
    }

    if let Some(password) = url.password() {
        config.password(password);
    }

    connect_with_config(config, tokio_postgres::NoTls).await
}

/// Connects to a PostgreSQL database using a [`Config`].
pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Client>
where
    T: MakeTlsConnect<Socket> + 'static,
    T::Stream: Send,
{
    let (client, connection) = config
        .connect(tls)
        .await
        .map_err(Error::driver_operation_failed)?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!(error = %e, "postgresql connection error");
        }
    });

    Ok(client)
}
