use db::{Config, Database, NoTls};
use http_body_util::Full;
use hyper::{
    body::{Bytes, Incoming},
    header::{HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
    server::conn::http1,
    service::service_fn,
    Method, Request, Response, StatusCode,
};
use hyper_util::rt::TokioIo;
use std::{
    convert::Infallible,
    env,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::{net::TcpListener, runtime::Runtime};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let port = env::var("PORT")?.parse()?;
    let username = env::var("PG_USERNAME")?;
    let password = env::var("PG_PASSWORD")?;
    let hostname = env::var("PG_HOSTNAME")?;
    let database = env::var("PG_DATABASE")?;

    let runtime = Runtime::new()?;

    // Connect to the question catalog
    let (client, connection) = runtime.block_on(
        Config::new().user(&username).password(&password).host(&hostname).dbname(&database).connect(NoTls),
    )?;
    runtime.spawn(async move {
        if let Err(err) = connection.await {
            log::error!("database connection closed: {err}");
        }
    });
    let db = Arc::new(Database::from(client));

    // Serve until interrupted
    let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, port).into();
    runtime.block_on(async {
        let listener = TcpListener::bind(addr).await?;
        log::info!("listening on {addr}");
        loop {
            let (stream, _) = tokio::select! {
                conn = listener.accept() => conn?,
                _ = tokio::signal::ctrl_c() => break,
            };
            let db = Arc::clone(&db);
            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let service = service_fn(move |req| {
                    let db = Arc::clone(&db);
                    async move { handle(req, &db).await }
                });
                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    log::error!("connection error: {err}");
                }
            });
        }
        log::info!("shutting down");
        anyhow::Ok(())
    })
}

async fn handle(req: Request<Incoming>, db: &Database) -> Result<Response<Full<Bytes>>, Infallible> {
    if req.method() == Method::OPTIONS {
        let mut res = Response::new(Full::new(Bytes::new()));
        *res.status_mut() = StatusCode::NO_CONTENT;
        return Ok(with_cors(res));
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let response = match api::try_respond(req, db).await {
        Ok(res) => res,
        Err(err) => {
            log::warn!("{method} {path}: {err}");
            api::error_response(&err)
        }
    };
    Ok(with_cors(response))
}

fn with_cors(mut res: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let headers = res.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type,Authorization"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET, POST, DELETE, OPTIONS"));
    res
}
