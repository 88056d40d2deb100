use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::{HttpResponse, Request};
use crate::routing::Router;

pub struct Server {
    router: Arc<Router>,
    host: String,
    port: u16,
}

impl Server {
    pub fn new(router: Router, config: &ServerConfig) -> Self {
        Self {
            router: Arc::new(router),
            host: config.host.clone(),
            port: config.port,
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = SocketAddr::new(self.host.parse()?, self.port);
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("listening on http://{}", addr);

        let router = self.router;

        loop {
            let (stream, _) = listener.accept().await?;
            let io = TokioIo::new(stream);
            let router = router.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
                    let router = router.clone();
                    async move { Ok::<_, Infallible>(handle_request(router, req).await) }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    tracing::error!("error serving connection: {:?}", err);
                }
            });
        }
    }
}

async fn handle_request(
    router: Arc<Router>,
    req: hyper::Request<hyper::body::Incoming>,
) -> hyper::Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = match router.match_route(&method, &path) {
        Some((handler, params)) => {
            let request = Request::new(req).with_params(params);

            // Both Ok and Err carry an HttpResponse
            handler(request).await.unwrap_or_else(|e| e).into_hyper()
        }
        None => HttpResponse::json(serde_json::json!({ "error": "Not found" }))
            .status(404)
            .into_hyper(),
    };

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );

    response
}
