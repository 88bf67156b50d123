use std::{net::SocketAddr, sync::Arc, time::Duration};

use clap::Args;
use sluice_core::{
    IngestGateway, IngestPipeline, Limits, NoopProcessor, run_background_flusher,
};
use sluice_server_http::IngestServer;
use snafu::ResultExt;
use tokio_util::sync::CancellationToken;

use crate::error::{InvalidServerUrlSnafu, IoSnafu, ProcessorSnafu, Result};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// The address of the HTTP ingest server.
    #[arg(long, default_value = "127.0.0.1:8080")]
    address: String,
    /// Items per batch handed to the processor.
    #[arg(long, default_value_t = 10)]
    batch_size: usize,
    /// Seconds between flush cycles.
    #[arg(long, default_value_t = 10)]
    flush_interval: u64,
}

impl ServeArgs {
    pub async fn run(self, ct: CancellationToken) -> Result<()> {
        let address = self
            .address
            .parse::<SocketAddr>()
            .context(InvalidServerUrlSnafu {})?;

        let processor = Arc::new(NoopProcessor::new(Limits {
            batch_size: self.batch_size,
            flush_interval: Duration::from_secs(self.flush_interval),
        }));

        let pipeline = IngestPipeline::connect(processor)
            .await
            .context(ProcessorSnafu {})?;

        println!("Starting Sluice ingest server");
        println!("HTTP server listening on {}", address);
        println!(
            "Flushing batches of up to {} items every {:?}",
            pipeline.limits.batch_size, pipeline.limits.flush_interval
        );

        let _ct_guard = ct.child_token().drop_guard();

        let IngestPipeline {
            gateway, flusher, ..
        } = pipeline;

        let http_server_fut = run_http_server(gateway, address, ct.clone());
        let flusher_fut = run_background_flusher(flusher, ct);

        tokio::select! {
            res = http_server_fut => {
                println!("HTTP server exited with {:?}", res);
            },
            res = flusher_fut => {
                println!("Background flusher exited with {:?}", res);
            },
        }

        Ok(())
    }
}

async fn run_http_server(
    gateway: IngestGateway,
    address: SocketAddr,
    ct: CancellationToken,
) -> Result<()> {
    let server = IngestServer::new(gateway);
    let app = server.into_router();

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .context(IoSnafu {})?;

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        ct.cancelled().await;
    });

    server.await.context(IoSnafu {})
}
