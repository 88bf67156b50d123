use clap::Args;
use sluice_client::HttpAdmitClient;
use snafu::ResultExt;
use tokio_util::sync::CancellationToken;

use crate::error::{PushClientSnafu, Result};

/// Push item payloads to a running Sluice server.
#[derive(Debug, Args)]
pub struct PushArgs {
    /// Base URL of the server.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    url: String,
    /// Item payloads to push, one item per argument.
    payloads: Vec<String>,
}

impl PushArgs {
    pub async fn run(self, _ct: CancellationToken) -> Result<()> {
        let client = HttpAdmitClient::new(self.url);

        for payload in self.payloads {
            let response = client
                .admit(payload.into_bytes())
                .await
                .context(PushClientSnafu {})?;
            println!("{}", response.status);
        }

        Ok(())
    }
}
