//! # Open AMT Info
//!
//! Fetches the AMT status of one environment's host.
//!
//! ```bash
//! RUST_LOG=info cargo run -p open-amt -- [CONFIG.toml] [ENVIRONMENT_ID]
//! ```
//!
//! Without a config file the server is expected at `http://localhost:9000`.

use open_amt::lifecycle::{OpenAmtSettings, OpenAmtSystem};
use open_amt::model::EndpointId;
use remote_action::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => OpenAmtSettings::load(&path).map_err(|e| e.to_string())?,
        None => OpenAmtSettings::default(),
    };
    let id = match args.next() {
        Some(raw) => raw
            .parse::<u32>()
            .map(EndpointId)
            .map_err(|e| format!("invalid environment id `{raw}`: {e}"))?,
        None => EndpointId(1),
    };

    let system = OpenAmtSystem::new(&settings).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("amt_info", environment = %id);
    let result = async {
        info!("Requesting AMT info");
        system.client.info(id).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(amt) => {
            info!(environment = %amt.endpoint, "AMT info received");
            println!("{}", amt.text);
        }
        Err(e) => {
            error!(error = %e, "AMT info failed")
        }
    }

    Ok(())
}
