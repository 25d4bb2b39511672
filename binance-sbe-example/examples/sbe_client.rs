//! SBE Client Example
//!
//! Connects to the example server and prints every frame it receives, typed
//! through `SpotMessage` and, at debug level, through the schema-driven decoder.

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::{Duration, timeout};
use tokio_util::codec::Decoder;
use tracing::{debug, info, warn};

use binance_sbe_codec::SbeDecoder;
use binance_sbe_core::CodecConfig;
use binance_sbe_example::{ExampleConfig, init_logging};
use binance_sbe_spot::{SpotMessage, spot_schema};
use binance_sbe_transport::SofhCodec;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cfg = ExampleConfig::from_env();
    info!("SBE client connecting to {}", cfg.addr());

    let mut sock = timeout(Duration::from_secs(5), TcpStream::connect(cfg.addr())).await??;
    info!("Connected");

    let config = CodecConfig::new();
    let schema = spot_schema()?;
    let generic = SbeDecoder::with_config(&schema, config);
    let mut framing = SofhCodec::new().with_max_message_size(config.max_message_size);
    let mut buf = BytesMut::with_capacity(4096);

    loop {
        while let Some(payload) = framing.decode(&mut buf)? {
            if let Ok(decoded) = generic.decode(&payload) {
                debug!("{} {:?}", decoded.name, decoded.record);
            }
            match SpotMessage::decode(&payload, config.range_check_on_decode)? {
                SpotMessage::Orders(orders) => {
                    for order in &orders.orders {
                        info!(
                            "Open order {} {} {:?} {:?} @ {:?}",
                            order.order_id,
                            order.symbol,
                            order.side,
                            order.qty_decimal(),
                            order.price_decimal(),
                        );
                    }
                }
                SpotMessage::ExecutionReport(report) => {
                    info!(
                        "Execution {:?} order {} {:?} {:?} @ {:?}",
                        report.execution_type,
                        report.order_id,
                        report.order_status,
                        report.last_qty_decimal(),
                        report.last_price_decimal(),
                    );
                }
                SpotMessage::Error(err) => {
                    warn!("Error {}: {}", err.code, err.msg);
                }
                other => info!("Received {}", other.name()),
            }
        }

        if sock.read_buf(&mut buf).await? == 0 {
            break;
        }
    }

    info!("Server closed the connection");
    Ok(())
}
