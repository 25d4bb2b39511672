//! SBE Server Example
//!
//! Streams framed spot responses to every client that connects: the open
//! orders of the example symbol, one execution report per fill, then a rate
//! limit error before closing.

use bytes::BytesMut;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::Encoder;
use tracing::{error, info};

use binance_sbe_core::CodecConfig;
use binance_sbe_example::{ExampleConfig, error_response, fill_report, init_logging, limit_order};
use binance_sbe_spot::{OrderSide, OrdersResponse, SpotMessage};
use binance_sbe_transport::SpotCodec;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cfg = ExampleConfig::from_env();
    info!("Starting SBE server on {}", cfg.addr());

    let listener = TcpListener::bind(&cfg.addr()).await?;

    loop {
        let (socket, addr) = listener.accept().await?;
        info!("Connection from {}", addr);
        let cfg = cfg.clone();
        tokio::spawn(async move {
            if let Err(e) = handle(socket, cfg).await {
                error!("Error: {}", e);
            }
        });
    }
}

async fn handle(mut sock: TcpStream, cfg: ExampleConfig) -> anyhow::Result<()> {
    let mut codec = SpotCodec::with_config(CodecConfig::new());
    let mut buf = BytesMut::with_capacity(4096);

    let orders: Vec<_> = (0..cfg.orders)
        .map(|i| {
            let id = i64::try_from(i).unwrap_or(i64::MAX) + 1;
            let side = if id % 2 == 0 { OrderSide::Sell } else { OrderSide::Buy };
            limit_order(&cfg.symbol, id, side, 6_500_000_000_000 + id * 100_000_000, 1_000_000)
        })
        .collect();

    codec.encode(
        SpotMessage::Orders(OrdersResponse {
            orders: orders.clone(),
        }),
        &mut buf,
    )?;
    info!("Sending {} open orders", orders.len());

    for (trade_id, order) in (1..).zip(&orders) {
        codec.encode(SpotMessage::ExecutionReport(fill_report(order, trade_id)), &mut buf)?;
    }

    codec.encode(
        SpotMessage::Error(error_response(-1003, "Too many requests.")),
        &mut buf,
    )?;

    sock.write_all(&buf).await?;
    sock.shutdown().await?;
    info!("Sent {} bytes", buf.len());
    Ok(())
}
