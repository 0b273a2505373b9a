mod error;
mod handlers;
mod models;
mod router;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use market_data::{LogPublisher, TradeTape};
use matching_engine::{MarketDataListener, MatchingEngine, OrderBook, OrderPool};
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;
use types::errors::EngineError;
use types::{OrderId, Price, Quantity, Side};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting order book gateway");

    let pool = Arc::new(OrderPool::new());
    let book = Arc::new(OrderBook::new(Arc::clone(&pool)));
    let engine = Arc::new(MatchingEngine::new(book));

    let tape = Arc::new(TradeTape::default());
    engine.add_listener(Arc::new(LogPublisher));
    engine.add_listener(Arc::clone(&tape) as Arc<dyn MarketDataListener>);

    tracing::info!(pool_capacity = pool.capacity(), "order book initialized");

    seed_book(&engine)?;

    let state = AppState::new(engine, tape);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Pre-populate the book with a demo ladder: ten asks walking up from
/// $105.00 and ten bids walking down from $104.90.
fn seed_book(engine: &MatchingEngine) -> Result<(), EngineError> {
    for i in 0..10u64 {
        let price = Price::from_ticks(10500 + (i as i64) * 10);
        let quantity = Quantity::new(100 + i * 20);
        engine.process_order(OrderId::new(1000 + i), Side::Sell, price, quantity)?;
    }
    for i in 0..10u64 {
        let price = Price::from_ticks(10490 - (i as i64) * 10);
        let quantity = Quantity::new(100 + i * 20);
        engine.process_order(OrderId::new(2000 + i), Side::Buy, price, quantity)?;
    }

    tracing::info!("seeded 20 demo orders (10 bids, 10 asks)");
    Ok(())
}
