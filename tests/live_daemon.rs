use std::env;
use std::sync::Once;

use coinrpc::CoinRpc;

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("coinrpc=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a reachable daemon; set COINRPC_TEST_URL / COINRPC_TEST_USER / COINRPC_TEST_PASS"]
async fn live_daemon_answers_chain_queries() {
    init_tracing();

    let url = env::var("COINRPC_TEST_URL").expect("COINRPC_TEST_URL must be set");
    let user = env::var("COINRPC_TEST_USER").expect("COINRPC_TEST_USER must be set");
    let pass = env::var("COINRPC_TEST_PASS").expect("COINRPC_TEST_PASS must be set");

    let rpc = CoinRpc::new(&url, &user, &pass).expect("client must construct");

    let info = rpc
        .get_blockchain_info()
        .await
        .expect("live get_blockchain_info must succeed");
    let chain = info
        .get("chain")
        .and_then(|v| v.as_str())
        .expect("blockchain info must name the chain");
    eprintln!("[itest] connected to {chain} chain at {}", rpc.url());

    let count = rpc
        .get_block_count()
        .await
        .expect("live get_block_count must succeed");
    let hash = rpc
        .get_block_hash(count)
        .await
        .expect("live get_block_hash must succeed for the tip height");
    assert_eq!(hash.len(), 64, "block hash must be 32 bytes of hex");

    let header = rpc
        .get_block_header(&hash, None)
        .await
        .expect("live get_block_header must succeed for the tip hash");
    assert_eq!(
        header.get("height").and_then(|v| v.as_u64()),
        Some(count),
        "tip header height must match getblockcount"
    );

    let difficulty = rpc
        .get_difficulty()
        .await
        .expect("live get_difficulty must succeed");
    assert!(difficulty > 0.0);
}
