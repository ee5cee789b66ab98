#[tokio::main]
async fn main() {
    if let Err(e) = symptrack_lib::run().await {
        tracing::error!("{e}");
        eprintln!("symptrack: {e}");
        std::process::exit(1);
    }
}
