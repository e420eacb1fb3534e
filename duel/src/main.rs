#[tokio::main]
async fn main() -> std::io::Result<()> {
    duel::run_with_config().await
}
