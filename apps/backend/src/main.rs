#[tokio::main]
async fn main() -> anyhow::Result<()> {
    notical_backend::run().await
}
