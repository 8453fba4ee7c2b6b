#[tokio::main]
async fn main() -> anyhow::Result<()> {
    typing_race_backend::run().await
}
