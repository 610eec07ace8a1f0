#[tokio::main]
async fn main() {
    blueprint_backend::run().await;
}
