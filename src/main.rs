#[tokio::main]
async fn main() {
    plot_device::start_server().await;
}
