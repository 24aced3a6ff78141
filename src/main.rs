#[tokio::main]
async fn main() {
    if let Err(e) = parking_availability::run().await {
        eprintln!("parking-availability: {}", e);
        std::process::exit(1);
    }
}
