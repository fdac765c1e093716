#[tokio::main]
async fn main() {
    if let Err(e) = medigate_lib::run().await {
        eprintln!("medigate: {e}");
        std::process::exit(1);
    }
}
