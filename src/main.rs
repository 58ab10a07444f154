#[tokio::main]
async fn main() {
    if let Err(e) = defectlens_lib::run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}
