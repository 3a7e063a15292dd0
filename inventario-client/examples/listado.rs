// inventario-client/examples/listado.rs
// Fetch the product list and print it as a table.

use inventario_client::{ClientConfig, render};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("INVENTARIO_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:5000".to_string());

    let client = ClientConfig::new(&base_url).build_client();

    let productos = client.list().await?;
    tracing::info!(count = productos.len(), "Fetched product list");

    print!("{}", render::table(&render::rows(&productos)));
    Ok(())
}
