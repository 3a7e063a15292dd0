//! Interactive terminal front-end for the inventory server
//!
//! A stdin-menu front-end: list products, create/edit/delete them,
//! record a sale by barcode and show the monthly report.
//!
//! Run: cargo run --example caja

use std::io::{self, Write};

use inventario_client::{ClientConfig, ClientResult, InventarioClient, ProductForm, SaleForm, render};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("\nCaja - Inventario POS");
    println!("=====================\n");

    let base_url = get_input_with_default("Server URL", "http://127.0.0.1:5000");
    let client = ClientConfig::new(&base_url).build_client();

    // Initial sync; every mutation below re-fetches on its own.
    if let Err(e) = client.list().await {
        eprintln!("Could not reach the server: {e}");
        return Ok(());
    }

    let mut form = ProductForm::new();
    let mut sale_form = SaleForm::new();

    loop {
        print_menu();
        io::stdout().flush()?;

        let choice = get_input("Enter choice (0-6): ");
        let result = match choice.as_str() {
            "0" => {
                println!("\nHasta luego!");
                break;
            }
            "1" => show_products(&client).await,
            "2" => create_product(&client, &mut form).await,
            "3" => edit_product(&client, &mut form).await,
            "4" => delete_product(&client).await,
            "5" => record_sale(&client, &mut sale_form).await,
            "6" => show_report(&client).await,
            _ => {
                println!("Invalid choice");
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("Error: {e}");
        }
    }

    Ok(())
}

async fn show_products(client: &InventarioClient) -> ClientResult<()> {
    let productos = client.list().await?;
    print!("\n{}", render::table(&render::rows(&productos)));
    Ok(())
}

async fn create_product(client: &InventarioClient, form: &mut ProductForm) -> ClientResult<()> {
    form.nombre = get_input("Nombre: ");
    form.codigo_barra = get_input("Codigo de barra: ");
    form.precio_costo = get_input("Precio costo: ");
    form.precio_venta = get_input("Precio venta: ");
    form.stock = get_input("Stock: ");

    client.submit(form).await?;
    println!("Producto agregado.");
    Ok(())
}

async fn edit_product(client: &InventarioClient, form: &mut ProductForm) -> ClientResult<()> {
    client.list().await?;
    let id: i64 = match get_input("Producto id: ").parse() {
        Ok(id) => id,
        Err(_) => {
            println!("Not a valid id");
            return Ok(());
        }
    };

    form.load_for_edit(client.store(), id)?;

    form.nombre = get_input_with_default("Nombre", &form.nombre);
    form.codigo_barra = get_input_with_default("Codigo de barra", &form.codigo_barra);
    form.precio_costo = get_input_with_default("Precio costo", &form.precio_costo);
    form.precio_venta = get_input_with_default("Precio venta", &form.precio_venta);
    form.stock = get_input_with_default("Stock", &form.stock);

    client.submit(form).await?;
    println!("Producto actualizado.");
    Ok(())
}

async fn delete_product(client: &InventarioClient) -> ClientResult<()> {
    let id: i64 = match get_input("Producto id: ").parse() {
        Ok(id) => id,
        Err(_) => {
            println!("Not a valid id");
            return Ok(());
        }
    };

    client.remove(id).await?;
    println!("Producto eliminado.");
    Ok(())
}

async fn record_sale(client: &InventarioClient, form: &mut SaleForm) -> ClientResult<()> {
    form.codigo_barra = get_input("Codigo de barra: ");
    form.cantidad = get_input("Cantidad: ");

    client.submit_sale(form).await?;
    println!("Venta registrada.");
    Ok(())
}

async fn show_report(client: &InventarioClient) -> ClientResult<()> {
    let reporte = client.report().await?;
    println!("\n{}", render::report_text(&reporte));
    Ok(())
}

fn print_menu() {
    println!("\nAvailable Actions:");
    println!("1. List products");
    println!("2. New product");
    println!("3. Edit product");
    println!("4. Delete product");
    println!("5. Record sale");
    println!("6. Monthly report");
    println!("0. Exit");
}

fn get_input(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    input.trim().to_string()
}

fn get_input_with_default(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    let input = input.trim();
    if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}
