mod domain;
mod frameworks;
mod interface_adapters;
mod use_cases;

use frameworks::terminal;

#[tokio::main]
async fn main() {
    terminal::run().await;
}
