#[path = "storygen-cli/app.rs"]
mod app;
#[path = "storygen-cli/args.rs"]
mod args;
#[path = "storygen-cli/input.rs"]
mod input;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
