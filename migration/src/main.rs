use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(cine_magenta_migration::Migrator).await;
}
