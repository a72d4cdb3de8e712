//! Provision a superuser account with its per-admin verification key.
//!
//! Superusers are never created through the HTTP surface; run this against
//! the configured database instead.

use std::env;

use codepilot_core::core::config::Config;
use codepilot_core::core::database;
use codepilot_core::features::accounts::AccountService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let args: Vec<String> = env::args().skip(1).collect();
    let [username, email, password, admin_key] = args.as_slice() else {
        eprintln!("Usage: cargo run --bin create-admin <USERNAME> <EMAIL> <PASSWORD> <ADMIN_KEY>");
        std::process::exit(1);
    };

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let pool = database::create_pool(&config.database).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let service = AccountService::new(pool);
    let user = service
        .create_superuser(username, email, password, admin_key)
        .await?;

    println!("Superuser created: id={} username={}", user.id, user.username);
    println!("The admin key is stored hashed; keep the plaintext somewhere safe.");

    Ok(())
}
