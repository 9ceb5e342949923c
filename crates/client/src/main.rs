//! MyShop client - a terminal storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! myshop products
//!
//! # Create an account and sign in
//! myshop register ada ada@example.com "correct horse battery"
//! myshop login ada@example.com "correct horse battery"
//!
//! # Interactive shopping loop
//! myshop shop
//! ```
//!
//! The server base URL comes from `MYSHOP_API_URL` (default
//! `http://localhost:5000`); login state persists in a session file so
//! separate invocations stay signed in.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};
use myshop_client::api::ApiClient;
use myshop_client::session::Session;
use myshop_client::shop;

#[derive(Parser)]
#[command(name = "myshop")]
#[command(author, version, about = "MyShop terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Products,
    /// Create an account
    Register {
        username: String,
        email: String,
        password: String,
    },
    /// Sign in and store the session
    Login { email: String, password: String },
    /// Sign out and discard the session
    Logout,
    /// Show who is signed in
    Whoami,
    /// Enter the interactive shop loop
    Shop,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        // User-facing failure text, not a stack trace.
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let api = ApiClient::from_env()?;
    let mut session = Session::load()?;

    match cli.command {
        Commands::Products => {
            for product in api.list_products().await? {
                println!(
                    "[{}] {} - {} ({})",
                    product.id.as_i64(),
                    product.name,
                    product.price,
                    product.category_label(),
                );
            }
        }
        Commands::Register {
            username,
            email,
            password,
        } => {
            let message = api.register(&username, &email, &password).await?;
            println!("{message}");
        }
        Commands::Login { email, password } => {
            let login = api.login(&email, &password).await?;
            session.store(login.token, login.username.clone())?;
            println!("signed in as {}", login.username);
        }
        Commands::Logout => {
            session.clear()?;
            println!("signed out");
        }
        Commands::Whoami => match session.username() {
            Some(name) => println!("{name}"),
            None => println!("not signed in"),
        },
        Commands::Shop => shop::run(&api, &mut session).await?,
    }

    Ok(())
}
