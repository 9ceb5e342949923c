//! The interactive shop loop.
//!
//! Fetches the catalog once at startup, then reads commands from stdin
//! against an in-memory [`Cart`]. The cart is local to this process and
//! gone when the loop exits; only the login session outlives it.

#![allow(clippy::print_stdout)]

use std::io::{self, BufRead, Write};

use myshop_core::cart::Cart;
use myshop_core::types::{Product, ProductId};
use thiserror::Error;

use crate::api::{ApiClient, ApiError};
use crate::session::{Session, SessionError};

#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("could not read input: {0}")]
    Input(#[from] io::Error),
}

/// One line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    List,
    Add(i64),
    Remove(i64),
    ShowCart,
    Checkout,
    Logout,
    Help,
    Quit,
}

/// Parse a command line, or explain why it did not parse.
fn parse_command(input: &str) -> Result<Command, String> {
    let mut words = input.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("type a command, or `help`".to_owned());
    };

    let command = match verb {
        "list" | "ls" => Command::List,
        "add" => Command::Add(parse_id(words.next(), "add")?),
        "remove" | "rm" => Command::Remove(parse_id(words.next(), "remove")?),
        "cart" => Command::ShowCart,
        "checkout" => Command::Checkout,
        "logout" => Command::Logout,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command `{other}`, try `help`")),
    };

    if words.next().is_some() {
        return Err(format!("too many arguments for `{verb}`"));
    }
    Ok(command)
}

fn parse_id(word: Option<&str>, verb: &str) -> Result<i64, String> {
    let Some(word) = word else {
        return Err(format!("usage: {verb} <product id>"));
    };
    word.parse()
        .map_err(|_| format!("`{word}` is not a product id"))
}

/// Run the shop loop until `quit` or end of input.
///
/// The catalog is fetched once up front; products added mid-session on
/// the server side are not visible until the next run.
pub async fn run(api: &ApiClient, session: &mut Session) -> Result<(), ShopError> {
    let products = api.list_products().await?;
    let mut cart = Cart::new();

    match session.username() {
        Some(name) => println!("welcome back, {name}"),
        None => println!("browsing anonymously, `myshop login` to sign in"),
    }
    print_catalog(&products);
    println!("type `help` for commands");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("shop> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::List => print_catalog(&products),
            Command::Add(id) => {
                let id = ProductId::new(id);
                match products.iter().find(|p| p.id == id) {
                    Some(product) => {
                        cart.add(product);
                        println!("added {}", product.name);
                        // Mirror the add with the current cart, like a
                        // panel sliding open after the click.
                        print_cart(&cart);
                    }
                    None => println!("no product with id {}", id.as_i64()),
                }
            }
            Command::Remove(id) => {
                cart.remove(ProductId::new(id));
                print_cart(&cart);
            }
            Command::ShowCart => print_cart(&cart),
            Command::Checkout => {
                if cart.is_empty() {
                    println!("your cart is empty");
                } else {
                    println!("checkout is not available yet");
                }
            }
            Command::Logout => {
                session.clear()?;
                cart.clear();
                println!("logged out, cart cleared");
            }
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }

    Ok(())
}

fn print_catalog(products: &[Product]) {
    println!("catalog:");
    for product in products {
        println!(
            "  [{}] {} - {} ({})",
            product.id.as_i64(),
            product.name,
            product.price,
            product.category_label(),
        );
    }
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }
    println!("cart:");
    for line in cart.lines() {
        println!(
            "  [{}] {} x{} = {}",
            line.product_id.as_i64(),
            line.name,
            line.quantity,
            line.line_total(),
        );
    }
    let totals = cart.totals();
    println!("  {} items, total {}", totals.total_items, totals.total_price);
}

fn print_help() {
    println!("commands:");
    println!("  list            show the catalog");
    println!("  add <id>        add a product to the cart");
    println!("  remove <id>     drop a product from the cart");
    println!("  cart            show the cart");
    println!("  checkout        check out the cart");
    println!("  logout          sign out and clear the cart");
    println!("  quit            leave the shop");
}
