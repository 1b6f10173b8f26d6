//! # Console REPL
//!
//! Maps typed lines to commands and renders responses as JSON.
//!
//! ## Command Words
//! ```text
//! products                                   list every product
//! list [--category C] [--search S] [--sort stock|sold]
//! categories                                 "All" + distinct categories
//! add <name> <category> [stock] [sold]       quote names with spaces
//! edit <id> <stock> <sold>
//! delete <id>
//! order <product-id> <quantity>
//! orders
//! delete-order <id>
//! clear-orders
//! load                                       reload the catalog
//! ensure                                     load only if never loaded
//! status                                     catalog fetch status
//! dashboard
//! reports
//! help
//! quit | exit
//! ```

use serde::Serialize;
use serde_json::Value;
use stockroom_catalog::Catalog;
use stockroom_core::listing::{ListingQuery, SortField};
use stockroom_core::{NewProduct, OrderId, ProductId, RawCount};

use crate::commands::{catalog, order, product, report};
use crate::error::ApiError;
use crate::state::{ConsoleConfig, InventoryState};

const HELP: &[&str] = &[
    "products",
    "list [--category C] [--search S] [--sort stock|sold]",
    "categories",
    "add <name> <category> [stock] [sold]",
    "edit <id> <stock> <sold>",
    "delete <id>",
    "order <product-id> <quantity>",
    "orders",
    "delete-order <id>",
    "clear-orders",
    "load",
    "ensure",
    "status",
    "dashboard",
    "reports",
    "help",
    "quit",
];

// =============================================================================
// Parsed Commands
// =============================================================================

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Products,
    List(ListingQuery),
    Categories,
    Add(NewProduct),
    Edit {
        id: ProductId,
        stock: RawCount,
        sold: RawCount,
    },
    Delete(ProductId),
    Order {
        product_id: ProductId,
        quantity: i64,
    },
    Orders,
    DeleteOrder(OrderId),
    ClearOrders,
    Load,
    Ensure,
    Status,
    Dashboard,
    Reports,
    Help,
    Quit,
}

/// Splits a line into words. Single or double quotes group words.
pub fn tokenize(line: &str) -> Result<Vec<String>, ApiError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(ApiError::invalid_command("Unterminated quote"));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parses one console line. Blank lines give `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ApiError> {
    let tokens = tokenize(line)?;
    let Some((word, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match word.to_lowercase().as_str() {
        "products" => Command::Products,
        "list" => Command::List(parse_listing(args)?),
        "categories" => Command::Categories,
        "add" => match args {
            [name, category, rest @ ..] if rest.len() <= 2 => {
                let mut input = NewProduct::new(name.as_str(), category.as_str());
                if let Some(stock) = rest.first() {
                    input = input.with_stock(stock.as_str());
                }
                if let Some(sold) = rest.get(1) {
                    input = input.with_sold(sold.as_str());
                }
                Command::Add(input)
            }
            _ => return Err(usage("add <name> <category> [stock] [sold]")),
        },
        "edit" => match args {
            [id, stock, sold] => Command::Edit {
                id: ProductId::new(parse_id(id)?),
                stock: RawCount::from(stock.as_str()),
                sold: RawCount::from(sold.as_str()),
            },
            _ => return Err(usage("edit <id> <stock> <sold>")),
        },
        "delete" => match args {
            [id] => Command::Delete(ProductId::new(parse_id(id)?)),
            _ => return Err(usage("delete <id>")),
        },
        "order" => match args {
            [id, quantity] => Command::Order {
                product_id: ProductId::new(parse_id(id)?),
                quantity: quantity
                    .parse::<i64>()
                    .map_err(|_| ApiError::invalid_command(format!("Not a quantity: {quantity}")))?,
            },
            _ => return Err(usage("order <product-id> <quantity>")),
        },
        "orders" => Command::Orders,
        "delete-order" => match args {
            [id] => Command::DeleteOrder(OrderId::new(parse_id(id)?)),
            _ => return Err(usage("delete-order <id>")),
        },
        "clear-orders" => Command::ClearOrders,
        "load" => Command::Load,
        "ensure" => Command::Ensure,
        "status" => Command::Status,
        "dashboard" => Command::Dashboard,
        "reports" => Command::Reports,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(ApiError::invalid_command(format!(
                "Unknown command: {other}. Type 'help' for a list"
            )))
        }
    };

    Ok(Some(command))
}

fn parse_listing(args: &[String]) -> Result<ListingQuery, ApiError> {
    let mut query = ListingQuery::default();
    let mut args = args.iter();

    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| ApiError::invalid_command(format!("Missing value for {flag}")))?;
        match flag.as_str() {
            "--category" | "-c" => query.category = Some(value.clone()),
            "--search" | "-s" => query.search = Some(value.clone()),
            "--sort" => {
                query.sort = Some(value.parse::<SortField>().map_err(ApiError::invalid_command)?)
            }
            other => return Err(ApiError::invalid_command(format!("Unknown flag: {other}"))),
        }
    }

    Ok(query)
}

fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_command(format!("Not an id: {raw}")))
}

fn usage(text: &str) -> ApiError {
    ApiError::invalid_command(format!("Usage: {text}"))
}

// =============================================================================
// Console
// =============================================================================

/// Shared state, configuration and catalog loader for one console session.
#[derive(Debug, Clone)]
pub struct Console {
    state: InventoryState,
    config: ConsoleConfig,
    catalog: Catalog,
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        let catalog = config.catalog_loader();
        Self::with_catalog(config, catalog)
    }

    pub fn with_catalog(config: ConsoleConfig, catalog: Catalog) -> Self {
        Console {
            state: InventoryState::new(),
            config,
            catalog,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    /// Runs one command and returns its JSON response.
    ///
    /// `Quit` is handled by the caller and answers `null` here.
    pub async fn execute(&self, command: Command) -> Result<Value, ApiError> {
        let state = &self.state;

        match command {
            Command::Products => to_json(product::get_products(state)),
            Command::List(query) => to_json(product::list_products(state, query)?),
            Command::Categories => to_json(product::get_categories(state)),
            Command::Add(input) => to_json(product::add_product(state, input)),
            Command::Edit { id, stock, sold } => to_json(product::edit_product(state, id, stock, sold)),
            Command::Delete(id) => to_json(product::delete_product(state, id)),
            Command::Order {
                product_id,
                quantity,
            } => to_json(order::place_order(state, product_id, quantity)?),
            Command::Orders => to_json(order::get_orders(state)),
            Command::DeleteOrder(id) => to_json(order::delete_order(state, id)),
            Command::ClearOrders => to_json(order::clear_orders(state)),
            Command::Load => to_json(catalog::load_catalog(state, &self.catalog).await?),
            Command::Ensure => to_json(catalog::ensure_catalog(state, &self.catalog).await?),
            Command::Status => to_json(catalog::get_catalog_status(state)),
            Command::Dashboard => to_json(report::get_dashboard(state, &self.config)),
            Command::Reports => to_json(report::get_reports(state, &self.config)),
            Command::Help => to_json(HELP),
            Command::Quit => Ok(Value::Null),
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(format!("Failed to encode response: {e}")))
}

/// Renders a command outcome as the line printed on stdout.
pub fn render(outcome: &Result<Value, ApiError>) -> String {
    let value = match outcome {
        Ok(value) => value.clone(),
        Err(err) => serde_json::json!({ "error": err }),
    };
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
