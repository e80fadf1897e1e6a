//! CLI command implementations.

pub mod checkout;
pub mod config;
pub mod products;
pub mod shipping;

use clap::Args;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Case-insensitive text matched against name and category.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show this category ("All" shows every category).
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// List the categories instead of products.
    #[arg(long)]
    pub categories: bool,

    /// Use the built-in catalog instead of the API.
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the shipping command.
#[derive(Args)]
pub struct ShippingArgs {
    /// Destination pincode.
    pub pincode: String,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Product to add, as `ID` or `ID:QTY`. Repeatable.
    #[arg(short, long = "item", value_name = "ID[:QTY]", required = true)]
    pub items: Vec<String>,

    /// Full name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// 10-digit mobile number.
    #[arg(long, default_value = "")]
    pub mobile: String,

    /// Address line 1.
    #[arg(long, default_value = "")]
    pub address1: String,

    /// Address line 2.
    #[arg(long, default_value = "")]
    pub address2: String,

    /// 6-digit pincode.
    #[arg(long, default_value = "")]
    pub pincode: String,

    /// Validate and price the order without submitting it.
    #[arg(long)]
    pub dry_run: bool,

    /// Use the built-in catalog (implies --dry-run).
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Print the configuration as TOML.
    #[arg(long)]
    pub toml: bool,
}
