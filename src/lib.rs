mod catalog;
mod csv_utils;
mod dto;
mod error;
pub mod labels;
mod runner;

pub use catalog::{find_product_by_price_id, products, Catalog};
pub use dto::{format_brl, AccountRecord, LabelledAccountRow, Product, ProductMode, ProductRow};
pub use error::Error;
pub use labels::{account_type_label, map_account_subtype, map_investment_type};
pub use runner::{export_catalog, run, run_reader};
