use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::labels::{account_type_label, map_account_subtype};

/// Whether a product is charged once or renews on a schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductMode {
    Payment,
    Subscription,
}

impl ProductMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductMode::Payment => "payment",
            ProductMode::Subscription => "subscription",
        }
    }
}

/// A purchasable plan, mirroring a price record held by the payment processor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub price_id: String,
    pub name: String,
    pub description: String,
    pub mode: ProductMode,
    /// Amount in BRL.
    pub price: Decimal,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub icon: String,
}

impl Product {
    pub fn formatted_price(&self) -> String {
        format_brl(self.price)
    }
}

/// Renders an amount the way the pricing page shows it, e.g. `R$ 1.234,50`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sign, grouped, frac_part)
}

/// Flat CSV view of a [`Product`].
#[derive(Debug, Serialize)]
pub struct ProductRow<'a> {
    pub price_id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub mode: ProductMode,
    pub price: Decimal,
    pub is_popular: bool,
    pub features: String,
}

impl<'a> From<&'a Product> for ProductRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            price_id: &product.price_id,
            name: &product.name,
            description: &product.description,
            mode: product.mode,
            price: product.price,
            is_popular: product.is_popular,
            features: product.features.join("; "),
        }
    }
}

/// One account as exported by the account-data provider.
#[derive(Debug, Deserialize, PartialEq)]
pub struct AccountRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub subtype: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct LabelledAccountRow {
    pub id: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub type_label: Option<&'static str>,
    pub subtype: Option<String>,
    pub subtype_label: String,
}

impl From<AccountRecord> for LabelledAccountRow {
    fn from(record: AccountRecord) -> Self {
        let type_label = account_type_label(&record.account_type);
        let subtype_label = map_account_subtype(record.subtype.as_deref()).to_owned();
        Self {
            id: record.id,
            account_type: record.account_type,
            type_label,
            subtype: record.subtype,
            subtype_label,
        }
    }
}
