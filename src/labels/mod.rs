//! Display labels (pt-BR) for codes coming from the account-data provider:
//! - Account types and subtypes ([`ACCOUNT_TYPE_LABELS`], [`map_account_subtype`])
//! - Investment types and subtypes ([`map_investment_type`])
//!
//! Provider codes are open strings. Lookups never fail; unknown codes fall
//! back as documented on each function.

mod accounts;
mod investments;

pub use accounts::{
    account_type_label, map_account_subtype, ACCOUNT_SUBTYPE_LABELS, ACCOUNT_TYPE_LABELS,
    NOT_AVAILABLE,
};
pub use investments::{
    map_investment_type, InvestmentLabel, InvestmentSubtype, InvestmentType, INVESTMENT_TYPES,
};
