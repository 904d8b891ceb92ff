use lazy_static::lazy_static;
use log::debug;
use std::collections::HashMap;

/// Shown when the provider sent no subtype at all.
pub const NOT_AVAILABLE: &str = "Não disponível";

lazy_static! {
    pub static ref ACCOUNT_TYPE_LABELS: HashMap<&'static str, &'static str> = HashMap::from([
        ("BANK", "Conta Bancária"),
        ("CREDIT", "Cartão de Crédito"),
        ("INVESTMENT", "Investimento"),
        ("LOAN", "Empréstimo"),
        ("OTHER", "Outro"),
    ]);
    pub static ref ACCOUNT_SUBTYPE_LABELS: HashMap<&'static str, &'static str> = HashMap::from([
        ("CHECKING_ACCOUNT", "Conta Corrente"),
        ("SAVINGS_ACCOUNT", "Conta Poupança"),
        ("CREDIT_CARD", "Cartão de Crédito"),
        ("INVESTMENT", "Investimento"),
        ("OTHER", "Outro"),
    ]);
}

/// Raw lookup into [`ACCOUNT_TYPE_LABELS`]. Unknown types yield `None`;
/// callers decide how to present them.
pub fn account_type_label(account_type: &str) -> Option<&'static str> {
    ACCOUNT_TYPE_LABELS.get(account_type).copied()
}

/// Maps an account subtype to its label.
///
/// A missing (or empty) subtype yields [`NOT_AVAILABLE`]. A subtype that is
/// present but unknown is returned as-is, so new provider codes still show up.
pub fn map_account_subtype(subtype: Option<&str>) -> &str {
    match subtype {
        None | Some("") => NOT_AVAILABLE,
        Some(code) => match ACCOUNT_SUBTYPE_LABELS.get(code).copied() {
            Some(label) => label,
            None => {
                debug!("unrecognized account subtype {:?}, passing through", code);
                code
            }
        },
    }
}
