use serde::Serialize;

pub struct InvestmentSubtype {
    pub code: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub struct InvestmentType {
    pub code: &'static str,
    pub label: &'static str,
    pub subtypes: &'static [InvestmentSubtype],
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InvestmentLabel<'a> {
    pub label: &'a str,
    pub description: &'static str,
}

const fn sub(
    code: &'static str,
    label: &'static str,
    description: &'static str,
) -> InvestmentSubtype {
    InvestmentSubtype {
        code,
        label,
        description,
    }
}

/// Investment types reported by the provider, plus `manual` for assets the
/// user entered by hand. Subtype codes are only unique within their type.
pub static INVESTMENT_TYPES: &[InvestmentType] = &[
    InvestmentType {
        code: "FIXED_INCOME",
        label: "Renda Fixa",
        subtypes: &[
            sub("CRI", "CRI", "Certificado de Recebíveis Imobiliários – título do setor imobiliário"),
            sub("CRA", "CRA", "Certificado de Recebíveis do Agronegócio"),
            sub("LCI", "LCI", "Letra de Crédito Imobiliário – isenta de IR"),
            sub("LCA", "LCA", "Letra de Crédito do Agronegócio – isenta de IR"),
            sub("LC", "Letra de Câmbio", "Título emitido por financeiras, semelhante ao CDB"),
            sub("TREASURY", "Tesouro Direto", "Títulos públicos emitidos pelo governo federal"),
            sub("DEBENTURES", "Debêntures", "Títulos de dívida emitidos por empresas"),
            sub("CDB", "CDB", "Certificado de Depósito Bancário"),
            sub("LIG", "LIG", "Letra Imobiliária Garantida"),
            sub("LF", "Letra Financeira", "Título de longo prazo emitido por bancos"),
        ],
    },
    InvestmentType {
        code: "SECURITY",
        label: "Previdência",
        subtypes: &[
            sub("RETIREMENT", "Previdência Privada", "Produto de previdência privada em geral"),
            sub("PGBL", "PGBL", "Plano Gerador de Benefício Livre – dedutível no IR"),
            sub("VGBL", "VGBL", "Vida Gerador de Benefício Livre – indicado para declaração simplificada"),
        ],
    },
    InvestmentType {
        code: "MUTUAL_FUND",
        label: "Fundos de Investimento",
        subtypes: &[
            sub("INVESTMENT_FUND", "Fundo de Investimento", "Fundo de investimento geral"),
            sub("STOCK_FUND", "Fundo de Ações", "Investe em ações de empresas"),
            sub("MULTIMARKET_FUND", "Fundo Multimercado", "Mistura ações, câmbio e renda fixa"),
            sub("EXCHANGE_FUND", "Fundo Cambial", "Focado em moedas estrangeiras"),
            sub("FIXED_INCOME_FUND", "Fundo de Renda Fixa", "Investe em títulos de renda fixa"),
            sub("FIP_FUND", "FIP", "Fundo de Investimento em Participações"),
            sub("OFFSHORE_FUND", "Fundo Offshore", "Fundos registrados no exterior"),
            sub("ETF_FUND", "Fundo de Índice (ETF)", "Fundo de índice negociado em bolsa"),
        ],
    },
    InvestmentType {
        code: "EQUITY",
        label: "Renda Variável",
        subtypes: &[
            sub("STOCK", "Ação", "Papel de empresa listada em bolsa"),
            sub("BDR", "BDR", "Recibo de ações de empresas estrangeiras"),
            sub("REAL_ESTATE_FUND", "Fundo Imobiliário (FII)", "Investe em imóveis ou títulos imobiliários"),
            sub("DERIVATIVES", "Derivativos", "Contratos financeiros atrelados a ativos"),
            sub("OPTION", "Opção", "Contrato de direito de compra/venda futura"),
        ],
    },
    InvestmentType {
        code: "ETF",
        label: "ETF",
        subtypes: &[sub("ETF", "ETF", "Fundo de índice negociado em bolsa")],
    },
    InvestmentType {
        code: "COE",
        label: "COE",
        subtypes: &[sub("STRUCTURED_NOTE", "COE", "Certificado de Operações Estruturadas")],
    },
    InvestmentType {
        code: "manual",
        label: "Manual",
        subtypes: &[
            sub("ACAO", "Ação", "Ação adicionada manualmente"),
            sub("FII", "FII", "Fundo Imobiliário adicionado manualmente"),
            sub("ETF", "ETF", "ETF adicionado manualmente"),
            sub("RENDA_FIXA", "Renda Fixa", "Renda Fixa adicionada manualmente"),
            sub("FUNDO", "Fundo", "Fundo adicionado manualmente"),
            sub("CRIPTO", "Cripto", "Criptomoeda adicionada manualmente"),
            sub("OUTRO", "Outro", "Investimento manual"),
        ],
    },
];

/// Maps an investment type/subtype pair to a label and description.
///
/// Falls back to the type code itself when the type is unknown, and to the
/// type's label (with no description) when the subtype is missing or unknown.
pub fn map_investment_type<'a>(investment_type: &'a str, subtype: Option<&str>) -> InvestmentLabel<'a> {
    let Some(type_data) = INVESTMENT_TYPES.iter().find(|t| t.code == investment_type) else {
        return InvestmentLabel {
            label: investment_type,
            description: "",
        };
    };

    let subtype_data = subtype
        .filter(|code| !code.is_empty())
        .and_then(|code| type_data.subtypes.iter().find(|s| s.code == code));

    match subtype_data {
        Some(s) => InvestmentLabel {
            label: s.label,
            description: s.description,
        },
        None => InvestmentLabel {
            label: type_data.label,
            description: "",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_subtype() {
        assert_eq!(
            map_investment_type("FIXED_INCOME", Some("LCI")),
            InvestmentLabel {
                label: "LCI",
                description: "Letra de Crédito Imobiliário – isenta de IR",
            }
        );
        assert_eq!(map_investment_type("EQUITY", Some("REAL_ESTATE_FUND")).label, "Fundo Imobiliário (FII)");
    }

    #[test]
    fn test_subtype_resolved_within_its_type() {
        assert_eq!(
            map_investment_type("ETF", Some("ETF")).description,
            "Fundo de índice negociado em bolsa"
        );
        assert_eq!(map_investment_type("manual", Some("ETF")).description, "ETF adicionado manualmente");
    }

    #[test]
    fn test_unknown_type_passes_through() {
        assert_eq!(
            map_investment_type("CRYPTO_WALLET", Some("BTC")),
            InvestmentLabel {
                label: "CRYPTO_WALLET",
                description: "",
            }
        );
    }

    #[test]
    fn test_missing_or_unknown_subtype_uses_type_label() {
        let expected = InvestmentLabel {
            label: "Previdência",
            description: "",
        };
        assert_eq!(map_investment_type("SECURITY", None), expected);
        assert_eq!(map_investment_type("SECURITY", Some("")), expected);
        assert_eq!(map_investment_type("SECURITY", Some("LCI")), expected);
    }

    #[test]
    fn test_label_serializes_with_english_keys() {
        let json = serde_json::to_string(&map_investment_type("COE", Some("STRUCTURED_NOTE"))).unwrap();
        assert_eq!(
            json,
            r#"{"label":"COE","description":"Certificado de Operações Estruturadas"}"#
        );
    }

    #[test]
    fn test_codes_unique_within_type() {
        let mut types = HashSet::new();
        for t in INVESTMENT_TYPES {
            assert!(types.insert(t.code), "duplicate type {}", t.code);
            let mut subtypes = HashSet::new();
            for s in t.subtypes {
                assert!(subtypes.insert(s.code), "duplicate subtype {} in {}", s.code, t.code);
            }
        }
    }
}
