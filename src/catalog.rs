use lazy_static::lazy_static;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::io::Read;

use crate::{Error, Product, ProductMode};

lazy_static! {
    static ref BUILTIN: Catalog = Catalog::builtin();
}

/// Ordered list of purchasable products, unique by price identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting products without a price identifier and
    /// identifiers that appear more than once.
    pub fn new(products: Vec<Product>) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.price_id.is_empty() {
                return Err(Error::EmptyPriceId {
                    name: product.name.clone(),
                });
            }
            if !seen.insert(product.price_id.as_str()) {
                return Err(Error::DuplicatePriceId(product.price_id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// The plans offered on the pricing page. Price identifiers mirror the
    /// price records configured at the payment processor.
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    /// Reads a JSON array of products (camelCase fields) and validates it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let products: Vec<Product> = serde_json::from_reader(reader)?;
        debug!("loaded {} products from catalog file", products.len());
        Self::new(products)
    }

    pub fn find_by_price_id(&self, price_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.price_id == price_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Products billed on a recurring basis.
    pub fn subscriptions(&self) -> impl Iterator<Item = &Product> {
        self.iter().filter(|p| p.mode == ProductMode::Subscription)
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The built-in catalog, in display order.
pub fn products() -> &'static [Product] {
    BUILTIN.as_slice()
}

/// Looks up a product of the built-in catalog by its processor price identifier.
pub fn find_product_by_price_id(price_id: &str) -> Option<&'static Product> {
    BUILTIN.find_by_price_id(price_id)
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product {
            price_id: "price_1RzHdZHcVbxMAUgHWZXTsnsM".to_string(),
            name: "Assuntatura Gratuita".to_string(),
            description: "Introdução ao controle financeiro pessoal e familiar de forma simples e gratuita."
                .to_string(),
            mode: ProductMode::Payment,
            price: Decimal::new(0, 2),
            features: features(&[
                "Cadastro de receitas e despesas",
                "Relatórios simples (visão mensal)",
                "1 grupo familiar",
                "Suporte por e-mail",
            ]),
            is_popular: false,
            icon: "Star".to_string(),
        },
        Product {
            price_id: "price_essential_990_placeholder".to_string(),
            name: "Plano Essencial".to_string(),
            description: "Expansão de funcionalidades, oferecendo maior organização e relatórios detalhados."
                .to_string(),
            mode: ProductMode::Subscription,
            price: Decimal::new(990, 2),
            features: features(&[
                "Tudo do Plano Gratuito",
                "Grupos familiares ilimitados",
                "Relatórios avançados (comparativos, exportação PDF/Excel)",
                "Notificações personalizadas (contas, vencimentos)",
                "Suporte prioritário",
            ]),
            is_popular: true,
            icon: "Zap".to_string(),
        },
        Product {
            price_id: "price_advanced_1990_placeholder".to_string(),
            name: "Plano Avançado".to_string(),
            description: "Planejamento financeiro de médio e longo prazo, com análises mais completas."
                .to_string(),
            mode: ProductMode::Subscription,
            price: Decimal::new(1990, 2),
            features: features(&[
                "Tudo do Plano Essencial",
                "Painel de gráficos interativos",
                "Metas financeiras e projeções",
                "Busca avançada de transações",
                "Relatórios por membro da família",
                "Backup em nuvem (multi-dispositivo)",
            ]),
            is_popular: false,
            icon: "Crown".to_string(),
        },
    ]
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
