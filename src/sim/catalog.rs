use serde::Deserialize;
use thiserror::Error;

/// Identity of a purchasable stand. Display text lives on the kind, never the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum StandKind {
    Lemonade,
    Newspaper,
    HotDog,
}

impl StandKind {
    pub const ALL: [StandKind; 3] = [StandKind::Lemonade, StandKind::Newspaper, StandKind::HotDog];

    pub fn display_name(self) -> &'static str {
        match self {
            StandKind::Lemonade => "Lemonade Stand",
            StandKind::Newspaper => "Newspaper Stand",
            StandKind::HotDog => "Hot Dog Stand",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            StandKind::Lemonade => "Lemonade",
            StandKind::Newspaper => "Newspaper",
            StandKind::HotDog => "Hot Dog",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.display_name() == name)
    }
}

/// A stand definition. Owned stands are copies of the definition they were bought from.
///
/// Only [`Stand::new`] builds one, so cost and income are always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stand {
    kind: StandKind,
    cost: f64,
    income: f64,
}

impl Stand {
    pub const fn new(kind: StandKind, cost: f64, income: f64) -> Result<Self, CatalogError> {
        if !cost.is_finite() || !income.is_finite() {
            return Err(CatalogError::NonFinite { kind });
        }
        if cost < 0.0 {
            return Err(CatalogError::NegativeCost { kind, cost });
        }
        if income < 0.0 {
            return Err(CatalogError::NegativeIncome { kind, income });
        }
        Ok(Self { kind, cost, income })
    }

    pub fn kind(&self) -> StandKind {
        self.kind
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("{} cost must not be negative (got {cost})", .kind.display_name())]
    NegativeCost { kind: StandKind, cost: f64 },
    #[error("{} income must not be negative (got {income})", .kind.display_name())]
    NegativeIncome { kind: StandKind, income: f64 },
    #[error("{} values must be finite", .kind.display_name())]
    NonFinite { kind: StandKind },
}

// Evaluated at compile time: a bad entry fails the build instead of reaching a player.
const fn catalog_entry(kind: StandKind, cost: f64, income: f64) -> Stand {
    match Stand::new(kind, cost, income) {
        Ok(stand) => stand,
        Err(_) => panic!("catalog entry must have finite, non-negative cost and income"),
    }
}

const CATALOG: [Stand; 3] = [
    catalog_entry(StandKind::Lemonade, 50.0, 0.25),
    catalog_entry(StandKind::Newspaper, 300.0, 2.0),
    catalog_entry(StandKind::HotDog, 750.0, 5.0),
];

pub fn list() -> &'static [Stand] {
    &CATALOG
}

pub fn find(kind: StandKind) -> Stand {
    match kind {
        StandKind::Lemonade => CATALOG[0],
        StandKind::Newspaper => CATALOG[1],
        StandKind::HotDog => CATALOG[2],
    }
}
