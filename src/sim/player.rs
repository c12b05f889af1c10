use super::catalog::{Stand, StandKind};

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const DEFAULT_BALANCE: f64 = 50.0;
pub const DEFAULT_TIER: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub name: String,
    pub balance: f64,
    /// Reserved for progression; no rule reads it yet.
    pub tier: u32,
    pub owned: Vec<Stand>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME, DEFAULT_BALANCE, DEFAULT_TIER)
    }
}

impl PlayerState {
    pub fn new(name: impl Into<String>, balance: f64, tier: u32) -> Self {
        Self {
            name: name.into(),
            balance,
            tier,
            owned: Vec::new(),
        }
    }

    pub fn with_stands(mut self, stands: impl IntoIterator<Item = Stand>) -> Self {
        self.owned.extend(stands);
        self
    }

    pub fn owned_count(&self, kind: StandKind) -> usize {
        self.owned.iter().filter(|stand| stand.kind() == kind).count()
    }

    pub fn owned_count_by_name(&self, name: &str) -> usize {
        StandKind::from_display_name(name)
            .map(|kind| self.owned_count(kind))
            .unwrap_or(0)
    }

    /// Amount a single work action would credit right now.
    pub fn income_per_work(&self) -> f64 {
        self.owned.iter().map(Stand::income).sum()
    }

    pub fn can_afford(&self, stand: &Stand) -> bool {
        self.balance >= stand.cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog;

    #[test]
    fn default_player_matches_starting_values() {
        let player = PlayerState::default();
        assert_eq!(player.name, "Player");
        assert_eq!(player.balance, 50.0);
        assert_eq!(player.tier, 1);
        assert!(player.owned.is_empty());
    }

    #[test]
    fn counts_group_by_kind() {
        let lemonade = catalog::find(StandKind::Lemonade);
        let hot_dog = catalog::find(StandKind::HotDog);
        let player = PlayerState::default().with_stands([lemonade, hot_dog, lemonade]);

        assert_eq!(player.owned_count(StandKind::Lemonade), 2);
        assert_eq!(player.owned_count(StandKind::HotDog), 1);
        assert_eq!(player.owned_count(StandKind::Newspaper), 0);
        assert_eq!(player.owned_count_by_name("Lemonade Stand"), 2);
        assert_eq!(player.owned_count_by_name("Lemonade Stand"), 2);
        assert_eq!(player.owned_count_by_name("Taco Truck"), 0);
    }

    #[test]
    fn income_preview_sums_owned_stands() {
        let player = PlayerState::default().with_stands([
            catalog::find(StandKind::Lemonade),
            catalog::find(StandKind::Newspaper),
        ]);
        assert_eq!(player.income_per_work(), 2.25);
        assert_eq!(PlayerState::default().income_per_work(), 0.0);
    }
}
