use super::catalog::{self, Stand, StandKind};
use super::economy::{self, PurchaseError, PurchaseReceipt};
use super::player::PlayerState;
use crate::config::GameConfig;
use std::collections::VecDeque;
use tracing::{debug, info};

const MAX_MESSAGES: usize = 8;

/// Emitted after every core mutation so the presentation layer can react without polling.
#[derive(Debug, Clone, PartialEq)]
pub enum EconomyEvent {
    Worked { earned: f64, balance: f64 },
    Purchased(PurchaseReceipt),
    PurchaseRejected { kind: StandKind, cost: f64, balance: f64 },
}

pub struct Game {
    state: PlayerState,
    events: VecDeque<EconomyEvent>,
    messages: VecDeque<String>,
}

impl Game {
    #[cfg(test)]
    pub fn fresh() -> Self {
        Self::from_state(PlayerState::default())
    }

    pub fn new(config: &GameConfig) -> Self {
        let starting = config.starting_stands.iter().map(|kind| catalog::find(*kind));
        Self::from_state(
            PlayerState::new(config.player_name.clone(), config.initial_balance, config.tier)
                .with_stands(starting),
        )
    }

    pub fn from_state(state: PlayerState) -> Self {
        Self {
            state,
            events: VecDeque::new(),
            messages: VecDeque::with_capacity(MAX_MESSAGES),
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.state
    }

    pub fn balance(&self) -> f64 {
        self.state.balance
    }

    pub fn catalog(&self) -> &'static [Stand] {
        catalog::list()
    }

    pub fn work(&mut self) -> f64 {
        let earned = economy::perform_work(&mut self.state);
        info!(earned, balance = self.state.balance, "work performed");
        self.events.push_back(EconomyEvent::Worked {
            earned,
            balance: self.state.balance,
        });
        earned
    }

    pub fn purchase(&mut self, kind: StandKind) -> Result<PurchaseReceipt, PurchaseError> {
        let stand = catalog::find(kind);
        match economy::purchase(&mut self.state, &stand) {
            Ok(receipt) => {
                info!(
                    stand = kind.display_name(),
                    cost = receipt.cost,
                    balance = receipt.balance_after,
                    owned = receipt.owned_after,
                    "stand purchased"
                );
                self.events.push_back(EconomyEvent::Purchased(receipt));
                self.push_message(format!(
                    "Bought a {} (now own {}).",
                    kind.display_name(),
                    receipt.owned_after
                ));
                Ok(receipt)
            }
            Err(err) => {
                debug!(stand = kind.display_name(), %err, "purchase rejected");
                self.events.push_back(EconomyEvent::PurchaseRejected {
                    kind,
                    cost: stand.cost(),
                    balance: self.state.balance,
                });
                Err(err)
            }
        }
    }

    /// Returns the events raised since the previous call, oldest first.
    pub fn drain_events(&mut self) -> Vec<EconomyEvent> {
        self.events.drain(..).collect()
    }

    pub fn messages(&self) -> impl Iterator<Item = &String> {
        self.messages.iter()
    }

    pub fn add_message<S: Into<String>>(&mut self, message: S) {
        self.push_message(message.into());
    }

    fn push_message(&mut self, message: String) {
        if self.messages.len() >= MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }
}
