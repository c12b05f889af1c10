use crate::sim::catalog::{Stand, StandKind};
use crate::sim::player::PlayerState;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseReceipt {
    pub kind: StandKind,
    pub cost: f64,
    pub balance_after: f64,
    pub owned_after: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum PurchaseError {
    #[error("not enough money (requires ${cost:.2}, have ${balance:.2})")]
    InsufficientFunds { cost: f64, balance: f64 },
}

/// Buys one unit of `stand`. Either both the debit and the append happen or neither does.
pub fn purchase(player: &mut PlayerState, stand: &Stand) -> Result<PurchaseReceipt, PurchaseError> {
    if !player.can_afford(stand) {
        return Err(PurchaseError::InsufficientFunds {
            cost: stand.cost(),
            balance: player.balance,
        });
    }

    player.balance -= stand.cost();
    player.owned.push(*stand);
    Ok(PurchaseReceipt {
        kind: stand.kind(),
        cost: stand.cost(),
        balance_after: player.balance,
        owned_after: player.owned_count(stand.kind()),
    })
}

/// Credits one work action and returns the amount earned.
pub fn perform_work(player: &mut PlayerState) -> f64 {
    let earned = player.income_per_work();
    player.balance += earned;
    earned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog;
    use proptest::prelude::*;

    fn lemonade(cost: f64, income: f64) -> Stand {
        Stand::new(StandKind::Lemonade, cost, income).expect("valid stand")
    }

    fn stand_strategy() -> impl Strategy<Value = Stand> {
        (0usize..3, 0.0f64..1_000.0, 0.0f64..50.0).prop_map(|(idx, cost, income)| {
            Stand::new(StandKind::ALL[idx], cost, income).expect("generated values are valid")
        })
    }

    #[test]
    fn purchase_then_work_scenario() {
        let mut player = PlayerState::new("Tester", 50.0, 1);
        let stand = lemonade(10.0, 1.0);

        let receipt = purchase(&mut player, &stand).expect("affordable");
        assert_eq!(player.balance, 40.0);
        assert_eq!(receipt.balance_after, 40.0);
        assert_eq!(receipt.owned_after, 1);
        assert_eq!(player.owned_count_by_name("Lemonade Stand"), 1);

        let earned = perform_work(&mut player);
        assert_eq!(earned, 1.0);
        assert_eq!(player.balance, 41.0);
    }

    #[test]
    fn unaffordable_purchase_changes_nothing() {
        let mut player = PlayerState::new("Tester", 5.0, 1);
        let before = player.clone();

        let result = purchase(&mut player, &lemonade(10.0, 1.0));
        assert_eq!(
            result,
            Err(PurchaseError::InsufficientFunds {
                cost: 10.0,
                balance: 5.0
            })
        );
        assert_eq!(player, before);
    }

    #[test]
    fn work_sums_every_owned_stand() {
        let mut player = PlayerState::new("Tester", 0.0, 1).with_stands([
            lemonade(10.0, 1.0),
            lemonade(10.0, 1.0),
            Stand::new(StandKind::HotDog, 750.0, 5.0).expect("valid stand"),
        ]);

        perform_work(&mut player);
        assert_eq!(player.balance, 7.0);
    }

    #[test]
    fn exact_balance_is_enough() {
        let mut player = PlayerState::default();
        let stand = catalog::find(StandKind::Lemonade);
        purchase(&mut player, &stand).expect("balance equals cost");
        assert_eq!(player.balance, 0.0);
        assert_eq!(player.owned, vec![stand]);
    }

    #[test]
    fn work_with_no_stands_earns_nothing() {
        let mut player = PlayerState::default();
        assert_eq!(perform_work(&mut player), 0.0);
        assert_eq!(player.balance, 50.0);
    }

    #[test]
    fn negative_stand_never_reaches_the_purchase_rule() {
        assert!(Stand::new(StandKind::Lemonade, -100.0, -3.0).is_err());

        let mut player = PlayerState::new("Tester", 0.0, 1);
        for stand in catalog::list() {
            assert!(stand.cost() >= 0.0 && stand.income() >= 0.0);
            assert!(purchase(&mut player, stand).is_err());
        }
        perform_work(&mut player);
        assert_eq!(player.balance, 0.0);
        assert!(player.owned.is_empty());
    }

    proptest! {
        #[test]
        fn purchase_is_gated_by_balance(balance in 0.0f64..1_000.0, stand in stand_strategy()) {
            prop_assume!(balance < stand.cost());
            let mut player = PlayerState::new("P", balance, 1);
            prop_assert!(purchase(&mut player, &stand).is_err());
            prop_assert_eq!(player.balance, balance);
            prop_assert!(player.owned.is_empty());
        }

        #[test]
        fn purchase_debits_and_appends(balance in 0.0f64..2_000.0, stand in stand_strategy(), existing in 0usize..5) {
            prop_assume!(balance >= stand.cost());
            let seed = catalog::find(StandKind::Newspaper);
            let mut player = PlayerState::new("P", balance, 1)
                .with_stands(std::iter::repeat(seed).take(existing));
            purchase(&mut player, &stand).expect("affordable");
            prop_assert_eq!(player.balance, balance - stand.cost());
            prop_assert_eq!(player.owned.len(), existing + 1);
            prop_assert_eq!(player.owned.last(), Some(&stand));
        }

        #[test]
        fn work_credits_total_income(balance in -100.0f64..1_000.0, stands in proptest::collection::vec(stand_strategy(), 0..12)) {
            let expected: f64 = stands.iter().map(Stand::income).sum();
            let mut player = PlayerState::new("P", balance, 1).with_stands(stands);
            let earned = perform_work(&mut player);
            prop_assert_eq!(earned, expected);
            prop_assert_eq!(player.balance, balance + expected);
        }

        #[test]
        fn owned_count_is_stable_between_mutations(stands in proptest::collection::vec(stand_strategy(), 0..12)) {
            let player = PlayerState::default().with_stands(stands);
            for kind in StandKind::ALL {
                prop_assert_eq!(player.owned_count(kind), player.owned_count(kind));
                prop_assert_eq!(
                    player.owned_count_by_name(kind.display_name()),
                    player.owned_count(kind)
                );
            }
        }

        #[test]
        fn repeated_unaffordable_purchases_never_move_balance(balance in 0.0f64..100.0, extra in 0.01f64..100.0, attempts in 1usize..50) {
            let stand = lemonade(balance + extra, 1.0);
            let mut player = PlayerState::new("P", balance, 1);
            for _ in 0..attempts {
                prop_assert!(purchase(&mut player, &stand).is_err());
            }
            prop_assert_eq!(player.balance, balance);
            prop_assert!(player.owned.is_empty());
        }
    }
}
