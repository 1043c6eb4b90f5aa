//! Property tests for the forge validator, over randomly weighted three basset baskets.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use anchor_lang::error::Error;
    use forge::utils::forge_lib::{validate_mint, validate_redemption};
    use forge::utils::Basket;
    use proptest::prelude::*;
    use shared::constants::ONE_PERCENT_WEIGHT;
    use shared::errors::ErrorCode::*;

    /// Whole percent targets for three bassets, summing to 100.
    fn targets() -> impl Strategy<Value = (u64, u64, u64)> {
        (1u64..=60).prop_flat_map(|first| {
            (1u64..=(99 - first)).prop_map(move |second| (first, second, 100 - first - second))
        })
    }

    fn basket_with(targets: (u64, u64, u64), balances: [u64; 3], grace: u128) -> Basket {
        create_basket(
            &[
                (targets.0, balances[0], 18),
                (targets.1, balances[1], 14),
                (targets.2, balances[2], 6),
            ],
            grace,
        )
    }

    proptest! {
        #[test]
        fn empty_forge_is_always_accepted(
            targets in targets(),
            balances in prop::array::uniform3(0u64..10_000),
            grace_bps in 0u128..=10_000,
        ) {
            let basket = basket_with(targets, balances, grace_bps * ONE_PERCENT_WEIGHT / 100);

            prop_assert!(validate_mint(&basket, &[0, 0, 0]).is_ok());
            prop_assert!(validate_redemption(&basket, &[0, 0, 0]).is_ok());
        }

        #[test]
        fn widening_grace_never_rejects_an_accepted_mint(
            targets in targets(),
            balances in prop::array::uniform3(0u64..10_000),
            amounts in prop::array::uniform3(0u64..5_000),
            grace_bps in 0u128..=500,
            extra_bps in 0u128..=500,
        ) {
            let narrow = basket_with(targets, balances, grace_bps * ONE_PERCENT_WEIGHT / 100);
            let wide = basket_with(
                targets,
                balances,
                (grace_bps + extra_bps) * ONE_PERCENT_WEIGHT / 100,
            );
            let amounts = quantities(&narrow, &amounts);

            if validate_mint(&narrow, &amounts).is_ok() {
                prop_assert!(validate_mint(&wide, &amounts).is_ok());
            }
        }

        #[test]
        fn length_mismatch_is_always_rejected(
            targets in targets(),
            balances in prop::array::uniform3(0u64..10_000),
            amounts in prop::collection::vec(any::<u64>(), 0..8usize),
        ) {
            prop_assume!(amounts.len() != 3);

            let basket = basket_with(targets, balances, 0);
            let amounts = amounts.iter().map(|amount| *amount as u128).collect::<Vec<u128>>();

            prop_assert_eq!(
                validate_mint(&basket, &amounts).unwrap_err(),
                Error::from(MissingOrExtraBasset)
            );
            prop_assert_eq!(
                validate_redemption(&basket, &amounts).unwrap_err(),
                Error::from(MissingOrExtraBasset)
            );
        }

        #[test]
        fn redemption_above_balance_is_always_rejected(
            targets in targets(),
            balances in prop::array::uniform3(0u64..10_000),
            index in 0usize..3,
            excess in 1u64..1_000,
            grace_bps in 0u128..=10_000,
        ) {
            let basket = basket_with(targets, balances, grace_bps * ONE_PERCENT_WEIGHT / 100);

            let mut whole = [0u64; 3];
            whole[index] = balances[index] + excess;
            let amounts = quantities(&basket, &whole);

            prop_assert_eq!(
                validate_redemption(&basket, &amounts).unwrap_err(),
                Error::from(InsufficientVaultBalance)
            );
        }

        #[test]
        fn proportional_mint_on_balanced_basket_is_accepted(
            targets in targets(),
            size in 0u64..1_000,
            mint in 1u64..1_000,
        ) {
            let balances = [targets.0 * size, targets.1 * size, targets.2 * size];
            let basket = basket_with(targets, balances, 0);
            let amounts = quantities(&basket, &[targets.0 * mint, targets.1 * mint, targets.2 * mint]);

            prop_assert!(validate_mint(&basket, &amounts).is_ok());
        }

        #[test]
        fn proportional_mint_is_always_accepted(
            targets in targets(),
            balances in prop::array::uniform3(0u64..10_000),
            mint in 1u64..1_000,
            grace_bps in 0u128..=500,
        ) {
            let basket = basket_with(targets, balances, grace_bps * ONE_PERCENT_WEIGHT / 100);
            let amounts = quantities(&basket, &[targets.0 * mint, targets.1 * mint, targets.2 * mint]);

            prop_assert!(validate_mint(&basket, &amounts).is_ok());
        }

        #[test]
        fn skewed_mint_on_balanced_basket_is_rejected(
            targets in targets(),
            size in 0u64..1_000,
            mint in 1u64..1_000,
            index in 0usize..3,
            skew in 1u64..100,
            grace_bps in 0u128..=10_000,
        ) {
            let balances = [targets.0 * size, targets.1 * size, targets.2 * size];
            let basket = basket_with(targets, balances, grace_bps * ONE_PERCENT_WEIGHT / 100);

            let mut whole = [targets.0 * mint, targets.1 * mint, targets.2 * mint];
            whole[index] += skew;
            let amounts = quantities(&basket, &whole);

            prop_assert_eq!(
                validate_mint(&basket, &amounts).unwrap_err(),
                Error::from(OffOptimalWeighting)
            );
        }
    }
}
