use cosmwasm_std::{Coin, StdResult};
use cw_utils::NativeBalance;

/// Sorts by denom, merges duplicate denoms and drops zero entries, so equal
/// amounts always have the same encoding. Fails if a merged amount overflows.
pub fn normalize(coins: Vec<Coin>) -> StdResult<Vec<Coin>> {
    let mut merged: Vec<Coin> = Vec::with_capacity(coins.len());
    for c in coins.into_iter().filter(|c| !c.amount.is_zero()) {
        match merged.iter_mut().find(|m| m.denom == c.denom) {
            Some(m) => m.amount = m.amount.checked_add(c.amount)?,
            None => merged.push(c),
        }
    }
    let mut balance = NativeBalance(merged);
    balance.normalize();
    Ok(balance.into_vec())
}

/// A usable bid or price: non-empty, strictly positive, each denom at most once.
pub fn is_valid_amount(coins: &[Coin]) -> bool {
    !coins.is_empty()
        && coins.iter().all(|c| !c.amount.is_zero())
        && coins
            .iter()
            .enumerate()
            .all(|(i, c)| coins[..i].iter().all(|prev| prev.denom != c.denom))
}

/// Returns true if `amount` meets or exceeds `required` in every denomination
/// present in `required`. A denomination missing from `amount` fails the check.
/// `amount` must hold each denom at most once.
pub fn covers(amount: &[Coin], required: &[Coin]) -> bool {
    let balance = NativeBalance(amount.to_vec());
    required
        .iter()
        .all(|c| c.amount.is_zero() || balance.has(c))
}

pub fn display_coins(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(Coin::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{coin, coins, StdError};

    #[test]
    fn normalize_sorts_and_merges() {
        let raw = vec![
            coin(3, "utoken"),
            coin(0, "zero"),
            coin(2, "atoken"),
            coin(4, "utoken"),
        ];
        assert_eq!(
            normalize(raw).unwrap(),
            vec![coin(2, "atoken"), coin(7, "utoken")]
        );
    }

    #[test]
    fn normalize_reports_overflow() {
        let raw = vec![coin(u128::MAX, "nametoken"), coin(u128::MAX, "nametoken")];
        let err = normalize(raw).unwrap_err();
        assert!(matches!(err, StdError::Overflow { .. }));
    }

    #[test]
    fn valid_amounts() {
        assert!(is_valid_amount(&coins(5, "nametoken")));
        assert!(is_valid_amount(&[coin(5, "utoken"), coin(1, "atoken")]));
        assert!(!is_valid_amount(&[]));
        assert!(!is_valid_amount(&[coin(5, "nametoken"), coin(0, "utoken")]));
        assert!(!is_valid_amount(&[
            coin(5, "nametoken"),
            coin(1, "utoken"),
            coin(5, "nametoken"),
        ]));
    }

    #[test]
    fn covers_checks_every_denom_of_required() {
        let price = vec![coin(5, "nametoken"), coin(2, "utoken")];

        assert!(covers(&[coin(5, "nametoken"), coin(2, "utoken")], &price));
        assert!(covers(
            &[coin(9, "nametoken"), coin(3, "utoken"), coin(1, "extra")],
            &price
        ));
        // order does not matter
        assert!(covers(&[coin(2, "utoken"), coin(5, "nametoken")], &price));
        // short in one denom
        assert!(!covers(&[coin(9, "nametoken"), coin(1, "utoken")], &price));
        // missing denom
        assert!(!covers(&coins(100, "nametoken"), &price));
    }

    #[test]
    fn display() {
        assert_eq!(
            display_coins(&[coin(5, "nametoken"), coin(2, "utoken")]),
            "5nametoken,2utoken"
        );
        assert_eq!(display_coins(&[]), "");
    }
}
