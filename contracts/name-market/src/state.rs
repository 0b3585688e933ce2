use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Order, StdResult, Storage};
use cw_storage_plus::{Item, Map};

use crate::coins::display_coins;

#[cw_serde]
pub struct Config {
    /// Price assigned to a name that has never been bought.
    pub min_name_price: Vec<Coin>,
}

/// Ownership record of a single name.
#[cw_serde]
pub struct Whois {
    /// What the name resolves to. Empty until the owner sets it.
    pub value: String,
    /// `None` while the name has never been bought.
    pub owner: Option<Addr>,
    /// The least a buyer has to bid, in every denomination, to take the name over.
    pub price: Vec<Coin>,
}

impl Whois {
    /// Record for a name that was never bought.
    pub fn virgin(min_name_price: &[Coin]) -> Self {
        Whois {
            value: String::new(),
            owner: None,
            price: min_name_price.to_vec(),
        }
    }
}

impl fmt::Display for Whois {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owner = self.owner.as_ref().map(Addr::as_str).unwrap_or_default();
        write!(
            f,
            "Owner: {}\nValue: {}\nPrice: {}",
            owner,
            self.value,
            display_coins(&self.price)
        )
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const NAMES: Map<&str, Whois> = Map::new("names");

/// Loads the record for `name`, or a virgin record priced at the configured
/// floor if the name was never bought.
pub fn load_whois(storage: &dyn Storage, name: &str) -> StdResult<Whois> {
    match NAMES.may_load(storage, name)? {
        Some(whois) => Ok(whois),
        None => {
            let config = CONFIG.load(storage)?;
            Ok(Whois::virgin(&config.min_name_price))
        }
    }
}

/// Overwrites the record for `name`. A record without an owner is never
/// persisted, so a partially filled record cannot erase an ownership.
pub fn save_whois(storage: &mut dyn Storage, name: &str, whois: &Whois) -> StdResult<()> {
    if whois.owner.is_none() {
        return Ok(());
    }
    NAMES.save(storage, name, whois)
}

pub fn has_owner(storage: &dyn Storage, name: &str) -> StdResult<bool> {
    Ok(load_whois(storage, name)?.owner.is_some())
}

pub fn resolve_name(storage: &dyn Storage, name: &str) -> StdResult<String> {
    Ok(load_whois(storage, name)?.value)
}

/// Iterates every stored record in key order. Each call starts a fresh scan.
pub fn scan_names<'a>(
    storage: &'a dyn Storage,
) -> Box<dyn Iterator<Item = StdResult<(String, Whois)>> + 'a> {
    NAMES.range(storage, None, None, Order::Ascending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coins;
    use cosmwasm_std::testing::MockStorage;

    fn setup(storage: &mut dyn Storage) {
        CONFIG
            .save(
                storage,
                &Config {
                    min_name_price: coins(1, "nametoken"),
                },
            )
            .unwrap();
    }

    fn owned(owner: &str, value: &str, price: u128) -> Whois {
        Whois {
            value: value.to_string(),
            owner: Some(Addr::unchecked(owner)),
            price: coins(price, "nametoken"),
        }
    }

    #[test]
    fn absent_name_reads_as_virgin() {
        let mut storage = MockStorage::new();
        setup(&mut storage);

        let whois = load_whois(&storage, "alice").unwrap();
        assert_eq!(whois, Whois::virgin(&coins(1, "nametoken")));
        assert!(!has_owner(&storage, "alice").unwrap());
        assert_eq!(resolve_name(&storage, "alice").unwrap(), "");
    }

    #[test]
    fn save_without_owner_is_ignored() {
        let mut storage = MockStorage::new();
        setup(&mut storage);

        let mut whois = Whois::virgin(&coins(1, "nametoken"));
        whois.value = "1.2.3.4".to_string();
        save_whois(&mut storage, "alice", &whois).unwrap();
        assert!(!NAMES.has(&storage, "alice"));

        save_whois(&mut storage, "alice", &owned("bob", "", 5)).unwrap();
        save_whois(&mut storage, "alice", &Whois::virgin(&[])).unwrap();
        assert_eq!(load_whois(&storage, "alice").unwrap(), owned("bob", "", 5));
        assert!(has_owner(&storage, "alice").unwrap());
    }

    #[test]
    fn scan_is_ordered_and_restartable() {
        let mut storage = MockStorage::new();
        setup(&mut storage);

        save_whois(&mut storage, "zed", &owned("bob", "z", 2)).unwrap();
        save_whois(&mut storage, "alice", &owned("carol", "a", 3)).unwrap();
        save_whois(&mut storage, "mike", &owned("bob", "m", 4)).unwrap();

        let first: Vec<String> = scan_names(&storage)
            .map(|item| item.map(|(name, _)| name))
            .collect::<StdResult<_>>()
            .unwrap();
        assert_eq!(first, vec!["alice", "mike", "zed"]);

        let second: Vec<(String, Whois)> = scan_names(&storage).collect::<StdResult<_>>().unwrap();
        assert_eq!(second.len(), 3);
        assert_eq!(second[0], ("alice".to_string(), owned("carol", "a", 3)));
    }

    #[test]
    fn display_renders_all_fields() {
        let whois = owned("bob", "1.2.3.4", 5);
        assert_eq!(
            whois.to_string(),
            "Owner: bob\nValue: 1.2.3.4\nPrice: 5nametoken"
        );
        let virgin = Whois::virgin(&coins(1, "nametoken"));
        assert_eq!(virgin.to_string(), "Owner: \nValue: \nPrice: 1nametoken");
    }
}
