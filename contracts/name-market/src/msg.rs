use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin};

use crate::coins::is_valid_amount;
use crate::error::ContractError;
use crate::state::{Config, Whois};

#[cw_serde]
pub struct InstantiateMsg {
    /// Price of a name nobody has bought yet. Defaults to 1nametoken.
    pub min_name_price: Option<Vec<Coin>>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Points a name at `value`. Only the current owner may do this.
    SetName { name: String, value: String },
    /// Takes a name over for `bid`. The bid has to be attached as funds;
    /// anything attached beyond it is refunded.
    BuyName { name: String, bid: Vec<Coin> },
}

impl ExecuteMsg {
    /// Checks that need no state. Runs before any storage is touched.
    pub fn validate(&self, signer: &Addr) -> Result<(), ContractError> {
        if signer.as_str().is_empty() {
            return Err(ContractError::InvalidAddress {});
        }
        match self {
            ExecuteMsg::SetName { name, value } => {
                if name.is_empty() {
                    return Err(ContractError::EmptyName {});
                }
                if value.is_empty() {
                    return Err(ContractError::EmptyValue {});
                }
            }
            ExecuteMsg::BuyName { name, bid } => {
                if name.is_empty() {
                    return Err(ContractError::EmptyName {});
                }
                if !is_valid_amount(bid) {
                    return Err(ContractError::InvalidBid {});
                }
            }
        }
        Ok(())
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // Resolve returns the value a name points at
    #[returns(ResolveResponse)]
    Resolve { name: String },
    // Whois returns the value, owner and current price of a name
    #[returns(WhoisResponse)]
    Whois { name: String },
    // Names lists every owned name in key order
    #[returns(Vec<String>)]
    Names {},
    #[returns(ConfigResponse)]
    Config {},
}

// We define a custom struct for each query response
#[cw_serde]
pub struct ResolveResponse {
    pub value: String,
}

#[cw_serde]
pub struct WhoisResponse {
    pub value: String,
    /// Empty when the name has no owner.
    pub owner: String,
    pub price: Vec<Coin>,
}

impl From<Whois> for WhoisResponse {
    fn from(whois: Whois) -> Self {
        WhoisResponse {
            value: whois.value,
            owner: whois.owner.map(Addr::into_string).unwrap_or_default(),
            price: whois.price,
        }
    }
}

#[cw_serde]
pub struct ConfigResponse {
    pub min_name_price: Vec<Coin>,
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        ConfigResponse {
            min_name_price: config.min_name_price,
        }
    }
}
