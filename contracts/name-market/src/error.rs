use cosmwasm_std::{Coin, StdError};
use thiserror::Error;

use crate::coins::display_coins;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Incorrect Owner")]
    Unauthorized {},

    #[error("Bid not high enough: bid {}, price {}", display_coins(.bid), display_coins(.price))]
    BidTooLow { bid: Vec<Coin>, price: Vec<Coin> },

    #[error("Buyer does not have enough coins")]
    InsufficientFunds {},

    #[error("could not resolve name")]
    NotFound {},

    #[error("Invalid address")]
    InvalidAddress {},

    #[error("Name cannot be empty")]
    EmptyName {},

    #[error("Value cannot be empty")]
    EmptyValue {},

    #[error("Bids must be positive")]
    InvalidBid {},

    #[error("Minimum name price must be positive")]
    InvalidPrice {},
}
