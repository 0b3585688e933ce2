#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_binary, Addr, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Storage,
};
use cw2::set_contract_version;

use crate::coins::{covers, display_coins, is_valid_amount, normalize};
use crate::error::ContractError;
use crate::ledger::{Escrow, Payments};
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, ResolveResponse, WhoisResponse,
};
use crate::state::{load_whois, resolve_name, save_whois, scan_names, Config, Whois, CONFIG};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-name-market";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PRICE_DENOM: &str = "nametoken";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let min_name_price = match msg.min_name_price {
        Some(price) if is_valid_amount(&price) => normalize(price)?,
        Some(_) => return Err(ContractError::InvalidPrice {}),
        None => coins(1, DEFAULT_PRICE_DENOM),
    };
    let config = Config { min_name_price };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("min_name_price", display_coins(&config.min_name_price)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    msg.validate(&info.sender)?;
    match msg {
        ExecuteMsg::SetName { name, value } => execute_set_name(deps, info, name, value),
        ExecuteMsg::BuyName { name, bid } => execute_buy_name(deps, info, name, bid),
    }
}

pub fn execute_set_name(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    value: String,
) -> Result<Response, ContractError> {
    let whois = set_name(deps.storage, &info.sender, &name, value)?;
    let trace = format!("name market: set value of {}\n{}", name, whois);
    deps.api.debug(&trace);

    Ok(Response::new()
        .add_attribute("action", "set_name")
        .add_attribute("name", name)
        .add_attribute("owner", info.sender)
        .add_attribute("value", whois.value))
}

pub fn execute_buy_name(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    bid: Vec<Coin>,
) -> Result<Response, ContractError> {
    let mut escrow = Escrow::new(info.sender.clone(), &info.funds)?;
    let whois = buy_name(deps.storage, &mut escrow, &info.sender, &name, bid)?;
    let trace = format!("name market: {} bought {}\n{}", info.sender, name, whois);
    deps.api.debug(&trace);

    Ok(Response::new()
        .add_messages(escrow.settle())
        .add_attribute("action", "buy_name")
        .add_attribute("name", name)
        .add_attribute("buyer", info.sender)
        .add_attribute("price", display_coins(&whois.price)))
}

/// Sets the value of a name owned by `caller`. An unowned name has no one who
/// may set its value, so it is rejected like any other wrong caller.
pub fn set_name(
    storage: &mut dyn Storage,
    caller: &Addr,
    name: &str,
    value: String,
) -> Result<Whois, ContractError> {
    let mut whois = load_whois(storage, name)?;
    if whois.owner.as_ref() != Some(caller) {
        return Err(ContractError::Unauthorized {});
    }
    whois.value = value;
    save_whois(storage, name, &whois)?;
    Ok(whois)
}

/// Hands `name` to `buyer` for `bid`.
///
/// The bid must be positive and name each denomination once, and it must meet
/// the current price in every denomination of the price.
/// An owned name is paid for by transferring the bid to its owner, a name
/// nobody owns yet by burning the bid. The record is written only once the
/// payment went through; every error leaves the store untouched. The value
/// stays as it was.
pub fn buy_name<P: Payments>(
    storage: &mut dyn Storage,
    payments: &mut P,
    buyer: &Addr,
    name: &str,
    bid: Vec<Coin>,
) -> Result<Whois, ContractError> {
    if !is_valid_amount(&bid) {
        return Err(ContractError::InvalidBid {});
    }
    let bid = normalize(bid)?;
    let mut whois = load_whois(storage, name)?;
    if !covers(&bid, &whois.price) {
        return Err(ContractError::BidTooLow {
            bid,
            price: whois.price,
        });
    }

    match &whois.owner {
        Some(owner) => payments.transfer(buyer, owner, &bid)?,
        None => payments.burn(buyer, &bid)?,
    }

    whois.owner = Some(buyer.clone());
    whois.price = bid;
    save_whois(storage, name, &whois)?;
    Ok(whois)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Resolve { name } => Ok(to_binary(&query_resolve(deps, &name)?)?),
        QueryMsg::Whois { name } => Ok(to_binary(&query_whois(deps, &name)?)?),
        QueryMsg::Names {} => Ok(to_binary(&query_names(deps)?)?),
        QueryMsg::Config {} => Ok(to_binary(&query_config(deps)?)?),
    }
}

fn query_resolve(deps: Deps, name: &str) -> Result<ResolveResponse, ContractError> {
    let value = resolve_name(deps.storage, name)?;
    if value.is_empty() {
        return Err(ContractError::NotFound {});
    }
    Ok(ResolveResponse { value })
}

fn query_whois(deps: Deps, name: &str) -> StdResult<WhoisResponse> {
    Ok(load_whois(deps.storage, name)?.into())
}

fn query_names(deps: Deps) -> StdResult<Vec<String>> {
    scan_names(deps.storage)
        .map(|item| item.map(|(name, _)| name))
        .collect()
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(CONFIG.load(deps.storage)?.into())
}
