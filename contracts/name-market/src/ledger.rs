use cosmwasm_std::{Addr, BankMsg, Coin, StdResult};
use cw_utils::NativeBalance;

use crate::coins::{covers, normalize};
use crate::error::ContractError;

/// The only payment capabilities the name market needs from the bank.
/// Both calls are all-or-nothing: on error no funds have moved.
pub trait Payments {
    /// Moves `amount` from `from` to `to`.
    fn transfer(&mut self, from: &Addr, to: &Addr, amount: &[Coin]) -> Result<(), ContractError>;

    /// Destroys `amount` out of the balance of `from`.
    fn burn(&mut self, from: &Addr, amount: &[Coin]) -> Result<(), ContractError>;
}

/// Pays out of the funds a sender attached to the current message.
///
/// Each successful call draws from the escrowed funds and queues the matching
/// bank message. Queued messages only run once the contract call returns
/// `Ok`, so an error anywhere in the step also cancels them.
#[derive(Debug)]
pub struct Escrow {
    depositor: Addr,
    held: NativeBalance,
    messages: Vec<BankMsg>,
}

impl Escrow {
    pub fn new(depositor: Addr, funds: &[Coin]) -> StdResult<Self> {
        Ok(Escrow {
            depositor,
            held: NativeBalance(normalize(funds.to_vec())?),
            messages: vec![],
        })
    }

    fn draw(&mut self, from: &Addr, amount: &[Coin]) -> Result<(), ContractError> {
        if from != &self.depositor || !covers(&self.held.0, amount) {
            return Err(ContractError::InsufficientFunds {});
        }
        self.held = (self.held.clone() - amount.to_vec())?;
        Ok(())
    }

    /// Consumes the escrow, returning the queued payments followed by a refund
    /// of whatever was attached but not spent.
    pub fn settle(mut self) -> Vec<BankMsg> {
        self.held.normalize();
        if !self.held.is_empty() {
            self.messages.push(BankMsg::Send {
                to_address: self.depositor.to_string(),
                amount: self.held.into_vec(),
            });
        }
        self.messages
    }
}

impl Payments for Escrow {
    fn transfer(&mut self, from: &Addr, to: &Addr, amount: &[Coin]) -> Result<(), ContractError> {
        self.draw(from, amount)?;
        self.messages.push(BankMsg::Send {
            to_address: to.to_string(),
            amount: amount.to_vec(),
        });
        Ok(())
    }

    fn burn(&mut self, from: &Addr, amount: &[Coin]) -> Result<(), ContractError> {
        self.draw(from, amount)?;
        self.messages.push(BankMsg::Burn {
            amount: amount.to_vec(),
        });
        Ok(())
    }
}
