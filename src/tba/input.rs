use crate::ids::AccountId;
use crate::{Money, Rate, Result};

use serde::Deserialize;

use thiserror::Error;

/// Represents one row of an operation script
#[derive(Deserialize, Debug, Clone)]
pub struct InputEvent {
    #[serde(rename = "type")]
    pub typ: InputEventType,

    pub account: Option<String>,
    pub holder: Option<String>,
    pub amount: Option<String>,
    pub parameter: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputEventType {
    Account,
    Savings,
    Current,
    Deposit,
    Withdraw,
    Transfer,
    Show,
    Heading,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input event: {0} value missing: {1:?}")]
    MissingField(&'static str, InputEvent),

    #[error("Error parsing input event: negative overdraft limit not supported: {0:?}")]
    NegativeOverdraftLimit(InputEvent),
}

/// Typed operation, forcing correct handling through the type-system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    OpenAccount {
        id: AccountId,
        holder: String,
        balance: Money,
    },
    OpenSavings {
        id: AccountId,
        holder: String,
        balance: Money,
        interest_rate: Rate,
    },
    OpenCurrent {
        id: AccountId,
        holder: String,
        balance: Money,
        overdraft_limit: Money,
    },
    Deposit {
        id: AccountId,
        amount: Money,
    },
    Withdraw {
        id: AccountId,
        amount: Money,
    },
    Transfer {
        current: AccountId,
        savings: AccountId,
    },
    Show {
        id: AccountId,
    },
    Heading {
        text: String,
    },
}

impl InputEvent {
    pub fn parse_operation(self) -> Result<Operation> {
        let operation = match self.typ {
            InputEventType::Account => Operation::OpenAccount {
                id: self.account_id()?,
                holder: self.required("holder", &self.holder)?.to_string(),
                balance: self.amount()?,
            },

            InputEventType::Savings => Operation::OpenSavings {
                id: self.account_id()?,
                holder: self.required("holder", &self.holder)?.to_string(),
                balance: self.amount()?,
                interest_rate: Rate::parse(self.required("parameter", &self.parameter)?)?,
            },

            InputEventType::Current => {
                let overdraft_limit = Money::parse(self.required("parameter", &self.parameter)?)?;

                if overdraft_limit < Money::ZERO {
                    Err(InputParseError::NegativeOverdraftLimit(self.clone()))?;
                }

                Operation::OpenCurrent {
                    id: self.account_id()?,
                    holder: self.required("holder", &self.holder)?.to_string(),
                    balance: self.amount()?,
                    overdraft_limit,
                }
            }

            InputEventType::Deposit => Operation::Deposit {
                id: self.account_id()?,
                amount: self.amount()?,
            },

            InputEventType::Withdraw => Operation::Withdraw {
                id: self.account_id()?,
                amount: self.amount()?,
            },

            InputEventType::Transfer => Operation::Transfer {
                current: self.account_id()?,
                savings: AccountId::new(self.required("parameter", &self.parameter)?),
            },

            InputEventType::Show => Operation::Show {
                id: self.account_id()?,
            },

            InputEventType::Heading => Operation::Heading {
                text: self.holder.clone().unwrap_or_default(),
            },
        };

        return Ok(operation);
    }

    fn account_id(&self) -> Result<AccountId> {
        let id = self.required("account", &self.account)?;
        return Ok(AccountId::new(id));
    }

    fn amount(&self) -> Result<Money> {
        let amount = self.required("amount", &self.amount)?;
        return Money::parse(amount);
    }

    fn required<'a>(&self, field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
        let value = value
            .as_deref()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| InputParseError::MissingField(field, self.clone()))?;

        return Ok(value);
    }
}
