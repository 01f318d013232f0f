//! The ZUM Services route table.

use zum_types::{FormBody, HttpMethod};

use crate::format::format_amount;

/// One remote REST route together with the caller's arguments.
///
/// Path parameters are substituted as given. They are not percent-encoded.
#[derive(Clone, Debug, PartialEq)]
pub enum Endpoint<'a> {
    CreateAddress,
    DeleteAddress {
        address: &'a str,
    },
    GetAddress {
        address: &'a str,
    },
    GetAddresses,
    /// Scan a 100-block range starting at `block_index`.
    ScanAddress {
        address: &'a str,
        block_index: u64,
    },
    GetAddressKeys {
        address: &'a str,
    },
    IntegrateAddress {
        address: &'a str,
        payment_id: &'a str,
    },
    GetIntegratedAddresses {
        address: &'a str,
    },
    GetFee {
        amount: f64,
    },
    /// `payment_id` and `extra` are left out of the body when empty.
    CreateTransfer {
        from: &'a str,
        to: &'a str,
        amount: f64,
        fee: f64,
        payment_id: &'a str,
        extra: &'a str,
    },
    GetTransfer {
        transaction_hash: &'a str,
    },
    GetWallet,
    GetStatus,
}

impl Endpoint<'_> {
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::CreateAddress | Self::IntegrateAddress { .. } | Self::CreateTransfer { .. } => {
                HttpMethod::Post
            }
            Self::DeleteAddress { .. } => HttpMethod::Delete,
            _ => HttpMethod::Get,
        }
    }

    /// Route path relative to the base URL, without a leading slash.
    pub fn path(&self) -> String {
        match self {
            Self::CreateAddress => "address".to_string(),
            Self::DeleteAddress { address } | Self::GetAddress { address } => {
                format!("address/{address}")
            }
            Self::GetAddresses => "address/all".to_string(),
            Self::ScanAddress {
                address,
                block_index,
            } => format!("address/scan/{address}/{block_index}"),
            Self::GetAddressKeys { address } => format!("address/keys/{address}"),
            Self::IntegrateAddress { .. } => "address/integrate".to_string(),
            Self::GetIntegratedAddresses { address } => format!("address/integrate/{address}"),
            Self::GetFee { amount } => format!("transfer/fee/{}", format_amount(*amount)),
            Self::CreateTransfer { .. } => "transfer".to_string(),
            Self::GetTransfer { transaction_hash } => format!("transfer/{transaction_hash}"),
            Self::GetWallet => "wallet".to_string(),
            Self::GetStatus => "status".to_string(),
        }
    }

    /// Form fields for POST routes; `None` for GET and DELETE.
    pub fn form(&self) -> Option<FormBody> {
        let mut form = FormBody::new();
        match self {
            Self::CreateAddress => {}
            Self::IntegrateAddress {
                address,
                payment_id,
            } => {
                form.set("address", *address).set("paymentId", *payment_id);
            }
            Self::CreateTransfer {
                from,
                to,
                amount,
                fee,
                payment_id,
                extra,
            } => {
                form.set("from", *from)
                    .set("to", *to)
                    .set("amount", format_amount(*amount))
                    .set("fee", format_amount(*fee))
                    .set_non_empty("paymentId", payment_id)
                    .set_non_empty("extra", extra);
            }
            _ => return None,
        }
        Some(form)
    }
}
