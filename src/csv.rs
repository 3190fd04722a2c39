//! csv input/output format for replaying operation scripts

use csv_async::{AsyncWriterBuilder, Terminator};
use rust_decimal::Decimal;

use crate::{account::Account, errors::ScriptErr};
use serde::{Deserialize, Serialize};

use tokio::{
    io::{AsyncRead, AsyncWrite},
    sync::mpsc::Sender,
};
use tokio_stream::StreamExt;

// Allowed operation types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum RawOperationType {
    Deposit,
    Withdrawal,
    Close,
}

impl RawOperationType {
    fn name(&self) -> &'static str {
        match self {
            RawOperationType::Deposit => "deposit",
            RawOperationType::Withdrawal => "withdrawal",
            RawOperationType::Close => "close",
        }
    }
}

/// Single row of operation script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RawOperation {
    pub r#type: RawOperationType,
    pub amount: Option<Decimal>,
}

/// Apply one script row to `account`.
///
/// `close` ignores amount. `deposit` and `withdrawal` without amount are refused before they reach
/// the account.
pub fn apply_raw_operation(
    account: &mut impl Account,
    raw_operation: RawOperation,
) -> Result<(), ScriptErr> {
    let missing = || ScriptErr::MissingAmount(raw_operation.r#type.name());
    match raw_operation.r#type {
        RawOperationType::Deposit => {
            let amount = raw_operation.amount.ok_or_else(missing)?;
            account.deposit(amount)?;
        }
        RawOperationType::Withdrawal => {
            let amount = raw_operation.amount.ok_or_else(missing)?;
            account.withdraw(amount)?;
        }
        RawOperationType::Close => account.close(),
    }
    Ok(())
}

/// take a reader and continuously deserialize operations from it into `sender`
pub async fn deserialize_operations_from_csv_reader<'r, R: AsyncRead + Unpin + Send + 'r>(
    input: R,
    sender: Sender<RawOperation>,
) -> anyhow::Result<()> {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder.trim(csv_async::Trim::All);

    let mut rdr = builder.create_deserializer(input);

    let _headers = rdr.headers().await?;

    let mut records = rdr.deserialize::<RawOperation>();
    while let Some(record) = records.next().await {
        let record: RawOperation = record?;
        sender.send(record).await?;
    }

    Ok(())
}

/// summary of account balance and state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct AccountSummary {
    pub account: String,
    pub balance: Decimal,
    pub open: bool,
}

impl<T: Account + ?Sized> From<&T> for AccountSummary {
    fn from(oth: &T) -> Self {
        let rp = 4; // round precision
        Self {
            account: oth.id().to_owned(),
            balance: oth.balance().round_dp(rp),
            open: oth.is_open(),
        }
    }
}

/// save `account` as [`AccountSummary`] into `wr`. Headers will be included automatically.
/// Terminator is `\r\n`.
pub async fn summarize_account(
    account: &impl Account,
    wr: impl AsyncWrite + Unpin,
) -> anyhow::Result<()> {
    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);

    let mut wr = builder.create_serializer(wr);

    wr.serialize(AccountSummary::from(account)).await?;

    wr.flush().await?;
    Ok(())
}
