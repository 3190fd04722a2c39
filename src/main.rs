//! # account-sim
//! Without arguments application asks for initial balance, a deposit and a withdraw and applies
//! them to a secured account, printing every transaction.
//!
//! With one argument it replays operations from csv file and prints account summary.
//!
//! ## Input format
//! csv with columns `type`, `amount`
//!
//! ```csv
//! type,amount
//! deposit,100.0
//! withdrawal,25
//! close,
//! ```

#![deny(missing_docs)]

use account_sim::{
    account::{Account, BankAccount, LimitDecorator},
    amount::Amount,
    csv::{self, RawOperation},
    errors::ScriptErr,
    hooks::TransactionLogger,
    session, DEFAULT_ACCOUNT_ID,
};
use anyhow::Context;
use futures::StreamExt;
use std::{env, io};
use tokio::{
    fs::File,
    io::{stdout, BufReader},
    spawn,
    sync::mpsc::{channel, Sender},
    task::spawn_blocking,
};
use tokio_stream::wrappers::ReceiverStream;
use tracing_subscriber::EnvFilter;

async fn read_ops_from_file(filename: String, sender: Sender<RawOperation>) -> anyhow::Result<()> {
    let f = File::open(filename).await.context("access input file")?;

    let bf = BufReader::new(f);
    csv::deserialize_operations_from_csv_reader(bf, sender)
        .await
        .context("improper content of file")
}

fn report(err: &ScriptErr) {
    match err {
        ScriptErr::Account(e) => eprintln!("[Error] {}: {}", e.kind(), e),
        other => eprintln!("[Unexpected Error] {other}"),
    }
}

async fn replay_script(filename: String) -> anyhow::Result<()> {
    let mut account = BankAccount::new(DEFAULT_ACCOUNT_ID, Amount::default());
    account.register_hook(Box::new(TransactionLogger::new(io::stderr())));
    let mut secured = LimitDecorator::new(&mut account);

    // read operations from csv file
    let (tx_ops, rx_ops) = channel(8192);
    let task_read_csv = spawn(read_ops_from_file(filename, tx_ops));

    // apply them in file order, refused operations do not stop the replay
    let mut ops = ReceiverStream::new(rx_ops);
    let mut line = 1;
    while let Some(op) = ops.next().await {
        line += 1;
        if let Err(e) = csv::apply_raw_operation(&mut secured, op) {
            tracing::warn!(line, error = %e, "operation refused");
            report(&e);
        }
    }

    task_read_csv.await??;

    csv::summarize_account(&secured, stdout())
        .await
        .context("failed to save output")
}

fn interactive() -> anyhow::Result<()> {
    let stdin = io::stdin();
    session::run_session(
        stdin.lock(),
        io::stdout(),
        TransactionLogger::new(io::stdout()),
    )
    .context("console failure")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // CLI handle
    let mut args = env::args().skip(1);
    match (args.next(), args.next()) {
        (None, _) => spawn_blocking(interactive).await?,
        (Some(filename), None) => replay_script(filename).await,
        _ => Err(anyhow::Error::msg(
            "expected no arguments or exactly one path to csv file",
        )),
    }
}
