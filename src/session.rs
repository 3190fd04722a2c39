//! Interactive console session
//!
//! Asks for initial balance, one deposit and one withdraw, applies them to a secured account and
//! prints final balance. The first refused operation ends the session with an error line, that is
//! not a failure of the session itself. Only I/O errors on the console are.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, BankAccount, LimitDecorator},
    amount::Amount,
    errors::{AccountErr, InputErr},
    hooks::NotificationHook,
    DEFAULT_ACCOUNT_ID,
};

#[derive(Debug, Error)]
enum SessionErr {
    #[error(transparent)]
    Account(#[from] AccountErr),
    #[error(transparent)]
    Input(#[from] InputErr),
    #[error(transparent)]
    Io(#[from] io::Error),
}

struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn ask(&mut self, prompt: &str, what: &'static str) -> Result<Decimal, SessionErr> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputErr::Eof(what).into());
            }
            if !line.trim().is_empty() {
                break;
            }
        }

        let raw = line.trim();
        Decimal::from_str(raw).map_err(|_| InputErr::NotANumber(raw.to_owned()).into())
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    fn transact(&mut self, logger: Box<dyn NotificationHook>) -> Result<Decimal, SessionErr> {
        let initial = self.ask("Enter initial balance: ", "initial balance")?;
        let initial = Amount::try_from(initial).map_err(AccountErr::from)?;

        let mut account = BankAccount::new(DEFAULT_ACCOUNT_ID, initial);
        self.say(&format!("Bank Account Created: #{}", account.id()))?;
        account.register_hook(logger);

        let mut secured = LimitDecorator::new(&mut account);

        let deposit = self.ask("Enter deposit amount: ", "deposit amount")?;
        secured.deposit(deposit)?;

        let withdraw = self.ask("Enter withdrawal amount: ", "withdrawal amount")?;
        secured.withdraw(withdraw)?;

        Ok(secured.balance())
    }
}

/// Run whole session reading answers from `input` and writing prompts and results to `out`.
///
/// `logger` is attached to the created account so it sees every applied transaction.
pub fn run_session<R, W, H>(input: R, out: W, logger: H) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    H: NotificationHook + 'static,
{
    let mut console = Console { input, out };

    let line = match console.transact(Box::new(logger)) {
        Ok(balance) => format!("Final Balance: ${balance}"),
        Err(SessionErr::Account(e)) => {
            tracing::debug!(kind = ?e.kind(), error = %e, "operation refused");
            format!("[Error] {}: {}", e.kind(), e)
        }
        Err(SessionErr::Input(e)) => format!("[Unexpected Error] {e}"),
        Err(SessionErr::Io(e)) => return Err(e),
    };

    console.say(&line)
}

#[cfg(test)]
mod test {
    use super::run_session;
    use crate::hooks::TransactionLogger;
    use std::{cell::RefCell, io::Write, rc::Rc};

    /// Writer shared by session and logger so output keeps console order
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn session(input: &str) -> String {
        let out = SharedBuf::default();
        run_session(
            input.as_bytes(),
            out.clone(),
            TransactionLogger::new(out.clone()),
        )
        .unwrap();

        let bytes = out.0.borrow().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn happy_path() {
        let out = session("100.0\n50.0\n30.0\n");
        assert_eq!(
            out,
            "Enter initial balance: Bank Account Created: #123456\n\
             Enter deposit amount: [Transaction Log] Deposited: $50.0\n\
             Enter withdrawal amount: [Transaction Log] Withdrew: $30.0\n\
             Final Balance: $120.0\n"
        );
    }

    #[test]
    fn withdraw_over_limit() {
        let out = session("100.0\n50.0\n600.0\n");
        assert!(out.ends_with(
            "Enter withdrawal amount: [Error] Overdraw: Cannot withdraw more than $500 at once.\n"
        ));
        assert!(!out.contains("Final Balance"));
    }

    #[test]
    fn negative_deposit_stops_session() {
        let out = session("100.0\n-10.0\n5\n");
        assert!(out.ends_with(
            "Enter deposit amount: [Error] Negative Amount: Cannot deposit a negative amount.\n"
        ));
        assert!(!out.contains("Enter withdrawal amount"));
        assert!(!out.contains("[Transaction Log]"));
    }

    #[test]
    fn deposit_overflow_does_not_crash() {
        let out = session("79228162514264337593543950335\n1\n0\n");
        assert!(out.ends_with(
            "Enter deposit amount: [Error] Invalid Account Operation: Deposit would overflow the balance.\n"
        ));
        assert!(!out.contains("[Transaction Log]"));
    }

    #[test]
    fn final_balance_keeps_input_scale() {
        assert!(session("100\n0\n0\n").ends_with("Final Balance: $100\n"));
        assert!(session("100.0\n0\n0\n").ends_with("Final Balance: $100.0\n"));
    }

    #[test]
    fn overdraw_under_limit() {
        let out = session("10\n5\n20\n");
        assert!(out.ends_with("[Error] Overdraw: Insufficient balance.\n"));
    }

    #[test]
    fn negative_initial_balance() {
        let out = session("-1\n");
        assert_eq!(
            out,
            "Enter initial balance: [Error] Negative Amount: Cannot use a negative amount.\n"
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let out = session("\n 100 \n\n0\n  0\n");
        assert!(out.ends_with("Final Balance: $100\n"));
    }

    #[test]
    fn garbage_input() {
        let out = session("100\nfifty\n");
        assert!(out.ends_with(
            "Enter deposit amount: [Unexpected Error] expected a decimal number but got \"fifty\"\n"
        ));
    }

    #[test]
    fn input_ends_early() {
        let out = session("100\n");
        assert!(out.ends_with(
            "Enter deposit amount: [Unexpected Error] input ended before deposit amount was given\n"
        ));
    }
}
