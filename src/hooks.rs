//! Notification hooks called on every account state change
use std::io::Write;

/// Sink for human readable account messages
///
/// Hooks can not fail. Sinks that do I/O have to deal with their own errors.
pub trait NotificationHook {
    /// receive one message
    fn notify(&mut self, message: &str);
}

impl<F: FnMut(&str)> NotificationHook for F {
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Ordered list of hooks owned by an account
#[derive(Default)]
pub struct Hooks {
    hooks: Vec<Box<dyn NotificationHook>>,
}

impl Hooks {
    /// append `hook`, it will be notified after all already registered
    pub fn register(&mut self, hook: Box<dyn NotificationHook>) {
        self.hooks.push(hook);
    }

    /// send `message` to every hook in registration order
    pub fn notify(&mut self, message: &str) {
        for hook in self.hooks.iter_mut() {
            hook.notify(message);
        }
    }

    /// number of registered hooks
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// no hook registered yet
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks").field("len", &self.len()).finish()
    }
}

/// Print every transaction to the console
#[derive(Debug)]
pub struct TransactionLogger<W> {
    out: W,
}

impl<W: Write> TransactionLogger<W> {
    /// log into `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// give back the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationHook for TransactionLogger<W> {
    fn notify(&mut self, message: &str) {
        let written = writeln!(self.out, "[Transaction Log] {message}").and_then(|_| self.out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, msg = message, "transaction log sink failed");
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Hooks, NotificationHook, TransactionLogger};
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn notify_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hooks = Hooks::default();
        for name in ["first", "second", "third"] {
            let seen = seen.clone();
            hooks.register(Box::new(move |m: &str| {
                seen.borrow_mut().push(format!("{name}: {m}"))
            }));
        }

        hooks.notify("hello");

        assert_eq!(
            *seen.borrow(),
            vec!["first: hello", "second: hello", "third: hello"]
        );
    }

    #[test]
    fn empty_list_is_fine() {
        let mut hooks = Hooks::default();
        hooks.notify("nobody listens");
        assert!(hooks.is_empty());
    }

    #[test]
    fn logger_prefix() {
        let mut logger = TransactionLogger::new(Vec::new());
        logger.notify("Deposited: $50.0");
        logger.notify("Account closed.");

        let out = String::from_utf8(logger.into_inner()).unwrap();
        assert_eq!(
            out,
            "[Transaction Log] Deposited: $50.0\n[Transaction Log] Account closed.\n"
        );
    }

    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn logger_survives_broken_sink() {
        let mut logger = TransactionLogger::new(Broken);
        logger.notify("Withdrew: $1");
    }
}
