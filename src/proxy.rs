// Proxy Pattern - Access Control + Lazy Construction
// The proxy stands in for an expensive subject, checks access on every
// request and builds the real subject only on the first permitted one.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::narrate::say;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// True when chrono can render every specifier in `format`.
pub fn is_valid_timestamp_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Result of a request. Denial is a normal outcome, not an error.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    Denied,
}

/// The capability shared by the real subject and its proxy.
pub trait Subject {
    fn request(&mut self) -> Outcome;
}

// ============================================================================
// Real subject
// ============================================================================

#[derive(Debug)]
pub struct RealSubject {
    handled: usize,
}

impl RealSubject {
    pub fn new() -> Self {
        // Stand-in for expensive initialization.
        say("RealSubject", "instance created (possibly an expensive operation)");
        Self { handled: 0 }
    }

    pub fn handled(&self) -> usize {
        self.handled
    }
}

impl Default for RealSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject for RealSubject {
    fn request(&mut self) -> Outcome {
        self.handled += 1;
        say("RealSubject", "handling request");
        Outcome::Handled
    }
}

// ============================================================================
// Proxy
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord {
    pub at: DateTime<Local>,
    /// 1-based position of this access among the proxy's delegated requests.
    pub sequence: usize,
}

pub struct Proxy<S: Subject = RealSubject> {
    permitted: bool,
    real: Option<S>,
    build: Box<dyn FnMut() -> S>,
    access_log: Vec<AccessRecord>,
    timestamp_format: String,
}

impl Proxy<RealSubject> {
    pub fn new(permitted: bool) -> Self {
        Self::with_factory(permitted, RealSubject::new)
    }
}

impl<S: Subject> Proxy<S> {
    /// Creates a proxy whose real subject will come from `build`.
    /// Nothing is built here.
    pub fn with_factory(permitted: bool, build: impl FnMut() -> S + 'static) -> Self {
        say("Proxy", "instance created");
        Self {
            permitted,
            real: None,
            build: Box::new(build),
            access_log: Vec::new(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Sets the access-log timestamp format. An unrenderable format is
    /// ignored with a warning and the current one kept.
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        if is_valid_timestamp_format(&format) {
            self.timestamp_format = format;
        } else {
            tracing::warn!(%format, kept = %self.timestamp_format, "invalid timestamp format");
        }
        self
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    pub fn is_permitted(&self) -> bool {
        self.permitted
    }

    pub fn is_constructed(&self) -> bool {
        self.real.is_some()
    }

    pub fn access_log(&self) -> &[AccessRecord] {
        &self.access_log
    }

    pub fn real_subject(&self) -> Option<&S> {
        self.real.as_ref()
    }

    /// Access check run before every request. Kept apart from
    /// [`is_permitted`](Self::is_permitted) so the rule can grow later.
    pub fn check_access(&self) -> bool {
        say("Proxy", "checking access...");
        if self.permitted {
            say("Proxy", "access granted");
            return true;
        }
        false
    }

    fn log_access(&mut self) {
        let record = AccessRecord {
            at: Local::now(),
            sequence: self.access_log.len() + 1,
        };
        say(
            "Proxy",
            format!("logging request time {}", record.at.format(&self.timestamp_format)),
        );
        self.access_log.push(record);
    }
}

impl<S: Subject> Subject for Proxy<S> {
    fn request(&mut self) -> Outcome {
        if !self.check_access() {
            say("Proxy", "access denied, request not forwarded");
            return Outcome::Denied;
        }

        let build = &mut self.build;
        let real = self.real.get_or_insert_with(|| {
            say("Proxy", "creating RealSubject instance...");
            tracing::debug!("constructing real subject");
            build()
        });
        let outcome = real.request();
        self.log_access();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrate::capture;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingSubject {
        calls: Rc<Cell<usize>>,
    }

    impl Subject for CountingSubject {
        fn request(&mut self) -> Outcome {
            self.calls.set(self.calls.get() + 1);
            Outcome::Handled
        }
    }

    /// Returns the proxy plus (constructions, calls) counters.
    fn counting_proxy(permitted: bool) -> (Proxy<CountingSubject>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let built = Rc::new(Cell::new(0));
        let calls = Rc::new(Cell::new(0));
        let (b, c) = (Rc::clone(&built), Rc::clone(&calls));
        let proxy = Proxy::with_factory(permitted, move || {
            b.set(b.get() + 1);
            CountingSubject { calls: Rc::clone(&c) }
        });
        (proxy, built, calls)
    }

    #[test]
    fn test_denied_never_constructs() {
        let (mut proxy, built, calls) = counting_proxy(false);
        for _ in 0..5 {
            assert_eq!(proxy.request(), Outcome::Denied);
        }
        assert_eq!(built.get(), 0);
        assert_eq!(calls.get(), 0);
        assert!(!proxy.is_constructed());
        assert!(proxy.access_log().is_empty());
    }

    #[test]
    fn test_creation_is_lazy() {
        let (proxy, built, _) = counting_proxy(true);
        assert_eq!(built.get(), 0);
        assert!(!proxy.is_constructed());
    }

    #[test]
    fn test_permitted_constructs_once() {
        let (mut proxy, built, _) = counting_proxy(true);
        assert_eq!(proxy.request(), Outcome::Handled);
        assert_eq!(built.get(), 1);
        assert!(proxy.is_constructed());

        for _ in 0..3 {
            assert_eq!(proxy.request(), Outcome::Handled);
        }
        assert_eq!(built.get(), 1);
    }

    #[test]
    fn test_every_permitted_call_delegates_and_logs() {
        let (mut proxy, _, calls) = counting_proxy(true);
        for expected in 1..=4 {
            let _ = proxy.request();
            assert_eq!(calls.get(), expected);
            assert_eq!(proxy.access_log().len(), expected);
        }

        let log = proxy.access_log();
        let sequences: Vec<usize> = log.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3, 4]);
        assert!(log.windows(2).all(|pair| pair[0].at <= pair[1].at));
    }

    #[test]
    fn test_check_access_matches_permission() {
        let (granted, _, _) = counting_proxy(true);
        let (denied, _, _) = counting_proxy(false);
        assert!(granted.check_access() && granted.is_permitted());
        assert!(!denied.check_access() && !denied.is_permitted());
    }

    #[test]
    fn test_default_real_subject_counts_requests() {
        let mut proxy = Proxy::new(true).with_timestamp_format("%H:%M");
        let _ = proxy.request();
        let _ = proxy.request();
        assert_eq!(proxy.real_subject().map(RealSubject::handled), Some(2));
    }

    #[test]
    fn test_invalid_timestamp_format_keeps_default() {
        assert!(is_valid_timestamp_format(DEFAULT_TIMESTAMP_FORMAT));
        assert!(!is_valid_timestamp_format("%Q"));

        let (mut proxy, _, _) = counting_proxy(true);
        proxy = proxy.with_timestamp_format("%Q");
        assert_eq!(proxy.timestamp_format(), DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(proxy.request(), Outcome::Handled);
        assert_eq!(proxy.access_log().len(), 1);

        proxy = proxy.with_timestamp_format("%H:%M");
        assert_eq!(proxy.timestamp_format(), "%H:%M");
    }

    #[test]
    fn test_permitted_narration_order() {
        let (_, lines) = capture(|| {
            let mut proxy = Proxy::new(true);
            let _ = proxy.request();
            let _ = proxy.request();
        });

        let first_request = [
            "Proxy: instance created",
            "Proxy: checking access...",
            "Proxy: access granted",
            "Proxy: creating RealSubject instance...",
            "RealSubject: instance created (possibly an expensive operation)",
            "RealSubject: handling request",
        ];
        assert_eq!(&lines[..6], &first_request);
        assert!(lines[6].starts_with("Proxy: logging request time "));

        // Second request: no construction lines.
        assert_eq!(
            &lines[7..10],
            &[
                "Proxy: checking access...",
                "Proxy: access granted",
                "RealSubject: handling request",
            ]
        );
        assert!(lines[10].starts_with("Proxy: logging request time "));
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_denied_narration() {
        let (_, lines) = capture(|| {
            let mut proxy = Proxy::new(false);
            let _ = proxy.request();
        });
        assert_eq!(
            lines,
            vec![
                "Proxy: instance created",
                "Proxy: checking access...",
                "Proxy: access denied, request not forwarded",
            ]
        );
    }

    #[test]
    fn test_proxy_usable_as_subject() {
        let mut subjects: Vec<Box<dyn Subject>> =
            vec![Box::new(RealSubject::new()), Box::new(Proxy::new(false))];
        let outcomes: Vec<Outcome> = subjects.iter_mut().map(|s| s.request()).collect();
        assert_eq!(outcomes, vec![Outcome::Handled, Outcome::Denied]);
    }
}
