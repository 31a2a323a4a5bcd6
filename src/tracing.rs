use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write;
use std::io::stdout;
use std::num::NonZeroU64;
use std::ops::RangeInclusive;
use std::sync::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use thread_local::ThreadLocal;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber, span};
use tracing::span::Id;
use tracing_core::Interest;
use tracing_core::span::Current;

struct SpanState {
    parent: Option<Id>,
    /// number of handles to the span; it is removed when this reaches zero
    handles: usize,
    description: String,
    metadata: &'static Metadata<'static>,
    entered_at: Option<Instant>,
    depth: usize
}

///
/// A minimal [`Subscriber`] that prints the algorithm spans (e.g. [`crate::algorithms::minpoly::MinimalPolynomial::compute()`])
/// and the events within them to stdout, one line per span or event, indented by nesting depth.
/// Exiting a span prints the time spent in it.
///
/// Spans nested deeper than `max_depth` and their events are not printed.
///
pub struct LogAlgorithmSubscriber {
    next_span_id: AtomicU64,
    spans: Mutex<HashMap<Id, SpanState>>,
    current_span: ThreadLocal<RefCell<Vec<Id>>>,
    interested_level: RangeInclusive<Level>,
    max_depth: usize
}

impl LogAlgorithmSubscriber {

    fn new(interested_level: RangeInclusive<Level>, max_depth: usize) -> Self {
        Self {
            next_span_id: AtomicU64::new(1),
            spans: Mutex::new(HashMap::new()),
            current_span: ThreadLocal::new(),
            interested_level,
            max_depth
        }
    }

    ///
    /// Installs the subscriber as global default. Note that [`Level`]s are ordered such that
    /// `TRACE > DEBUG > INFO`, so a typical range is `Level::INFO..=Level::TRACE`.
    ///
    /// Panics if a global default subscriber has already been set.
    ///
    pub fn init(levels: RangeInclusive<Level>, max_depth: usize) {
        tracing::subscriber::set_global_default(Self::new(levels, max_depth)).unwrap()
    }

    ///
    /// Installs the subscriber as global default, unless another one is already installed.
    /// Only events and spans of level `INFO` are printed, which keeps test output short.
    ///
    pub fn init_test() {
        _ = tracing::subscriber::set_global_default(Self::new(Level::INFO..=Level::INFO, 2))
    }

    fn spans<'a>(&'a self) -> MutexGuard<'a, HashMap<Id, SpanState>> {
        self.spans.lock().unwrap()
    }

    fn span_stack(&self) -> &RefCell<Vec<Id>> {
        self.current_span.get_or(|| RefCell::new(Vec::new()))
    }

    fn print_line(depth: usize, line: &str) {
        println!("{:indent$}{}", "", line, indent = 2 * depth);
        std::io::Write::flush(&mut stdout()).unwrap();
    }
}

struct FieldRecorder {
    message: Option<String>,
    fields: Option<String>
}

impl FieldRecorder {

    fn new() -> Self {
        Self { message: None, fields: None }
    }

    fn to_string(self) -> String {
        match (self.message, self.fields) {
            (Some(message), Some(fields)) => format!("{}({})", message, fields),
            (Some(message), None) => message,
            (None, Some(fields)) => format!("({})", fields),
            (None, None) => String::new()
        }
    }
}

impl Visit for FieldRecorder {

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else if let Some(fields) = &mut self.fields {
            write!(fields, ", {}={:?}", field.name(), value).unwrap();
        } else {
            self.fields = Some(format!("{}={:?}", field.name(), value));
        }
    }
}

impl Subscriber for LogAlgorithmSubscriber {

    fn register_callsite(&self, metadata: &'static Metadata<'static>) -> Interest {
        if self.interested_level.contains(metadata.level()) {
            Interest::always()
        } else {
            Interest::never()
        }
    }

    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.interested_level.contains(metadata.level())
    }

    fn current_span(&self) -> Current {
        match self.span_stack().borrow().last() {
            Some(id) => Current::new(id.clone(), self.spans().get(id).unwrap().metadata),
            None => Current::none()
        }
    }

    fn new_span(&self, span: &span::Attributes<'_>) -> Id {
        let id = Id::from_non_zero_u64(NonZeroU64::new(self.next_span_id.fetch_add(1, Ordering::Relaxed)).unwrap());
        let parent = span.parent().cloned().or_else(|| self.span_stack().borrow().last().cloned());
        let mut spans = self.spans();
        let depth = parent.as_ref().map(|parent| spans.get(parent).unwrap().depth + 1).unwrap_or(0);

        let mut description = FieldRecorder::new();
        span.record(&mut description);
        description.message = Some(span.metadata().name().to_owned());

        assert!(spans.insert(id.clone(), SpanState {
            parent,
            handles: 1,
            description: description.to_string(),
            metadata: span.metadata(),
            entered_at: None,
            depth
        }).is_none());
        return id;
    }

    fn record(&self, span: &Id, values: &span::Record<'_>) {
        let mut recorder = FieldRecorder::new();
        values.record(&mut recorder);
        if let Some(state) = self.spans().get_mut(span) {
            write!(&mut state.description, "{}", recorder.to_string()).unwrap();
        }
    }

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let depth = match self.span_stack().borrow().last() {
            Some(id) => self.spans().get(id).unwrap().depth + 1,
            None => 0
        };
        if depth <= self.max_depth {
            let mut description = FieldRecorder::new();
            event.record(&mut description);
            Self::print_line(depth, &format!("[{}] {}", event.metadata().level(), description.to_string()));
        }
    }

    fn enter(&self, span: &Id) {
        self.span_stack().borrow_mut().push(span.clone());
        let mut spans = self.spans();
        let state = spans.get_mut(span).unwrap();
        assert!(state.entered_at.is_none(), "entered an already running span");
        state.entered_at = Some(Instant::now());
        if state.depth <= self.max_depth {
            Self::print_line(state.depth, &state.description);
        }
    }

    fn exit(&self, span: &Id) {
        let popped = self.span_stack().borrow_mut().pop();
        debug_assert!(popped.as_ref() == Some(span));
        let mut spans = self.spans();
        let state = spans.get_mut(span).unwrap();
        let entered_at = state.entered_at.take().unwrap();
        if state.depth <= self.max_depth {
            Self::print_line(state.depth, &format!("done {}({}us)", state.metadata.name(), entered_at.elapsed().as_micros()));
        }
    }

    fn clone_span(&self, id: &Id) -> Id {
        self.spans().get_mut(id).unwrap().handles += 1;
        return id.clone();
    }

    fn try_close(&self, id: Id) -> bool {
        let mut spans = self.spans();
        let state = spans.get_mut(&id).unwrap();
        state.handles -= 1;
        if state.handles == 0 {
            _ = spans.remove(&id).unwrap();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
use tracing::{debug, info, instrument};

#[cfg(test)]
#[instrument(skip_all, level = "info")]
fn logged_algorithm(n: usize) -> usize {
    info!(n, "running");
    debug!("not printed in tests");
    if n == 0 { 0 } else { logged_algorithm(n - 1) + 1 }
}

#[test]
fn test_log_algorithm() {
    LogAlgorithmSubscriber::init_test();
    assert_eq!(4, logged_algorithm(4));
}

#[test]
fn test_field_recorder() {
    let mut recorder = FieldRecorder::new();
    recorder.message = Some("tested degree".to_owned());
    recorder.fields = Some("degree=2".to_owned());
    assert_eq!("tested degree(degree=2)", recorder.to_string());
    assert_eq!("", FieldRecorder::new().to_string());
}
