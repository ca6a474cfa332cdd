use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

pub struct Counter {
    atomic: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }

    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed); // Adding one is associative and commutative
    }

    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

/// Accumulated wall-clock time, see [crate::timed_scope_accumulate].
pub struct CounterTime {
    nanos: AtomicU64,
}

impl CounterTime {
    pub const fn new() -> Self {
        Self {
            nanos: AtomicU64::new(0),
        }
    }

    pub fn add(&self, elapsed: Duration) {
        self.nanos.fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn value(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Acquire))
    }
}

lazy_static::lazy_static! {
    static ref COUNTERS: Mutex<HashMap<&'static str, Arc<Counter>>> = Mutex::new(HashMap::new());
    static ref TIME_COUNTERS: Mutex<HashMap<&'static str, Arc<CounterTime>>> =
        Mutex::new(HashMap::new());
}

/// Fetch or create the counter registered under `name`.
pub fn register(name: &'static str) -> Arc<Counter> {
    let mut counters = COUNTERS.lock().unwrap();
    counters
        .entry(name)
        .or_insert_with(|| Arc::new(Counter::new()))
        .clone()
}

/// Fetch or create the time counter registered under `name`.
pub fn register_time(name: &'static str) -> Arc<CounterTime> {
    let mut counters = TIME_COUNTERS.lock().unwrap();
    counters
        .entry(name)
        .or_insert_with(|| Arc::new(CounterTime::new()))
        .clone()
}

pub fn report_counters() {
    let counters = COUNTERS.lock().unwrap();
    let mut names: Vec<_> = counters.keys().copied().collect();
    names.sort_unstable();
    for name in names {
        log::info!(target: "counter_report", "{}: {}", name, counters[name].value());
    }

    let timers = TIME_COUNTERS.lock().unwrap();
    let mut names: Vec<_> = timers.keys().copied().collect();
    names.sort_unstable();
    for name in names {
        log::info!(
            target: "counter_report",
            "{}: {}",
            name,
            crate::utils::timer::format_elapsed(timers[name].value())
        );
    }
}

/// Bump a named global counter. Compiled out without the `counter` feature.
#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<$crate::utils::counter::Counter> =
                    $crate::utils::counter::register($descr);
            }
            COUNTER_REF.inc();
        }
    };
}

pub use counter;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::register;

    #[test]
    fn counters_accumulate_and_are_shared_by_name() {
        let c = register("test counter");
        let before = c.value();
        c.inc();
        assert_eq!(c.value(), before + 1);
        assert!(Arc::ptr_eq(&c, &register("test counter")));
    }
}
