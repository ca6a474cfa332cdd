use std::ops::{Deref, DerefMut};

use super::counter::CounterTime;

pub struct TimedResult<T> {
    pub res: T,
    pub elapsed: std::time::Duration,
}

impl<T> Deref for TimedResult<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.res
    }
}

impl<T> DerefMut for TimedResult<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.res
    }
}

pub fn timed_scope<R, F: FnOnce() -> R>(f: F) -> TimedResult<R> {
    let begin = std::time::Instant::now();
    let res = f();
    let elapsed = begin.elapsed();

    TimedResult { res, elapsed }
}

pub fn timed_scope_log<R, F: FnOnce() -> R>(label: &'static str, f: F) -> TimedResult<R> {
    let timed = timed_scope(f);
    log::info!(target: "scoped timer", "{}: {}", label, format_elapsed(timed.elapsed));
    timed
}

pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    if elapsed < std::time::Duration::from_millis(1) {
        let micro = elapsed.as_secs_f32() * 1000. * 1000.;
        format!("{micro:.3}µs")
    } else if elapsed < std::time::Duration::from_secs(1) {
        let milli = elapsed.as_secs_f32() * 1000.;
        format!("{milli:.3}ms")
    } else if elapsed < std::time::Duration::from_secs(60) {
        let s = elapsed.as_secs_f32();
        format!("{s:.3}s")
    } else {
        let elapsed_secs = elapsed.as_secs_f32();
        let elapsed_minutes = elapsed_secs / 60.;
        let h = (elapsed_minutes / 60.) as u32;
        let m = (elapsed_minutes % 60.) as u32;
        let s = (elapsed_secs % 60.) as u32;
        format!("{h}h{m}m{s}s")
    }
}

pub fn timed_scope_accumulate_<R, F: FnOnce() -> R>(timer: &CounterTime, f: F) -> TimedResult<R> {
    let timed = timed_scope(f);
    timer.add(timed.elapsed);
    timed
}

/// Run a closure and add its wall-clock time to a named time counter.
/// Compiled down to a plain call without the `counter_time` feature.
#[macro_export]
macro_rules! timed_scope_accumulate {
    ($descr:literal, $f:expr) => {
        if cfg!(feature = "counter_time") {
            lazy_static::lazy_static! {
                static ref TIMER_REF: std::sync::Arc<$crate::utils::counter::CounterTime> =
                    $crate::utils::counter::register_time($descr);
            }
            $crate::utils::timer::timed_scope_accumulate_(&TIMER_REF, $f).res
        } else {
            ($f)()
        }
    };
}

pub use timed_scope_accumulate;

#[cfg(test)]
mod tests {
    use super::{format_elapsed, timed_scope};

    #[test]
    fn timed_scope_passes_the_result_through() {
        let timed = timed_scope(|| 21 * 2);
        assert_eq!(timed.res, 42);
    }

    #[test]
    fn elapsed_formatting_picks_a_unit() {
        assert!(format_elapsed(std::time::Duration::from_micros(12)).ends_with("µs"));
        assert!(format_elapsed(std::time::Duration::from_millis(12)).ends_with("ms"));
        assert!(format_elapsed(std::time::Duration::from_secs(12)).ends_with('s'));
        assert_eq!(format_elapsed(std::time::Duration::from_secs(3723)), "1h2m3s");
    }
}
