use std::{env, time::Duration};

// Runtime/harness constants (not gameplay tuning).

pub const DEFAULT_TICK_RATE_HZ: u64 = 60;

// One snapshot line per second of sim time.
pub const SNAPSHOT_INTERVAL: Duration = Duration::from_secs(1);

pub fn tick_interval() -> Duration {
    let hz = env::var("TICK_RATE_HZ")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|hz| *hz > 0)
        .unwrap_or(DEFAULT_TICK_RATE_HZ);
    Duration::from_micros((1_000_000 / hz).max(1))
}

// 0 (or unset) runs until ctrl-c.
pub fn sim_duration() -> Option<Duration> {
    let secs = env::var("SIM_DURATION_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    (secs > 0).then(|| Duration::from_secs(secs))
}
