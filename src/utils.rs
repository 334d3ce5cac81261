// Timing helpers for the run report

use std::time::{SystemTime, UNIX_EPOCH};

#[path = "utils_test.rs"]
mod utils_test;

/// Wall-clock seconds since the epoch
pub fn realtime() -> f64 {
    let now = SystemTime::now();
    let since_epoch = now.duration_since(UNIX_EPOCH).expect("Time went backwards");
    since_epoch.as_secs_f64()
}

/// User + system CPU seconds consumed by this process
pub fn cputime() -> f64 {
    let rusage = unsafe {
        let mut rusage = std::mem::MaybeUninit::uninit();
        libc::getrusage(libc::RUSAGE_SELF, rusage.as_mut_ptr());
        rusage.assume_init()
    };
    let user_time = rusage.ru_utime;
    let sys_time = rusage.ru_stime;
    (user_time.tv_sec as f64 + user_time.tv_usec as f64 * 1e-6)
        + (sys_time.tv_sec as f64 + sys_time.tv_usec as f64 * 1e-6)
}
