// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Criterion config for the layout benches.
///
/// - `CFLAYOUT_PROFILE=off` measures without attaching pprof.
/// - `CFLAYOUT_PROFILE_FREQ` sets the sampling frequency in Hz.
/// - `CFLAYOUT_BENCH_SAMPLES`, `CFLAYOUT_BENCH_WARMUP_SECS` and
///   `CFLAYOUT_BENCH_MEASURE_SECS` size the runs.
///
/// Flamegraphs are only written with `--profile-time <secs>`.
pub fn criterion() -> Criterion {
    let samples = env_or("CFLAYOUT_BENCH_SAMPLES", 50usize).clamp(10, 200);
    let warmup = env_or("CFLAYOUT_BENCH_WARMUP_SECS", 2u64).clamp(1, 60);
    let measure = env_or("CFLAYOUT_BENCH_MEASURE_SECS", 5u64).clamp(1, 120);

    let criterion = Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measure));

    let profile = std::env::var("CFLAYOUT_PROFILE").unwrap_or_default();
    if matches!(profile.trim(), "off" | "0" | "false") {
        return criterion;
    }

    let frequency = env_or("CFLAYOUT_PROFILE_FREQ", 997i32).clamp(1, 10_000);
    criterion.with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
