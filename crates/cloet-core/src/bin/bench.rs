/// Pure Rust core benchmarks for every catalog model.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for the
/// weight fractions fed to each model, and std::hint::black_box to prevent
/// dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use cloet_core::dermal::{
    LiquidParams, OneHandLiquidContact, SolidsParams, TwoHandContainerSurfaceContact,
    TwoHandLiquidContact, TwoHandLiquidImmersion, TwoHandSolidsContact, UserDefinedDermal,
};
use cloet_core::inhalation::{
    AutomobileOemSprayCoating, AutomobileRefinishSprayCoating, AutomobileSprayCoating,
    AutomobileSprayParams, HandlingParams, MassBalance, MassBalanceParams, MistParams,
    ParticulateParams, PelLimitingParticulates, PelLimitingVapors, PnorParams,
    RespirablePnorPelLimiting, SmallVolumeSolidsHandling, TotalPnorPelLimiting,
    UserDefinedInhalation, UserInhalationParams, UvRollCoating, VaporParams,
};
use cloet_core::ExposureModel;

const REPEATS: usize = 7;
const EVALUATIONS: usize = 10_000;

/// Simple LCG PRNG for deterministic fractions in [0, 1).
fn make_fractions(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as f64 / (1u64 << 31) as f64
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

/// Evaluates `M` once per fraction with parameters built by `make`.
fn bench<M: ExposureModel>(
    name: &'static str,
    fractions: &[f64],
    make: impl Fn(f64) -> M::Params,
) -> (&'static str, Duration) {
    let params: Vec<M::Params> = fractions.iter().map(|&y| make(y)).collect();

    // Warmup
    for p in &params {
        black_box(M::evaluate(p, None).ok());
    }

    let dur = median_time(|| {
        for p in &params {
            black_box(M::evaluate(black_box(p), None).ok());
        }
    });
    (name, dur)
}

fn main() {
    let fractions = make_fractions(EVALUATIONS, 42);
    let y = &fractions[..];

    println!("Pure Rust Core Benchmarks ({EVALUATIONS} evaluations per sample)");
    println!("============================================================");
    println!("{:<36} {:>16}", "Model", "Median (ns/eval)");
    println!("------------------------------------------------------------");

    let results = vec![
        bench::<OneHandLiquidContact>("one_hand_liquid_contact", y, LiquidParams::new),
        bench::<TwoHandLiquidContact>("two_hand_liquid_contact", y, LiquidParams::new),
        bench::<TwoHandLiquidImmersion>("two_hand_liquid_immersion", y, LiquidParams::new),
        bench::<TwoHandSolidsContact>("two_hand_solids_contact", y, SolidsParams::new),
        bench::<TwoHandContainerSurfaceContact>(
            "two_hand_container_surface_contact",
            y,
            SolidsParams::new,
        ),
        bench::<UserDefinedDermal>("user_defined_dermal", y, LiquidParams::new),
        bench::<SmallVolumeSolidsHandling>("small_volume_solids_handling", y, HandlingParams::new),
        bench::<MassBalance>("mass_balance", y, |x| {
            MassBalanceParams::new(0.01, 92.14, 28.4, x)
        }),
        bench::<PelLimitingParticulates>("pel_limiting_particulates", y, ParticulateParams::new),
        bench::<PelLimitingVapors>("pel_limiting_vapors", y, |ys| VaporParams {
            cvk: 1.0,
            vp: 95.2,
            ys,
            mw: 78.11,
            vp_pel: 95.2,
            mw_pel: 78.11,
            x: 0.1,
            ..Default::default()
        }),
        bench::<TotalPnorPelLimiting>("total_pnor_pel_limiting", y, PnorParams::new),
        bench::<RespirablePnorPelLimiting>("respirable_pnor_pel_limiting", y, PnorParams::new),
        bench::<AutomobileOemSprayCoating>("automobile_oem_spray_coating", y, MistParams::new),
        bench::<AutomobileRefinishSprayCoating>(
            "automobile_refinish_spray_coating",
            y,
            MistParams::new,
        ),
        bench::<AutomobileSprayCoating>("automobile_spray_coating", y, |h| {
            AutomobileSprayParams {
                h: Some(24.0 * h),
                ..Default::default()
            }
        }),
        bench::<UvRollCoating>("uv_roll_coating", y, MistParams::new),
        bench::<UserDefinedInhalation>("user_defined_inhalation", y, |ys| UserInhalationParams {
            ys: Some(ys),
            ..UserInhalationParams::new(10.0, 100.0, 8.0)
        }),
    ];

    for (model, dur) in &results {
        let ns = dur.as_secs_f64() * 1e9 / EVALUATIONS as f64;
        println!("{:<36} {:>16.1}", model, ns);
    }

    println!("============================================================");
}
