use std::time::Duration;

use ship_controller::{
    LaserBattery, ParticleEmitter, ScriptedSampler, ShipController, ShipTuning, config,
};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

#[tokio::main]
async fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let tick_interval = config::tick_interval();
    let sim_duration = config::sim_duration();

    // Four-tube battery; the outer pair doubles as the designated sides.
    let emitters = vec![
        ParticleEmitter::new("laser-left"),
        ParticleEmitter::new("laser-inner-left"),
        ParticleEmitter::new("laser-inner-right"),
        ParticleEmitter::new("laser-right"),
    ];
    let battery = match LaserBattery::new(emitters, 0, 3) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(error = ?e, "invalid laser battery layout");
            return; // Abort startup on a bad emitter configuration
        }
    };

    let sampler = ScriptedSampler::new(tick_interval.as_secs_f32());
    let mut controller = ShipController::new(ShipTuning::default(), sampler, battery);
    controller.start();

    tracing::info!(
        tick_ms = tick_interval.as_millis() as u64,
        "ship controller running"
    );

    // One snapshot line per SNAPSHOT_INTERVAL of sim time.
    let ticks_per_snapshot =
        (config::SNAPSHOT_INTERVAL.as_secs_f32() / tick_interval.as_secs_f32()).round() as u64;
    let ticks_per_snapshot = ticks_per_snapshot.max(1);

    let mut interval = tokio::time::interval(tick_interval);
    let mut elapsed = Duration::ZERO;
    let mut ticks: u64 = 0;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown requested");
                break;
            }
            _ = interval.tick() => {
                controller.tick(tick_interval.as_secs_f32());
                ticks += 1;
                elapsed += tick_interval;

                if ticks % ticks_per_snapshot == 0 {
                    match serde_json::to_string(&controller.snapshot()) {
                        Ok(line) => println!("{line}"),
                        Err(e) => tracing::error!(error = %e, "snapshot serialization failed"),
                    }
                }

                if let Some(limit) = sim_duration {
                    if elapsed >= limit {
                        tracing::info!(secs = limit.as_secs(), "sim duration reached");
                        break;
                    }
                }
            }
        }
    }

    controller.stop();
}
