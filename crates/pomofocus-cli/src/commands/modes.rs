use pomofocus_core::timer::{format_clock, LONG_BREAK_CADENCE};
use pomofocus_core::TimerMode;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let modes: Vec<_> = TimerMode::ALL
        .iter()
        .map(|mode| {
            serde_json::json!({
                "mode": mode,
                "label": mode.label(),
                "duration_secs": mode.duration_secs(),
                "clock": format_clock(mode.duration_secs()),
            })
        })
        .collect();
    let out = serde_json::json!({
        "modes": modes,
        "long_break_every": LONG_BREAK_CADENCE,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
