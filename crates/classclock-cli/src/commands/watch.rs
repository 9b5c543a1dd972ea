use std::io::Write;

use classclock_core::{render, MinuteTicker, SystemClock};

use crate::common::GlobalOpts;

pub fn run(opts: &GlobalOpts) -> Result<(), Box<dyn std::error::Error>> {
    let (timetable, locale) = opts.load_timetable()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let ticker = MinuteTicker::new(SystemClock);
    let ticks = runtime.block_on(ticker.run(
        |now| -> std::io::Result<()> {
            let screen = render(&timetable.status_at(now), &timetable, locale);
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{screen}")?;
            stdout.flush()
        },
        tokio::signal::ctrl_c(),
    ))?;

    tracing::info!(ticks, "watch stopped");
    Ok(())
}
