use chrono::NaiveDateTime;
use classclock_core::{render, Clock, Screen, Status, SystemClock};
use serde::Serialize;

use crate::common::GlobalOpts;

#[derive(Serialize)]
struct NowOutput<'a> {
    #[serde(flatten)]
    status: &'a Status,
    screen: Screen,
}

pub fn run(
    opts: &GlobalOpts,
    at: Option<NaiveDateTime>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (timetable, locale) = opts.load_timetable()?;
    let at = at.unwrap_or_else(|| SystemClock.now());

    let status = timetable.status_at(at);
    let screen = render(&status, &timetable, locale);

    if json {
        let output = NowOutput {
            status: &status,
            screen,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{screen}");
    }
    Ok(())
}
