use classclock_core::{DayKey, DaySchedule, Locale, Timetable};

use crate::common::GlobalOpts;

pub fn run(
    opts: &GlobalOpts,
    day: Option<DayKey>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (timetable, locale) = opts.load_timetable()?;
    let days: Vec<DayKey> = match day {
        Some(day) => vec![day],
        None => DayKey::ALL.to_vec(),
    };

    if json {
        let schedules: Vec<&DaySchedule> = days
            .iter()
            .filter_map(|day| timetable.day_schedule(*day))
            .collect();
        println!("{}", serde_json::to_string_pretty(&schedules)?);
        return Ok(());
    }

    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_day(&timetable, *day, locale);
    }
    Ok(())
}

fn print_day(timetable: &Timetable, day: DayKey, locale: Locale) {
    println!("[{day}] {}", locale.day_name(day));

    let periods = timetable.schedule(day);
    if periods.is_empty() {
        println!("  (no classes)");
        return;
    }

    let lunch = timetable.lunch(day);
    let mut lunch_printed = false;
    for period in periods {
        if let Some(lunch) = lunch.filter(|l| !lunch_printed && l.start < period.start) {
            println!("  {}-{}  lunch", lunch.start, lunch.end);
            lunch_printed = true;
        }

        let mut line = format!("  {}-{}  {}", period.start, period.end, period.label);
        if !period.subject.is_empty() {
            line.push_str(&format!("  {}", period.subject));
        }
        if let Some(room) = timetable.rooms().room(day, period.index) {
            line.push_str(&format!("  @{room}"));
        }
        let items = timetable.items().items(day, period.index);
        if !items.is_empty() {
            line.push_str(&format!("  [{}]", items.join(", ")));
        }
        println!("{line}");
    }
    if let Some(lunch) = lunch.filter(|_| !lunch_printed) {
        println!("  {}-{}  lunch", lunch.start, lunch.end);
    }
}
