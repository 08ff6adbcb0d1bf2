use chrono::{Datelike, NaiveDate, Utc};
use tempora::{ChronoUnit, DateRange, StepRange, SystemClock, WallClockTime};

fn main() -> tempora::Result<()> {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2019, 1, 8).expect("valid date");
    for day in &DateRange::days(start, end)? {
        println!("{day}");
    }

    let open = WallClockTime::of(9, 0)?;
    let close = WallClockTime::of(10, 0)?;
    let slots = StepRange::new(open, close, 15, ChronoUnit::Minutes)?;
    let rendered: Vec<String> = slots.iter().map(|t| t.to_string()).collect();
    println!("slots: {}", rendered.join(", "));

    let (head, tail) = DateRange::days(start, end)?.split();
    println!(
        "head: {} days, tail: {:?} days",
        head.len(),
        tail.map(|t| t.len())
    );

    let year = DateRange::days(start, NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"))?;
    let firsts = year
        .collect_parallel(4)
        .into_iter()
        .filter(|d| d.day() == 1)
        .count();
    println!("first days of the month in 2019: {firsts}");

    println!("local: {}", WallClockTime::now(&SystemClock));
    println!("UTC:   {}", WallClockTime::now_in(&Utc));
    Ok(())
}
