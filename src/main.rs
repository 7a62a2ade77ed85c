mod chart;
mod elapsed;
mod form;
mod store;

use chrono::Local;
use std::env;
use std::fs;

use chart::Theme;
use elapsed::{Unit, compute_elapsed};
use form::{DateFields, Step};
use store::BirthdayStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Usage: lifechart [unit] [year month day | up | down]
    // Unit defaults to weeks; an omitted date falls back to the stored one.
    let args: Vec<String> = env::args().skip(1).collect();
    let unit: Unit = args.first().map(String::as_str).unwrap_or("weeks").parse()?;

    let store = BirthdayStore::new(store::STORE_FILE);
    let mut fields = match args.get(1..4) {
        Some([year, month, day]) => Some(DateFields::parse(year, month, day)?),
        _ => store.load(),
    };

    // "up"/"down" nudges the stored year, like the arrow keys on the form's
    // year field.
    let step = args.get(1).and_then(|arg| match arg.as_str() {
        "up" => Some(Step::Up),
        "down" => Some(Step::Down),
        _ => None,
    });
    if let (Some(step), Some(fields)) = (step, fields.as_mut()) {
        fields.year = form::step_field(fields.year, step);
    }

    // An absent or out-of-range date clears the chart instead of failing.
    let count = match fields.and_then(DateFields::date_of_birth) {
        Some(birth) => {
            let now = Local::now().naive_local();
            compute_elapsed(birth, now, unit).max(0) as usize
        }
        None => 0,
    };

    let svg_dark = chart::render_svg(count, unit, Theme::Dark);
    let svg_light = chart::render_svg(count, unit, Theme::Light);

    fs::write("life_dark.svg", svg_dark)?;
    fs::write("life_light.svg", svg_light)?;

    if let Some(fields) = fields.filter(|f| f.is_valid()) {
        store.save(fields)?;
    }

    println!("{count} {unit} elapsed; wrote life_dark.svg and life_light.svg");

    Ok(())
}
