use clap::clap_app;
use kvmap::script;
use kvmap::MapKind;
use slog::{info, o, Drain};

fn main() -> Result<(), failure::Error> {
    let matches = clap_app!(kvmap =>
        (version: env!("CARGO_PKG_VERSION"))
        (author: env!("CARGO_PKG_AUTHORS"))
        (about: "Runs a put/get/contains scenario against a map implementation")
        (@arg MAP: --map +takes_value "implementation: direct, list or indexed")
        (@arg CHECKED: --checked "wrap the map in runtime contract checks")
        (@arg SCRIPT: --script +takes_value "JSON file of steps to run instead of the default scenario")
    )
    .get_matches();

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let log = slog::Logger::root(drain, o!());

    let kind: MapKind = matches.value_of("MAP").unwrap_or("direct").parse()?;
    let checked = matches.is_present("CHECKED");

    let steps = match matches.value_of("SCRIPT") {
        Some(path) => script::load(path)?,
        None => script::default_scenario(checked),
    };

    info!(log, "{} initializing", env!("CARGO_PKG_NAME");
        "map" => %kind,
        "checked" => checked,
        "steps" => steps.len(),
        "version" => env!("CARGO_PKG_VERSION"));

    let mut map = if checked {
        kind.checked::<i64>(&log)
    } else {
        kind.unchecked::<i64>()
    };

    if let Err(e) = script::run(&mut *map, &steps, &log) {
        eprintln!("{}", e);
        return Err(e.into());
    }

    let label = if checked {
        format!("checked {}", kind)
    } else {
        kind.to_string()
    };
    println!("scenario passed: {} steps against {}", steps.len(), label);
    Ok(())
}
