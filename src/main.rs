use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use utilkit::config::Config;
use utilkit::device::{self, network};
use utilkit::utils::datetime;
use utilkit::{logger, DeviceType};

#[derive(Serialize)]
struct ReportEntry {
    identifier: String,
    model: utilkit::DeviceModel,
    platform: utilkit::DevicePlatform,
    name: &'static str,
    device_type: DeviceType,
}

fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Identifiers from the command line win over the configured samples
    let args: Vec<String> = std::env::args().skip(1).collect();
    let identifiers = if args.is_empty() {
        config.demo.identifiers.clone()
    } else {
        args
    };

    let entries: Vec<ReportEntry> = identifiers
        .into_iter()
        .map(|identifier| {
            let classification = device::classify(&identifier);
            log::debug!("classified {} as {:?}", identifier, classification.model);
            ReportEntry {
                identifier,
                model: classification.model,
                platform: classification.platform,
                name: classification.name,
                device_type: classification.device_type(),
            }
        })
        .collect();

    if config.demo.output == "json" {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Device report");
    println!("-------------");
    for entry in &entries {
        println!(
            "{:<12} {} [{} / {:?}]",
            entry.identifier,
            entry.name,
            entry.platform.name(),
            entry.device_type
        );
    }

    let mac = network::mac_address();
    if mac.is_empty() {
        println!("MAC address: unavailable");
    } else {
        println!("MAC address: {}", mac);
    }

    let fallback = datetime::PatternFormatter::new(format!(
        "{} {}",
        config.display.date_format, config.display.time_format
    ));
    let now = Local::now();

    println!();
    println!("Friendly dates");
    println!("--------------");
    println!("now:          {}", datetime::friendly_string(now, &fallback));
    println!("yesterday:    {}", datetime::friendly_string(datetime::yesterday(), &fallback));
    println!("tomorrow:     {}", datetime::friendly_string(datetime::tomorrow(), &fallback));
    println!(
        "10 days ago:  {}",
        datetime::friendly_string(datetime::date_by_adding_days(now, -10), &fallback)
    );
    println!("this month:   {}", datetime::month_year_string(now));

    Ok(())
}
