use anyhow::Result;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::fs::OpenOptions;

mod client;
mod ui;

fn main() -> Result<()> {
	WriteLogger::init(
		LevelFilter::Debug,
		Config::default(),
		OpenOptions::new()
			.create(true)
			.append(true)
			.open("impostor.log")?,
	)?;
	log_panics::init();

	client::run()
}
