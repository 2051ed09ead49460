#![warn(clippy::pedantic)]

use std::{
	fs::{self, File},
	io::{Read, Write},
	path::PathBuf,
	time::Duration,
};

use chrono::Utc;
use clap::Parser;
use miette::IntoDiagnostic;
use nagayo_core::{
	decode,
	fetch::Fetcher,
	query::{DaySelector, LessonQuery, LessonTime},
};
use tracing_subscriber::EnvFilter;

/// Convert the nagayo lesson schedule into an iCalendar feed.
#[derive(Parser)]
struct Args {
	/// Saved schedule page (EUC-JP). Reads stdin when omitted.
	#[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath, conflicts_with = "fetch")]
	path: Option<PathBuf>,
	#[clap(short, long, value_hint = clap::ValueHint::FilePath)]
	output: Option<PathBuf>,
	/// Weekday column, 1 (Sunday) to 7 (Saturday), or 0 for every column
	#[clap(short, long, default_value = "3", value_parser = |s: &str| s.parse::<DaySelector>())]
	day: DaySelector,
	/// Lesson start time, HHMM
	#[clap(short, long, default_value = "1930", value_parser = |s: &str| LessonTime::parse("start", s))]
	start: LessonTime,
	/// Lesson end time, HHMM
	#[clap(short, long, default_value = "2030", value_parser = |s: &str| LessonTime::parse("end", s))]
	end: LessonTime,
	/// Download the previous, current and next month instead of reading a page
	#[clap(long)]
	fetch: bool,
	#[clap(long, default_value = nagayo_core::SCHEDULE_URL, value_hint = clap::ValueHint::Url)]
	url: String,
	/// Per-request timeout in seconds
	#[clap(long, default_value_t = 10)]
	timeout: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();
	let query = LessonQuery {
		day: args.day,
		start: args.start,
		end: args.end,
	};

	let calendar = if args.fetch {
		let fetcher = Fetcher::new(&args.url, Duration::from_secs(args.timeout)).into_diagnostic()?;
		let today = Utc::now().with_timezone(&nagayo_core::TZ).date_naive();
		tracing::info!("fetching three months around {today} from {}", args.url);

		fetcher.calendar(&query, today).await
	} else {
		let bytes = if let Some(path) = &args.path {
			tracing::info!("reading schedule page {}", path.display());
			fs::read(path).into_diagnostic()?
		} else {
			tracing::info!("reading schedule page from stdin");
			let mut bytes = Vec::new();
			std::io::stdin().read_to_end(&mut bytes).into_diagnostic()?;
			bytes
		};

		let mut calendar = nagayo_core::create_calendar(&args.url);
		calendar.extend(
			nagayo_core::lessons(&decode::parse_document(&bytes), &query).into_diagnostic()?,
		);
		calendar
	};

	if let Some(output) = args.output {
		let mut file = File::create(output).into_diagnostic()?;
		write!(&mut file, "{calendar}").into_diagnostic()?;
	} else {
		write!(&mut std::io::stdout(), "{calendar}").into_diagnostic()?;
	}

	Ok(())
}
