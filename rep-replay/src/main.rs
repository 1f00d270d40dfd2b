use std::{env, error::Error, fs::{self, File}, io::{BufRead, BufReader, Read}, path::Path};
use math::Vector;
use reps::*;

static RESULTS_DIR: &str = "analysis";

/// Prints display updates the way the phone screen would show them.
///
struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn show_cadence(&mut self, cadence: Cadence, fill: u8) {
        let marker = if cadence.is_alert() { "!" } else { " " };
        println!("{} {:<8} [{:>3}%]", marker, cadence, fill);
    }

    fn show_progress(&mut self, progress: Progress) {
        println!("  reps: {}", progress);
    }
}

#[derive(Default)]
struct ConsoleNavigator {
    next: Option<NextStep>,
}

impl Navigator for ConsoleNavigator {
    fn exercise_complete(&mut self, next: NextStep) {
        println!("exercise complete, next: {:?}", next);
        self.next = Some(next);
    }
}

/// Reads a `time,x,y,z` CSV recording, time in milliseconds.
///
fn load_csv<R: Read>(input: R) -> Result<Vec<TimedSample>, csv::Error> {
    let mut reader = csv::Reader::from_reader(input);
    let mut samples = Vec::new();
    for record in reader.deserialize::<(u64, f64, f64, f64)>() {
        let (timestamp_ms, x, y, z) = record?;
        samples.push(TimedSample { timestamp_ms, accel: Vector::new(x, y, z) });
    }
    Ok(samples)
}

/// Reads a capture of the wearable's tagged stream, one message per line. Malformed messages are
/// skipped, the same way the live link would drop them.
///
fn load_tagged<R: BufRead>(input: R) -> Result<Vec<TimedSample>, std::io::Error> {
    let mut assembler = SampleAssembler::new();
    let mut samples = Vec::new();
    for (number, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match assembler.feed(&line) {
            Ok(Some(sample)) => samples.push(sample),
            Ok(None) => {}
            Err(err) => log::warn!("line {}: {}", number + 1, err),
        }
    }
    Ok(samples)
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T, Box<dyn Error>>
where
    T::Err: Error + 'static,
{
    match args.get(index) {
        Some(value) => Ok(value.parse::<T>()?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err("usage: rep-replay <recording.csv|recording.log> [target reps] [sequence position]".into());
    }
    let target: i32 = parse_arg(&args, 2, 10)?;
    let position: i32 = parse_arg(&args, 3, -22)?;

    // Load the whole recording first so the clock can start at its first timestamp.
    let in_path = Path::new(&args[1]);
    let in_file = File::open(in_path)?;
    let samples = match in_path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => load_csv(in_file)?,
        _ => load_tagged(BufReader::new(in_file))?,
    };
    let Some(first) = samples.first() else {
        return Err(format!("{} holds no samples", in_path.display()).into());
    };
    log::info!("loaded {} samples from {}", samples.len(), in_path.display());

    // Every recording gets its own folder in the results directory.
    let name = in_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("recording");
    let out_dir = format!("{}/{}", RESULTS_DIR, name);
    fs::create_dir_all(&out_dir)?;
    let mut edges_file = csv::Writer::from_path(format!("{}/{}", out_dir, "edges.csv"))?;
    edges_file.write_record(["time", "half_reps", "interval_ms", "cadence", "progress"])?;
    let mut measure_file = csv::Writer::from_path(format!("{}/{}", out_dir, "measures.csv"))?;
    measure_file.write_record(["time", "measure"])?;

    let clock = ManualClock::new(first.timestamp_ms);
    let mut session = ExerciseSession::start(
        SessionConfig::new(name, target, position),
        TrackingConfig::default(),
        &clock,
        ConsoleDisplay,
        ConsoleNavigator::default(),
    )?;

    for sample in &samples {
        clock.set(sample.timestamp_ms);
        let accel = sample.accel;
        let outcome = session.on_sample(accel.x, accel.y, accel.z);

        let measure = session.detector().last_measure;
        if !measure.is_nan() {
            measure_file.write_record([sample.timestamp_ms.to_string(), measure.to_string()])?;
        }

        if let Some(outcome) = outcome {
            edges_file.write_record([
                sample.timestamp_ms.to_string(),
                session.half_reps().to_string(),
                outcome.interval_ms.to_string(),
                outcome.cadence.to_string(),
                outcome.progress.to_string(),
            ])?;
        }
        if session.state() == SessionState::Complete {
            break;
        }
    }
    edges_file.flush()?;
    measure_file.flush()?;

    let (_, _, navigator) = session.into_parts();
    match navigator.next {
        Some(next) => log::info!("finished, navigator asked for {:?}", next),
        None => log::info!("recording ended before the target was reached"),
    }
    Ok(())
}
