//! Terminal front end for the country quiz.
//!
//! Usage:
//!   geo-quiz [--data data/ne_110m_admin_0_countries.shp] [--difficulty europe] [--seed 42]
//!
//! Type a country name to answer, or one of the `:` commands listed by `:help`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use geo_quiz::map::{self, Viewport};
use geo_quiz::quiz::Severity;
use geo_quiz::{load_dataset, Advisory, Difficulty, QuizConfig, QuizError, QuizSession};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "geo-quiz", about = "Recognise countries from their outline on a map")]
struct Args {
    /// Dataset file (.shp or .geojson); overrides the default search locations
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Starting difficulty: world, europe, asia, africa, americas, oceania
    #[arg(long, default_value = "world")]
    difficulty: Difficulty,

    /// Seed for round selection; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Viewport side as a multiple of the country's size
    #[arg(long, default_value_t = geo_quiz::core::DEFAULT_MARGIN_FACTOR)]
    margin_factor: f64,

    /// Map width in characters
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Map height in characters
    #[arg(long, default_value_t = 28)]
    height: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> QuizConfig {
        let mut config = QuizConfig::default()
            .with_margin_factor(self.margin_factor)
            .with_map_size(self.width, self.height);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(path) = &self.data {
            config = config.with_data_path(path.clone());
        }
        config
    }
}

/// One line of player input.
#[derive(Debug, PartialEq)]
enum Command {
    Answer(String),
    Next,
    Difficulty(String),
    World,
    Zoom,
    Score,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Answer(line.to_string());
        };
        let mut parts = rest.splitn(2, char::is_whitespace);
        match parts.next().unwrap_or_default() {
            "next" | "n" => Command::Next,
            "difficulty" | "d" => Command::Difficulty(parts.next().unwrap_or_default().trim().to_string()),
            "world" | "w" => Command::World,
            "zoom" | "z" => Command::Zoom,
            "score" | "s" => Command::Score,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Help,
        }
    }
}

const HELP: &str = "\
Type a country name (English or Polish) and press Enter.
Commands:
  :next                  next country
  :difficulty <level>    world, europe, asia, africa, americas, oceania
  :world                 show the whole world
  :zoom                  zoom back to the country
  :score                 show score and accuracy
  :help                  this text
  :quit                  leave";

struct Terminal<W: Write> {
    out: W,
    width: usize,
    height: usize,
}

impl<W: Write> Terminal<W> {
    fn advise(&mut self, advisory: &Advisory) -> io::Result<()> {
        let marker = match advisory.severity() {
            Severity::Info => "i",
            Severity::Warning => "!",
            Severity::Error => "x",
        };
        writeln!(self.out, "[{marker}] {}: {advisory}", advisory.title())
    }

    /// Surface a session error; errors without an advisory are shown verbatim.
    fn report(&mut self, error: &QuizError) -> io::Result<()> {
        match Advisory::from_error(error) {
            Some(advisory) => self.advise(&advisory),
            None => writeln!(self.out, "[x] {error}"),
        }
    }

    fn draw(&mut self, session: &QuizSession, viewport: Option<Viewport>) -> io::Result<()> {
        match viewport {
            Some(viewport) => {
                let raster = map::render(
                    session.dataset(),
                    session.current_index(),
                    &viewport,
                    self.width,
                    self.height,
                );
                writeln!(self.out, "{raster}")
            }
            None => writeln!(self.out, "(no map data)"),
        }
    }

    fn show_round(&mut self, session: &QuizSession) -> io::Result<()> {
        self.draw(session, session.country_view())?;
        writeln!(self.out, "Which country is this? [{}]", session.difficulty())
    }

    fn show_score(&mut self, session: &QuizSession) -> io::Result<()> {
        let score = session.score();
        writeln!(
            self.out,
            "Points: {}   Accuracy: {}%",
            score.correct,
            score.accuracy_percent()
        )
    }

    fn start_round(&mut self, session: &mut QuizSession) -> io::Result<()> {
        match session.start_round().map(|_| ()) {
            Ok(_) => self.show_round(session),
            Err(e) => self.report(&e),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = args.config();
    debug!(?config, "Starting");

    let outcome = load_dataset(&config.data_paths);
    let mut terminal = Terminal {
        out: io::stdout().lock(),
        width: config.map_width,
        height: config.map_height,
    };
    if let Some(advisory) = &outcome.advisory {
        terminal.advise(advisory)?;
    }

    let mut session = QuizSession::new(outcome.dataset, &config);
    info!("Seed {}", session.rng_state().seed);

    writeln!(terminal.out, "{HELP}\n")?;
    match session.set_difficulty(args.difficulty).map(|_| ()) {
        Ok(_) => terminal.show_round(&session)?,
        Err(e) => terminal.report(&e)?,
    }

    let stdin = io::stdin();
    loop {
        write!(terminal.out, "> ")?;
        terminal.out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match Command::parse(&line) {
            Command::Answer(answer) => match session.submit(&answer) {
                Ok(feedback) => {
                    writeln!(terminal.out, "{}", feedback.message())?;
                    terminal.show_score(&session)?;
                }
                Err(e) => terminal.report(&e)?,
            },
            Command::Next => terminal.start_round(&mut session)?,
            Command::Difficulty(name) => match name.parse::<Difficulty>() {
                Ok(difficulty) => match session.set_difficulty(difficulty).map(|_| ()) {
                    Ok(_) => terminal.show_round(&session)?,
                    Err(e) => terminal.report(&e)?,
                },
                Err(e) => writeln!(terminal.out, "{e}")?,
            },
            Command::World => terminal.draw(&session, session.world_view())?,
            Command::Zoom => terminal.show_round(&session)?,
            Command::Score => terminal.show_score(&session)?,
            Command::Help => writeln!(terminal.out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    terminal.show_score(&session)?;
    Ok(())
}
