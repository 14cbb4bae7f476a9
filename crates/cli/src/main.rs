mod settings;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use subtitle_me_core::pipeline::generate_subtitles_use_case::GenerateSubtitlesUseCase;
use subtitle_me_core::pipeline::pipeline_logger::LogPipelineLogger;
use subtitle_me_core::shared::output_paths::OutputPaths;
use subtitle_me_core::subtitles::domain::casing::Casing;
use subtitle_me_core::subtitles::infrastructure::json_event_writer::JsonEventWriter;
use subtitle_me_core::subtitles::infrastructure::srt_file_writer::SrtFileWriter;
use subtitle_me_core::transcript::infrastructure::json_recognition_reader::JsonRecognitionReader;

use settings::Settings;

/// Generate SRT subtitles and a speech event log from a speech recognition result.
#[derive(Parser)]
#[command(name = "subtitle-me")]
struct Cli {
    /// Recognition result JSON (`{"results": [...]}`).
    input: PathBuf,

    /// Sentence-case subtitles: yes or no.
    casing: Option<Casing>,

    /// Directory for the .srt and _events.json files.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    validate(&cli)?;

    let settings = Settings::load();
    let casing = cli.casing.unwrap_or(settings.casing);
    let out_dir = cli.out_dir.unwrap_or(settings.output_dir);
    let outputs = OutputPaths::for_input(&cli.input, &out_dir);

    log::info!("Generating subtitles file from {}", cli.input.display());

    let mut use_case = GenerateSubtitlesUseCase::new(
        Box::new(JsonRecognitionReader::new()),
        Box::new(SrtFileWriter::new()),
        Box::new(JsonEventWriter::new()),
        casing,
        Box::new(LogPipelineLogger::new()),
    );
    use_case.run(&cli.input, &outputs)?;
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    Ok(())
}
