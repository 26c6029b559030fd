use clap::{Parser, ValueEnum};
use playground_common::Transcript;

#[derive(Parser, Debug)]
#[command(name = "playground")]
#[command(about = "Replay the collection playgrounds", long_about = None)]
#[command(version)]
pub struct RunnerConfig {
    /// Which playground to replay
    #[arg(
        long,
        env = "PLAYGROUND_LESSON",
        value_enum,
        default_value_t = LessonSelection::All
    )]
    pub lesson: LessonSelection,

    /// How transcripts are written to stdout
    #[arg(
        long,
        env = "PLAYGROUND_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    /// Debug-level logs on stderr (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LessonSelection {
    All,
    Collections,
    Optionals,
    Generics,
}

impl LessonSelection {
    pub const fn as_str(self) -> &'static str {
        match self {
            LessonSelection::All => "all",
            LessonSelection::Collections => "collections",
            LessonSelection::Optionals => "optionals",
            LessonSelection::Generics => "generics",
        }
    }

    pub fn transcripts(self) -> Vec<Transcript> {
        match self {
            LessonSelection::All => {
                let mut all = playground_collections::tours();
                all.extend(playground_optionals::tours());
                all.extend(playground_generics::tours());
                all
            }
            LessonSelection::Collections => playground_collections::tours(),
            LessonSelection::Optionals => playground_optionals::tours(),
            LessonSelection::Generics => playground_generics::tours(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
