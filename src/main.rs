use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use edubot_lib::postprocessing::{clean, render_plain};
use edubot_lib::profile::Language;
use edubot_lib::tools::ToolCategory;
use edubot_lib::{Config, FormState, Session, StudentProfile, ToolId};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "edubot", version, about = "Personalized AI tutor tools for K-12 students")]
struct Cli {
    /// TOML config file (model, api_key, api_url, request_timeout_secs, default_language)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Student profile as JSON; the built-in demo profile is used otherwise
    #[arg(long, global = true)]
    profile: Option<PathBuf>,
    /// Response language (English or Tamil)
    #[arg(long, global = true)]
    language: Option<Language>,
    /// Raise log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tool catalog
    Tools,
    /// Print the system instruction and hydrated prompt without calling the model
    Prompt(ToolArgs),
    /// Run a tool against the model
    Generate(ToolArgs),
    /// Talk to the conversational tutor (reads stdin)
    Chat,
}

#[derive(Args, Debug)]
struct ToolArgs {
    /// Tool identifier, e.g. doubt_solver
    tool: ToolId,
    #[command(flatten)]
    form: FormArgs,
}

#[derive(Args, Debug, Default)]
struct FormArgs {
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    topic: Option<String>,
    /// Student question or text to simplify
    #[arg(long)]
    query: Option<String>,
    /// File with chapter text or source material
    #[arg(long)]
    content: Option<PathBuf>,
    #[arg(long)]
    score: Option<u32>,
    #[arg(long)]
    difficulty: Option<String>,
    #[arg(long)]
    exam_duration: Option<String>,
    #[arg(long)]
    writing_type: Option<String>,
    #[arg(long)]
    tone: Option<String>,
    #[arg(long)]
    study_hours: Option<String>,
    #[arg(long)]
    recent_scores: Option<String>,
    #[arg(long)]
    room_type: Option<String>,
    #[arg(long)]
    mood: Option<String>,
    #[arg(long)]
    stress_level: Option<String>,
}

impl FormArgs {
    fn into_form(self, profile: &StudentProfile) -> Result<FormState> {
        let mut form = FormState::for_profile(profile);
        let fields = [
            (&mut form.subject, self.subject),
            (&mut form.topic, self.topic),
            (&mut form.query, self.query),
            (&mut form.difficulty, self.difficulty),
            (&mut form.exam_duration, self.exam_duration),
            (&mut form.writing_type, self.writing_type),
            (&mut form.writing_tone, self.tone),
            (&mut form.study_hours, self.study_hours),
            (&mut form.recent_scores, self.recent_scores),
            (&mut form.room_type, self.room_type),
            (&mut form.mood, self.mood),
            (&mut form.stress_level, self.stress_level),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(score) = self.score {
            form.score = score;
        }
        if let Some(path) = self.content {
            form.chapter_content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        Ok(form)
    }
}

fn init_tracing(verbose: u8) {
    let default = if verbose > 0 {
        "edubot=debug,edubot_lib=debug"
    } else {
        "edubot=info,edubot_lib=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_profile(path: Option<&Path>) -> Result<StudentProfile> {
    let Some(path) = path else {
        return Ok(StudentProfile::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid profile JSON in {}", path.display()))
}

fn print_tools() {
    let mut current: Option<ToolCategory> = None;
    for tool in ToolId::ALL {
        if current != Some(tool.category()) {
            current = Some(tool.category());
            println!("\n{}", tool.category().label());
        }
        println!("  {} {:<24} {}", tool.icon(), tool.name(), tool.as_str());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let profile = load_profile(cli.profile.as_deref())?;
    let language = cli.language.unwrap_or(config.default_language);

    match cli.command {
        Command::Tools => print_tools(),
        Command::Prompt(args) => {
            let form = args.form.into_form(&profile)?;
            let session = Session::from_config(&config, profile)?;
            session.set_language(language).await;
            let preview = session.preview(args.tool, &form).await?;
            println!("--- system instruction ---\n{}\n", preview.system_instruction);
            println!("--- prompt ---\n{}", preview.prompt);
            if !preview.unresolved.is_empty() {
                eprintln!("unresolved: {}", preview.unresolved.join(", "));
            }
        }
        Command::Generate(args) => {
            config.validate()?;
            let form = args.form.into_form(&profile)?;
            let session = Session::from_config(&config, profile)?;
            session.set_language(language).await;

            let generation = session.generate(args.tool, &form).await?;
            println!("{}", render_plain(&clean(&generation.text)));

            if generation.challenge_completed {
                let reward = session.claim_reward().await?;
                println!("🏆 Daily challenge complete: +{} XP, +{} stars", reward.xp, reward.stars);
            }
        }
        Command::Chat => {
            config.validate()?;
            let session = Session::from_config(&config, profile)?;
            session.set_language(language).await;
            chat_loop(&session).await?;
        }
    }
    Ok(())
}

async fn chat_loop(session: &Session) -> Result<()> {
    let profile = session.profile().await;
    println!("{}", profile.level_group().welcome());
    let suggestion = session.suggestion().await;
    println!("💡 {}: {}", suggestion.title, suggestion.message);
    println!("(/reset clears the conversation, /lang <English|Tamil>, /quit exits)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                session.clear_history().await;
                println!("Conversation cleared.");
            }
            _ if line.starts_with("/lang ") => match line["/lang ".len()..].parse::<Language>() {
                Ok(language) => session.set_language(language).await,
                Err(e) => eprintln!("{e}"),
            },
            message => {
                let reply = session.chat(message).await?;
                println!("\n{}\n", render_plain(&clean(&reply)));
            }
        }
    }

    info!(turns = session.history().await.len(), "Chat ended");
    Ok(())
}
