mod config;
mod main_lib;

use clap::Parser;
use config::Config;
use main_lib::{build_responder, init_tracing, render_answer, render_outcome, DEMO_QUESTIONS};

#[derive(Parser, Debug)]
#[command(name = "cambio")]
#[command(about = "Responde preguntas en español sobre conversión de monedas")]
struct Args {
    /// Questions to answer, one per argument.
    #[arg(value_name = "PREGUNTA")]
    questions: Vec<String>,

    /// Answer the built-in sample questions.
    #[arg(long)]
    demo: bool,

    /// Print one JSON object per question.
    #[arg(long)]
    json: bool,

    /// Only show how each question is interpreted; no external calls.
    #[arg(long)]
    parse_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    init_tracing(&config.log_format);

    let mut questions = args.questions;
    if args.demo {
        questions.extend(DEMO_QUESTIONS.iter().map(|q| q.to_string()));
    }
    if questions.is_empty() {
        anyhow::bail!("no questions given; pass one or more questions or use --demo");
    }

    let responder = build_responder(&config);
    for question in &questions {
        let rendered = if args.parse_only {
            let outcome = responder.interpreter().parse(question);
            render_outcome(question, &outcome, args.json)?
        } else {
            let result = responder.answer(question).await;
            render_answer(question, &result, args.json)?
        };
        println!("{}", rendered);
    }
    Ok(())
}
