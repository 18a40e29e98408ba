use anyhow::*;
use log::error;
use std::result::Result::Ok;
use std::env;

mod api;
mod console;
mod quiz;

use crate::api::Difficulty;
use crate::console::terminal::Terminal;
use crate::console::{Console, Message};
use crate::quiz::bank::QuestionBank;
use crate::quiz::QuizSession;

fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("Sorry, we couldn't run the quiz: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let api_key = env::var("API_KEY").context("API_KEY is not set")?;

    let mut terminal = Terminal::new();
    terminal.say(&Message::Welcome);
    let difficulty = choose_difficulty(&mut terminal)?;

    let raw_questions = api::fetch_questions(&api_key, difficulty)?;
    let questions = QuestionBank::build(raw_questions)?;
    ensure!(
        !questions.is_empty(),
        "The question service returned no questions"
    );

    let mut session = QuizSession::new(questions, terminal);
    while session.still_has_questions() {
        session.advance()?;
    }
    session.conclude();
    Ok(())
}

fn choose_difficulty<C: Console>(console: &mut C) -> Result<Difficulty> {
    loop {
        let input = console.prompt(&Message::DifficultyPrompt)?;
        match input.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(_) => console.say(&Message::InvalidDifficulty),
        }
    }
}
