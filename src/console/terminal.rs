use anyhow::*;
use itertools::Itertools;
use std::io::{self, Write};

use super::{Console, Message};
use crate::api::Difficulty;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

fn render(message: &Message) -> String {
    match message {
        Message::Welcome => "Welcome to the quiz! We'll learn so much together.".to_owned(),
        Message::DifficultyPrompt => format!(
            "Please choose your difficulty level.\nEnter one of the following: {}\n",
            Difficulty::ALL.iter().join(", ")
        ),
        Message::InvalidDifficulty => "Sorry, that's not one of the difficulty levels.".to_owned(),
        Message::QuestionBegins(number, text) => format!("Q{}:  {}", number, text),
        Message::AnswerOption(letter, text) => format!("{}) {}", letter, text),
        Message::SingleAnswerRules => format!(
            "{}There is only ONE correct answer. Please choose one of the options below. {}",
            YELLOW, RESET
        ),
        Message::MultipleAnswersRules => format!(
            "{}There are MULTIPLE correct answers. Please enter the answers you think \
             are correct with commas between them (e.g. 'a, b, c'). {}",
            YELLOW, RESET
        ),
        Message::AnswerPrompt => "Enter your answer here: ".to_owned(),
        Message::InvalidAnswer => "Sorry, that's not a valid answer. Please try again".to_owned(),
        Message::GuessCorrect(score, total) => format!(
            "{}Well done! Your score is {}/{}{}\n",
            GREEN, score, total, RESET
        ),
        Message::GuessIncorrect(score, total) => format!(
            "{}Sorry. That's not correct. Your score is {}/{}{}\n",
            RED, score, total, RESET
        ),
        Message::FinalScore(score, total) => format!(
            "You've completed the quiz.\nYour final score was: {}/{}",
            score, total
        ),
    }
}

#[derive(Clone)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Terminal
    }
}

impl Console for Terminal {
    fn say(&mut self, message: &Message) {
        println!("{}", render(message));
    }

    fn prompt(&mut self, message: &Message) -> Result<String> {
        print!("{}", render(message));
        io::stdout().flush()?;
        let mut input = String::new();
        let bytes_read = io::stdin()
            .read_line(&mut input)
            .context("Could not read from standard input")?;
        ensure!(bytes_read != 0, "Input stream was closed");
        Ok(input)
    }
}
