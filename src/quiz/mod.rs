use anyhow::*;
use std::collections::HashSet;

pub mod answer;
pub mod bank;


use self::answer::{is_selection_correct, parse_selection, selection_pattern};
use self::bank::QuestionBank;
use crate::console::{Console, Message};

pub struct QuizSession<C: Console> {
    questions: QuestionBank,
    current_index: usize,
    score: u32,
    total: usize,
    console: C,
}

impl<C: Console> QuizSession<C> {
    pub fn new(questions: QuestionBank, console: C) -> Self {
        QuizSession {
            total: questions.len(),
            questions,
            current_index: 0,
            score: 0,
            console,
        }
    }

    pub fn still_has_questions(&self) -> bool {
        self.current_index < self.total
    }

    /// Asks the question at the current index and scores the answer. The
    /// index is bumped before any interaction so an interrupted question is
    /// not asked again.
    pub fn advance(&mut self) -> Result<()> {
        let question = self
            .questions
            .get(self.current_index)
            .cloned()
            .context("No questions left to ask")?;
        self.current_index += 1;

        self.console.say(&Message::QuestionBegins(
            self.current_index,
            question.text.clone(),
        ));
        for (letter, text) in &question.options {
            self.console
                .say(&Message::AnswerOption(*letter, text.clone()));
        }
        if question.has_multiple_answers() {
            self.console.say(&Message::MultipleAnswersRules);
        } else {
            self.console.say(&Message::SingleAnswerRules);
        }

        let pattern = selection_pattern(&question.option_letters())?;
        let selection = loop {
            let input = self.console.prompt(&Message::AnswerPrompt)?;
            match parse_selection(&input, &pattern) {
                Some(selection) => break selection,
                None => self.console.say(&Message::InvalidAnswer),
            }
        };

        let correct: HashSet<char> = question.correct_letters().into_iter().collect();
        if is_selection_correct(&selection, &correct) {
            self.score += 1;
            self.console
                .say(&Message::GuessCorrect(self.score, self.total));
        } else {
            self.console
                .say(&Message::GuessIncorrect(self.score, self.total));
        }
        Ok(())
    }

    pub fn conclude(&mut self) {
        self.console
            .say(&Message::FinalScore(self.score, self.total));
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
