use anyhow::*;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Welcome,
    DifficultyPrompt,
    InvalidDifficulty,
    QuestionBegins(usize, String),
    AnswerOption(char, String),
    SingleAnswerRules,
    MultipleAnswersRules,
    AnswerPrompt,
    InvalidAnswer,
    GuessCorrect(u32, usize),
    GuessIncorrect(u32, usize),
    FinalScore(u32, usize),
}

pub trait Console {
    fn say(&mut self, message: &Message);
    fn prompt(&mut self, message: &Message) -> Result<String>;
}
