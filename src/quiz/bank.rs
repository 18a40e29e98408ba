use anyhow::*;
use serde::de;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::convert::TryFrom;

fn correctness_flags<'de, D>(deserializer: D) -> Result<BTreeMap<String, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, marker)| {
            let flag = match marker.as_deref().map(str::trim) {
                Some("true") => true,
                Some("false") | Some("") | None => false,
                Some(other) => {
                    return Err(de::Error::invalid_value(
                        de::Unexpected::Str(other),
                        &"true, false or blank",
                    ))
                }
            };
            std::result::Result::Ok((key, flag))
        })
        .collect()
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub answers: BTreeMap<String, Option<String>>,
    #[serde(deserialize_with = "correctness_flags")]
    pub correct_answers: BTreeMap<String, bool>,
}

// Answer keys look like `answer_a`, correctness keys like `answer_a_correct`.
fn option_letter(key: &str) -> Result<char> {
    let suffix = key
        .split('_')
        .nth(1)
        .with_context(|| format!("Answer key `{}` has no letter suffix", key))?;
    let mut chars = suffix.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphanumeric() => Ok(letter),
        _ => Err(anyhow!("Answer key `{}` has no single-letter suffix", key)),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub text: String,
    pub options: Vec<(char, String)>,
    pub correct_options: Vec<(char, String)>,
}

impl Question {
    pub fn option_letters(&self) -> Vec<char> {
        self.options.iter().map(|(letter, _)| *letter).collect()
    }

    pub fn correct_letters(&self) -> Vec<char> {
        self.correct_options
            .iter()
            .map(|(letter, _)| *letter)
            .collect()
    }

    pub fn has_multiple_answers(&self) -> bool {
        self.correct_options.len() > 1
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw: RawQuestion) -> Result<Self> {
        let mut options = Vec::new();
        for (key, answer) in &raw.answers {
            let text = match answer.as_deref() {
                Some(text) if !text.is_empty() => text,
                _ => continue,
            };
            options.push((option_letter(key)?, text.to_owned()));
        }
        ensure!(!options.is_empty(), "Question has no answer options");

        let mut correct_options = Vec::new();
        for (key, flag) in &raw.correct_answers {
            if !flag {
                continue;
            }
            let letter = option_letter(key)?;
            let text = options
                .iter()
                .find(|(option, _)| *option == letter)
                .map(|(_, text)| text.clone())
                .with_context(|| {
                    format!("Correct answer `{}` does not match any option", letter)
                })?;
            correct_options.push((letter, text));
        }
        ensure!(
            !correct_options.is_empty(),
            "Question has no correct answers"
        );

        Ok(Question {
            text: raw.question,
            options,
            correct_options,
        })
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn build(raw_questions: Vec<RawQuestion>) -> Result<QuestionBank> {
        let mut questions = Vec::with_capacity(raw_questions.len());
        for (index, raw_question) in raw_questions.into_iter().enumerate() {
            let question = Question::try_from(raw_question)
                .with_context(|| format!("Malformed question record #{}", index + 1))?;
            questions.push(question);
        }
        Ok(QuestionBank { questions })
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
