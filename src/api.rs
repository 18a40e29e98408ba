use anyhow::*;
use log::{info, warn};
use reqwest::blocking::Client;
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::str::FromStr;

use crate::quiz::bank::RawQuestion;

const API_ENDPOINT: &str = "https://quizapi.io/api/v1/questions";
const PAYLOAD_FILE: &str = "questions.json";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(anyhow!("`{}` is not a difficulty level", other)),
        }
    }
}

pub fn fetch_questions(api_key: &str, difficulty: Difficulty) -> Result<Vec<RawQuestion>> {
    info!("Fetching {} questions from {}", difficulty, API_ENDPOINT);
    let client = Client::new();
    let payload: Value = client
        .get(API_ENDPOINT)
        .header("X-Api-Key", api_key)
        .query(&[("level", difficulty.as_str())])
        .send()
        .context("Could not reach the question service")?
        .error_for_status()
        .context("The question service rejected the request")?
        .json()
        .context("The question service returned unparsable data")?;

    if let Err(e) = save_payload(&payload) {
        warn!("Could not save the raw question payload: {:#}", e);
    }

    let questions: Vec<RawQuestion> = serde_json::from_value(payload)
        .context("The question service returned malformed question records")?;
    info!("Fetched {} questions", questions.len());
    Ok(questions)
}

fn save_payload(payload: &Value) -> Result<()> {
    let file = File::create(PAYLOAD_FILE)?;
    serde_json::to_writer_pretty(file, payload)?;
    Ok(())
}
