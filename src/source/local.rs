//! Offline generators that produce the same envelopes the API serves.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde_json::{Map, Value};

use crate::catalog::{ART, CELEBRATION_MESSAGE, CHALLENGES, FACTS, JOKES, MOTIVATIONAL_MESSAGES, QUOTES};
use crate::client::{Endpoint, SurpriseResponse};

use super::SurpriseSource;

/// ISO-8601 without offset. The fraction is left out when it is zero.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    if now.timestamp_subsec_micros() == 0 {
        now.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// The kinds of surprise `random` and `daily` choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Quote,
    Joke,
    Fact,
    Art,
    Challenge,
    Motivation,
    Celebration,
}

pub const GENERATORS: [Generator; 7] = [
    Generator::Quote,
    Generator::Joke,
    Generator::Fact,
    Generator::Art,
    Generator::Challenge,
    Generator::Motivation,
    Generator::Celebration,
];

fn content<const N: usize>(pairs: [(&str, Value); N]) -> Map<String, Value> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn choose<'a, T, R: RngExt + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

impl Generator {
    /// Envelope `type` this generator produces.
    pub fn kind(self) -> &'static str {
        match self {
            Generator::Quote => "quote",
            Generator::Joke => "joke",
            Generator::Fact => "fact",
            Generator::Art => "ascii_art",
            Generator::Challenge => "challenge",
            Generator::Motivation => "motivation",
            Generator::Celebration => "celebration",
        }
    }

    pub fn generate<R: RngExt + ?Sized>(self, rng: &mut R) -> Map<String, Value> {
        match self {
            Generator::Quote => {
                let q = choose(rng, QUOTES);
                content([
                    ("quote", q.quote.into()),
                    ("author", q.author.into()),
                    ("emoji", "💭".into()),
                ])
            }
            Generator::Joke => {
                let j = choose(rng, JOKES);
                content([
                    ("setup", j.setup.into()),
                    ("punchline", j.punchline.into()),
                    ("emoji", "😄".into()),
                ])
            }
            Generator::Fact => content([
                ("fact", (*choose(rng, FACTS)).into()),
                ("emoji", "🤓".into()),
            ]),
            Generator::Art => {
                let a = choose(rng, ART);
                content([
                    ("name", a.name.into()),
                    ("art", a.art.into()),
                    ("emoji", "🎨".into()),
                ])
            }
            Generator::Challenge => {
                let c = choose(rng, CHALLENGES);
                content([
                    ("challenge", c.challenge.into()),
                    ("difficulty", c.difficulty.into()),
                    ("hint", c.hint.into()),
                    ("emoji", "💻".into()),
                ])
            }
            Generator::Motivation => content([
                ("message", (*choose(rng, MOTIVATIONAL_MESSAGES)).into()),
                ("emoji", "✨".into()),
            ]),
            Generator::Celebration => content([
                ("message", CELEBRATION_MESSAGE.into()),
                ("confetti", true.into()),
                ("emoji", "🎊".into()),
            ]),
        }
    }
}

/// `YYYYMMDD` of the UTC date, used to seed the daily pick.
pub fn daily_seed(now: DateTime<Utc>) -> u64 {
    now.year() as u64 * 10_000 + now.month() as u64 * 100 + now.day() as u64
}

/// Build the envelope `endpoint` would return at `now`.
///
/// `rng` drives every endpoint except `daily`, which uses its own RNG seeded
/// from the date so a given day always yields the same surprise.
pub fn surprise_at<R: RngExt + ?Sized>(
    endpoint: Endpoint,
    now: DateTime<Utc>,
    rng: &mut R,
) -> SurpriseResponse {
    let timestamp = iso_timestamp(now);

    let (kind, content) = match endpoint {
        Endpoint::Random => {
            let generator = *choose(rng, &GENERATORS);
            (generator.kind().to_string(), generator.generate(rng))
        }
        Endpoint::Quote => single(Generator::Quote, rng),
        Endpoint::Joke => single(Generator::Joke, rng),
        Endpoint::Fact => single(Generator::Fact, rng),
        Endpoint::Art => single(Generator::Art, rng),
        Endpoint::Challenge => single(Generator::Challenge, rng),
        Endpoint::Celebrate => single(Generator::Celebration, rng),
        Endpoint::Daily => {
            let mut daily = StdRng::seed_from_u64(daily_seed(now));
            let generator = *choose(&mut daily, &GENERATORS);
            let mut content = generator.generate(&mut daily);
            content.insert("daily".to_string(), Value::Bool(true));
            (format!("daily_{}", generator.kind()), content)
        }
    };

    SurpriseResponse {
        kind,
        content,
        timestamp,
    }
}

fn single<R: RngExt + ?Sized>(generator: Generator, rng: &mut R) -> (String, Map<String, Value>) {
    (generator.kind().to_string(), generator.generate(rng))
}

/// Generates surprises in-process. No network, no token.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSource;

#[async_trait]
impl SurpriseSource for LocalSource {
    async fn fetch(&self, endpoint: Endpoint) -> Result<SurpriseResponse> {
        Ok(surprise_at(endpoint, Utc::now(), &mut rand::rng()))
    }
}
