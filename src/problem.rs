//! Randomized arithmetic problems.
//!
//! Every generator takes the RNG as a parameter; the app owns a `StdRng`
//! and tests seed their own.

use crate::constants::CHOICE_COUNT;
use crate::settings::Difficulty;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one generated problem. The abacus resets when it changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(String);

impl ProblemId {
    /// A fresh random (v4) id.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// A v4 id drawn from `rng`, so seeded generators stay reproducible.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.r#gen();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProblemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProblemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathProblem {
    pub id: ProblemId,
    /// Tokens separated by single spaces, e.g. `"2 + 7 - 4"`
    pub expression: String,
    pub answer: u32,
    /// The answer plus two distractors, shuffled
    pub choices: [u32; CHOICE_COUNT],
}

/// Generate a problem for the given difficulty.
pub fn generate_problem<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> MathProblem {
    let (expression, answer, range_limit) = match difficulty {
        Difficulty::Digit1UpTo10 => single_digit(10, rng),
        Difficulty::Digit1UpTo20 => single_digit(20, rng),
        Difficulty::Digit2 => two_digit(rng),
        Difficulty::Chain3 => chain(3, rng),
        Difficulty::Chain4 => chain(4, rng),
    };

    MathProblem {
        id: ProblemId::from_rng(rng),
        expression,
        answer,
        choices: generate_choices(answer, range_limit, rng),
    }
}

/// One-digit add/sub. `max_result` is 10 or 20.
fn single_digit<R: Rng + ?Sized>(max_result: u32, rng: &mut R) -> (String, u32, u32) {
    if rng.gen_bool(0.5) {
        let (a, b) = if max_result == 10 {
            let answer = rng.gen_range(2..=10);
            let a = rng.gen_range(1..answer);
            (a, answer - a)
        } else {
            (rng.gen_range(2..=9), rng.gen_range(1..=9))
        };
        (format!("{a} + {b}"), a + b, max_result)
    } else {
        let max_a = if max_result == 10 { 10 } else { 18 };
        let a = rng.gen_range(2..=max_a);
        let b = rng.gen_range(1..=(a - 1).min(9));
        (format!("{a} - {b}"), a - b, max_a)
    }
}

fn two_digit<R: Rng + ?Sized>(rng: &mut R) -> (String, u32, u32) {
    if rng.gen_bool(0.5) {
        let a = rng.gen_range(10..=90);
        let b = rng.gen_range(10..=99);
        (format!("{a} + {b}"), a + b, 200)
    } else {
        let a = rng.gen_range(20..=99);
        let b = rng.gen_range(10..a);
        (format!("{a} - {b}"), a - b, 100)
    }
}

/// `count` one-digit operands joined by + and -, never going negative.
fn chain<R: Rng + ?Sized>(count: usize, rng: &mut R) -> (String, u32, u32) {
    let first: u32 = rng.gen_range(1..=9);
    let mut sum = first;
    let mut tokens = vec![first.to_string()];

    for _ in 1..count {
        let subtract = sum > 0 && rng.gen_bool(0.5);
        if subtract {
            let operand = rng.gen_range(1..=sum.min(9));
            sum -= operand;
            tokens.push("-".to_string());
            tokens.push(operand.to_string());
        } else {
            let operand = rng.gen_range(1..=9);
            sum += operand;
            tokens.push("+".to_string());
            tokens.push(operand.to_string());
        }
    }

    (tokens.join(" "), sum, 50)
}

/// The answer plus two distinct nearby distractors in `0..=range_limit * 1.5`.
pub fn generate_choices<R: Rng + ?Sized>(
    answer: u32,
    range_limit: u32,
    rng: &mut R,
) -> [u32; CHOICE_COUNT] {
    let spread = i64::from((range_limit / 5).max(5));
    let upper = i64::from(range_limit) * 3 / 2;
    let mut choices = vec![answer];

    while choices.len() < CHOICE_COUNT {
        let fake = i64::from(answer) + rng.gen_range(-spread..=spread);
        if fake < 0 || fake > upper.max(i64::from(answer)) {
            continue;
        }
        let fake = fake as u32;
        if !choices.contains(&fake) {
            choices.push(fake);
        }
    }

    choices.shuffle(rng);
    [choices[0], choices[1], choices[2]]
}

/// Evaluate a space-separated `+`/`-` expression left to right.
pub fn evaluate(expression: &str) -> Option<i64> {
    let mut tokens = expression.split(' ');
    let mut total: i64 = tokens.next()?.parse().ok()?;
    while let Some(operator) = tokens.next() {
        let operand: i64 = tokens.next()?.parse().ok()?;
        match operator {
            "+" => total += operand,
            "-" => total -= operand,
            _ => return None,
        }
    }
    Some(total)
}
