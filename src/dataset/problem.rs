//! Addition problem generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ValidationError, MAX_DIGITS_LIMIT};

/// Distribution of each digit drawn by [`make_int`]
///
/// `Legacy` draws from `0..=10` (leading digit `1..=10`) and accumulates with
/// `res * 10 + d`, so a "digit" of 10 carries into the next position. Models
/// trained on that distribution should keep it. `Decimal` draws proper
/// base-10 digits, giving exactly `n_digits` digits with a non-zero lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitDraw {
    #[default]
    Legacy,
    Decimal,
}

impl DigitDraw {
    fn max_digit(self) -> u64 {
        match self {
            DigitDraw::Legacy => 10,
            DigitDraw::Decimal => 9,
        }
    }
}

impl std::str::FromStr for DigitDraw {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(DigitDraw::Legacy),
            "decimal" => Ok(DigitDraw::Decimal),
            _ => Err(format!(
                "Unknown digit draw: {s}. Valid values: legacy, decimal"
            )),
        }
    }
}

impl std::fmt::Display for DigitDraw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitDraw::Legacy => write!(f, "legacy"),
            DigitDraw::Decimal => write!(f, "decimal"),
        }
    }
}

/// Draw a random integer built from `n_digits` digit draws
///
/// More than [`MAX_DIGITS_LIMIT`] digits could overflow a `u64` sum and is
/// rejected. Zero digits yields 0.
pub fn make_int<R: Rng + ?Sized>(
    rng: &mut R,
    n_digits: usize,
    draw: DigitDraw,
) -> Result<u64, ValidationError> {
    if n_digits > MAX_DIGITS_LIMIT {
        return Err(ValidationError::InvalidMaxDigits(n_digits));
    }
    Ok(draw_int(rng, n_digits, draw))
}

fn draw_int<R: Rng + ?Sized>(rng: &mut R, n_digits: usize, draw: DigitDraw) -> u64 {
    let hi = draw.max_digit();
    (0..n_digits).fold(0, |res, i| {
        let lo = if i == 0 { 1 } else { 0 };
        res * 10 + rng.random_range(lo..=hi)
    })
}

/// Trace of long addition, one step per digit position
///
/// Steps run from the least significant position upward and stop once both
/// operands and the carry are exhausted. `(0, 0)` has no steps.
pub fn get_add_explanation(x: u64, y: u64) -> String {
    let (mut x, mut y) = (x, y);
    let mut carry = 0;
    let mut e = 0;
    let mut steps = Vec::new();
    while x > 0 || y > 0 || carry > 0 {
        let (rx, ry) = (x % 10, y % 10);
        let total = rx + ry + carry;
        steps.push(format!("{rx}e{e}+{ry}e{e}+{carry}e{e}=={total}e{e}"));
        x /= 10;
        y /= 10;
        carry = total / 10;
        e += 1;
    }
    steps.join(" ")
}

/// A pair of operands to add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub x: u64,
    pub y: u64,
}

impl Problem {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    pub fn sum(&self) -> u64 {
        self.x + self.y
    }

    /// Question part, e.g. `x=12+9;`
    pub fn prompt(&self) -> String {
        format!("x={}+{};", self.x, self.y)
    }

    /// Expected answer string
    pub fn answer(&self) -> String {
        self.sum().to_string()
    }

    /// Full problem line, with or without the carry explanation
    pub fn format(&self, explain: bool) -> String {
        if explain {
            format!(
                "{} {} x=={}\n",
                self.prompt(),
                get_add_explanation(self.x, self.y),
                self.sum()
            )
        } else {
            format!("{} x=={}\n", self.prompt(), self.sum())
        }
    }
}

/// Random problem source
///
/// `max_digits` is checked on construction, so drawing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemGenerator {
    max_digits: usize,
    draw: DigitDraw,
}

impl ProblemGenerator {
    /// Create a generator for operands of up to `max_digits` digits
    ///
    /// `max_digits` must be in `1..=MAX_DIGITS_LIMIT`.
    pub fn new(max_digits: usize) -> Result<Self, ValidationError> {
        if max_digits == 0 || max_digits > MAX_DIGITS_LIMIT {
            return Err(ValidationError::InvalidMaxDigits(max_digits));
        }
        Ok(Self {
            max_digits,
            draw: DigitDraw::default(),
        })
    }

    pub fn with_digit_draw(mut self, draw: DigitDraw) -> Self {
        self.draw = draw;
        self
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub fn digit_draw(&self) -> DigitDraw {
        self.draw
    }

    /// Both operands with a random digit count in `1..=max_digits`
    pub fn make_problem<R: Rng + ?Sized>(&self, rng: &mut R) -> Problem {
        let n_x = rng.random_range(1..=self.max_digits);
        let x = draw_int(rng, n_x, self.draw);
        let n_y = rng.random_range(1..=self.max_digits);
        let y = draw_int(rng, n_y, self.draw);
        Problem { x, y }
    }

    /// Problem text: terse one time in five, explained otherwise
    pub fn make_add_problem<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let problem = self.make_problem(rng);
        let terse = rng.random_range(0..5) < 1;
        problem.format(!terse)
    }

    /// Held-out `(prompt, answer)` pair, terse form only
    pub fn get_qa<R: Rng + ?Sized>(&self, rng: &mut R) -> (String, String) {
        let problem = self.make_problem(rng);
        (problem.prompt(), problem.answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_explanation_with_carry() {
        assert_eq!(
            get_add_explanation(27, 5),
            "7e0+5e0+0e0==12e0 2e1+0e1+1e1==3e1"
        );
    }

    #[test]
    fn test_explanation_final_carry_adds_step() {
        assert_eq!(
            get_add_explanation(9, 1),
            "9e0+1e0+0e0==10e0 0e1+0e1+1e1==1e1"
        );
    }

    #[test]
    fn test_explanation_zero() {
        assert_eq!(get_add_explanation(0, 0), "");
    }

    #[test]
    fn test_explanation_uneven_lengths() {
        assert_eq!(
            get_add_explanation(3, 140),
            "3e0+0e0+0e0==3e0 0e1+4e1+0e1==4e1 0e2+1e2+0e2==1e2"
        );
    }

    #[test]
    fn test_terse_format() {
        assert_eq!(Problem::new(12, 9).format(false), "x=12+9; x==21\n");
    }

    #[test]
    fn test_explained_format() {
        assert_eq!(
            Problem::new(27, 5).format(true),
            "x=27+5; 7e0+5e0+0e0==12e0 2e1+0e1+1e1==3e1 x==32\n"
        );
    }

    #[test]
    fn test_prompt_and_answer() {
        let p = Problem::new(120, 34);
        assert_eq!(p.prompt(), "x=120+34;");
        assert_eq!(p.answer(), "154");
    }

    #[test]
    fn test_make_int_zero_digits() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(make_int(&mut rng, 0, DigitDraw::Legacy).unwrap(), 0);
    }

    #[test]
    fn test_make_int_rejects_overflowing_width() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            make_int(&mut rng, 25, DigitDraw::Legacy),
            Err(ValidationError::InvalidMaxDigits(25))
        );
        assert!(make_int(&mut rng, MAX_DIGITS_LIMIT, DigitDraw::Legacy).is_ok());
    }

    #[test]
    fn test_generator_rejects_out_of_range_digits() {
        assert_eq!(
            ProblemGenerator::new(0),
            Err(ValidationError::InvalidMaxDigits(0))
        );
        assert_eq!(
            ProblemGenerator::new(25),
            Err(ValidationError::InvalidMaxDigits(25))
        );
        assert!(ProblemGenerator::new(1).is_ok());
        assert!(ProblemGenerator::new(MAX_DIGITS_LIMIT).is_ok());
    }

    #[test]
    fn test_widest_legacy_problem_does_not_overflow() {
        let mut rng = StdRng::seed_from_u64(12);
        let generator = ProblemGenerator::new(MAX_DIGITS_LIMIT).unwrap();
        for _ in 0..200 {
            let problem = generator.make_problem(&mut rng);
            assert!(problem.x.checked_add(problem.y).is_some());
            generator.make_add_problem(&mut rng);
        }
    }

    #[test]
    fn test_make_int_legacy_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let v = make_int(&mut rng, 3, DigitDraw::Legacy).unwrap();
            // lowest: 1,0,0; highest: 10,10,10
            assert!((100..=1110).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_make_int_legacy_reaches_ten() {
        let mut rng = StdRng::seed_from_u64(2);
        let seen_ten = (0..2000).any(|_| make_int(&mut rng, 1, DigitDraw::Legacy).unwrap() == 10);
        assert!(seen_ten);
    }

    #[test]
    fn test_digit_draw_from_str() {
        assert_eq!("legacy".parse::<DigitDraw>().unwrap(), DigitDraw::Legacy);
        assert_eq!("Decimal".parse::<DigitDraw>().unwrap(), DigitDraw::Decimal);
        assert!("hex".parse::<DigitDraw>().is_err());
        assert_eq!(DigitDraw::default(), DigitDraw::Legacy);
    }

    #[test]
    fn test_make_add_problem_mix() {
        let mut rng = StdRng::seed_from_u64(3);
        let generator = ProblemGenerator::new(4).unwrap();
        let explained = (0..1000)
            .filter(|_| generator.make_add_problem(&mut rng).contains('e'))
            .count();
        // 4/5 explained
        assert!((700..=900).contains(&explained), "{explained}");
    }

    #[test]
    fn test_make_add_problem_grammar() {
        let mut rng = StdRng::seed_from_u64(4);
        let generator = ProblemGenerator::new(5).unwrap().with_digit_draw(DigitDraw::Decimal);
        for _ in 0..200 {
            let text = generator.make_add_problem(&mut rng);
            assert!(text.starts_with("x="));
            assert!(text.ends_with('\n'));
            assert_eq!(text.matches('\n').count(), 1);
            let (head, tail) = text.split_once(';').unwrap();
            let (x, y) = head[2..].split_once('+').unwrap();
            let sum: u64 = x.parse::<u64>().unwrap() + y.parse::<u64>().unwrap();
            assert!(tail.ends_with(&format!(" x=={sum}\n")));
        }
    }

    #[test]
    fn test_get_qa_terse() {
        let mut rng = StdRng::seed_from_u64(5);
        let generator = ProblemGenerator::new(4).unwrap();
        for _ in 0..100 {
            let (prompt, answer) = generator.get_qa(&mut rng);
            assert!(prompt.starts_with("x=") && prompt.ends_with(';'));
            let (x, y) = prompt[2..prompt.len() - 1].split_once('+').unwrap();
            let sum = x.parse::<u64>().unwrap() + y.parse::<u64>().unwrap();
            assert_eq!(answer, sum.to_string());
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let generator = ProblemGenerator::new(6).unwrap();
        let a: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| generator.make_add_problem(&mut rng)).collect()
        };
        let b: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| generator.make_add_problem(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
