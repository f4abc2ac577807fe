use std::cmp::Ordering;

use log::debug;

use crate::rational::parse_integer;
use crate::{error::Result, prelude::*};

const HELP: &str = "\
<operand>                    show a value
<operand> <op> <operand>     op is one of + - * / // == != < <= > >=
:dp <n|none>                 limit the fractional digits shown
:recursion <on|off>          mark repeating digits
:quit                        leave";

#[derive(Debug)]
pub struct Dispatcher {
    config: ReplConfig,
}

#[derive(Debug, PartialEq)]
pub enum DispatchResult {
    Success(Option<String>),
    Failure(String),
    Exit,
}

enum Outcome {
    Value(Rational),
    Truth(bool),
}

impl Dispatcher {
    pub fn new(config: ReplConfig) -> Self {
        Dispatcher { config }
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    pub fn dispatch(&mut self, input: &str) -> DispatchResult {
        let input = input.trim();
        debug!("dispatching {:?}", input);

        if input.is_empty() {
            return DispatchResult::Success(None);
        }
        if let Some(command) = input.strip_prefix(':') {
            return self.command(command);
        }

        match self.evaluate(input).and_then(|outcome| self.render(outcome)) {
            Ok(message) => DispatchResult::Success(Some(message)),
            Err(error) => DispatchResult::Failure(error.to_string()),
        }
    }

    fn command(&mut self, command: &str) -> DispatchResult {
        let words: Vec<&str> = command.split_whitespace().collect();
        match words.as_slice() {
            ["quit"] | ["q"] => DispatchResult::Exit,
            ["help"] => DispatchResult::Success(Some(HELP.to_string())),
            ["dp", "none"] => {
                self.config.max_dp = None;
                DispatchResult::Success(None)
            }
            ["dp", digits] => match digits.parse::<usize>() {
                Ok(max_dp) => {
                    self.config.max_dp = Some(max_dp);
                    DispatchResult::Success(None)
                }
                Err(_) => DispatchResult::Failure(format!("invalid number of digits: {}", digits)),
            },
            ["recursion", "on"] => {
                self.config.recursion = true;
                DispatchResult::Success(None)
            }
            ["recursion", "off"] => {
                self.config.recursion = false;
                DispatchResult::Success(None)
            }
            _ => DispatchResult::Failure(format!("unknown command :{}", command)),
        }
    }

    fn evaluate(&self, input: &str) -> Result<Outcome> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        match tokens.as_slice() {
            [value] => Ok(Outcome::Value(Rational::from_any(operand(value)?)?)),
            [lhs, op, rhs] => {
                let lhs = Rational::from_any(operand(lhs)?)?;
                let rhs = operand(rhs)?;
                let outcome = match *op {
                    "+" => Outcome::Value(lhs.checked_add(rhs)?),
                    "-" => Outcome::Value(lhs.checked_sub(rhs)?),
                    "*" => Outcome::Value(lhs.checked_mul(rhs)?),
                    "/" => Outcome::Value(lhs.checked_div(rhs)?),
                    "//" => Outcome::Value(lhs.checked_floor_div(rhs)?),
                    "==" => Outcome::Truth(lhs.eq_any(rhs)),
                    "!=" => Outcome::Truth(!lhs.eq_any(rhs)),
                    "<" => Outcome::Truth(lhs.checked_cmp(rhs)? == Ordering::Less),
                    "<=" => Outcome::Truth(lhs.checked_cmp(rhs)? != Ordering::Greater),
                    ">" => Outcome::Truth(lhs.checked_cmp(rhs)? == Ordering::Greater),
                    ">=" => Outcome::Truth(lhs.checked_cmp(rhs)? != Ordering::Less),
                    _ => return Err(Error::Parse(input.to_string())),
                };
                Ok(outcome)
            }
            _ => Err(Error::Parse(input.to_string())),
        }
    }

    fn render(&self, outcome: Outcome) -> Result<String> {
        match outcome {
            Outcome::Value(value) => {
                let decimal = value.decimal(self.config.max_dp, self.config.recursion)?;
                Ok(format!("{} = {}", value, decimal))
            }
            Outcome::Truth(truth) => Ok(truth.to_string()),
        }
    }
}

/// Integers, decimals and fractions become numbers. Booleans and quoted strings are carried
/// along as values no operator accepts.
fn operand(token: &str) -> Result<Operand> {
    if let Ok(truth) = token.parse::<bool>() {
        return Ok(Operand::unsupported(&truth));
    }
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        return Ok(Operand::unsupported(&token[1..token.len() - 1]));
    }
    if let Some(integer) = parse_integer(token) {
        return Ok(Operand::Integer(integer));
    }
    Rational::from_string(token).map(Operand::Rational)
}
