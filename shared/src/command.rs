//! Chat command grammar
//!
//! Parses the constrained `yield <district> <area> <soil>` command used over
//! messaging transports and renders the reply text. Every input gets a reply:
//! parse failures map to fixed usage strings, never to errors. The yield path
//! feeds the same [`YieldEstimator`] as the HTTP estimation endpoint, so the
//! numbers in both replies always agree.

use rust_decimal::Decimal;

use crate::estimator::YieldEstimator;
use crate::models::{AreaMeasurement, AreaUnit, SoilType};

/// Reply to a recognized `yield` command with out-of-catalog or non-numeric
/// arguments
pub const REPLY_INVALID_INPUT: &str =
    "Invalid input. Use: yield <district> <area> <soil> (e.g., yield Lucknow 5 alluvial)";

/// Reply to a `yield` command with the wrong number of arguments
pub const REPLY_USAGE: &str =
    "Please provide district, area, and soil type. Example: yield Lucknow 5 alluvial";

/// Reply to any message containing "help"
pub const REPLY_HELP: &str =
    "Send \"yield <district> <area> <soil>\" to predict yield. Example: yield Lucknow 5 alluvial";

/// Reply to anything else
pub const REPLY_GREETING: &str =
    "Hi! Send \"help\" for instructions or \"yield\" to predict sugarcane yield.";

/// A parsed chat message. Parsing is total; unparseable yield arguments are
/// preserved as raw tokens so the responder can decide what to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// `yield` intent with exactly three argument tokens
    Yield {
        district: String,
        area_token: String,
        soil_token: String,
    },
    /// `yield` intent with any other argument count
    YieldUsage,
    /// Message contains "help" (checked after the yield prefix)
    Help,
    /// Everything else
    Greeting,
}

impl BotCommand {
    /// Classify a raw message. The yield prefix is checked before the help
    /// substring, so "yield help me" is a malformed yield command, not help.
    pub fn parse(text: &str) -> Self {
        let text = text.trim().to_lowercase();

        if text.starts_with("yield") {
            let args: Vec<&str> = text.split_whitespace().skip(1).collect();
            if let [district, area, soil] = args[..] {
                BotCommand::Yield {
                    district: district.to_string(),
                    area_token: area.to_string(),
                    soil_token: soil.to_string(),
                }
            } else {
                BotCommand::YieldUsage
            }
        } else if text.contains("help") {
            BotCommand::Help
        } else {
            BotCommand::Greeting
        }
    }
}

/// Renders the reply for a chat message using a shared estimator
#[derive(Debug, Clone)]
pub struct CommandResponder {
    estimator: YieldEstimator,
}

impl CommandResponder {
    pub fn new(estimator: YieldEstimator) -> Self {
        Self { estimator }
    }

    /// Produce the reply text for a raw incoming message. Total: every
    /// message maps to exactly one of the five reply shapes.
    pub fn reply(&self, text: &str) -> String {
        match BotCommand::parse(text) {
            BotCommand::Yield {
                district,
                area_token,
                soil_token,
            } => self.reply_yield(&district, &area_token, &soil_token),
            BotCommand::YieldUsage => REPLY_USAGE.to_string(),
            BotCommand::Help => REPLY_HELP.to_string(),
            BotCommand::Greeting => REPLY_GREETING.to_string(),
        }
    }

    fn reply_yield(&self, district: &str, area_token: &str, soil_token: &str) -> String {
        let soil: SoilType = match soil_token.parse() {
            Ok(soil) => soil,
            Err(_) => return REPLY_INVALID_INPUT.to_string(),
        };

        let area = match parse_area_token(area_token) {
            Some(area) if area.value > Decimal::ZERO => area,
            _ => return REPLY_INVALID_INPUT.to_string(),
        };

        match self.estimator.estimate(soil, district, area) {
            Ok(estimate) => format!("Predicted yield: {} quintals", estimate.quintals),
            Err(_) => REPLY_INVALID_INPUT.to_string(),
        }
    }
}

/// Parse an area token like "5", "2.5" or "3hectares". The numeric prefix is
/// the value; a "hectare" substring anywhere in the token selects hectares,
/// acres otherwise.
pub fn parse_area_token(token: &str) -> Option<AreaMeasurement> {
    let unit = if token.contains("hectare") {
        AreaUnit::Hectares
    } else {
        AreaUnit::Acres
    };

    let digits_end = token
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    let value: Decimal = token[..digits_end].parse().ok()?;
    Some(AreaMeasurement { value, unit })
}
