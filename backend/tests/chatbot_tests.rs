//! Chat command grammar integration tests
//!
//! The chat reply and the HTTP estimation path share one estimator; the
//! reply text must quote exactly the number the HTTP path returns.

use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::catalog::SoilDistrictCatalog;
use shared::command::{
    CommandResponder, REPLY_GREETING, REPLY_HELP, REPLY_INVALID_INPUT, REPLY_USAGE,
};
use shared::estimator::YieldEstimator;
use shared::{AreaMeasurement, AreaUnit, SoilType};

fn estimator() -> YieldEstimator {
    YieldEstimator::new(SoilDistrictCatalog::canonical())
}

fn responder() -> CommandResponder {
    CommandResponder::new(estimator())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn reply_strings_are_stable() {
    let responder = responder();
    assert_eq!(
        responder.reply("help"),
        "Send \"yield <district> <area> <soil>\" to predict yield. Example: yield Lucknow 5 alluvial"
    );
    assert_eq!(
        responder.reply("good morning"),
        "Hi! Send \"help\" for instructions or \"yield\" to predict sugarcane yield."
    );
    assert_eq!(
        responder.reply("yield Lucknow 5"),
        "Please provide district, area, and soil type. Example: yield Lucknow 5 alluvial"
    );
    assert_eq!(
        responder.reply("yield Lucknow 5 granite"),
        "Invalid input. Use: yield <district> <area> <soil> (e.g., yield Lucknow 5 alluvial)"
    );
}

#[test]
fn concrete_yield_replies() {
    let responder = responder();
    assert_eq!(
        responder.reply("yield Lucknow 5 alluvial"),
        "Predicted yield: 518 quintals"
    );
    assert_eq!(
        responder.reply("yield jhansi 2hectares clayey"),
        "Predicted yield: 282 quintals"
    );
}

// ============================================================================
// Property Tests
// ============================================================================

fn any_soil() -> impl Strategy<Value = SoilType> {
    prop::sample::select(SoilType::ALL.to_vec())
}

fn any_district() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Lucknow",
        "Kanpur",
        "Meerut",
        "Bareilly",
        "Moradabad",
        "Aligarh",
        "Saharanpur",
        "Gorakhpur",
        "Faizabad",
        "Jhansi",
    ])
}

proptest! {
    /// Whatever number the estimator computes is the number in the reply,
    /// byte for byte.
    #[test]
    fn chat_reply_quotes_the_estimator(
        soil in any_soil(),
        district in any_district(),
        whole_acres in 1u32..500,
    ) {
        let expected = estimator()
            .estimate(
                soil,
                district,
                AreaMeasurement {
                    value: Decimal::from(whole_acres),
                    unit: AreaUnit::Acres,
                },
            )
            .unwrap();

        let reply = responder().reply(&format!("yield {} {} {}", district, whole_acres, soil.code()));
        prop_assert_eq!(reply, format!("Predicted yield: {} quintals", expected.quintals));
    }

    /// Every message gets exactly one of the five reply shapes.
    #[test]
    fn every_message_gets_a_reply(message in ".{0,60}") {
        let reply = responder().reply(&message);
        let known_shape = reply.starts_with("Predicted yield: ")
            || reply == REPLY_INVALID_INPUT
            || reply == REPLY_USAGE
            || reply == REPLY_HELP
            || reply == REPLY_GREETING;
        prop_assert!(known_shape, "unexpected reply: {}", reply);
    }
}
