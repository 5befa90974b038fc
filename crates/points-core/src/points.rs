//! # Points Calculation
//!
//! Scores a [`Receipt`] with seven independent, additive rules.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                     Points                                     │
//! │  ─  ───────────────────────  ─────────────────────────────────────────  │
//! │  1  Retailer name            +1 per letter or number character          │
//! │  2  Round-dollar total       +50 if (total × 100) % 10 == 0             │
//! │  3  Quarter-multiple total   +25 if total % 0.25 == 0                   │
//! │  4  Item pairs               +5 per two items                           │
//! │  5  Description length       +ceil(price × 0.2) per item whose trimmed  │
//! │                              description length is a multiple of 3      │
//! │  6  Odd purchase day         +6 if day of month is odd                  │
//! │  7  Afternoon window         +10 if 14:01 ≤ time < 16:00                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Floating Point
//! Totals and prices are `f64` and rules 2, 3 and 5 use float `%` and
//! `ceil`. Receipts near a threshold score exactly as an f64 evaluation of
//! these formulas does; `"1.10"` does not earn rule 2 because
//! `1.1 * 100.0 == 110.00000000000001`.
//!
//! ## Malformed Fields
//! A field that does not parse takes its zero value for the rule that reads
//! it (see [`crate::parse`]). An unparseable total is `0.0` and so earns
//! rules 2 and 3; an unparseable date is `0001-01-01` and so earns rule 6.
//! `"NaN"` and `"inf"` do parse, and earn neither rule 2 nor rule 3.

use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::parse::{clock_or_midnight, decimal_or_zero, purchase_day};
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// Rule 2 bonus.
pub const ROUND_DOLLAR_BONUS: u64 = 50;

/// Rule 3 bonus.
pub const QUARTER_MULTIPLE_BONUS: u64 = 25;

/// Rule 4 bonus per two items.
pub const ITEM_PAIR_BONUS: u64 = 5;

/// Rule 5 price multiplier.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Rule 6 bonus.
pub const ODD_DAY_BONUS: u64 = 6;

/// Rule 7 bonus.
pub const AFTERNOON_BONUS: u64 = 10;

/// Rule 7 window, `[start, end)` hours.
pub const AFTERNOON_START_HOUR: u32 = 14;
pub const AFTERNOON_END_HOUR: u32 = 16;

// =============================================================================
// Points Breakdown
// =============================================================================

/// Per-rule contributions for one receipt.
///
/// ## Example
/// ```rust
/// use points_core::{Item, PointsBreakdown, Receipt};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     items: vec![Item::new("Emils Cheese Pizza", "12.25")],
///     total: "12.25".to_string(),
/// };
///
/// let breakdown = PointsBreakdown::of(&receipt);
/// assert_eq!(breakdown.retailer_name, 6);
/// assert_eq!(breakdown.item_descriptions, 3);
/// assert_eq!(breakdown.odd_purchase_day, 6);
/// assert_eq!(breakdown.total(), 6 + 25 + 3 + 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_window: u64,
}

impl PointsBreakdown {
    /// Evaluates every rule against `receipt`.
    pub fn of(receipt: &Receipt) -> Self {
        let total = decimal_or_zero("total", &receipt.total);

        let breakdown = PointsBreakdown {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_dollar_total: round_dollar_points(total),
            quarter_multiple_total: quarter_multiple_points(total),
            item_pairs: item_pair_points(receipt.item_count()),
            item_descriptions: receipt
                .items
                .iter()
                .map(item_description_points)
                .fold(0, u64::saturating_add),
            odd_purchase_day: odd_day_points(&receipt.purchase_date),
            afternoon_window: afternoon_points(&receipt.purchase_time),
        };

        debug!(?breakdown, "Scored receipt");
        breakdown
    }

    /// Sum of all rule contributions.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_window,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes the points awarded for a receipt.
///
/// Pure and deterministic; never fails.
pub fn compute_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::of(receipt).total()
}

// =============================================================================
// Rules
// =============================================================================

/// Rule 1: one point per Unicode letter or number in the retailer name.
///
/// Counts characters in the general categories `L*` and `N*`. Combining
/// marks (`M*`) do not count, even where [`char::is_alphanumeric`] would.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| is_letter_or_number(*c)).count() as u64
}

fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Rule 2: the total has no cents, tested as `(total * 100) % 10 == 0`.
///
/// This only checks the tenths digit of the cents; `"35.10"` qualifies.
pub fn round_dollar_points(total: f64) -> u64 {
    if (total * 100.0) % 10.0 == 0.0 {
        ROUND_DOLLAR_BONUS
    } else {
        0
    }
}

/// Rule 3: the total is a multiple of `0.25`.
pub fn quarter_multiple_points(total: f64) -> u64 {
    if total % 0.25 == 0.0 {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

/// Rule 4: five points for every two items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_BONUS
}

/// Rule 5 for a single item.
///
/// Only space characters are trimmed and the length is counted in bytes.
/// A negative, NaN or infinite price contributes nothing.
pub fn item_description_points(item: &Item) -> u64 {
    if item.short_description.trim_matches(' ').len() % 3 != 0 {
        return 0;
    }

    let price = decimal_or_zero("price", &item.price);
    let bonus = (price * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    if bonus.is_finite() && bonus > 0.0 {
        // Saturating float-to-int cast.
        bonus as u64
    } else {
        0
    }
}

/// Rule 6: the purchase day of month is odd.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    if purchase_day(purchase_date) % 2 != 0 {
        ODD_DAY_BONUS
    } else {
        0
    }
}

/// Rule 7: purchased after 2:00pm and before 4:00pm.
///
/// 14:00 exactly does not qualify; neither do 15:00 and other on-the-hour
/// times, since the minute must be non-zero.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    let (hour, minute) = clock_or_midnight(purchase_time);
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) && minute > 0 {
        AFTERNOON_BONUS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
