//! Dice notation parser
//!
//! Notation is a `+`-separated list of terms with whitespace ignored:
//! - `NdF` or `dF`: N dice (default 1) with F faces each
//! - an integer: flat modifier, may be negative (`2d6+-1`)
//!
//! A zero or negative count (`0d6`, `-1d6`) contributes no dice. Numbers are
//! plain decimal: digit separators such as `1_0d6` are rejected.

use crate::die::Die;
use crate::roll::Roll;
use crate::ParseError;

/// Upper bound on the number of dice a single notation may expand to
pub const MAX_DICE: usize = 10_000;

/// Parse a full roll notation into dice and a summed modifier
pub(crate) fn parse_roll(notation: &str) -> Result<Roll, ParseError> {
    let compact: String = notation.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut dice = Vec::new();
    let mut modifier: i64 = 0;

    for term in compact.split('+') {
        if term.is_empty() {
            return Err(ParseError::EmptyTerm);
        }

        if term.contains('d') {
            let (count, die) = parse_dice_term(term)?;
            if count > MAX_DICE - dice.len() {
                return Err(ParseError::TooManyDice {
                    term: term.to_string(),
                    limit: MAX_DICE,
                });
            }
            dice.extend(std::iter::repeat(die).take(count));
        } else {
            let value: i64 = term
                .parse()
                .map_err(|_| ParseError::InvalidModifier(term.to_string()))?;
            modifier = modifier
                .checked_add(value)
                .ok_or_else(|| ParseError::InvalidModifier(term.to_string()))?;
        }
    }

    Ok(Roll::new(dice, modifier))
}

/// Parse a single `[N]dF` term into a dice count and the die to repeat
fn parse_dice_term(term: &str) -> Result<(usize, Die), ParseError> {
    let mut parts = term.split('d');
    let (count_str, faces_str) = match (parts.next(), parts.next(), parts.next()) {
        (Some(count), Some(faces), None) => (count, faces),
        _ => return Err(ParseError::MultipleDice(term.to_string())),
    };

    // "d8" means "1d8"
    let count: i64 = if count_str.is_empty() {
        1
    } else {
        count_str
            .parse()
            .map_err(|_| ParseError::InvalidCount(term.to_string()))?
    };
    let count = usize::try_from(count.max(0)).map_err(|_| ParseError::TooManyDice {
        term: term.to_string(),
        limit: MAX_DICE,
    })?;

    let die = faces_str
        .parse::<u32>()
        .ok()
        .and_then(|faces| Die::new(faces).ok())
        .ok_or_else(|| ParseError::InvalidFaces(term.to_string()))?;

    Ok((count, die))
}
