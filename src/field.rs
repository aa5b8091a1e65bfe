use crate::error::FieldError;
use std::collections::BTreeSet;

pub(crate) type FieldValueType = u32;

/// Set of values accepted by a single cron field.
///
/// `*` alone short-circuits to [`Field::All`]: the universal marker matches every
/// value unconditionally, without materializing the range. Everything else is an
/// explicit set built from lists, ranges and steps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Field {
    All,
    Set(BTreeSet<FieldValueType>),
}

impl Field {
    /// Parses one cron field against its valid `[lo, hi]` range.
    ///
    /// Only plain numeric terms are validated against the bounds; range and step
    /// terms may legally extend outside `[lo, hi]` - out-of-range members are
    /// simply never queried.
    pub(crate) fn parse(input: &str, lo: FieldValueType, hi: FieldValueType) -> Result<Self, FieldError> {
        if input == "*" {
            return Ok(Self::All);
        }

        let mut values = BTreeSet::new();

        for term in input.split(',') {
            if term.contains('/') {
                let parts: Vec<&str> = term.split('/').collect();
                let [base, step] = parts[..] else {
                    return Err(FieldError::InvalidStep(term.to_owned()));
                };

                let step: FieldValueType = match step.parse() {
                    Ok(step) if step > 0 => step,
                    _ => return Err(FieldError::InvalidStep(step.to_owned())),
                };

                let (start, end) = if base == "*" {
                    (lo, hi)
                } else if base.contains('-') {
                    parse_range_bounds(base)?
                } else {
                    (parse_number(base)?, hi)
                };

                values.extend((start..=end).step_by(step as usize));
            } else if term.contains('-') {
                let (start, end) = parse_range_bounds(term)?;
                values.extend(start..=end);
            } else {
                let value = parse_number(term)?;
                if value < lo || value > hi {
                    return Err(FieldError::OutOfRange(value, lo, hi));
                }
                values.insert(value);
            }
        }

        Ok(Self::Set(values))
    }

    /// Membership query: pure, side-effect-free lookup.
    pub(crate) fn has(&self, value: FieldValueType) -> bool {
        match self {
            Self::All => true,
            Self::Set(values) => values.contains(&value),
        }
    }
}

/// Splits an `A-B` term into its bounds; both must be present and numeric.
fn parse_range_bounds(input: &str) -> Result<(FieldValueType, FieldValueType), FieldError> {
    let parts: Vec<&str> = input.split('-').collect();
    let [start, end] = parts[..] else {
        return Err(FieldError::InvalidRange(input.to_owned()));
    };

    if start.is_empty() || end.is_empty() {
        return Err(FieldError::InvalidRange(input.to_owned()));
    }

    Ok((parse_number(start)?, parse_number(end)?))
}

fn parse_number(input: &str) -> Result<FieldValueType, FieldError> {
    input
        .parse()
        .map_err(|_| FieldError::InvalidNumber(input.to_owned()))
}
