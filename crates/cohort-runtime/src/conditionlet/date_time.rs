//! Date/time conditionlet
//!
//! Matches against the evaluation instant (`time.now`). Submitted instants
//! parse as RFC 3339, or as a bare `YYYY-MM-DD` date taken at midnight UTC.

use super::{ensure_operator, required_text, Conditionlet};
use crate::context::{fact, EvaluationContext};
use crate::error::{Result, RuntimeError};
use chrono::{DateTime, NaiveDate, Utc};
use cohort_core::{op, InputDescriptor, Operator, ParameterValues, Value};

/// Conditionlet over the evaluation wall-clock instant
pub struct DateTimeConditionlet {
    operators: Vec<Operator>,
    bound_inputs: Vec<InputDescriptor>,
    range_inputs: Vec<InputDescriptor>,
}

impl DateTimeConditionlet {
    pub const ID: &'static str = "dateTime";

    pub fn new() -> Self {
        Self {
            operators: vec![
                Operator::new(op::BEFORE, "Before"),
                Operator::new(op::AFTER, "After"),
                Operator::new(op::BETWEEN, "Between"),
            ],
            bound_inputs: vec![InputDescriptor::text("instant").required()],
            range_inputs: vec![
                InputDescriptor::text("from").required(),
                InputDescriptor::text("to").required(),
            ],
        }
    }
}

impl Default for DateTimeConditionlet {
    fn default() -> Self {
        Self::new()
    }
}

impl Conditionlet for DateTimeConditionlet {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Date & Time"
    }

    fn operators(&self) -> &[Operator] {
        &self.operators
    }

    fn inputs_for(&self, operator_id: &str) -> Result<&[InputDescriptor]> {
        ensure_operator(Self::ID, &self.operators, operator_id)?;
        if operator_id == op::BETWEEN {
            Ok(&self.range_inputs)
        } else {
            Ok(&self.bound_inputs)
        }
    }

    fn evaluate(
        &self,
        operator_id: &str,
        parameters: &ParameterValues,
        context: &EvaluationContext,
    ) -> Result<bool> {
        ensure_operator(Self::ID, &self.operators, operator_id)?;

        let Some(now) = context
            .fact(fact::TIME_NOW)
            .and_then(Value::as_str)
            .and_then(parse_instant_opt)
        else {
            tracing::debug!("No usable {} fact, date/time condition does not match", fact::TIME_NOW);
            return Ok(false);
        };

        match operator_id {
            op::BEFORE => {
                let bound = parse_instant("instant", required_text(parameters, "instant")?)?;
                Ok(now < bound)
            }
            op::AFTER => {
                let bound = parse_instant("instant", required_text(parameters, "instant")?)?;
                Ok(now > bound)
            }
            op::BETWEEN => {
                // Inclusive on both ends
                let from = parse_instant("from", required_text(parameters, "from")?)?;
                let to = parse_instant("to", required_text(parameters, "to")?)?;
                Ok(now >= from && now <= to)
            }
            _ => unreachable!(),
        }
    }
}

/// Parse a submitted instant, naming the offending field on failure
fn parse_instant(field: &str, raw: &str) -> Result<DateTime<Utc>> {
    parse_instant_opt(raw).ok_or_else(|| RuntimeError::InvalidParameter {
        field: field.to_string(),
        reason: format!("'{}' is not an RFC 3339 instant or YYYY-MM-DD date", raw),
    })
}

fn parse_instant_opt(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
