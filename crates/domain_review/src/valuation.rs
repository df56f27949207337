//! Total-loss valuation
//!
//! When a vehicle is a total loss, the repair estimate is superseded by the
//! vehicle replacement value. These helpers keep `total_estimated_cost`
//! consistent with that rule no matter which path wrote the assessment.

use rust_decimal::Decimal;

use crate::assessment::AiAssessment;

/// Toggles the total-loss flag and recomputes the displayed total.
///
/// Turning the flag on picks the vehicle value, falling back to a previously
/// recorded total-loss value, then to the damage sum. Turning it off clears
/// the total-loss value and reason and reverts the total to the damage sum.
/// Zero values never win the fallback chain.
pub fn toggle_total_loss(
    assessment: &mut AiAssessment,
    total_loss: bool,
    vehicle_value: Option<Decimal>,
) {
    if total_loss {
        let value = non_zero(vehicle_value)
            .or_else(|| non_zero(assessment.total_loss_value))
            .unwrap_or_else(|| assessment.damage_total());
        assessment.is_total_loss = Some(true);
        assessment.total_loss_value = Some(value);
        assessment.total_estimated_cost = value;
    } else {
        assessment.is_total_loss = Some(false);
        assessment.total_loss_value = None;
        assessment.total_loss_reason = None;
        assessment.total_estimated_cost = assessment.damage_total();
    }
}

/// The cost figure shown for an assessment.
pub fn displayed_total_cost(assessment: &AiAssessment, vehicle_value: Option<Decimal>) -> Decimal {
    if assessment.is_total_loss() {
        non_zero(assessment.total_loss_value)
            .or_else(|| non_zero(vehicle_value))
            .or_else(|| non_zero(Some(assessment.total_estimated_cost)))
            .unwrap_or(Decimal::ZERO)
    } else {
        non_zero(Some(assessment.total_estimated_cost))
            .unwrap_or_else(|| assessment.damage_total())
    }
}

/// Re-establishes the cost invariant on an incoming assessment:
/// the total equals the damage sum, unless the vehicle is a total loss,
/// in which case it equals the total-loss value.
pub fn normalize(assessment: &mut AiAssessment, vehicle_value: Option<Decimal>) {
    if assessment.is_total_loss() {
        let value = non_zero(assessment.total_loss_value)
            .or_else(|| non_zero(vehicle_value))
            .unwrap_or_else(|| assessment.damage_total());
        assessment.total_loss_value = Some(value);
        assessment.total_estimated_cost = value;
    } else {
        assessment.total_loss_value = None;
        assessment.total_loss_reason = None;
        assessment.total_estimated_cost = assessment.damage_total();
    }
}

fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}
