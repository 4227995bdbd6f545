//! Input validation helpers
//!
//! Boundary checks for form payloads. The pricing core never fails; these
//! run before it so the caller can show a field-level message instead of
//! silently zeroed amounts.

use shared::error::ErrorCode;
use shared::models::{BlockRequest, DiscountMode, InvoiceRequest, PriceSource};

use crate::utils::{AppError, AppResult};

// ── Limits ──────────────────────────────────────────────────────────

/// Upper bound for any single monetary input (per night, per day, advance, flat discount)
pub const MAX_PRICE: f64 = 10_000_000.0;

/// Rate plan codes and extra service names
pub const MAX_NAME_LEN: usize = 200;

/// Block reasons
pub const MAX_NOTE_LEN: usize = 500;

/// Percent discounts and tax rates
pub const MAX_PERCENT: f64 = 100.0;

// ── Field helpers ───────────────────────────────────────────────────

/// Require a finite amount in `[0, max]`
pub fn require_finite(value: f64, field: &str, max: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::invalid_amount(field, value));
    }
    if value > max {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} exceeds maximum allowed value ({max})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

// ── Payload validation ──────────────────────────────────────────────

/// Validate an invoice form before pricing it
pub fn validate_invoice_request(request: &InvoiceRequest) -> AppResult<()> {
    let stay = &request.stay;
    if stay.check_out < stay.check_in {
        return Err(AppError::with_message(
            ErrorCode::InvalidStayDates,
            format!(
                "Check-out {} is before check-in {}",
                stay.check_out, stay.check_in
            ),
        ));
    }
    let nights = stay.nights();

    match &request.price_source {
        PriceSource::Plan(plan) => {
            validate_required_text(&plan.code, "rate plan code", MAX_NAME_LEN)?;
            require_finite(plan.price_per_night, "price_per_night", MAX_PRICE)?;
        }
        PriceSource::Special(special) => {
            require_finite(special.final_price_per_night, "final_price_per_night", MAX_PRICE)?;
        }
    }

    for service in request.extras.as_slice() {
        validate_required_text(&service.name, "service name", MAX_NAME_LEN)?;
        require_finite(service.price_per_day, "price_per_day", MAX_PRICE)?;
        if let Some(day) = service
            .applicable_days
            .iter()
            .find(|d| !(1..=nights).contains(*d))
        {
            return Err(AppError::with_message(
                ErrorCode::InvalidServiceDay,
                format!(
                    "{}: day {day} is outside the stay (1..={nights})",
                    service.name
                ),
            )
            .with_detail("day", *day));
        }
    }

    if let Some(discount) = &request.discount {
        let max = match discount.mode {
            DiscountMode::Percent => MAX_PERCENT,
            DiscountMode::Flat => MAX_PRICE,
        };
        require_finite(discount.value, "discount", max).map_err(|e| AppError {
            code: ErrorCode::InvalidDiscount,
            ..e
        })?;
    }

    if let Some(tax) = &request.tax {
        require_finite(tax.rate_percent, "tax rate", MAX_PERCENT).map_err(|e| AppError {
            code: ErrorCode::InvalidTaxRate,
            ..e
        })?;
    }
    require_finite(request.advance_paid, "advance_paid", MAX_PRICE)?;

    Ok(())
}

/// Validate a bulk block request before checking it for conflicts
pub fn validate_block_request(request: &BlockRequest) -> AppResult<()> {
    if request.room_ids.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyRoomSelection));
    }
    if let Some(id) = request.room_ids.iter().find(|id| id.trim().is_empty()) {
        return Err(AppError::with_message(
            ErrorCode::EmptyRoomSelection,
            format!("Blank room id in selection: {id:?}"),
        ));
    }
    if request.check_out <= request.check_in {
        return Err(AppError::with_message(
            ErrorCode::InvalidBlockRange,
            format!(
                "Block end {} must be after start {}",
                request.check_out, request.check_in
            ),
        ));
    }
    if request.reason.len() > MAX_NOTE_LEN {
        return Err(AppError::validation(format!(
            "reason is too long ({} chars, max {MAX_NOTE_LEN})",
            request.reason.len()
        )));
    }
    Ok(())
}

/// Reject a calendar window without any day
pub fn validate_window_days(days: u32) -> AppResult<u32> {
    if days == 0 {
        return Err(AppError::new(ErrorCode::InvalidCalendarWindow).with_detail("days", days));
    }
    Ok(days)
}
