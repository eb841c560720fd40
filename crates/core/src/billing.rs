//! Invoice status enumeration, money validation, and balance arithmetic.
//!
//! Provides the status constants, amount checks, the overpayment rule,
//! and the derived payment-status calculation used by the invoice
//! summary and report endpoints.

use rust_decimal::Decimal;

use crate::error::CoreError;
use crate::types::Money;

// ---------------------------------------------------------------------------
// Invoice status constants
// ---------------------------------------------------------------------------

/// Invoice has been created but not settled.
pub const STATUS_DRAFT: &str = "draft";

/// Invoice has been settled in full.
pub const STATUS_PAID: &str = "paid";

/// Invoice is past its due date and unsettled.
pub const STATUS_OVERDUE: &str = "overdue";

/// All valid invoice status values. There is no transition graph: any
/// member may be set from any other at update time.
pub const VALID_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PAID, STATUS_OVERDUE];

// ---------------------------------------------------------------------------
// Derived payment status constants
// ---------------------------------------------------------------------------

/// Balance is zero.
pub const PAYMENT_STATUS_PAID: &str = "paid";

/// Some payments recorded, balance still outstanding.
pub const PAYMENT_STATUS_PARTIAL: &str = "partial";

/// No payments recorded against a non-zero amount.
pub const PAYMENT_STATUS_UNPAID: &str = "unpaid";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that `status` is one of the allowed invoice statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate an invoice or package amount: must not be negative.
pub fn validate_amount(amount: Money) -> Result<(), CoreError> {
    if amount < Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "Amount must not be negative, got {amount}"
        )));
    }
    Ok(())
}

/// Validate a payment amount: must be strictly positive.
pub fn validate_payment_amount(amount: Money) -> Result<(), CoreError> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "Payment amount must be greater than zero, got {amount}"
        )));
    }
    Ok(())
}

/// Reject a payment that would push the cumulative total past the
/// invoice amount. Paying an invoice off exactly is allowed.
pub fn check_overpayment(
    invoice_amount: Money,
    total_paid: Money,
    payment: Money,
) -> Result<(), CoreError> {
    let new_total = total_paid + payment;
    if new_total > invoice_amount {
        return Err(CoreError::Validation(format!(
            "Payment of {payment} would bring the total paid to {new_total}, \
             exceeding the invoice amount of {invoice_amount}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Balance arithmetic
// ---------------------------------------------------------------------------

/// Remaining balance on an invoice. With zero payments this equals the
/// invoice amount.
pub fn balance(amount: Money, total_paid: Money) -> Money {
    amount - total_paid
}

/// Derive the payment status of an invoice from its amount and the sum
/// of its payments: `paid` when nothing is outstanding, `partial` when
/// some but not all has been paid, `unpaid` otherwise.
pub fn payment_status(amount: Money, total_paid: Money) -> &'static str {
    if balance(amount, total_paid) == Decimal::ZERO {
        PAYMENT_STATUS_PAID
    } else if total_paid > Decimal::ZERO && total_paid < amount {
        PAYMENT_STATUS_PARTIAL
    } else {
        PAYMENT_STATUS_UNPAID
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
