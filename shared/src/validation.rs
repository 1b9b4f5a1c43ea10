//! Validation utilities for AgriPay entry forms
//!
//! The ledger trusts its inputs; these checks run when records are entered.

use rust_decimal::Decimal;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::models::MarketSettings;

/// Domain used for the technical e-mail behind username accounts
pub const ACCOUNT_EMAIL_DOMAIN: &str = "agripay-manager.pro";

/// Cocoa pay ratio bounds offered by the settings screen
pub const MIN_CACAO_PAY_RATIO: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
pub const MAX_CACAO_PAY_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

// ============================================================================
// Ledger Entry Validations
// ============================================================================

/// Validate a harvest weight in kg
pub fn validate_weight(weight: Decimal) -> Result<(), &'static str> {
    if weight <= Decimal::ZERO {
        return Err("Le poids doit être supérieur à 0.");
    }
    Ok(())
}

/// Validate a monetary amount (task fee or advance)
pub fn validate_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount <= Decimal::ZERO {
        return Err("Le montant doit être supérieur à 0.");
    }
    if !amount.fract().is_zero() {
        return Err("Le montant doit être un nombre entier de francs.");
    }
    Ok(())
}

/// Validate market settings before they are saved
pub fn validate_market_settings(settings: &MarketSettings) -> Result<(), &'static str> {
    let rates = [
        settings.pay_rate_hevea,
        settings.pay_rate_cacao,
        settings.market_price_hevea,
        settings.market_price_cacao,
    ];
    if rates.iter().any(|r| *r < Decimal::ZERO) {
        return Err("Les tarifs et les prix du marché ne peuvent pas être négatifs.");
    }
    if settings.cacao_pay_ratio < MIN_CACAO_PAY_RATIO
        || settings.cacao_pay_ratio > MAX_CACAO_PAY_RATIO
    {
        return Err("La part du cacao doit être comprise entre 0,1 et 0,5.");
    }
    Ok(())
}

// ============================================================================
// Account Validations
// ============================================================================

/// Reduce a free-form username to the characters allowed in the technical
/// e-mail: lowercase ASCII letters and digits, accents stripped.
pub fn sanitize_username(username: &str) -> Result<String, &'static str> {
    let clean: String = username
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if clean.len() < 3 {
        return Err("Le nom d'utilisateur est trop court ou contient des caractères interdits.");
    }
    Ok(clean)
}

/// Technical e-mail the auth provider stores for a username account
pub fn technical_email_for(username: &str) -> Result<String, &'static str> {
    let clean = sanitize_username(username)?;
    Ok(format!("{}@{}", clean, ACCOUNT_EMAIL_DOMAIN))
}

// ============================================================================
// Côte d'Ivoire-Specific Validations
// ============================================================================

/// Validate an Ivorian phone number
/// Accepts: 0700000000, 07 00 00 00 00, +2250700000000
pub fn validate_ivorian_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // National format: 10 digits since the 2021 renumbering
    if digits.len() == 10 {
        return Ok(());
    }
    // International format with country code 225
    if digits.len() == 13 && digits.starts_with("225") {
        return Ok(());
    }

    Err("Numéro de téléphone ivoirien invalide.")
}
