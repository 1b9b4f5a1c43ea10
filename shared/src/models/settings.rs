//! Market settings singleton

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CropType;

/// Current pay rates and market prices.
///
/// A single configuration record, not historized: harvests keep the rate that
/// was current when they were entered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketSettings {
    /// Rubber pay rate per kg (FCFA)
    pub pay_rate_hevea: Decimal,
    /// Cocoa pay rate per kg (FCFA); zero means "derive from the pay ratio"
    pub pay_rate_cacao: Decimal,
    pub market_price_hevea: Decimal,
    pub market_price_cacao: Decimal,
    /// Share of the cocoa market price paid to the worker
    pub cacao_pay_ratio: Decimal,
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            pay_rate_hevea: Decimal::from(75),
            pay_rate_cacao: Decimal::ZERO,
            market_price_hevea: Decimal::from(360),
            market_price_cacao: Decimal::from(2800),
            cacao_pay_ratio: Decimal::new(3333, 4),
        }
    }
}

impl MarketSettings {
    /// Rate per kg to prefill on a new harvest of `crop`.
    ///
    /// Returns `None` for categories that are not paid by weight.
    pub fn pay_rate_for(&self, crop: CropType) -> Option<Decimal> {
        match crop {
            CropType::Hevea => Some(self.pay_rate_hevea),
            CropType::Cacao if self.pay_rate_cacao > Decimal::ZERO => Some(self.pay_rate_cacao),
            CropType::Cacao => Some(self.market_price_cacao * self.cacao_pay_ratio),
            CropType::Laborer | CropType::Contract | CropType::Manager => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = MarketSettings::default();
        assert_eq!(settings.pay_rate_hevea, Decimal::from(75));
        assert_eq!(settings.cacao_pay_ratio, Decimal::new(3333, 4));
    }

    #[test]
    fn test_hevea_pay_rate() {
        let settings = MarketSettings::default();
        assert_eq!(settings.pay_rate_for(CropType::Hevea), Some(Decimal::from(75)));
    }

    #[test]
    fn test_cacao_pay_rate_from_ratio() {
        let settings = MarketSettings::default();
        // 2800 * 0.3333
        assert_eq!(
            settings.pay_rate_for(CropType::Cacao),
            Some(Decimal::new(93324, 2))
        );
    }

    #[test]
    fn test_explicit_cacao_pay_rate_wins() {
        let settings = MarketSettings {
            pay_rate_cacao: Decimal::from(1000),
            ..MarketSettings::default()
        };
        assert_eq!(settings.pay_rate_for(CropType::Cacao), Some(Decimal::from(1000)));
    }

    #[test]
    fn test_task_paid_categories_have_no_rate() {
        let settings = MarketSettings::default();
        assert_eq!(settings.pay_rate_for(CropType::Laborer), None);
        assert_eq!(settings.pay_rate_for(CropType::Manager), None);
    }
}
