// Strategy Pattern - Swappable Payment Methods
// The context holds one boxed strategy at a time and delegates to it.

use crate::narrate::say;
use crate::PatternError;

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub method: &'static str,
    pub amount: f64,
    /// Human-readable confirmation, e.g. `Paid ¥199.99 using Alipay`.
    pub summary: String,
}

pub trait PaymentStrategy {
    fn name(&self) -> &'static str;

    fn pay(&self, amount: f64, currency: &str) -> Payment {
        Payment {
            method: self.name(),
            amount,
            summary: format!("Paid {currency}{amount:.2} using {}", self.name()),
        }
    }
}

pub struct AlipayStrategy;
impl PaymentStrategy for AlipayStrategy {
    fn name(&self) -> &'static str {
        "Alipay"
    }
}

pub struct WeChatPayStrategy;
impl PaymentStrategy for WeChatPayStrategy {
    fn name(&self) -> &'static str {
        "WeChat Pay"
    }
}

pub struct BankCardStrategy;
impl PaymentStrategy for BankCardStrategy {
    fn name(&self) -> &'static str {
        "bank card"
    }
}

pub struct PaymentContext {
    strategy: Option<Box<dyn PaymentStrategy>>,
    currency: String,
}

impl PaymentContext {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            strategy: None,
            currency: currency.into(),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        tracing::debug!(strategy = strategy.name(), "switching payment strategy");
        self.strategy = Some(strategy);
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    pub fn execute_payment(&self, amount: f64) -> Result<Payment, PatternError> {
        let strategy = self.strategy.as_ref().ok_or(PatternError::NoStrategy)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(PatternError::InvalidAmount(amount));
        }

        let payment = strategy.pay(amount, &self.currency);
        say("Payment", &payment.summary);
        Ok(payment)
    }
}

impl Default for PaymentContext {
    fn default() -> Self {
        Self::new("¥")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_strategy_is_error() {
        let context = PaymentContext::default();
        assert!(matches!(
            context.execute_payment(10.0),
            Err(PatternError::NoStrategy)
        ));
    }

    #[test]
    fn test_switching_strategies() {
        let mut context = PaymentContext::new("$");

        context.set_strategy(Box::new(AlipayStrategy));
        let first = context.execute_payment(199.99).unwrap();
        assert_eq!(first.method, "Alipay");
        assert_eq!(first.summary, "Paid $199.99 using Alipay");

        context.set_strategy(Box::new(WeChatPayStrategy));
        assert_eq!(context.strategy_name(), Some("WeChat Pay"));
        let second = context.execute_payment(88.5).unwrap();
        assert_eq!(second.summary, "Paid $88.50 using WeChat Pay");

        context.set_strategy(Box::new(BankCardStrategy));
        assert_eq!(context.execute_payment(500.0).unwrap().method, "bank card");
    }

    #[test]
    fn test_invalid_amounts() {
        let mut context = PaymentContext::default();
        context.set_strategy(Box::new(BankCardStrategy));
        assert!(matches!(
            context.execute_payment(-1.0),
            Err(PatternError::InvalidAmount(_))
        ));
        assert!(context.execute_payment(f64::NAN).is_err());
        assert!(context.execute_payment(0.0).is_ok());
    }
}
