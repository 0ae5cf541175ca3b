// Strategy sample: the user picks a different payment method each time.

use pattern_samples::narrate::{self, say};
use pattern_samples::strategy::{
    AlipayStrategy, BankCardStrategy, PaymentContext, PaymentStrategy, WeChatPayStrategy,
};
use pattern_samples::DemoConfig;

fn main() {
    narrate::init_tracing();
    let config = DemoConfig::discover_or_default();
    narrate::apply_output(&config.output);

    let mut context = PaymentContext::new(config.payment.currency.as_str());

    if let Err(err) = context.execute_payment(1.0) {
        say("Client", format!("paying before choosing a method fails: {err}"));
        narrate::blank();
    }

    let choices: Vec<(Box<dyn PaymentStrategy>, f64)> = vec![
        (Box::new(AlipayStrategy), 199.99),
        (Box::new(WeChatPayStrategy), 88.50),
        (Box::new(BankCardStrategy), 500.00),
    ];

    for (index, (strategy, amount)) in choices.into_iter().enumerate() {
        if index > 0 {
            narrate::blank();
        }
        say("Client", format!("user chooses {}:", strategy.name()));
        context.set_strategy(strategy);
        if let Err(err) = context.execute_payment(amount) {
            say("Client", format!("payment failed: {err}"));
        }
    }
}
