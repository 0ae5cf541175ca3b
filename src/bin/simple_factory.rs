// Simple Factory sample: create products by tag, then try an unknown tag.

use pattern_samples::factory::SimpleFactory;
use pattern_samples::narrate::{self, say};
use pattern_samples::DemoConfig;

fn main() {
    narrate::init_tracing();
    let config = DemoConfig::discover_or_default();
    narrate::apply_output(&config.output);

    create_and_operate("A");
    create_and_operate("B");
    narrate::blank();
    create_and_operate("C");
}

fn create_and_operate(tag: &str) {
    match SimpleFactory::create(tag) {
        Ok(product) => say("Product", product.operate()),
        Err(err) => say("Factory", format!("rejected: {err}")),
    }
}
