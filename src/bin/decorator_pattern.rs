// Decorator sample: bare component, one layer, two layers, then the
// chain described by patterns.toml.

use pattern_samples::decorator::{
    build_chain, client_code, ConcreteComponent, ConcreteDecoratorA, ConcreteDecoratorB,
};
use pattern_samples::narrate::{self, say};
use pattern_samples::DemoConfig;

fn main() {
    narrate::init_tracing();
    let config = DemoConfig::discover_or_default();
    narrate::apply_output(&config.output);

    say("Client", "I have a simple component:");
    let simple = ConcreteComponent;
    client_code(&simple);
    narrate::blank();

    say("Client", "now I have a decorated component:");
    let decorator_a = ConcreteDecoratorA::new(simple);
    client_code(&decorator_a);
    narrate::blank();

    // Decorators can wrap other decorators as well as concrete components.
    say("Client", "now I have a doubly decorated component:");
    let decorator_b = ConcreteDecoratorB::new(decorator_a);
    client_code(&decorator_b);
    narrate::blank();

    say("Client", "calling the method only ConcreteDecoratorB has:");
    say("Client", format!("Result: {}", decorator_b.added_behavior()));
    narrate::blank();

    let layers = config.decorator.layers_or_default();
    let names: Vec<String> = layers.iter().map(ToString::to_string).collect();
    say("Client", format!("configured chain [{}]:", names.join(", ")));
    let chain = build_chain(Box::new(ConcreteComponent), &layers);
    client_code(chain.as_ref());
}
