// Singleton sample: two accesses, one instance.

use pattern_samples::narrate::{self, say};
use pattern_samples::singleton::Singleton;
use pattern_samples::DemoConfig;

fn main() {
    narrate::init_tracing();
    let config = DemoConfig::discover_or_default();
    narrate::apply_output(&config.output);

    let s1 = Singleton::instance();
    let s2 = Singleton::instance();

    say("Client", s1.show_message());
    say("Client", format!("same instance: {}", std::ptr::eq(s1, s2)));
    say(
        "Client",
        format!("constructor ran {} time(s)", Singleton::constructions()),
    );
}
