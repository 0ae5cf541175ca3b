// Proxy sample: one permitted proxy used twice, one denied proxy in between.

use pattern_samples::narrate::{self, say};
use pattern_samples::proxy::{Proxy, Subject};
use pattern_samples::DemoConfig;

fn client_code(subject: &mut dyn Subject) {
    let _ = subject.request();
}

fn main() {
    narrate::init_tracing();
    let config = DemoConfig::discover_or_default();
    narrate::apply_output(&config.output);
    let format = config.proxy.timestamp_format.as_str();

    say("Client", "running client code through a proxy (access granted):");
    let mut with_access = Proxy::new(true).with_timestamp_format(format);
    client_code(&mut with_access);
    narrate::blank();

    say("Client", "running client code through a proxy (access denied):");
    let mut without_access = Proxy::new(false).with_timestamp_format(format);
    client_code(&mut without_access);
    narrate::blank();

    say(
        "Client",
        "using the granted proxy again (second request, RealSubject is not rebuilt):",
    );
    client_code(&mut with_access);
}
