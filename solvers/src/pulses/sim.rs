//! Breadth-first pulse propagation and traffic counting.

use std::collections::VecDeque;

use anyhow::{Context, Result};

use crate::pulses::network::{Network, Pulse};

/// Accumulated pulse traffic across button presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PulseCounts {
    pub low: u64,
    pub high: u64,
}

impl PulseCounts {
    fn record(&mut self, pulse: Pulse) {
        match pulse {
            Pulse::Low => self.low += 1,
            Pulse::High => self.high += 1,
        }
    }

    /// The puzzle answer: product of the total low and high counts.
    pub fn product(&self) -> u64 {
        self.low * self.high
    }
}

/// Simulate `presses` button presses and return the accumulated counts.
///
/// Each press counts one synthetic low pulse for the button itself (never
/// delivered to a module), hands a low pulse to `broadcaster`, and seeds a
/// FIFO queue with one delivery per broadcaster connection. The queue drains
/// to exhaustion before the next press: deliveries are counted in receipt
/// order, unknown targets are sinks (counted, never propagated), and each
/// emission fans out one delivery per connection carrying the emitter's name
/// as origin. Counts accumulate across presses; they are never reset.
pub fn run_cycles(network: &mut Network, presses: u64) -> Result<PulseCounts> {
    let mut counts = PulseCounts::default();
    let mut queue: VecDeque<(String, Pulse, String)> = VecDeque::new();
    for _ in 0..presses {
        // The button press is itself a low pulse.
        counts.record(Pulse::Low);

        let broadcaster = network
            .modules
            .get_mut("broadcaster")
            .context("network has no broadcaster module")?;
        let seed = broadcaster
            .receive(Pulse::Low, "button")
            .context("broadcaster emitted nothing for the button pulse")?;
        for connection in &broadcaster.connections {
            queue.push_back((connection.clone(), seed, "broadcaster".to_string()));
        }

        while let Some((target, pulse, origin)) = queue.pop_front() {
            counts.record(pulse);
            let Some(module) = network.modules.get_mut(&target) else {
                continue; // sink: counted, nothing to propagate
            };
            if let Some(emitted) = module.receive(pulse, &origin) {
                for connection in &module.connections {
                    queue.push_back((connection.clone(), emitted, target.clone()));
                }
            }
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_press_counts_toy_network_traffic() {
        // broadcaster low -> a toggles on, high -> inv inverts, low -> a
        // toggles off, low -> inv inverts, high -> a (ignored).
        let mut network = Network::parse("broadcaster -> a\n%a -> inv\n&inv -> a\n").expect("parse");
        let counts = run_cycles(&mut network, 1).expect("simulate");
        assert_eq!(counts, PulseCounts { low: 4, high: 2 });
        assert_eq!(counts.product(), 8);
    }

    #[test]
    fn counts_accumulate_across_presses() {
        let text = "broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a\n";

        let mut network = Network::parse(text).expect("parse");
        let one = run_cycles(&mut network, 1).expect("simulate");
        assert_eq!(one, PulseCounts { low: 8, high: 4 });

        // This network returns to its initial state after every press, so
        // the totals scale linearly.
        let mut network = Network::parse(text).expect("parse");
        let thousand = run_cycles(&mut network, 1000).expect("simulate");
        assert_eq!(thousand, PulseCounts {
            low: 8000,
            high: 4000
        });
        assert_eq!(thousand.product(), 32_000_000);
    }

    #[test]
    fn interesting_network_with_multi_press_period() {
        let text = "broadcaster -> a\n%a -> inv, con\n&inv -> b\n%b -> con\n&con -> output\n";
        let mut network = Network::parse(text).expect("parse");
        let counts = run_cycles(&mut network, 1000).expect("simulate");
        assert_eq!(counts, PulseCounts {
            low: 4250,
            high: 2750
        });
        assert_eq!(counts.product(), 11_687_500);
    }

    #[test]
    fn deliveries_to_unknown_sinks_are_counted() {
        // `out` is never defined; its two deliveries still count.
        let mut network = Network::parse("broadcaster -> out, out\n").expect("parse");
        let counts = run_cycles(&mut network, 1).expect("simulate");
        assert_eq!(counts, PulseCounts { low: 3, high: 0 });
    }

    #[test]
    fn missing_broadcaster_is_an_error() {
        let mut network = Network::parse("%a -> b\n").expect("parse");
        let err = run_cycles(&mut network, 1).expect_err("no broadcaster");
        assert!(err.to_string().contains("no broadcaster module"));
    }

    #[test]
    fn zero_presses_counts_nothing() {
        let mut network = Network::parse("broadcaster -> a\n%a -> b\n").expect("parse");
        let counts = run_cycles(&mut network, 0).expect("simulate");
        assert_eq!(counts, PulseCounts::default());
    }
}
