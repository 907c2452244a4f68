//! Typed logic modules and the graph they form.
//!
//! The graph is structurally fixed after [`Network::parse`]; only per-pulse
//! module state (`is_on`, conjunction memory) mutates during simulation.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};

/// A boolean signal sent along a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    Low,
    High,
}

/// Per-variant behavior and state of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleKind {
    /// Stateless; forwards whatever pulse it receives, unchanged.
    Broadcaster,
    /// Initially off. Ignores high pulses; a low pulse toggles the state and
    /// emits it (`on` maps to high).
    FlipFlop { is_on: bool },
    /// Remembers the last pulse from each parent (default low) and emits low
    /// iff every parent's remembered pulse is high.
    Conjunction {
        parents: Vec<String>,
        memory: HashMap<String, Pulse>,
    },
}

/// A named node with its outgoing connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub connections: Vec<String>,
    pub kind: ModuleKind,
}

impl Module {
    /// Process one incoming pulse; returns the pulse to fan out, if any.
    pub fn receive(&mut self, pulse: Pulse, origin: &str) -> Option<Pulse> {
        match &mut self.kind {
            ModuleKind::Broadcaster => Some(pulse),
            ModuleKind::FlipFlop { is_on } => match pulse {
                Pulse::High => None,
                Pulse::Low => {
                    *is_on = !*is_on;
                    Some(if *is_on { Pulse::High } else { Pulse::Low })
                }
            },
            ModuleKind::Conjunction { parents, memory } => {
                memory.insert(origin.to_string(), pulse);
                let all_high = parents.iter().all(|parent| {
                    memory.get(parent).copied().unwrap_or(Pulse::Low) == Pulse::High
                });
                Some(if all_high { Pulse::Low } else { Pulse::High })
            }
        }
    }
}

/// The module graph, keyed by module name.
///
/// A connection name that never appears on the left-hand side of a definition
/// is a valid sink: deliveries to it are counted but propagate nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub modules: HashMap<String, Module>,
}

impl Network {
    /// Parse one module definition per line and wire conjunction parents.
    ///
    /// Line format: `[prefix]name -> dest1, dest2, …` where `%` marks a
    /// flip-flop, `&` a conjunction, and the bare name `broadcaster` the
    /// broadcaster. Any other unprefixed name is a parse error.
    pub fn parse(text: &str) -> Result<Self> {
        let mut modules = HashMap::new();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            let module = parse_module(line)?;
            modules.insert(module.name.clone(), module);
        }
        wire_conjunction_parents(&mut modules);
        Ok(Self { modules })
    }
}

fn parse_module(line: &str) -> Result<Module> {
    let (name_part, connection_part) = line
        .split_once(" -> ")
        .with_context(|| format!("malformed module line '{}'", line))?;
    let connections: Vec<String> = connection_part.split(", ").map(str::to_string).collect();
    let (name, kind) = if name_part == "broadcaster" {
        (name_part.to_string(), ModuleKind::Broadcaster)
    } else if let Some(name) = name_part.strip_prefix('%') {
        (name.to_string(), ModuleKind::FlipFlop { is_on: false })
    } else if let Some(name) = name_part.strip_prefix('&') {
        (name.to_string(), ModuleKind::Conjunction {
            parents: Vec::new(),
            memory: HashMap::new(),
        })
    } else {
        bail!("unknown module type '{}'", name_part);
    };
    Ok(Module {
        name,
        connections,
        kind,
    })
}

/// A conjunction's parents are every module whose connections name it.
///
/// Computed once at build time; receipt order during simulation updates the
/// memory, never the parent set.
fn wire_conjunction_parents(modules: &mut HashMap<String, Module>) {
    let conjunctions: Vec<String> = modules
        .values()
        .filter(|module| matches!(module.kind, ModuleKind::Conjunction { .. }))
        .map(|module| module.name.clone())
        .collect();
    for name in conjunctions {
        let mut parents: Vec<String> = modules
            .values()
            .filter(|module| module.connections.iter().any(|conn| *conn == name))
            .map(|module| module.name.clone())
            .collect();
        parents.sort();
        if let Some(module) = modules.get_mut(&name)
            && let ModuleKind::Conjunction { parents: slot, .. } = &mut module.kind
        {
            *slot = parents;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_module_kinds_and_connections() {
        let network =
            Network::parse("broadcaster -> a, b\n%a -> con\n&con -> output\n").expect("parse");
        assert_eq!(network.modules.len(), 3);

        let broadcaster = &network.modules["broadcaster"];
        assert_eq!(broadcaster.kind, ModuleKind::Broadcaster);
        assert_eq!(broadcaster.connections, vec!["a", "b"]);

        assert_eq!(
            network.modules["a"].kind,
            ModuleKind::FlipFlop { is_on: false }
        );
        assert!(matches!(
            network.modules["con"].kind,
            ModuleKind::Conjunction { .. }
        ));
    }

    #[test]
    fn conjunction_parents_are_wired_at_build_time() {
        let network =
            Network::parse("broadcaster -> a\n%a -> con\n%b -> con\n&con -> a\n").expect("parse");
        let ModuleKind::Conjunction { parents, .. } = &network.modules["con"].kind else {
            panic!("con must be a conjunction");
        };
        assert_eq!(parents, &["a", "b"]);
    }

    #[test]
    fn unknown_prefix_is_a_parse_error() {
        let err = Network::parse("broadcaster -> a\n*a -> b\n").expect_err("bad prefix");
        assert!(err.to_string().contains("unknown module type '*a'"));
    }

    #[test]
    fn missing_arrow_is_a_parse_error() {
        let err = Network::parse("broadcaster a, b\n").expect_err("no arrow");
        assert!(err.to_string().contains("malformed module line"));
    }

    #[test]
    fn flip_flop_state_tracks_delivered_low_pulse_parity() {
        let mut flip = Module {
            name: "a".to_string(),
            connections: Vec::new(),
            kind: ModuleKind::FlipFlop { is_on: false },
        };
        for n in 1..=5u32 {
            let emitted = flip.receive(Pulse::Low, "broadcaster").expect("emission");
            let expect_on = n % 2 == 1;
            assert_eq!(flip.kind, ModuleKind::FlipFlop { is_on: expect_on });
            assert_eq!(
                emitted,
                if expect_on { Pulse::High } else { Pulse::Low }
            );
        }
    }

    #[test]
    fn flip_flop_ignores_high_pulses() {
        let mut flip = Module {
            name: "a".to_string(),
            connections: Vec::new(),
            kind: ModuleKind::FlipFlop { is_on: false },
        };
        assert_eq!(flip.receive(Pulse::High, "broadcaster"), None);
        assert_eq!(flip.kind, ModuleKind::FlipFlop { is_on: false });
    }

    #[test]
    fn conjunction_emits_low_only_when_all_parents_high() {
        let mut con = Module {
            name: "con".to_string(),
            connections: Vec::new(),
            kind: ModuleKind::Conjunction {
                parents: vec!["a".to_string(), "b".to_string()],
                memory: HashMap::new(),
            },
        };
        // b is unheard-from and defaults to low.
        assert_eq!(con.receive(Pulse::High, "a"), Some(Pulse::High));
        assert_eq!(con.receive(Pulse::High, "b"), Some(Pulse::Low));
        assert_eq!(con.receive(Pulse::Low, "a"), Some(Pulse::High));
        assert_eq!(con.receive(Pulse::High, "a"), Some(Pulse::Low));
    }
}
