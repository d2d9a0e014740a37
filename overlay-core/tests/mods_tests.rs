//! Mod registry tests: capability dispatch, ordering, failure isolation.

mod support;

use std::sync::{Arc, Mutex};

use anyhow::bail;
use overlay_core::mods::{GuiMod, Mod, ModRegistry, ModSummary};
use overlay_core::ui::ImmediateUi;
use support::ScriptedUi;

type Trace = Arc<Mutex<Vec<String>>>;

#[derive(Clone, Copy)]
enum Behaviour {
    Draws,
    Errors,
    Panics,
}

/// A mod with a render capability.
struct PanelMod {
    name: String,
    behaviour: Behaviour,
    trace: Trace,
}

impl GuiMod for PanelMod {
    fn render(&mut self, ui: &mut dyn ImmediateUi) -> anyhow::Result<()> {
        self.trace.lock().unwrap().push(self.name.clone());
        match self.behaviour {
            Behaviour::Draws => {
                ui.text(&format!("{} says hi", self.name));
                Ok(())
            }
            Behaviour::Errors => bail!("{} could not draw", self.name),
            Behaviour::Panics => panic!("{} blew up", self.name),
        }
    }
}

impl Mod for PanelMod {
    fn name(&self) -> &str {
        &self.name
    }

    fn gui(&mut self) -> Option<&mut dyn GuiMod> {
        Some(self)
    }
}

/// A mod without a render capability.
struct HeadlessMod {
    name: String,
}

impl Mod for HeadlessMod {
    fn name(&self) -> &str {
        &self.name
    }
}

fn panel(name: &str, behaviour: Behaviour, trace: &Trace) -> Box<dyn Mod> {
    Box::new(PanelMod {
        name: name.to_string(),
        behaviour,
        trace: trace.clone(),
    })
}

fn headless(name: &str) -> Box<dyn Mod> {
    Box::new(HeadlessMod {
        name: name.to_string(),
    })
}

// ============================================================================
// Registry basics
// ============================================================================

#[test]
fn test_empty_registry_renders_nothing() {
    let registry = ModRegistry::new();
    let mut ui = ScriptedUi::new();
    let report = registry.render_all(&mut ui);
    assert_eq!(report.visited, 0);
    assert_eq!(report.rendered, 0);
    assert!(report.failed.is_empty());
    assert!(ui.calls.is_empty());
}

#[test]
fn test_clones_share_the_same_list() {
    let registry = ModRegistry::new();
    let loader = registry.clone();
    loader.push(headless("a"));
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
}

#[test]
fn test_summaries_report_capability() {
    let trace = Trace::default();
    let registry = ModRegistry::new();
    registry.push(panel("hud", Behaviour::Draws, &trace));
    registry.push(headless("logger"));

    assert_eq!(
        registry.summaries(),
        vec![
            ModSummary {
                name: "hud".into(),
                has_gui: true
            },
            ModSummary {
                name: "logger".into(),
                has_gui: false
            },
        ]
    );
}

#[test]
fn test_remove_by_name() {
    let registry = ModRegistry::new();
    registry.push(headless("a"));
    registry.push(headless("b"));

    let removed = registry.remove("a").unwrap();
    assert_eq!(removed.name(), "a");
    assert!(registry.remove("a").is_none());
    assert_eq!(registry.len(), 1);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_only_capable_mods_render_in_order() {
    let trace = Trace::default();
    let registry = ModRegistry::new();
    registry.push(panel("first", Behaviour::Draws, &trace));
    registry.push(headless("skip-me"));
    registry.push(panel("second", Behaviour::Draws, &trace));

    let mut ui = ScriptedUi::new();
    let report = registry.render_all(&mut ui);

    assert_eq!(report.visited, 3);
    assert_eq!(report.rendered, 2);
    assert_eq!(*trace.lock().unwrap(), vec!["first", "second"]);
    assert_eq!(ui.texts(), vec!["first says hi", "second says hi"]);
}

#[test]
fn test_error_does_not_stop_iteration() {
    let trace = Trace::default();
    let registry = ModRegistry::new();
    registry.push(panel("a", Behaviour::Draws, &trace));
    registry.push(panel("broken", Behaviour::Errors, &trace));
    registry.push(headless("quiet"));
    registry.push(panel("c", Behaviour::Draws, &trace));

    let report = registry.render_all(&mut ScriptedUi::new());

    assert_eq!(report.visited, 4);
    assert_eq!(report.rendered, 3);
    assert_eq!(report.failed, vec!["broken"]);
    assert_eq!(*trace.lock().unwrap(), vec!["a", "broken", "c"]);
}

#[test]
fn test_panic_is_contained() {
    let trace = Trace::default();
    let registry = ModRegistry::new();
    registry.push(panel("boom", Behaviour::Panics, &trace));
    registry.push(panel("after", Behaviour::Draws, &trace));

    let mut ui = ScriptedUi::new();
    let report = registry.render_all(&mut ui);

    assert_eq!(report.failed, vec!["boom"]);
    assert_eq!(*trace.lock().unwrap(), vec!["boom", "after"]);
    assert_eq!(ui.texts(), vec!["after says hi"]);

    // The lock is still usable on the next frame.
    let again = registry.render_all(&mut ui);
    assert_eq!(again.visited, 2);
}

#[test]
fn test_registry_usable_from_another_thread() {
    let registry = ModRegistry::new();
    let loader = registry.clone();
    std::thread::spawn(move || {
        loader.push(headless("from-loader"));
    })
    .join()
    .unwrap();

    assert_eq!(registry.summaries()[0].name, "from-loader");
}
