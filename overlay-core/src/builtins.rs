//! Built-in console commands.
//!
//! - `help`        no-op without arguments
//! - `help close`  hides the console
//! - `help <x>`    echoes a help line for `<x>`
//! - `mods`        lists the registered mods

use crate::console::{Console, ConsoleOutput};
use crate::mods::ModRegistry;

pub fn register(console: &mut Console, registry: &ModRegistry) {
    console.register_command("help", help);

    let registry = registry.clone();
    console.register_command("mods", move |_args: &[String], out: &mut ConsoleOutput<'_>| {
        list_mods(&registry, out)
    });
}

pub fn help(args: &[String], out: &mut ConsoleOutput<'_>) {
    let Some(topic) = args.first() else {
        return;
    };
    if topic == "close" {
        out.toggle_visible();
        return;
    }
    out.log(format!("help: show help message {topic}"));
}

pub fn list_mods(registry: &ModRegistry, out: &mut ConsoleOutput<'_>) {
    let summaries = registry.summaries();
    if summaries.is_empty() {
        out.log("no mods loaded");
        return;
    }
    for s in summaries {
        if s.has_gui {
            out.log(format!("{} [gui]", s.name));
        } else {
            out.log(s.name);
        }
    }
}
