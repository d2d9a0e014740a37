//! Mod capability traits and the shared registry.
//!
//! Mods are loaded and unloaded by something else; the overlay only walks
//! the registry once per frame and calls `render` on the ones that draw UI.
//! A failing or panicking mod is logged and skipped; the rest of the frame
//! carries on.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ui::ImmediateUi;

// ════════════════════════════════════════════════════════════════════
// Capabilities
// ════════════════════════════════════════════════════════════════════

/// A mod that draws its own panels.
pub trait GuiMod {
    fn render(&mut self, ui: &mut dyn ImmediateUi) -> anyhow::Result<()>;
}

/// Any loaded mod.
pub trait Mod: Send {
    fn name(&self) -> &str;

    /// The render capability, for mods that have one.
    fn gui(&mut self) -> Option<&mut dyn GuiMod> {
        None
    }
}

/// Name and capabilities of a registered mod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModSummary {
    pub name: String,
    pub has_gui: bool,
}

/// What happened to the mods during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModFrameReport {
    /// Mods walked, with or without a render capability.
    pub visited: usize,
    /// Render callbacks invoked.
    pub rendered: usize,
    /// Names of mods whose callback returned an error or panicked.
    pub failed: Vec<String>,
}

// ════════════════════════════════════════════════════════════════════
// Registry
// ════════════════════════════════════════════════════════════════════

/// Cloneable handle to the lock-guarded, ordered list of loaded mods.
///
/// The loader and the overlay hold clones of the same handle. The overlay
/// keeps the lock for one pass over the list per frame.
#[derive(Clone, Default)]
pub struct ModRegistry {
    mods: Arc<Mutex<Vec<Box<dyn Mod>>>>,
}

impl std::fmt::Debug for ModRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModRegistry").field("len", &self.len()).finish()
    }
}

impl ModRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the list. A poisoned lock is taken over rather than propagated.
    pub fn lock(&self) -> MutexGuard<'_, Vec<Box<dyn Mod>>> {
        self.mods.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, m: Box<dyn Mod>) {
        tracing::info!(name = m.name(), "mod registered");
        self.lock().push(m);
    }

    /// Remove the first mod called `name`.
    pub fn remove(&self, name: &str) -> Option<Box<dyn Mod>> {
        let mut mods = self.lock();
        let idx = mods.iter().position(|m| m.name() == name)?;
        tracing::info!(name, "mod removed");
        Some(mods.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn summaries(&self) -> Vec<ModSummary> {
        self.lock()
            .iter_mut()
            .map(|m| ModSummary {
                name: m.name().to_string(),
                has_gui: m.gui().is_some(),
            })
            .collect()
    }

    /// Render every mod that can, in registry order, under one lock.
    pub fn render_all(&self, ui: &mut dyn ImmediateUi) -> ModFrameReport {
        let mut report = ModFrameReport::default();
        let mut mods = self.lock();

        for m in mods.iter_mut() {
            report.visited += 1;
            let name = m.name().to_string();
            let Some(gui) = m.gui() else {
                continue;
            };
            report.rendered += 1;

            match panic::catch_unwind(AssertUnwindSafe(|| gui.render(ui))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(mod_name = %name, "mod render failed: {e:#}");
                    report.failed.push(name);
                }
                Err(payload) => {
                    tracing::warn!(
                        mod_name = %name,
                        "mod render panicked: {}",
                        panic_message(payload.as_ref())
                    );
                    report.failed.push(name);
                }
            }
        }
        report
    }
}

/// Text of a panic payload, when it carries one.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
