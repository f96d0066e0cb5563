//! Headless checkbox window.
//!
//! A window exposes a boolean `example` property. Clicking the checkbox
//! writes it, and the property's change callback emits `example_changed`
//! to every connected listener.
//!
//! Run with: RUST_LOG=info cargo run --example checkbox

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use observable_property::{cloned, Property};
use tracing_subscriber::EnvFilter;

// =============================================================================
// SIGNAL
// =============================================================================

type Listener = Box<dyn Fn(bool)>;

/// Toolkit-style signal: a list of connected listeners.
#[derive(Clone, Default)]
struct Signal {
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl Signal {
    fn connect(&self, f: impl Fn(bool) + 'static) {
        self.listeners.borrow_mut().push(Box::new(f));
    }

    fn emit(&self, value: bool) {
        for listener in self.listeners.borrow().iter() {
            listener(value);
        }
    }
}

// =============================================================================
// WIDGETS
// =============================================================================

#[derive(Default)]
struct CheckBox {
    checked: bool,
}

impl CheckBox {
    /// Toggle and return the new state.
    fn click(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

struct MainWindow {
    check_box: CheckBox,
    example: Property<bool>,
    example_changed: Signal,
}

impl MainWindow {
    fn new() -> Self {
        let example_changed = Signal::default();
        let example = Property::new(false)
            .on_changed(cloned!(example_changed => move |value: &bool| example_changed.emit(*value)));

        example_changed.connect(|value| tracing::info!("Value Changed: {value}"));

        Self {
            check_box: CheckBox::default(),
            example,
            example_changed,
        }
    }

    /// Click the window's checkbox; its clicked state feeds `set_example`.
    fn click_check_box(&mut self) {
        let checked = self.check_box.click();
        self.set_example(checked);
    }

    fn example(&self) -> bool {
        *self.example
    }

    fn set_example(&mut self, value: bool) {
        self.example.set(value);
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()?;

    let mut window = MainWindow::new();

    let emitted = Rc::new(RefCell::new(Vec::new()));
    window
        .example_changed
        .connect(cloned!(emitted => move |v| emitted.borrow_mut().push(v)));

    window.click_check_box();
    window.click_check_box();

    // Already false: no emission
    window.set_example(false);

    window.click_check_box();

    tracing::info!(
        example = window.example(),
        emitted = emitted.borrow().len(),
        "demo finished"
    );
    Ok(())
}
