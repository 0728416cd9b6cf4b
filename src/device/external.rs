//! Simulated vendor APIs for the supported outputs
//!
//! Each API "renders" a payload by printing it with its own prefix and keeps
//! a transmit log. The Bluetooth SDK hands out raw handles that must be
//! released explicitly; the stack counts open handles and releases.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct StackCounters {
    next_id: Cell<u32>,
    open: Cell<usize>,
    released: Cell<usize>,
}

/// Bluetooth SDK entry point. Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct BluetoothStack {
    counters: Rc<StackCounters>,
}

impl BluetoothStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair with a speaker and open a raw handle to it
    pub fn pair(&self, name: &str) -> RawSpeakerHandle {
        let id = self.counters.next_id.get() + 1;
        self.counters.next_id.set(id);
        self.counters.open.set(self.counters.open.get() + 1);
        log::info!("Bluetooth speaker \"{}\" paired (handle {})", name, id);

        RawSpeakerHandle {
            id,
            name: name.to_string(),
            counters: Rc::clone(&self.counters),
            transmitted: Vec::new(),
        }
    }

    /// Handles opened and not yet released
    pub fn open_handles(&self) -> usize {
        self.counters.open.get()
    }

    /// Total releases performed
    pub fn releases(&self) -> usize {
        self.counters.released.get()
    }
}

/// Raw speaker handle. Not released on drop; call [`RawSpeakerHandle::release`].
#[derive(Debug)]
pub struct RawSpeakerHandle {
    id: u32,
    name: String,
    counters: Rc<StackCounters>,
    transmitted: Vec<String>,
}

impl RawSpeakerHandle {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn play_sound_via_bluetooth(&mut self, payload: &str) {
        println!("[BluetoothSpeaker:{}] Playing: {}", self.name, payload);
        self.transmitted.push(payload.to_string());
    }

    pub fn transmitted(&self) -> &[String] {
        &self.transmitted
    }

    /// Close the connection. Consumes the handle.
    pub fn release(self) {
        self.counters.open.set(self.counters.open.get() - 1);
        self.counters.released.set(self.counters.released.get() + 1);
        log::info!(
            "Bluetooth speaker \"{}\" released (handle {})",
            self.name,
            self.id
        );
    }
}

/// Wired speaker API
#[derive(Debug, Default)]
pub struct WiredSpeakerApi {
    transmitted: Vec<String>,
}

impl WiredSpeakerApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play_sound_via_cable(&mut self, payload: &str) {
        println!("[WiredSpeaker] Playing: {}", payload);
        self.transmitted.push(payload.to_string());
    }

    pub fn transmitted(&self) -> &[String] {
        &self.transmitted
    }
}

/// Headphone jack API
#[derive(Debug, Default)]
pub struct HeadphonesApi {
    transmitted: Vec<String>,
}

impl HeadphonesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play_sound_via_jack(&mut self, payload: &str) {
        println!("[Headphones] Playing: {}", payload);
        self.transmitted.push(payload.to_string());
    }

    pub fn transmitted(&self) -> &[String] {
        &self.transmitted
    }
}
