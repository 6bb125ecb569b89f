//! Program selection shared between the main loop and the
//! program-advance edge handler.
//!
//! The only state crossing the interrupt boundary lives here: the slot
//! index, the change-pending flag, and the armed flag that models the
//! handler's self-disable. Every access runs inside one critical
//! section, so neither side can observe a torn read-modify-write.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::effect::ProgramSlot;

struct SelectState {
    slot: ProgramSlot,
    pending: bool,
    armed: bool,
}

/// Interrupt-safe program slot cell.
///
/// Starts with the change pending so the first main-loop pass performs
/// the initial blank and brightness-tier flash.
pub struct ProgramSelect {
    inner: Mutex<RefCell<SelectState>>,
}

impl ProgramSelect {
    /// Cell selecting the first program slot.
    pub const fn new() -> Self {
        Self::with_slot(ProgramSlot::new(0))
    }

    /// Cell selecting a specific initial slot.
    pub const fn with_slot(slot: ProgramSlot) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(SelectState {
                slot,
                pending: true,
                armed: true,
            })),
        }
    }

    /// Report an edge on the program-advance input.
    ///
    /// Call from the edge handler. A disarmed cell ignores the edge
    /// entirely (the handler masked itself on the previous edge and has
    /// not been re-armed yet). An armed cell disarms on any edge, and
    /// advances the slot and raises change-pending only while the
    /// companion confirm input is held.
    pub fn notify_edge(&self, confirm_held: bool) {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if !state.armed {
                return;
            }
            state.armed = false;
            if confirm_held {
                state.slot = state.slot.next();
                state.pending = true;
            }
        });
    }

    /// Consume the change-pending flag, returning the selected slot if
    /// a change was waiting.
    pub fn take_pending(&self) -> Option<ProgramSlot> {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if state.pending {
                state.pending = false;
                Some(state.slot)
            } else {
                None
            }
        })
    }

    /// Re-enable the edge handler.
    pub fn rearm(&self) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().armed = true;
        });
    }

    /// Snapshot of the selected slot.
    pub fn current(&self) -> ProgramSlot {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().slot)
    }
}

impl Default for ProgramSelect {
    fn default() -> Self {
        Self::new()
    }
}
