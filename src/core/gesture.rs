use super::camera::Camera;
use super::constants::{DOUBLE_TAP_WINDOW_MS, PINCH_ZOOM_DIVISOR};
use fnv::FnvHashMap;
use glam::DVec2;
use smallvec::SmallVec;

/// Pointer gesture state machine driving the [`Camera`].
///
/// Consumes raw pointer-down/move/up events and turns them into pans
/// (exactly one active pointer), pinch zooms (exactly two) and double-tap
/// camera resets. Three or more simultaneous pointers are tracked so their
/// releases are handled, but move neither the offset nor the zoom.
///
/// Timestamps are supplied by the caller in milliseconds so the double-tap
/// window can be exercised deterministically off the browser clock.
#[derive(Debug, Default)]
pub struct GestureTracker {
    /// Last-known position per active pointer id.
    pointers: FnvHashMap<i32, DVec2>,
    /// Pointer ids in arrival order; the first two form the pinch pair.
    order: SmallVec<[i32; 2]>,
    /// Inter-pointer distance from the previous two-pointer move, if any.
    pinch_dist: Option<f64>,
    last_tap_ms: Option<f64>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// Record a new pointer. Two downs within the double-tap window reset
    /// the camera to its identity view.
    pub fn pointer_down(&mut self, camera: &mut Camera, id: i32, pos: DVec2, now_ms: f64) {
        self.pointers.insert(id, pos);
        if !self.order.contains(&id) {
            self.order.push(id);
        }
        if let Some(prev) = self.last_tap_ms {
            if now_ms - prev < DOUBLE_TAP_WINDOW_MS {
                camera.reset();
            }
        }
        self.last_tap_ms = Some(now_ms);
    }

    /// Advance a tracked pointer. Deltas are frame-to-frame: the stored
    /// position is overwritten immediately, so each event contributes only
    /// its own movement.
    pub fn pointer_move(&mut self, camera: &mut Camera, id: i32, pos: DVec2) {
        let delta = match self.pointers.get_mut(&id) {
            Some(prev) => {
                let d = pos - *prev;
                *prev = pos;
                d
            }
            None => return,
        };
        match self.pointers.len() {
            // Single-pointer drag pans 1:1 in screen space, unscaled by zoom.
            1 => camera.offset += delta,
            2 => {
                let a = self.pointers[&self.order[0]];
                let b = self.pointers[&self.order[1]];
                let dist = a.distance(b);
                match self.pinch_dist {
                    // First two-pointer move only seeds the baseline.
                    None => self.pinch_dist = Some(dist),
                    Some(prev_dist) => {
                        camera.zoom_by(1.0 + (dist - prev_dist) / PINCH_ZOOM_DIVISOR);
                        self.pinch_dist = Some(dist);
                    }
                }
            }
            _ => {}
        }
    }

    /// Release a pointer. Dropping below two active pointers clears the
    /// pinch baseline so the next pinch reseeds instead of jumping against
    /// a stale distance.
    pub fn pointer_up(&mut self, id: i32) {
        self.pointers.remove(&id);
        self.order.retain(|p| *p != id);
        if self.pointers.len() < 2 {
            self.pinch_dist = None;
        }
    }
}
