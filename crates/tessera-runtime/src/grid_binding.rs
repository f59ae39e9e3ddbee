#![forbid(unsafe_code)]

//! Binds a [`ResponsiveGrid`] to a viewport observable.
//!
//! A [`GridBinding`] is the resize-listener half of a responsive grid. It
//! subscribes to an [`Observable<Viewport>`] when mounted, keeps the latest
//! [`GridLayout`], and lets go of the listener when unmounted or dropped.
//!
//! Resizes inside one breakpoint do not recompute the layout: placements
//! depend only on the breakpoint and the item count.
//!
//! # Failure Modes
//!
//! | Scenario                                   | Behavior                    |
//! |--------------------------------------------|-----------------------------|
//! | Viewport changes after `unmount`           | Ignored                     |
//! | Container measured before first paint      | Row height stays unmeasured |
//! | Row count changes (breakpoint, item count) | Measured height is reset    |

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tessera_core::{RenderMode, Viewport};
use tessera_layout::{
    ContainerMetrics, GridLayout, GridStyle, ResponsiveGrid, RowHeight, RowHeightTracker,
};

use crate::reactive::{Observable, Subscription};

struct BindingState {
    grid: ResponsiveGrid,
    viewport: Viewport,
    item_count: usize,
    layout: GridLayout,
    tracker: RowHeightTracker,
    recomputes: u64,
}

impl BindingState {
    fn new(grid: ResponsiveGrid, viewport: Viewport, item_count: usize) -> Self {
        let layout = grid.layout(viewport.width, item_count);
        let tracker = RowHeightTracker::new(layout.row_count());
        Self {
            grid,
            viewport,
            item_count,
            layout,
            tracker,
            recomputes: 1,
        }
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let breakpoint = self.grid.resolve(viewport.width);
        if breakpoint == self.layout.breakpoint() {
            tracing::trace!(width = viewport.width, breakpoint, "resize within breakpoint");
            return;
        }
        let breakpoint = breakpoint.to_string();
        self.recompute(&breakpoint);
    }

    fn set_item_count(&mut self, item_count: usize) -> bool {
        if item_count == self.item_count {
            return false;
        }
        self.item_count = item_count;
        let breakpoint = self.layout.breakpoint().to_string();
        self.recompute(&breakpoint);
        true
    }

    fn recompute(&mut self, breakpoint: &str) {
        let previous = self.layout.breakpoint().to_string();
        self.layout = self.grid.layout_for(breakpoint, self.item_count);
        self.recomputes += 1;
        let reset = self.tracker.set_row_count(self.layout.row_count());
        tracing::debug!(
            from = %previous,
            to = breakpoint,
            items = self.item_count,
            rows = self.layout.row_count(),
            row_height_reset = reset,
            "grid layout recomputed"
        );
    }
}

/// Live layout for one mounted grid.
pub struct GridBinding {
    state: Rc<RefCell<BindingState>>,
    mode: RenderMode,
    subscription: Option<Subscription>,
}

impl GridBinding {
    /// Compute the initial layout and start listening to `viewport`.
    #[must_use]
    pub fn mount(
        grid: ResponsiveGrid,
        viewport: &Observable<Viewport>,
        item_count: usize,
        mode: RenderMode,
    ) -> Self {
        let state = Rc::new(RefCell::new(BindingState::new(
            grid,
            viewport.get(),
            item_count,
        )));
        let weak: Weak<RefCell<BindingState>> = Rc::downgrade(&state);
        let subscription = viewport.subscribe(move |vp| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().on_resize(*vp);
            }
        });
        {
            let current = state.borrow();
            tracing::debug!(
                width = current.viewport.width,
                breakpoint = current.layout.breakpoint(),
                items = item_count,
                mode = %mode,
                "grid binding mounted"
            );
        }
        Self {
            state,
            mode,
            subscription: Some(subscription),
        }
    }

    /// Stop listening for viewport changes. The last layout stays readable.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            let state = self.state.borrow();
            tracing::debug!(breakpoint = state.layout.breakpoint(), "grid binding unmounted");
        }
    }

    /// Whether the viewport listener is still attached.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Snapshot of the current layout.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.state.borrow().layout.clone()
    }

    /// Active breakpoint name.
    #[must_use]
    pub fn breakpoint(&self) -> String {
        self.state.borrow().layout.breakpoint().to_string()
    }

    /// Last viewport seen by the listener.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.state.borrow().item_count
    }

    /// Change the number of items; recomputes if it differs.
    pub fn set_item_count(&self, item_count: usize) -> bool {
        self.state.borrow_mut().set_item_count(item_count)
    }

    /// Number of layout computations so far, including the initial one.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.state.borrow().recomputes
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Feed a container measurement to the row-height tracker.
    pub fn observe_container(&self, metrics: ContainerMetrics) -> RowHeight {
        self.state.borrow_mut().tracker.observe(metrics)
    }

    /// Current row-height measurement.
    #[must_use]
    pub fn row_height(&self) -> RowHeight {
        self.state.borrow().tracker.state()
    }

    /// Container style for the current layout.
    ///
    /// Preview grids use the measured row height once one is available.
    #[must_use]
    pub fn style(&self) -> GridStyle {
        let state = self.state.borrow();
        let measured = if self.mode.measures_rows() {
            state.tracker.state().px()
        } else {
            None
        };
        GridStyle::for_mode(self.mode, state.layout.columns()).with_row_height(measured)
    }
}

impl fmt::Debug for GridBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("GridBinding")
            .field("breakpoint", &state.layout.breakpoint())
            .field("items", &state.item_count)
            .field("mode", &self.mode)
            .field("mounted", &self.subscription.is_some())
            .finish()
    }
}
