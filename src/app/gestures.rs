use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gtk4::prelude::*;
use gtk4::{Button, DrawingArea, Overlay};

use crate::geometry::{Size, ViewportPoint};
use crate::notification::DesktopNotifier;
use crate::pipeline::{
    accept_selection, deliver_outcome, ImageLayout, Notice, Notifier, SessionPipeline,
    SessionRequest,
};
use crate::render::ResultRenderer;
use crate::selection::{PressOutcome, SelectionController};
use crate::state::PointerTarget;

use super::image_view::rendered_bounds;
use super::overlay_surface::GtkOverlaySurface;
use super::result_panel::GtkPanelHost;
use super::worker::spawn_session_worker;

#[derive(Clone)]
pub(super) struct ViewerContext {
    pub(super) overlay: Overlay,
    pub(super) canvas: DrawingArea,
    pub(super) toggle_button: Button,
    pub(super) natural: Size,
    pub(super) selection: Rc<RefCell<SelectionController<GtkOverlaySurface>>>,
    pub(super) renderer: Rc<RefCell<ResultRenderer<GtkPanelHost>>>,
    pub(super) pipeline: Arc<SessionPipeline>,
    pub(super) notifier: DesktopNotifier,
}

impl ViewerContext {
    fn viewport_size(&self) -> Size {
        Size::new(
            f64::from(self.overlay.width()),
            f64::from(self.overlay.height()),
        )
    }

    fn pointer_target(&self, x: f64, y: f64) -> PointerTarget {
        let Some(picked) = self.overlay.pick(x, y, gtk4::PickFlags::DEFAULT) else {
            return PointerTarget::Viewport;
        };
        if &picked == self.toggle_button.upcast_ref::<gtk4::Widget>()
            || picked.is_ancestor(&self.toggle_button)
        {
            PointerTarget::ToggleControl
        } else {
            PointerTarget::Viewport
        }
    }
}

pub(super) fn connect_toggle_button(context: ViewerContext) {
    let button = context.toggle_button.clone();
    button.connect_clicked(move |button| {
        let outcome = context.selection.borrow_mut().toggle();
        button.set_label(outcome.label());
        context
            .canvas
            .set_cursor_from_name(outcome.enabled.then_some("crosshair"));
        if outcome.install_listener {
            connect_selection_gesture(context.clone());
        }
    });
}

fn connect_selection_gesture(context: ViewerContext) {
    let drag_gesture = gtk4::GestureDrag::new();
    drag_gesture.set_button(gtk4::gdk::BUTTON_PRIMARY);
    drag_gesture.set_propagation_phase(gtk4::PropagationPhase::Capture);

    let begin_context = context.clone();
    drag_gesture.connect_drag_begin(move |gesture, start_x, start_y| {
        handle_drag_begin(&begin_context, gesture, start_x, start_y);
    });

    let update_context = context.clone();
    drag_gesture.connect_drag_update(move |gesture, offset_x, offset_y| {
        if let Some(point) = drag_point(gesture, offset_x, offset_y) {
            update_context.selection.borrow_mut().drag_to(point);
        }
    });

    let end_context = context.clone();
    drag_gesture.connect_drag_end(move |gesture, offset_x, offset_y| {
        handle_drag_end(&end_context, gesture, offset_x, offset_y);
    });

    let cancel_context = context.clone();
    drag_gesture.connect_cancel(move |_, _| {
        cancel_context.selection.borrow_mut().cancel();
    });

    context.overlay.add_controller(drag_gesture);
    tracing::info!("selection listener installed");
}

fn drag_point(gesture: &gtk4::GestureDrag, offset_x: f64, offset_y: f64) -> Option<ViewportPoint> {
    let (start_x, start_y) = gesture.start_point()?;
    Some(ViewportPoint::new(start_x + offset_x, start_y + offset_y))
}

fn handle_drag_begin(context: &ViewerContext, gesture: &gtk4::GestureDrag, x: f64, y: f64) {
    let target = context.pointer_target(x, y);
    let viewport = context.viewport_size();
    let overlay = context.overlay.clone();
    let outcome = context.selection.borrow_mut().press(
        target,
        ViewportPoint::new(x, y),
        viewport,
        || GtkOverlaySurface::attach(&overlay),
    );

    match outcome {
        PressOutcome::Started => {
            gesture.set_state(gtk4::EventSequenceState::Claimed);
        }
        PressOutcome::SessionAlreadyActive => {}
        PressOutcome::ModeDisabled | PressOutcome::ToggleControl => {
            gesture.set_state(gtk4::EventSequenceState::Denied);
        }
    }
}

fn handle_drag_end(context: &ViewerContext, gesture: &gtk4::GestureDrag, offset_x: f64, offset_y: f64) {
    let Some(point) = drag_point(gesture, offset_x, offset_y) else {
        context.selection.borrow_mut().cancel();
        return;
    };
    let released = context.selection.borrow_mut().release(point);
    let Some(released) = released else {
        return;
    };
    let Some(selection) = accept_selection(released, &context.notifier) else {
        return;
    };

    let viewport = context.viewport_size();
    let request = SessionRequest {
        selection,
        layout: ImageLayout {
            viewport,
            rendered: rendered_bounds(context.natural, context.overlay.width(), context.overlay.height()),
            natural: context.natural,
        },
    };
    tracing::info!(
        x = selection.x,
        y = selection.y,
        width = selection.w,
        height = selection.h,
        "color analysis session started"
    );

    let pipeline = context.pipeline.clone();
    let renderer = context.renderer.clone();
    let notifier = context.notifier;
    let spawned = spawn_session_worker(
        move || pipeline.run(request),
        move |outcome| {
            let mut renderer = renderer.borrow_mut();
            deliver_outcome(outcome, selection, &mut *renderer, &notifier);
            tracing::info!("color analysis session finished");
        },
        move || notifier.notify(Notice::ServiceUnavailable),
    );
    if let Err(err) = spawned {
        tracing::warn!(%err, "failed to start session worker");
        context.notifier.notify(Notice::ExtractionFailed);
    }
}
