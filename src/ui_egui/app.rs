use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use super::theme::AthanTheme;
use super::views::render_display;
use crate::error::ConfigurationError;
use crate::models::display::DisplayState;
use crate::services::display::format_display;
use crate::services::hijri::HijriProvider;
use crate::services::refresh::{
    ControllerEvent, EventSender, Flow, RefreshController, Renderer, Ticker, TICK_PERIOD,
};
use crate::services::schedule::ScheduleProvider;

/// Slot through which a fatal error raised inside the UI loop reaches
/// `main` after the window has closed.
pub type FatalErrorSlot = Arc<Mutex<Option<ConfigurationError>>>;

pub struct AthanApp<P, H> {
    controller: RefreshController<P, H>,
    events: EventSender,
    receiver: Receiver<ControllerEvent>,
    ticker: Ticker,
    theme: AthanTheme,
    fatal_error: FatalErrorSlot,
}

impl<P, H> AthanApp<P, H>
where
    P: ScheduleProvider,
    H: HijriProvider,
{
    /// Wire the ticker into the controller's channel and start it. Each tick
    /// wakes the egui event loop so the new state gets drawn.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        controller: RefreshController<P, H>,
        events: (EventSender, Receiver<ControllerEvent>),
        theme: AthanTheme,
        fatal_error: FatalErrorSlot,
    ) -> std::io::Result<Self> {
        let (sender, receiver) = events;
        theme.apply_to_context(&cc.egui_ctx);

        let repaint_ctx = cc.egui_ctx.clone();
        let ticker = Ticker::start(
            TICK_PERIOD,
            sender.clone(),
            Some(Box::new(move || repaint_ctx.request_repaint())),
        )?;

        Ok(Self {
            controller,
            events: sender,
            receiver,
            ticker,
            theme,
            fatal_error,
        })
    }

    /// Stop the ticker and drain what is still queued. Runs once; the close
    /// request and `on_exit` both end up here.
    fn shut_down(&mut self) {
        if !self.ticker.is_running() {
            return;
        }
        self.ticker.stop();
        drain_at_shutdown(
            &mut self.controller,
            &self.events,
            &self.receiver,
            &self.fatal_error,
        );
    }
}

/// Queue Shutdown behind any pending ticks and apply them all. An error from
/// a late tick still reaches `main` through the slot.
fn drain_at_shutdown<P, H>(
    controller: &mut RefreshController<P, H>,
    events: &EventSender,
    receiver: &Receiver<ControllerEvent>,
    fatal_error: &FatalErrorSlot,
) where
    P: ScheduleProvider,
    H: HijriProvider,
{
    if events.shutdown().is_err() {
        log::warn!("Event channel already closed at shutdown");
    }
    if let Err(err) = controller.pump(receiver, &mut NullRenderer) {
        record_fatal(fatal_error, err);
    }
}

/// Keep the first fatal error; later ones are only logged.
fn record_fatal(slot: &FatalErrorSlot, err: ConfigurationError) {
    match slot.lock() {
        Ok(mut slot) => {
            if slot.is_some() {
                log::error!("Further fatal error: {}", err);
            } else {
                *slot = Some(err);
            }
        }
        Err(_) => log::error!("Fatal error slot poisoned, dropping: {}", err),
    }
}

impl<P, H> eframe::App for AthanApp<P, H>
where
    P: ScheduleProvider,
    H: HijriProvider,
{
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.shut_down();
            return;
        }

        // Each frame is a render request, queued behind any pending ticks
        if self.events.request_render().is_err() {
            log::error!("Event channel closed unexpectedly");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut renderer = EguiRenderer {
            ctx,
            theme: &self.theme,
        };
        match self.controller.pump(&self.receiver, &mut renderer) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => {
                self.ticker.stop();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Err(err) => {
                record_fatal(&self.fatal_error, err);
                self.ticker.stop();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shut_down();
    }
}

/// Draws into the egui context of the current frame.
struct EguiRenderer<'a> {
    ctx: &'a egui::Context,
    theme: &'a AthanTheme,
}

impl Renderer for EguiRenderer<'_> {
    fn draw(&mut self, state: &DisplayState) {
        let display = format_display(state);
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.background))
            .show(self.ctx, |ui| render_display(ui, &display, self.theme));
    }

    fn request_redraw(&mut self) {
        self.ctx.request_repaint();
    }
}

/// Used while shutting down, when nothing can be drawn anymore.
struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _state: &DisplayState) {}
}
