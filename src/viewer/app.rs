//! Fullscreen viewer implemented with egui/eframe

use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use eframe::{NativeOptions, egui};
use tracing::info;

use super::shutdown::{self, PowerControl, ScheduledTask, SystemShutdown};
use crate::config::DisplayConfig;
use crate::constants::{layout::SCREEN_MARGIN, shutdown as timing};
use crate::display::{self, DisplayLayout, KillSwitch};

struct ViewerApp {
    layout: DisplayLayout,
    kill_switch: KillSwitch,
    shutdown_task: ScheduledTask,
    power: Box<dyn PowerControl>,
}

impl ViewerApp {
    fn new(config: &DisplayConfig, schedule_shutdown: bool) -> Self {
        let layout = display::render(config);
        let kill_switch = KillSwitch::default();

        let mut shutdown_task = ScheduledTask::new();
        if schedule_shutdown {
            shutdown_task.schedule(timing::TRIGGER_DELAY, Instant::now());
            info!(
                delay_secs = timing::TRIGGER_DELAY.as_secs(),
                grace_secs = timing::GRACE_PERIOD.as_secs(),
                "Host restart scheduled"
            );
        }

        info!(
            style = ?layout.style,
            font = %layout.body.font,
            kill_switch = %kill_switch.display_name(),
            "Viewer initialized"
        );

        Self {
            layout,
            kill_switch,
            shutdown_task,
            power: Box::new(SystemShutdown),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| self.kill_switch.pressed(i)) {
            if self.shutdown_task.cancel() {
                info!("Pending restart cancelled");
            }
            info!("Kill switch pressed, closing viewer");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let now = Instant::now();
        if shutdown::poll_and_fire(
            &mut self.shutdown_task,
            self.power.as_ref(),
            timing::GRACE_PERIOD,
            now,
        ) {
            info!("Restart request issued");
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.layout.background))
            .show(ctx, |ui| {
                display::painter::paint(ui, &self.layout, 1.0, SCREEN_MARGIN);
            });

        // Wake up for the deadline even without input events
        if let Some(remaining) = self.shutdown_task.remaining(now) {
            ctx.request_repaint_after(remaining.max(Duration::from_millis(10)));
        }
    }
}

/// Open the fullscreen window and block until it closes
pub fn run(config: &DisplayConfig, schedule_shutdown: bool) -> Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_title("BSOD")
        .with_fullscreen(true)
        .with_decorations(false)
        .with_always_on_top();

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = ViewerApp::new(config, schedule_shutdown);

    eframe::run_native("BSOD", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow!("Failed to launch viewer window: {err}"))
}
