//! Collaborators for running the controller on a desktop. Overlays and click overrides are
//! written to the log instead of a display.

use crate::config::Config;
use crate::overlay::{OverlayScene, OverlayWindowConfig, VariantKind};
use crate::platform::memory_store::MemoryMessageStore;
use crate::platform::tokio_timer::TokioTimerService;
use crate::platform::{
    BatteryMonitor, BatteryState, ClickConfigService, EventDispatcher, OverlayId, OverlayService,
    PlatformResult, Rect, Services, WindowId,
};
use log::{info, warn};
use std::collections::HashMap;
use std::time::Instant;

/// Builds the desktop service set. Timers run on the event loop's tokio runtime.
pub fn services(
    config: &Config,
    dispatcher: EventDispatcher,
) -> Result<Services, Box<dyn std::error::Error>> {
    let messages = match &config.message_store_path {
        Some(path) => MemoryMessageStore::load(path)?,
        None => {
            warn!("No message store configured, every arrived notification will be missing");
            MemoryMessageStore::new()
        }
    };

    Ok(Services {
        overlays: Box::new(ConsoleOverlayService::new()),
        timers: Box::new(TokioTimerService::new(dispatcher)),
        messages: Box::new(messages),
        clicks: Box::new(ConsoleClickConfig),
        battery: Box::new(SimulatedBattery::new()),
    })
}

#[derive(Debug)]
pub struct ConsoleOverlayService {
    next_id: OverlayId,
    overlays: HashMap<OverlayId, VariantKind>,
}

impl ConsoleOverlayService {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            overlays: HashMap::new(),
        }
    }
}

impl Default for ConsoleOverlayService {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayService for ConsoleOverlayService {
    fn create(&mut self, config: &OverlayWindowConfig) -> PlatformResult<OverlayId> {
        let id = self.next_id;
        self.next_id += 1;
        self.overlays.insert(id, config.kind);
        info!(
            "[overlay {id}] open {:?} {}{}",
            config.kind,
            config.frame,
            if config.fullscreen { " fullscreen" } else { "" }
        );
        Ok(id)
    }

    fn render(&mut self, id: OverlayId, scene: &OverlayScene) -> PlatformResult<()> {
        if !self.overlays.contains_key(&id) {
            return Err(format!("Overlay {id} does not exist").into());
        }
        match scene {
            OverlayScene::Message {
                title,
                subtitle,
                body,
                scroll,
                ..
            } => {
                info!("[overlay {id}] {title}");
                if let Some(subtitle) = subtitle {
                    info!("[overlay {id}]   {subtitle}");
                }
                for line in body.lines().skip(*scroll as usize) {
                    info!("[overlay {id}]   | {line}");
                }
            }
            OverlayScene::Battery {
                percent,
                charging,
                plugged,
            } => {
                let status = match (charging, plugged) {
                    (true, _) => "charging",
                    (false, true) => "plugged in",
                    (false, false) => "on battery",
                };
                info!("[overlay {id}] battery {percent}% ({status})");
            }
            OverlayScene::MiniMessage { text, icon } => {
                info!("[overlay {id}] ({icon}) {text}");
            }
        }
        Ok(())
    }

    fn move_to(&mut self, id: OverlayId, frame: &Rect) -> PlatformResult<()> {
        if !self.overlays.contains_key(&id) {
            return Err(format!("Overlay {id} does not exist").into());
        }
        info!("[overlay {id}] moved to {frame}");
        Ok(())
    }

    fn destroy(&mut self, id: OverlayId) {
        if let Some(kind) = self.overlays.remove(&id) {
            info!("[overlay {id}] closed {kind:?}");
        }
    }
}

pub struct ConsoleClickConfig;

impl ClickConfigService for ConsoleClickConfig {
    fn bind(&mut self, window: WindowId) {
        info!("[window {window}] buttons routed to overlay");
    }

    fn unbind(&mut self, window: WindowId) {
        info!("[window {window}] buttons routed back to application");
    }
}

/// Discharges one percent per minute from a full battery.
pub struct SimulatedBattery {
    started: Instant,
}

impl SimulatedBattery {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SimulatedBattery {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryMonitor for SimulatedBattery {
    fn state(&self) -> BatteryState {
        let minutes = self.started.elapsed().as_secs() / 60;
        BatteryState {
            percent: 100u64.saturating_sub(minutes) as u8,
            charging: false,
            plugged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::DISPLAY_BOUNDS;

    fn config(kind: VariantKind) -> OverlayWindowConfig {
        OverlayWindowConfig {
            kind,
            frame: DISPLAY_BOUNDS,
            fullscreen: true,
            corner_radius: 0,
            background: None,
            border: None,
        }
    }

    #[test]
    fn test_console_overlay_rejects_unknown_ids() {
        let mut overlays = ConsoleOverlayService::new();
        let id = overlays.create(&config(VariantKind::Battery)).unwrap();
        let scene = OverlayScene::MiniMessage {
            text: "Hi".to_string(),
            icon: 0,
        };

        assert!(overlays.render(id, &scene).is_ok());
        overlays.destroy(id);
        overlays.destroy(id);
        assert!(overlays.render(id, &scene).is_err());
    }

    #[test]
    fn test_default_overlay_service_matches_new() {
        let mut overlays = ConsoleOverlayService::default();
        assert_eq!(overlays.create(&config(VariantKind::Message)).unwrap(), 1);
    }

    #[test]
    fn test_simulated_battery_starts_full() {
        assert_eq!(SimulatedBattery::new().state().percent, 100);
    }
}
