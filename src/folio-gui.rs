//! Folio GUI Application
//!
//! A portfolio tracker shell built with the egui framework:
//! - Tabbed navigation between Dashboard, Holdings, Accounts and Settings
//! - Light, dark, or system-following theme with a persisted preference
//! - Live reaction to operating-system appearance changes

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Theme scope and navigation state
//! - `ui/` - Panels, screens and the theme picker
//! - `utils/` - Formatting helpers

use clap::Parser;
use eframe::egui;
use std::rc::Rc;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use folio::{
    AppConfig, AppearanceMonitor, AsyncStorage, Cli, PendingOp, StatusBarHandle, Subscription,
    ThemePreferenceStore, SELECTED_TAB_KEY,
};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that parses the command line, installs
/// logging, and launches the GUI.
fn main() -> eframe::Result {
    let config = AppConfig::from(Cli::parse());
    init_logging(config.log_filter.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_title(&config.window_title),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(FolioApp::new(cc, &config)?))),
    )
}

/// Installs the tracing subscriber.
///
/// An explicit filter wins over `RUST_LOG`, which wins over the default.
fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(AppConfig::default_log_filter())),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// The Folio application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles tab and theme interactions
/// - `ThemeCoordinator` feeds the system theme in and applies the palette
/// - `SettingsCoordinator` persists the selected tab
/// - `PanelManager` handles UI panel layout and rendering
struct FolioApp {
    /// Centralized application state
    state: AppState,
    /// Latest OS appearance, observed every frame
    appearance: AppearanceMonitor,
    /// Status-bar style set by the theme store
    status_bar: Rc<StatusBarHandle>,
    /// Persistence of small settings
    settings: SettingsCoordinator,
    /// Read of the tab remembered from the last session
    pending_tab: Option<PendingOp<Option<String>>>,
    /// Repaints the window whenever the theme changes
    _repaint_on_theme_change: Subscription,
}

impl FolioApp {
    /// Starts storage, the appearance monitor and the theme store.
    fn new(cc: &eframe::CreationContext, config: &AppConfig) -> anyhow::Result<Self> {
        let repaint_ctx = cc.egui_ctx.clone();
        let storage = Rc::new(AsyncStorage::spawn(
            config.open_store(),
            Some(Arc::new(move || repaint_ctx.request_repaint())),
        )?);

        let appearance = match cc.egui_ctx.system_theme() {
            Some(theme) => AppearanceMonitor::new(folio::SystemAppearance::from_egui(Some(theme))),
            None => AppearanceMonitor::from_os(),
        };

        let status_bar = Rc::new(StatusBarHandle::default());
        let store = ThemePreferenceStore::start(storage.clone(), &appearance, status_bar.clone());

        let ctx = cc.egui_ctx.clone();
        let repaint = store.subscribe(move |_| ctx.request_repaint());

        let settings = SettingsCoordinator::new(storage);
        let pending_tab = Some(settings.request_setting(SELECTED_TAB_KEY));

        info!(storage = ?config.storage, "folio started");

        Ok(Self {
            state: AppState::with_theme(store),
            appearance,
            status_bar,
            settings,
            pending_tab,
            _repaint_on_theme_change: repaint,
        })
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::TabSelected(tab) => {
                ApplicationCoordinator::handle_tab_selected(&mut self.state, &mut self.settings, tab);
            }
            PanelInteraction::ThemeModeSelected(mode) => {
                ApplicationCoordinator::handle_theme_mode_selected(&self.state, mode);
            }
        }
    }
}

impl eframe::App for FolioApp {
    /// Called periodically and at shutdown - waits for queued writes so
    /// preferences are on disk.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.state.theme.store().wait_for_pending();
        self.settings.flush();
    }

    /// Main update loop.
    ///
    /// 1. Observe the system theme
    /// 2. Collect finished storage work
    /// 3. Apply the resolved theme
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::observe_system_theme(ctx, &self.appearance);

        self.state.theme.store().poll();
        self.settings.poll();
        ApplicationCoordinator::check_tab_restore(&mut self.state, &mut self.pending_tab);

        ThemeCoordinator::apply_current_theme(ctx, &self.state.theme.state());

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state, &self.status_bar) {
            self.handle_panel_interaction(interaction);
        }
    }
}
