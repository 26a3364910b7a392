use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context as _, Result};
use eframe::egui;
use log::{error, info};

use myworld_agent::ValidationGenerator;

use crate::color_theme;
use crate::config::FrontendConfig;
use crate::models::{UserProfile, ViewType};
use crate::preferences::{FileStore, KeyValueStore, MemoryStore};
use crate::theme::{Theme, ThemePreference};

mod messages;
mod spawners;
pub mod state;
mod tasks;
mod ui;

use messages::AppMessage;
use state::{AppState, ComposeState, ProfileEditState};
use ui::images::ImageCache;

pub struct MyWorldApp {
    state: AppState,
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,
    runtime: tokio::runtime::Runtime,
    generator: ValidationGenerator,
    preferences: Box<dyn KeyValueStore>,
    theme: ThemePreference,
    applied_theme: Option<Theme>,
    compose: ComposeState,
    profile_edit: ProfileEditState,
    pending_validations: HashSet<String>,
    images: ImageCache,
    scroll_to_top: bool,
    ctx: Option<egui::Context>,
}

impl MyWorldApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: FrontendConfig) -> Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let preferences: Box<dyn KeyValueStore> = match FileStore::open(&config.preferences_path) {
            Ok(store) => {
                info!("preferences at {:?}", store.path());
                Box::new(store)
            }
            Err(err) => {
                error!("preferences unavailable, theme will not persist: {err}");
                Box::new(MemoryStore::default())
            }
        };
        let theme = ThemePreference::load(preferences.as_ref());

        // One worker keeps the generator calls off the UI thread; all state
        // changes still happen in `update`.
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("myworld-validation")
            .enable_all()
            .build()
            .context("failed to start async runtime")?;

        let (tx, rx) = mpsc::channel();

        Ok(Self {
            state: AppState::new(UserProfile::default()),
            tx,
            rx,
            runtime,
            generator: ValidationGenerator::from_config(&config.generator),
            preferences,
            theme,
            applied_theme: None,
            compose: ComposeState::default(),
            profile_edit: ProfileEditState::default(),
            pending_validations: HashSet::new(),
            images: ImageCache::default(),
            scroll_to_top: false,
            ctx: Some(cc.egui_ctx.clone()),
        })
    }

    fn process_messages(&mut self) {
        messages::process_messages(self);
    }

    fn navigate(&mut self, view: ViewType) {
        self.state.navigate(view);
        self.scroll_to_top = true;
    }

    fn toggle_theme(&mut self) {
        if let Err(err) = self.theme.toggle(self.preferences.as_mut()) {
            error!("failed to persist theme: {err}");
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.theme.current();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(color_theme::visuals_for(theme));
            self.applied_theme = Some(theme);
        }
    }
}

impl eframe::App for MyWorldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();
        self.apply_theme(ctx);

        self.render_top_bar(ctx);
        self.render_bottom_nav(ctx);

        let view = self.state.view;
        egui::CentralPanel::default().show(ctx, |ui| match view {
            ViewType::Home => self.render_feed(ui),
            ViewType::Profile => self.render_profile(ui),
        });
        self.scroll_to_top = false;

        if self.compose.open {
            self.render_compose(ctx);
        }
    }
}
