//! Dashboard shell: period selector, chart, tables, fetch plumbing.
//!
//! The UI thread never performs I/O. Fetches are requested over a
//! crossbeam channel to the background runtime and results come back
//! tagged with the period they were requested for; the session discards
//! anything stale, so a slow fetch can never overwrite a newer view.

use crate::application::rates::comparator::Selection;
use crate::application::rates::session::ChartSession;
use crate::domain::ports::DateRange;
use crate::domain::rates::period::Period;
use crate::domain::rates::rate_point::RatePoint;
use crate::interfaces::components::chart_view::render_chart;
use crate::interfaces::components::comparison_table::render_comparison_table;
use crate::interfaces::components::rate_table::render_rate_table;
use chrono::Utc;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use tracing::warn;

/// Fetch order sent to the background worker
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub period: Period,
    pub range: DateRange,
}

/// Worker reply, tagged with the period the request was issued for
#[derive(Debug)]
pub struct FetchResponse {
    pub period: Period,
    pub result: Result<Vec<RatePoint>, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

pub struct RatewatchApp {
    session: ChartSession,
    pair_label: String,
    quote_currency: String,
    request_tx: Sender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    load_state: LoadState,
    /// Last comparison problem (zero baseline), shown under the chart
    notice: Option<String>,
}

impl RatewatchApp {
    pub fn new(
        initial_period: Period,
        pair_label: String,
        quote_currency: String,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) -> Self {
        let mut app = Self {
            session: ChartSession::new(initial_period),
            pair_label,
            quote_currency,
            request_tx,
            response_rx,
            load_state: LoadState::Loading,
            notice: None,
        };
        app.request_fetch(initial_period);
        app
    }

    fn request_fetch(&mut self, period: Period) {
        let today = Utc::now().date_naive();
        let request = FetchRequest {
            period,
            range: DateRange {
                start: period.lookback_start(today),
                end: today,
            },
        };

        self.load_state = LoadState::Loading;
        if self.request_tx.send(request).is_err() {
            warn!("Rate fetch worker is gone");
            self.load_state = LoadState::Failed("Rate fetch worker is not running".to_string());
        }
    }

    fn drain_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            if response.period != self.session.period() {
                // Stale reply for a period the user has already left
                continue;
            }
            match response.result {
                Ok(raw) => {
                    if self.session.apply_rates(response.period, raw) {
                        self.load_state = LoadState::Ready;
                    }
                }
                Err(message) => self.load_state = LoadState::Failed(message),
            }
        }
    }

    fn period_selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for period in Period::all() {
                let active = period == self.session.period();
                if ui
                    .add_enabled(!active, egui::Button::new(period.label()))
                    .clicked()
                {
                    self.session.set_period(period);
                    self.notice = None;
                    self.request_fetch(period);
                }
            }
        });
    }

    fn selection_hint(&self, ui: &mut egui::Ui) {
        if let [pending] = self.session.pending_selection() {
            ui.label(format!(
                "Selected {} ({:.2}) — click a second point to compare",
                pending.date, pending.value
            ));
        } else {
            ui.label(
                egui::RichText::new("Click two points on the chart to compare them").weak(),
            );
        }
    }

    fn handle_click(&mut self, point: RatePoint) {
        match self.session.select_point(point) {
            Ok(Selection::Compared(_)) | Ok(Selection::Pending) => self.notice = None,
            Ok(Selection::Ignored) => {}
            Err(err) => self.notice = Some(err.to_string()),
        }
    }
}

impl eframe::App for RatewatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_responses();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!(
                "{} Exchange Rate ({})",
                self.pair_label,
                self.session.period().label()
            ));
            ui.add_space(4.0);
            self.period_selector(ui);
            ui.add_space(8.0);

            match self.load_state.clone() {
                LoadState::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading rate data...");
                    });
                }
                LoadState::Failed(message) => {
                    ui.colored_label(egui::Color32::LIGHT_RED, format!("Error: {message}"));
                }
                LoadState::Ready if self.session.series().is_empty() => {
                    ui.label("No data for the selected period.");
                }
                LoadState::Ready => {
                    if let Some(point) = render_chart(ui, &self.session) {
                        self.handle_click(point);
                    }
                    self.selection_hint(ui);
                    if let Some(notice) = &self.notice {
                        ui.colored_label(egui::Color32::YELLOW, notice);
                    }

                    ui.add_space(8.0);
                    ui.heading("Data Table");
                    render_rate_table(ui, self.session.series(), &self.quote_currency);
                    render_comparison_table(ui, self.session.comparisons());
                }
            }
        });

        // Keep polling the worker while a fetch is outstanding
        if self.load_state == LoadState::Loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
