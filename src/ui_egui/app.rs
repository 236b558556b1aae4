// Portal application shell
// One window, one timer: every frame samples the local clock, recomputes
// the resolved state from scratch and renders it.

use chrono::{Local, NaiveDateTime, Timelike};
use std::time::Duration;

use crate::models::schedule::ScheduleTable;
use crate::services::resolver::{resolve, Phase, ResolvedState};
use crate::ui_egui::theme::PortalTheme;
use crate::ui_egui::views::{
    countdown_panel::render_countdown_panel, dua_card::render_dua_card, header::render_header,
    info_bar::{render_footer, render_info_bar}, marquee::render_announcement,
    prayer_grid::render_prayer_grid,
};

pub struct PortalApp {
    table: ScheduleTable,
    theme: PortalTheme,
    /// Latest resolver output; replaced wholesale each tick.
    state: ResolvedState,
    /// Whole-second clock reading that produced `state`.
    last_tick: NaiveDateTime,
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = whole_second(Local::now().naive_local());
        if now != self.last_tick {
            self.tick(now);
        }

        self.render(ctx);

        // Wake up for the next second even when nothing animates.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

impl PortalApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = PortalTheme::night();
        theme.apply_to_context(&cc.egui_ctx);

        let table = ScheduleTable::bundled();
        let now = whole_second(Local::now().naive_local());
        let state = resolve(&table, now);
        log::info!(
            "Portal starting at {} in phase {:?} ({} scheduled days)",
            now,
            state.phase,
            table.len()
        );

        Self {
            table,
            theme,
            state,
            last_tick: now,
        }
    }

    fn tick(&mut self, now: NaiveDateTime) {
        let next = resolve(&self.table, now);

        if next.phase != self.state.phase {
            if next.phase == Phase::NoData {
                log::warn!("Clock moved outside schedule coverage at {}", now);
            } else {
                log::info!("Phase {:?} -> {:?} at {}", self.state.phase, next.phase, now);
            }
        }

        self.state = next;
        self.last_tick = now;
    }

    fn render(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                render_header(ui, &self.theme);
                ui.add_space(12.0);

                ui.columns(2, |cols| {
                    cols[0].vertical(|ui| {
                        render_countdown_panel(ui, &self.theme, &self.state);
                        ui.add_space(12.0);
                        render_prayer_grid(ui, &self.theme, &self.state);
                    });

                    cols[1].vertical(|ui| {
                        render_announcement(ui, &self.theme);
                        ui.add_space(12.0);
                        render_dua_card(ui, &self.theme, self.state.dua_index);
                        ui.add_space(12.0);
                        render_info_bar(ui, &self.theme, self.last_tick.date());
                        ui.add_space(8.0);
                        render_footer(ui, &self.theme);
                    });
                });
            });
        });
    }
}

fn whole_second(now: NaiveDateTime) -> NaiveDateTime {
    now.with_nanosecond(0).unwrap_or(now)
}
